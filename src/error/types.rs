//! Error types
//!
//! Defines domain-specific error types for each module of the signup form.
//! Validation failures are not errors; they live in `FieldErrors`.

use std::fmt;
use std::io;

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    IoError(io::Error),
    Corrupt { location: String, source: serde_json::Error },
    Serialize(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
            StorageError::Corrupt { location, source } => {
                write!(f, "Stored data at '{}' is not valid JSON: {}", location, source)
            }
            StorageError::Serialize(e) => write!(f, "Failed to serialize value: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            StorageError::Corrupt { source, .. } => Some(source),
            StorageError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Terminal session errors
#[derive(Debug)]
pub enum SessionError {
    UnknownField(String),
    IoError(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownField(name) => write!(f, "Unknown field: {}", name),
            SessionError::IoError(e) => write!(f, "Terminal I/O error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::IoError(error)
    }
}

/// Top-level error that encompasses all error types
#[derive(Debug)]
pub enum SignupError {
    Config(config::ConfigError),
    Storage(StorageError),
    Session(SessionError),
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupError::Config(e) => write!(f, "Configuration error: {}", e),
            SignupError::Storage(e) => write!(f, "Storage error: {}", e),
            SignupError::Session(e) => write!(f, "Session error: {}", e),
        }
    }
}

impl std::error::Error for SignupError {}

impl From<config::ConfigError> for SignupError {
    fn from(error: config::ConfigError) -> Self {
        SignupError::Config(error)
    }
}

impl From<StorageError> for SignupError {
    fn from(error: StorageError) -> Self {
        SignupError::Storage(error)
    }
}

impl From<SessionError> for SignupError {
    fn from(error: SessionError) -> Self {
        SignupError::Session(error)
    }
}
