//! Error handlers
//!
//! Provides error reporting and exit-code mapping.

use crate::error::types::{SessionError, SignupError};
use log::error;

/// Log a signup error
pub fn handle_error(err: &SignupError) {
    error!("Signup form error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &SignupError) -> i32 {
    match err {
        SignupError::Config(_) => 78,
        SignupError::Storage(_) => 74,
        SignupError::Session(SessionError::IoError(_)) => 74,
        // The terminal session reports bad field names itself; this arm is
        // for library callers that propagate `Field` parse errors.
        SignupError::Session(SessionError::UnknownField(_)) => 64,
    }
}
