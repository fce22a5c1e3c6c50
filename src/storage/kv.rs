//! Key-value store abstraction
//!
//! Mirrors browser local storage: string keys mapped to string values.

use crate::error::StorageError;

pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if unset.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;

    /// Removes every key.
    fn clear(&mut self) -> Result<(), StorageError>;
}
