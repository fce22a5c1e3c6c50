//! User record repository
//!
//! Keeps the accepted signups as a JSON array under a single key of a
//! [`KeyValueStore`]. Append-only; duplicates are allowed.

use log::{debug, info};
use serde::Deserialize;

use super::kv::KeyValueStore;
use crate::error::StorageError;
use crate::form::UserInput;

/// Default key holding the serialized list
pub const USERS_KEY: &str = "users";

/// Persistence seam for accepted signups.
pub trait UserRepository {
    /// Appends one record and returns the list length afterwards.
    fn append(&mut self, user: UserInput) -> Result<usize, StorageError>;

    /// All stored records, oldest first.
    fn list(&self) -> Result<Vec<UserInput>, StorageError>;

    /// Drops every stored record.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Older data may hold a single record instead of a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredUsers {
    Many(Vec<UserInput>),
    One(UserInput),
}

/// [`UserRepository`] over any key-value store.
#[derive(Debug, Clone)]
pub struct StoreRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StoreRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, USERS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> UserRepository for StoreRepository<S> {
    fn append(&mut self, user: UserInput) -> Result<usize, StorageError> {
        let mut users = self.list()?;
        debug!("Appending user '{}' to {} stored", user.id, users.len());
        users.push(user);

        let serialized = serde_json::to_string(&users).map_err(StorageError::Serialize)?;
        self.store.set_item(&self.key, serialized)?;
        Ok(users.len())
    }

    fn list(&self) -> Result<Vec<UserInput>, StorageError> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        let stored: StoredUsers =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                location: self.key.clone(),
                source,
            })?;

        Ok(match stored {
            StoredUsers::Many(users) => users,
            StoredUsers::One(user) => vec![user],
        })
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        info!("Clearing stored users under '{}'", self.key);
        self.store.remove_item(&self.key)
    }
}
