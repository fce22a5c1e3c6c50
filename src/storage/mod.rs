//! Local storage
//!
//! Key-value stores and the user repository layered on top of them.

pub mod file;
pub mod kv;
pub mod memory;
pub mod repository;

pub use file::FileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use repository::{StoreRepository, USERS_KEY, UserRepository};
