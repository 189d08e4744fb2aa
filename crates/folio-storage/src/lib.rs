//! Folio Storage Layer
//!
//! Key-value blob persistence for page tab state.
//! SQLite is the durable backend; an in-memory map backs tests and
//! ephemeral workspaces.

mod database;
mod error;
mod memory;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed store of opaque string blobs.
///
/// Writes overwrite the previous value wholesale.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}
