//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab label cannot be empty")]
    EmptyLabel,

    #[error("Duplicate tab id: {0}")]
    DuplicateId(String),

    #[error("Storage error: {0}")]
    Storage(#[from] folio_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
