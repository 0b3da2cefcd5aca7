//! Error types for storage engine operations.
//!
//! Provides a unified error type covering handle lifecycle, table
//! enumeration, row loading, and cell update failures.

use thiserror::Error;

/// Errors that can occur during storage engine operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Operation attempted without its preconditions (no open handle,
    /// no loaded table, empty identifier). Never retried automatically.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The backing file could not be opened as a database.
    #[error("cannot open database: {0}")]
    Open(String),

    /// Statement preparation or execution failure, carrying the
    /// engine's diagnostic text.
    #[error("query failed: {0}")]
    Query(String),

    /// Allocation failure inside the storage engine while capturing
    /// table metadata. Fatal to the attempted operation only; the
    /// session remains usable.
    #[error("out of memory while capturing table metadata")]
    OutOfMemory,
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::OutOfMemory =>
            {
                StorageError::OutOfMemory
            }
            _ => StorageError::Query(err.to_string()),
        }
    }
}

/// Convenience alias for results with [`StorageError`].
pub type Result<T> = std::result::Result<T, StorageError>;
