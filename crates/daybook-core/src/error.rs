//! Error types for Daybook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for Daybook operations.
pub type Result<T> = std::result::Result<T, DaybookError>;

/// Core error type for Daybook operations.
#[derive(Debug, Error)]
pub enum DaybookError {
    /// Another entry already occupies this calendar date
    #[error("A journal entry already exists for {0}. Only one entry per day is allowed.")]
    DuplicateDate(NaiveDate),

    /// Entry not found by ID
    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    /// Entry data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid user input (e.g. a malformed PIN)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Key derivation or randomness failure
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
