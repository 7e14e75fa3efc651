//! # Daybook Core
//!
//! Core library for Daybook - a local, PIN-guarded, one-entry-per-day journal.
//!
//! This crate provides the domain logic, storage, and analytics independent
//! of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Entry store trait and the SQLite implementation
//! - **insights**: Streaks, mood/tag frequencies and word-count trends
//! - **auth**: PIN hashing, the credential gate, and the secret store interface
//! - **moods**: Mood catalog used to validate entries
//! - **notify**: Opt-in change subscriptions

pub mod auth;
pub mod error;
pub mod insights;
pub mod moods;
pub mod notify;
pub mod storage;

pub use error::{DaybookError, Result};
pub use storage::{JournalStore, SqliteJournalStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
