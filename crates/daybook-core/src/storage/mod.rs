//! Storage layer for journal entries.
//!
//! The `JournalStore` trait defines the entry operations; `SqliteJournalStore`
//! implements it on a single embedded SQLite database.
//!
//! ## Invariants
//!
//! - At most one entry per calendar date, enforced by a unique index on the
//!   `yyyy-MM-dd` date key and checked before every write
//! - Identity and timestamps are assigned by the store, never by callers
//! - Mood and tag lists are stored as JSON arrays inside the entry row

pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use sqlite::SqliteJournalStore;
pub use traits::JournalStore;
pub use types::{date_key, parse_date_key, EntryDraft, JournalEntry, DATE_KEY_FORMAT};
