//! Core data types for the storage layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DaybookError, Result};

/// Format of the normalized date key (`yyyy-MM-dd`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Normalize a calendar date to its uniqueness key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a stored date key back into a calendar date.
pub fn parse_date_key(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
        .map_err(|e| DaybookError::Storage(format!("Invalid entry date '{}': {}", value, e)))
}

/// A stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Title (trimmed, at most 200 characters)
    pub title: String,

    /// Free-text body (trimmed, non-empty)
    pub content: String,

    /// Calendar date of the entry; at most one entry per date
    pub entry_date: NaiveDate,

    /// Primary mood, catalog spelling
    pub primary_mood: String,

    /// Up to two secondary moods, catalog spelling
    pub secondary_moods: Vec<String>,

    /// Case-insensitively unique tags, first spelling kept
    pub tags: Vec<String>,

    /// Optional category (may be empty)
    pub category: String,

    /// When this entry was created
    pub created_at: DateTime<Utc>,

    /// When this entry was last replaced
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// The client-settable fields of this entry, for re-saving.
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            entry_date: self.entry_date,
            primary_mood: self.primary_mood.clone(),
            secondary_moods: self.secondary_moods.clone(),
            tags: self.tags.clone(),
            category: self.category.clone(),
        }
    }
}

/// Builder for creating or replacing entries.
///
/// Identity and timestamps are never client-settable, so they are absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub entry_date: NaiveDate,
    pub primary_mood: String,
    pub secondary_moods: Vec<String>,
    pub tags: Vec<String>,
    pub category: String,
}

impl EntryDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        entry_date: NaiveDate,
        primary_mood: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            entry_date,
            primary_mood: primary_mood.into(),
            secondary_moods: Vec::new(),
            tags: Vec::new(),
            category: String::new(),
        }
    }

    pub fn with_secondary_moods(mut self, moods: Vec<String>) -> Self {
        self.secondary_moods = moods;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
