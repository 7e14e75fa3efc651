//! Entry row type for database queries.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::error::{DaybookError, Result};
use crate::storage::types::{parse_date_key, JournalEntry};

/// Column list matching `EntryRow::from_sql_row`.
pub const ENTRY_COLUMNS: &str = "id, title, content, entry_date, primary_mood, \
     secondary_moods_json, tags_json, category, created_at, updated_at";

/// Raw row data from the journal_entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub title: String,
    pub content: String,
    pub entry_date: String,
    pub primary_mood: String,
    pub secondary_moods_json: Option<String>,
    pub tags_json: Option<String>,
    pub category: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl EntryRow {
    /// Read a row selected with `ENTRY_COLUMNS`.
    pub fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            entry_date: row.get(3)?,
            primary_mood: row.get(4)?,
            secondary_moods_json: row.get(5)?,
            tags_json: row.get(6)?,
            category: row.get(7)?,
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| DaybookError::Storage(format!("Invalid timestamp: {}", e)))?
        .with_timezone(&Utc))
}

/// Decode a stored JSON list. Missing or malformed values read as empty.
fn parse_list(value: Option<&str>, column: &str, id: &Uuid) -> Vec<String> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str(value) {
        Ok(items) => items,
        Err(e) => {
            warn!(entry_id = %id, column, error = %e, "Malformed list in entry row");
            Vec::new()
        }
    }
}

impl TryFrom<EntryRow> for JournalEntry {
    type Error = DaybookError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| DaybookError::Storage(format!("Invalid entry UUID: {}", e)))?;
        let entry_date = parse_date_key(&row.entry_date)?;
        let created_at = parse_timestamp(&row.created_at)?;
        let updated_at = parse_timestamp(&row.updated_at)?;
        let secondary_moods =
            parse_list(row.secondary_moods_json.as_deref(), "secondary_moods_json", &id);
        let tags = parse_list(row.tags_json.as_deref(), "tags_json", &id);

        Ok(JournalEntry {
            id,
            title: row.title,
            content: row.content,
            entry_date,
            primary_mood: row.primary_mood,
            secondary_moods,
            tags,
            category: row.category.unwrap_or_default(),
            created_at,
            updated_at,
        })
    }
}
