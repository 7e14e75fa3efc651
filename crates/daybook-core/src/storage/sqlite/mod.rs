//! SQLite storage backend.
//!
//! One connection per store, opened lazily on first use. Every write runs
//! inside a transaction that checks the date key before touching the table.

mod row;
mod validation;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use once_cell::sync::OnceCell;
use rusqlite::{Connection, OptionalExtension, Transaction};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DaybookError, Result};
use crate::storage::traits::JournalStore;
use crate::storage::types::{date_key, EntryDraft, JournalEntry};

use row::{EntryRow, ENTRY_COLUMNS};
use validation::normalize_draft;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS journal_entries (
        id TEXT PRIMARY KEY,
        entry_date TEXT NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        primary_mood TEXT NOT NULL,
        secondary_moods_json TEXT NOT NULL DEFAULT '[]',
        tags_json TEXT NOT NULL DEFAULT '[]',
        category TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE UNIQUE INDEX IF NOT EXISTS journal_entries_entry_date
        ON journal_entries(entry_date);
"#;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    Memory,
}

/// SQLite-backed journal store.
pub struct SqliteJournalStore {
    location: Location,
    conn: OnceCell<Mutex<Connection>>,
}

impl SqliteJournalStore {
    /// Store backed by a database file. Nothing is opened until first use.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::File(path.into()),
            conn: OnceCell::new(),
        }
    }

    /// Store backed by a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            location: Location::Memory,
            conn: OnceCell::new(),
        }
    }

    /// Database file path, if file-backed.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory => None,
        }
    }

    fn connection(&self) -> Result<&Mutex<Connection>> {
        self.conn.get_or_try_init(|| {
            let conn = match &self.location {
                Location::File(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)?;
                    }
                    Connection::open(path)?
                }
                Location::Memory => Connection::open_in_memory()?,
            };
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conn.execute_batch(SCHEMA)?;
            debug!(location = ?self.location, "Journal database initialized");
            Ok(Mutex::new(conn))
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection()?
            .lock()
            .map_err(|_| DaybookError::Storage("SQLite connection poisoned".to_string()))
    }
}

/// ID of the entry that owns `date`, if any.
fn owner_of_date(tx: &Transaction<'_>, date: NaiveDate) -> Result<Option<String>> {
    Ok(tx
        .query_row(
            "SELECT id FROM journal_entries WHERE entry_date = ?",
            [date_key(date)],
            |row| row.get(0),
        )
        .optional()?)
}

fn find_entry(conn: &Connection, clause: &str, param: String) -> Result<Option<JournalEntry>> {
    let sql = format!("SELECT {} FROM journal_entries WHERE {}", ENTRY_COLUMNS, clause);
    let row = conn
        .query_row(&sql, [param], EntryRow::from_sql_row)
        .optional()?;
    row.map(JournalEntry::try_from).transpose()
}

fn list_json(items: &[String]) -> Result<String> {
    serde_json::to_string(items)
        .map_err(|e| DaybookError::Storage(format!("Failed to serialize list: {}", e)))
}

/// Map a unique-index violation on write to the date conflict it represents.
fn map_write_error(err: rusqlite::Error, date: NaiveDate) -> DaybookError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            DaybookError::DuplicateDate(date)
        }
        _ => err.into(),
    }
}

impl JournalStore for SqliteJournalStore {
    fn initialize(&self) -> Result<()> {
        self.connection().map(|_| ())
    }

    fn create(&self, draft: &EntryDraft) -> Result<JournalEntry> {
        let draft = normalize_draft(draft)?;
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        if owner_of_date(&tx, draft.entry_date)?.is_some() {
            return Err(DaybookError::DuplicateDate(draft.entry_date));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        tx.execute(
            r#"
            INSERT INTO journal_entries (
                id,
                entry_date,
                title,
                content,
                primary_mood,
                secondary_moods_json,
                tags_json,
                category,
                created_at,
                updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            (
                id.to_string(),
                date_key(draft.entry_date),
                &draft.title,
                &draft.content,
                &draft.primary_mood,
                list_json(&draft.secondary_moods)?,
                list_json(&draft.tags)?,
                &draft.category,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ),
        )
        .map_err(|e| map_write_error(e, draft.entry_date))?;
        tx.commit()?;

        info!(entry_id = %id, entry_date = %draft.entry_date, "Created journal entry");

        Ok(JournalEntry {
            id,
            title: draft.title,
            content: draft.content,
            entry_date: draft.entry_date,
            primary_mood: draft.primary_mood,
            secondary_moods: draft.secondary_moods,
            tags: draft.tags,
            category: draft.category,
            created_at: now,
            updated_at: now,
        })
    }

    fn get(&self, id: &Uuid) -> Result<Option<JournalEntry>> {
        let conn = self.lock_conn()?;
        find_entry(&conn, "id = ?", id.to_string())
    }

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        let conn = self.lock_conn()?;
        find_entry(&conn, "entry_date = ?", date_key(date))
    }

    fn get_all(&self) -> Result<Vec<JournalEntry>> {
        let conn = self.lock_conn()?;
        let sql = format!(
            "SELECT {} FROM journal_entries ORDER BY entry_date DESC",
            ENTRY_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], EntryRow::from_sql_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(JournalEntry::try_from(row?)?);
        }
        debug!(count = entries.len(), "Loaded journal entries");
        Ok(entries)
    }

    fn update(&self, id: &Uuid, draft: &EntryDraft) -> Result<JournalEntry> {
        let draft = normalize_draft(draft)?;
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let existing =
            find_entry(&tx, "id = ?", id.to_string())?.ok_or(DaybookError::EntryNotFound(*id))?;

        if existing.entry_date != draft.entry_date {
            if let Some(owner) = owner_of_date(&tx, draft.entry_date)? {
                if owner != id.to_string() {
                    return Err(DaybookError::DuplicateDate(draft.entry_date));
                }
            }
        }

        let now = Utc::now();
        tx.execute(
            r#"
            UPDATE journal_entries
            SET entry_date = ?,
                title = ?,
                content = ?,
                primary_mood = ?,
                secondary_moods_json = ?,
                tags_json = ?,
                category = ?,
                updated_at = ?
            WHERE id = ?
            "#,
            (
                date_key(draft.entry_date),
                &draft.title,
                &draft.content,
                &draft.primary_mood,
                list_json(&draft.secondary_moods)?,
                list_json(&draft.tags)?,
                &draft.category,
                now.to_rfc3339(),
                id.to_string(),
            ),
        )
        .map_err(|e| map_write_error(e, draft.entry_date))?;
        tx.commit()?;

        info!(entry_id = %id, entry_date = %draft.entry_date, "Updated journal entry");

        Ok(JournalEntry {
            id: existing.id,
            title: draft.title,
            content: draft.content,
            entry_date: draft.entry_date,
            primary_mood: draft.primary_mood,
            secondary_moods: draft.secondary_moods,
            tags: draft.tags,
            category: draft.category,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    fn delete(&self, id: &Uuid) -> Result<bool> {
        let conn = self.lock_conn()?;
        let removed = conn.execute(
            "DELETE FROM journal_entries WHERE id = ?",
            [id.to_string()],
        )?;
        if removed > 0 {
            info!(entry_id = %id, "Deleted journal entry");
        }
        Ok(removed > 0)
    }

    fn has_entry_for_date(&self, date: NaiveDate) -> Result<bool> {
        let conn = self.lock_conn()?;
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM journal_entries WHERE entry_date = ?)",
            [date_key(date)],
            |row| row.get(0),
        )?;
        Ok(exists != 0)
    }

    fn total_count(&self) -> Result<usize> {
        let conn = self.lock_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM journal_entries", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| DaybookError::Storage(format!("Invalid entry count: {}", count)))
    }
}
