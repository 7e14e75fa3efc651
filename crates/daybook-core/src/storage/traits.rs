//! Entry store trait definition.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use super::types::{EntryDraft, JournalEntry};
use crate::error::Result;
use crate::insights::{build_insights, DateWindow, EntrySample, JournalInsights};

/// Entry store interface.
///
/// All implementations must ensure:
/// - No two entries share a calendar date
/// - Conflicts are detected before anything is written
/// - Lookups report absence as `Ok(None)`, not as an error
pub trait JournalStore: Send + Sync {
    /// Prepare the backing store. Idempotent; every other operation calls
    /// it implicitly.
    fn initialize(&self) -> Result<()>;

    /// Insert a new entry for the draft's date.
    ///
    /// The draft is trimmed, deduplicated and validated first; the stored
    /// entry gets a fresh ID and `created_at == updated_at == now`.
    ///
    /// # Errors
    ///
    /// - `DaybookError::Validation` if the draft is invalid
    /// - `DaybookError::DuplicateDate` if an entry already exists for the date
    fn create(&self, draft: &EntryDraft) -> Result<JournalEntry>;

    /// Get an entry by ID.
    fn get(&self, id: &Uuid) -> Result<Option<JournalEntry>>;

    /// Get the entry written for `date`.
    fn get_by_date(&self, date: NaiveDate) -> Result<Option<JournalEntry>>;

    /// Every entry, newest date first.
    fn get_all(&self) -> Result<Vec<JournalEntry>>;

    /// Replace every client-settable field of an existing entry.
    ///
    /// Only `updated_at` is refreshed; `id` and `created_at` are kept.
    ///
    /// # Errors
    ///
    /// - `DaybookError::Validation` if the draft is invalid
    /// - `DaybookError::EntryNotFound` if `id` is unknown
    /// - `DaybookError::DuplicateDate` if the new date belongs to another entry
    fn update(&self, id: &Uuid, draft: &EntryDraft) -> Result<JournalEntry>;

    /// Delete an entry, returning whether a row was removed.
    fn delete(&self, id: &Uuid) -> Result<bool>;

    fn has_entry_for_date(&self, date: NaiveDate) -> Result<bool>;

    /// Number of stored entries.
    fn total_count(&self) -> Result<usize>;

    /// Entries within the inclusive bounds, newest first.
    ///
    /// Filters the output of `get_all` so ordering matches it exactly.
    fn get_in_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<JournalEntry>> {
        let window = DateWindow::new(start, end);
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|entry| window.contains(entry.entry_date))
            .collect())
    }

    /// Whether the local calendar date already has an entry.
    fn has_entry_for_today(&self) -> Result<bool> {
        self.has_entry_for_date(Local::now().date_naive())
    }

    /// Insights over the entries in range, relative to the local date.
    fn insights(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<JournalInsights> {
        self.insights_as_of(start, end, Local::now().date_naive())
    }

    /// Insights over the entries in range, relative to `today`.
    fn insights_as_of(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<JournalInsights> {
        let entries = self.get_in_range(start, end)?;
        let samples: Vec<EntrySample<'_>> = entries.iter().map(EntrySample::from).collect();
        Ok(build_insights(&samples, DateWindow::new(start, end), today))
    }
}
