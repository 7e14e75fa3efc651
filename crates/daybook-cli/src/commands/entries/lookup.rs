//! Entry lookup by ID, ID prefix, or date.

use chrono::NaiveDate;
use uuid::Uuid;

use daybook_core::storage::{JournalEntry, DATE_KEY_FORMAT};
use daybook_core::JournalStore;

use crate::errors::CliError;
use crate::helpers::parse_date_arg;

const MIN_PREFIX_LEN: usize = 4;

fn no_entry(reference: &str) -> anyhow::Error {
    CliError::not_found(
        format!("Entry not found: {}", reference),
        "Hint: Run `daybook list` to find entry IDs.",
    )
    .into()
}

fn looks_like_date(reference: &str) -> bool {
    let lowered = reference.to_lowercase();
    lowered == "today"
        || lowered == "yesterday"
        || NaiveDate::parse_from_str(reference, DATE_KEY_FORMAT).is_ok()
}

/// Find an entry by full ID or a unique ID prefix.
pub fn find_by_id(store: &dyn JournalStore, reference: &str) -> anyhow::Result<JournalEntry> {
    let reference = reference.trim();
    if let Ok(id) = Uuid::parse_str(reference) {
        return store.get(&id)?.ok_or_else(|| no_entry(reference));
    }

    if reference.len() < MIN_PREFIX_LEN {
        return Err(CliError::invalid_input_with_hint(
            format!("Invalid entry ID: {}", reference),
            "Hint: Use a full ID or at least the first 4 characters.",
        )
        .into());
    }

    let prefix = reference.to_lowercase();
    let mut matches: Vec<JournalEntry> = store
        .get_all()?
        .into_iter()
        .filter(|entry| entry.id.to_string().starts_with(&prefix))
        .collect();
    match matches.len() {
        0 => Err(no_entry(reference)),
        1 => Ok(matches.remove(0)),
        n => Err(CliError::invalid_input_with_hint(
            format!("Entry ID prefix {} matches {} entries", reference, n),
            "Hint: Use more characters of the ID.",
        )
        .into()),
    }
}

/// Find an entry by ID, ID prefix, `YYYY-MM-DD`, `today`, or `yesterday`.
pub fn find_entry(
    store: &dyn JournalStore,
    reference: &str,
    today: NaiveDate,
) -> anyhow::Result<JournalEntry> {
    let reference = reference.trim();
    if looks_like_date(reference) {
        let date = parse_date_arg(reference, today)?;
        return store.get_by_date(date)?.ok_or_else(|| {
            CliError::not_found(
                format!("No entry for {}", date),
                "Hint: Run `daybook add` to write one.",
            )
            .into()
        });
    }
    find_by_id(store, reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::storage::EntryDraft;
    use daybook_core::SqliteJournalStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    fn store_with_entries() -> (SqliteJournalStore, Vec<JournalEntry>) {
        let store = SqliteJournalStore::in_memory();
        let entries = (1..=3)
            .map(|d| {
                store
                    .create(&EntryDraft::new("Title", "Body", day(d), "Neutral"))
                    .unwrap()
            })
            .collect();
        (store, entries)
    }

    #[test]
    fn test_find_by_full_id_and_prefix() {
        let (store, entries) = store_with_entries();
        let target = &entries[1];

        let full = find_by_id(&store, &target.id.to_string()).unwrap();
        assert_eq!(full.id, target.id);

        let prefix = &target.id.to_string()[..12];
        let by_prefix = find_by_id(&store, prefix).unwrap();
        assert_eq!(by_prefix.id, target.id);
    }

    #[test]
    fn test_short_or_unknown_references_fail() {
        let (store, _) = store_with_entries();
        assert!(find_by_id(&store, "ab").is_err());
        assert!(find_by_id(&store, &Uuid::new_v4().to_string()).is_err());
    }

    #[test]
    fn test_find_entry_by_date_keywords() {
        let (store, entries) = store_with_entries();
        let found = find_entry(&store, "today", day(3)).unwrap();
        assert_eq!(found.id, entries[2].id);

        let found = find_entry(&store, "2024-02-01", day(3)).unwrap();
        assert_eq!(found.id, entries[0].id);

        assert!(find_entry(&store, "2024-02-09", day(3)).is_err());
    }
}
