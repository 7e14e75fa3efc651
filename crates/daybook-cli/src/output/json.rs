//! JSON output formatting for entries.

use daybook_core::insights::count_words;
use daybook_core::storage::{date_key, JournalEntry};

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &JournalEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "entry_date": date_key(entry.entry_date),
        "title": entry.title,
        "content": entry.content,
        "word_count": count_words(&entry.content),
        "primary_mood": entry.primary_mood,
        "secondary_moods": entry.secondary_moods,
        "tags": entry.tags,
        "category": entry.category,
        "created_at": entry.created_at,
        "updated_at": entry.updated_at,
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[JournalEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    #[test]
    fn test_entry_json_fields() {
        let now = Utc::now();
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            title: "Walk".to_string(),
            content: "Long walk by the river".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            primary_mood: "Happy".to_string(),
            secondary_moods: vec!["Relaxed".to_string()],
            tags: vec!["outside".to_string()],
            category: String::new(),
            created_at: now,
            updated_at: now,
        };

        let value = entry_json(&entry);
        assert_eq!(value["entry_date"], "2024-06-01");
        assert_eq!(value["word_count"], 5);
        assert_eq!(value["secondary_moods"][0], "Relaxed");
        assert_eq!(value["id"], entry.id.to_string());
    }
}
