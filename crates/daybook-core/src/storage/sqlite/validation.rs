//! Draft validation and list normalization.

use std::collections::HashSet;

use crate::error::{DaybookError, Result};
use crate::moods::{canonical_primary, canonical_secondary, MAX_SECONDARY_MOODS};
use crate::storage::types::EntryDraft;

/// Maximum title length in characters, after trimming.
pub(crate) const MAX_TITLE_CHARS: usize = 200;

/// Validate a draft and return its normalized form.
///
/// - Trims title, content and category
/// - Resolves moods to their catalog spelling
/// - Deduplicates secondary moods (keeping at most two) and tags
pub(crate) fn normalize_draft(draft: &EntryDraft) -> Result<EntryDraft> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(DaybookError::Validation("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(DaybookError::Validation(format!(
            "Title cannot exceed {} characters",
            MAX_TITLE_CHARS
        )));
    }

    let content = draft.content.trim();
    if content.is_empty() {
        return Err(DaybookError::Validation("Content is required".to_string()));
    }

    let primary_mood = canonical_primary(&draft.primary_mood).ok_or_else(|| {
        if draft.primary_mood.trim().is_empty() {
            DaybookError::Validation("Primary mood is required".to_string())
        } else {
            DaybookError::Validation(format!("Unknown primary mood: {}", draft.primary_mood.trim()))
        }
    })?;

    let mut secondary_moods = Vec::with_capacity(draft.secondary_moods.len());
    for mood in draft.secondary_moods.iter().filter(|m| !m.trim().is_empty()) {
        let canonical = canonical_secondary(primary_mood, mood).ok_or_else(|| {
            DaybookError::Validation(format!(
                "Mood {} is not available with {}",
                mood.trim(),
                primary_mood
            ))
        })?;
        secondary_moods.push(canonical.to_string());
    }

    Ok(EntryDraft {
        title: title.to_string(),
        content: content.to_string(),
        entry_date: draft.entry_date,
        primary_mood: primary_mood.to_string(),
        secondary_moods: normalize_list(&secondary_moods, Some(MAX_SECONDARY_MOODS)),
        tags: normalize_list(&draft.tags, None),
        category: draft.category.trim().to_string(),
    })
}

/// Trim items, drop blanks, and deduplicate case-insensitively.
///
/// The first spelling of each item wins and order of first occurrence is
/// kept. `max_items` truncates after deduplication.
pub(crate) fn normalize_list(items: &[String], max_items: Option<usize>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut normalized = Vec::with_capacity(items.len());

    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            normalized.push(trimmed.to_string());
        }
    }

    if let Some(max) = max_items {
        normalized.truncate(max);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn draft() -> EntryDraft {
        EntryDraft::new(
            "  Title  ",
            "  Body text ",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "happy",
        )
    }

    #[test]
    fn test_normalize_list_dedups_case_insensitively() {
        let normalized = normalize_list(&strings(&["Work", "work", "Gym"]), None);
        assert_eq!(normalized, strings(&["Work", "Gym"]));
    }

    #[test]
    fn test_normalize_list_trims_and_drops_blanks() {
        let normalized = normalize_list(&strings(&["  a ", "", "   ", "A", "b"]), None);
        assert_eq!(normalized, strings(&["a", "b"]));
    }

    #[test]
    fn test_normalize_list_caps_after_dedup() {
        let normalized = normalize_list(&strings(&["x", "X", "y", "z"]), Some(2));
        assert_eq!(normalized, strings(&["x", "y"]));
    }

    #[test]
    fn test_normalize_draft_trims_and_canonicalizes() {
        let normalized = normalize_draft(
            &draft()
                .with_secondary_moods(strings(&["excited", "Excited", "grateful", "relaxed"]))
                .with_tags(strings(&["Work", "work", "Gym"]))
                .with_category("  notes "),
        )
        .unwrap();

        assert_eq!(normalized.title, "Title");
        assert_eq!(normalized.content, "Body text");
        assert_eq!(normalized.primary_mood, "Happy");
        assert_eq!(normalized.secondary_moods, strings(&["Excited", "Grateful"]));
        assert_eq!(normalized.tags, strings(&["Work", "Gym"]));
        assert_eq!(normalized.category, "notes");
    }

    #[test]
    fn test_normalize_draft_is_idempotent() {
        let once = normalize_draft(&draft().with_tags(strings(&["b", "B", "a"]))).unwrap();
        let twice = normalize_draft(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_title_rules() {
        let mut empty = draft();
        empty.title = "   ".to_string();
        assert!(normalize_draft(&empty).is_err());

        let mut exact = draft();
        exact.title = format!("  {}  ", "é".repeat(MAX_TITLE_CHARS));
        assert!(normalize_draft(&exact).is_ok());

        let mut long = draft();
        long.title = "t".repeat(MAX_TITLE_CHARS + 1);
        let err = normalize_draft(&long).unwrap_err();
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn test_content_required() {
        let mut blank = draft();
        blank.content = "\n\t ".to_string();
        assert!(normalize_draft(&blank).is_err());
    }

    #[test]
    fn test_mood_rules() {
        let mut missing = draft();
        missing.primary_mood = String::new();
        assert!(normalize_draft(&missing)
            .unwrap_err()
            .to_string()
            .contains("Primary mood is required"));

        let mut unknown = draft();
        unknown.primary_mood = "Elated".to_string();
        assert!(normalize_draft(&unknown).is_err());

        let mismatched = draft().with_secondary_moods(strings(&["Lonely"]));
        assert!(normalize_draft(&mismatched).is_err());
    }
}
