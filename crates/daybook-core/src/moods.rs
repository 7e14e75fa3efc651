//! Mood catalog.
//!
//! Every entry carries one primary mood from a closed set of three, plus up
//! to two secondary moods drawn from the list belonging to that primary mood.
//! Lookups are case-insensitive and return the catalog spelling.

/// Primary moods, in display order.
pub const PRIMARY_MOODS: [&str; 3] = ["Happy", "Neutral", "Sad"];

const SECONDARY_HAPPY: &[&str] = &["Excited", "Relaxed", "Grateful", "Confident"];
const SECONDARY_NEUTRAL: &[&str] = &["Calm", "Thoughtful", "Curious", "Nostalgic", "Bored"];
const SECONDARY_SAD: &[&str] = &["Angry", "Stressed", "Lonely", "Anxious"];

/// Maximum number of secondary moods kept on an entry.
pub const MAX_SECONDARY_MOODS: usize = 2;

/// Resolve a primary mood to its catalog spelling.
pub fn canonical_primary(mood: &str) -> Option<&'static str> {
    let mood = mood.trim();
    PRIMARY_MOODS
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(mood))
}

/// Secondary moods available for a primary mood (empty for unknown moods).
pub fn secondary_moods(primary: &str) -> &'static [&'static str] {
    match canonical_primary(primary) {
        Some("Happy") => SECONDARY_HAPPY,
        Some("Neutral") => SECONDARY_NEUTRAL,
        Some("Sad") => SECONDARY_SAD,
        _ => &[],
    }
}

/// Resolve a secondary mood to its catalog spelling, if it belongs to `primary`.
pub fn canonical_secondary(primary: &str, mood: &str) -> Option<&'static str> {
    let mood = mood.trim();
    secondary_moods(primary)
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(mood))
}

/// Every mood in the catalog, primary moods first.
pub fn all_moods() -> Vec<&'static str> {
    PRIMARY_MOODS
        .iter()
        .chain(SECONDARY_HAPPY)
        .chain(SECONDARY_NEUTRAL)
        .chain(SECONDARY_SAD)
        .copied()
        .collect()
}
