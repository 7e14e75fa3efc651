//! Journal insights.
//!
//! Pure functions deriving streaks, mood/tag frequencies and word-count
//! trends from a snapshot of entries. Nothing here touches storage; callers
//! fetch entries first and pass borrowed samples in.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::JournalEntry;

/// Number of points kept in the word-count trend.
pub const WORD_COUNT_TREND_POINTS: usize = 10;

/// Inclusive date bounds; `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// A window with no bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// The fields of an entry that insights are computed from.
#[derive(Debug, Clone, Copy)]
pub struct EntrySample<'a> {
    pub date: NaiveDate,
    pub content: &'a str,
    pub primary_mood: &'a str,
    pub secondary_moods: &'a [String],
    pub tags: &'a [String],
}

impl<'a> From<&'a JournalEntry> for EntrySample<'a> {
    fn from(entry: &'a JournalEntry) -> Self {
        Self {
            date: entry.entry_date,
            content: &entry.content,
            primary_mood: &entry.primary_mood,
            secondary_moods: &entry.secondary_moods,
            tags: &entry.tags,
        }
    }
}

/// A label with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountItem {
    pub label: String,
    pub count: usize,
}

/// Word count of the entry written on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountPoint {
    pub date: NaiveDate,
    pub word_count: usize,
}

/// Derived analytics over a set of entries. Recomputed on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalInsights {
    pub total_entries: usize,
    pub has_entry_for_today: bool,
    pub current_streak: usize,
    pub longest_streak: usize,
    pub missed_days: usize,
    pub avg_words_per_day: usize,
    pub mood_counts: Vec<CountItem>,
    pub tag_counts: Vec<CountItem>,
    pub word_count_trend: Vec<WordCountPoint>,
}

/// Compute insights for `samples`.
///
/// `window` only affects the average-words denominator; callers are expected
/// to have filtered `samples` to the same window already. `today` anchors the
/// current streak and the "written today" flag.
pub fn build_insights(
    samples: &[EntrySample<'_>],
    window: DateWindow,
    today: NaiveDate,
) -> JournalInsights {
    let dates = distinct_dates(samples);

    JournalInsights {
        total_entries: samples.len(),
        has_entry_for_today: samples.iter().any(|sample| sample.date == today),
        current_streak: current_streak(&dates, today),
        longest_streak: longest_streak(&dates),
        missed_days: missed_days(&dates),
        avg_words_per_day: average_words_per_day(samples, window, &dates),
        mood_counts: rank_labels(samples.iter().flat_map(|sample| {
            sample
                .secondary_moods
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(sample.primary_mood))
        })),
        tag_counts: rank_labels(
            samples
                .iter()
                .flat_map(|sample| sample.tags.iter().map(String::as_str)),
        ),
        word_count_trend: word_count_trend(samples),
    }
}

/// Distinct entry dates, ascending.
pub fn distinct_dates(samples: &[EntrySample<'_>]) -> Vec<NaiveDate> {
    samples
        .iter()
        .map(|sample| sample.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Days without an entry between the first and last date (inclusive span).
pub fn missed_days(dates: &[NaiveDate]) -> usize {
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) if dates.len() >= 2 => {
            let span = (*last - *first).num_days() + 1;
            usize::try_from(span)
                .unwrap_or(0)
                .saturating_sub(dates.len())
        }
        _ => 0,
    }
}

/// Consecutive days with an entry, counting back from `today`.
///
/// Anchored on the wall-clock date rather than the latest entry, so a journal
/// whose last entry was yesterday reports zero.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> usize {
    let present: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let mut streak = 0;
    let mut cursor = Some(today);

    while let Some(day) = cursor.filter(|day| present.contains(day)) {
        streak += 1;
        cursor = day.pred_opt();
    }

    streak
}

/// Longest run of consecutive days in ascending, distinct `dates`.
pub fn longest_streak(dates: &[NaiveDate]) -> usize {
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    longest
}

/// Number of whitespace-delimited words in `content`.
pub fn count_words(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Word counts of the latest entries, oldest first.
pub fn word_count_trend(samples: &[EntrySample<'_>]) -> Vec<WordCountPoint> {
    let mut ordered: Vec<&EntrySample<'_>> = samples.iter().collect();
    ordered.sort_by_key(|sample| sample.date);

    let skip = ordered.len().saturating_sub(WORD_COUNT_TREND_POINTS);
    ordered
        .into_iter()
        .skip(skip)
        .map(|sample| WordCountPoint {
            date: sample.date,
            word_count: count_words(sample.content),
        })
        .collect()
}

/// Total words divided by the days in the effective window, rounded with
/// ties to even.
///
/// Explicit window bounds win; an open side falls back to the first or last
/// observed date.
pub fn average_words_per_day(
    samples: &[EntrySample<'_>],
    window: DateWindow,
    dates: &[NaiveDate],
) -> usize {
    let total_words: usize = samples
        .iter()
        .map(|sample| count_words(sample.content))
        .sum();

    let start = window.start.or_else(|| dates.first().copied());
    let end = window.end.or_else(|| dates.last().copied());
    let days = match (start, end) {
        (Some(start), Some(end)) => (end - start).num_days() + 1,
        _ => dates.len() as i64,
    };

    if days <= 0 {
        return 0;
    }

    (total_words as f64 / days as f64).round_ties_even() as usize
}

/// Group labels case-insensitively and rank them by count, then label.
fn rank_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CountItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut items: Vec<CountItem> = Vec::new();

    for label in labels {
        if label.trim().is_empty() {
            continue;
        }
        let key = label.to_lowercase();
        match index.get(&key) {
            Some(&position) => items[position].count += 1,
            None => {
                index.insert(key, items.len());
                items.push(CountItem {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    items.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
    });
    items
}
