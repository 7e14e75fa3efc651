//! Text and table output for entries and insights.

use daybook_core::insights::{count_words, CountItem, JournalInsights};
use daybook_core::storage::{date_key, JournalEntry};

use crate::ui::{self, Column, UiContext};

use super::json::{entries_json, entry_json};

const TITLE_WIDTH: usize = 40;
const TOP_COUNTS: usize = 5;

fn short_id(entry: &JournalEntry) -> String {
    entry.id.to_string()[..8].to_string()
}

fn moods_label(entry: &JournalEntry) -> String {
    if entry.secondary_moods.is_empty() {
        entry.primary_mood.clone()
    } else {
        format!("{} ({})", entry.primary_mood, entry.secondary_moods.join(", "))
    }
}

/// Print a single entry.
pub fn print_entry(ctx: &UiContext, entry: &JournalEntry, quiet: bool) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entry_json(entry))?);
        return Ok(());
    }

    if !quiet {
        println!("{}", ui::header(ctx, "show", Some(&date_key(entry.entry_date))));
        println!("{}", ui::kv(ctx, "ID", &entry.id.to_string()));
        println!("{}", ui::kv(ctx, "Title", &entry.title));
        println!("{}", ui::kv(ctx, "Mood", &moods_label(entry)));
        if !entry.tags.is_empty() {
            println!("{}", ui::kv(ctx, "Tags", &entry.tags.join(", ")));
        }
        if !entry.category.is_empty() {
            println!("{}", ui::kv(ctx, "Category", &entry.category));
        }
        println!("{}", ui::kv(ctx, "Words", &count_words(&entry.content).to_string()));
        println!("{}", ui::kv(ctx, "Updated", &entry.updated_at.to_rfc3339()));
        println!();
    }
    println!("{}", entry.content);
    Ok(())
}

/// Print a list of entries as JSON, a table, or plain lines.
pub fn print_entry_list(
    ctx: &UiContext,
    entries: &[JournalEntry],
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(entries))?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            println!("No entries found.");
        }
        return Ok(());
    }

    if !ctx.mode.is_pretty() {
        for entry in entries {
            println!(
                "{}\t{}\t{}\t{}",
                entry.id,
                date_key(entry.entry_date),
                entry.primary_mood,
                entry.title
            );
        }
        return Ok(());
    }

    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Mood"),
        Column::new("Title"),
        Column::new("Tags"),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                short_id(entry),
                date_key(entry.entry_date),
                moods_label(entry),
                ui::truncate(&entry.title, TITLE_WIDTH),
                entry.tags.join(", "),
            ]
        })
        .collect();

    if !quiet {
        println!("{}", ui::header(ctx, "list", Some(&format!("{} entries", entries.len()))));
    }
    println!("{}", ui::simple_table(ctx, &columns, &rows));
    Ok(())
}

fn counts_line(items: &[CountItem]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .take(TOP_COUNTS)
        .map(|item| format!("{} ({})", item.label, item.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print an insights bundle.
pub fn print_insights(
    ctx: &UiContext,
    insights: &JournalInsights,
    window_label: Option<&str>,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(insights)?);
        return Ok(());
    }

    println!("{}", ui::header(ctx, "insights", window_label));
    let today = if insights.has_entry_for_today { "yes" } else { "no" };
    let lines = [
        ("Entries", insights.total_entries.to_string()),
        ("Written today", today.to_string()),
        ("Current streak", insights.current_streak.to_string()),
        ("Longest streak", insights.longest_streak.to_string()),
        ("Missed days", insights.missed_days.to_string()),
        ("Avg words per day", insights.avg_words_per_day.to_string()),
        ("Moods", counts_line(&insights.mood_counts)),
        ("Tags", counts_line(&insights.tag_counts)),
    ];
    for (key, value) in lines {
        println!("{}", ui::kv(ctx, key, &value));
    }

    if !insights.word_count_trend.is_empty() {
        let rows: Vec<Vec<String>> = insights
            .word_count_trend
            .iter()
            .map(|point| vec![date_key(point.date), point.word_count.to_string()])
            .collect();
        if ctx.mode.is_pretty() {
            println!();
        }
        println!(
            "{}",
            ui::simple_table(ctx, &[Column::new("Date"), Column::new("Words")], &rows)
        );
    }
    Ok(())
}
