//! Parsing helpers for dates, timezones, and output format.

use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use daybook_core::storage::DATE_KEY_FORMAT;

use crate::errors::CliError;

/// Parse an IANA timezone name.
pub fn parse_timezone(value: &str) -> anyhow::Result<Tz> {
    value.trim().parse::<Tz>().map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Unknown timezone: {}", value),
            "Hint: Use an IANA name such as Europe/Berlin or America/New_York.",
        )
        .into()
    })
}

/// The current calendar date in `tz`, or in the local timezone when unset.
pub fn today_in(tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => chrono::Local::now().date_naive(),
    }
}

/// Parse a date argument: `YYYY-MM-DD`, `today`, or `yesterday`.
pub fn parse_date_arg(value: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let trimmed = value.trim();
    match trimmed.to_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }
    NaiveDate::parse_from_str(trimmed, DATE_KEY_FORMAT).map_err(|_| {
        CliError::invalid_input(format!(
            "Invalid date (expected YYYY-MM-DD, today, or yesterday): {}",
            value
        ))
        .into()
    })
}

/// Parse an optional date bound.
pub fn parse_optional_date(
    value: Option<&str>,
    today: NaiveDate,
) -> anyhow::Result<Option<NaiveDate>> {
    value.map(|v| parse_date_arg(v, today)).transpose()
}

/// Text output style for lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse `--format`, defaulting to table.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<OutputFormat> {
    match value.map(|v| v.trim().to_lowercase()) {
        None => Ok(OutputFormat::Table),
        Some(v) if v == "table" => Ok(OutputFormat::Table),
        Some(v) if v == "plain" => Ok(OutputFormat::Plain),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}
