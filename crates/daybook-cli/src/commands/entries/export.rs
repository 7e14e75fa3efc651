use daybook_core::JournalStore;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::helpers::parse_optional_date;
use crate::output::entries_json;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format = args.format.trim().to_lowercase();
    if format != "json" && format != "jsonl" {
        return Err(CliError::invalid_input(format!(
            "Unsupported export format: {} (use json or jsonl)",
            args.format
        ))
        .into());
    }

    let store = ctx.journal()?;
    let today = ctx.today()?;
    let since = parse_optional_date(args.since.as_deref(), today)?;
    let until = parse_optional_date(args.until.as_deref(), today)?;

    // Oldest first so exports read chronologically.
    let mut entries = store.get_in_range(since, until)?;
    entries.reverse();

    let values = entries_json(&entries);
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for value in values {
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
