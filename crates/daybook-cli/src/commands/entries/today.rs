use daybook_core::storage::date_key;
use daybook_core::JournalStore;

use crate::app::AppContext;
use crate::cli::TodayArgs;
use crate::helpers::OutputFormat;
use crate::ui::{self, Badge, UiContext};

pub fn handle_today(ctx: &AppContext, args: &TodayArgs) -> anyhow::Result<()> {
    let store = ctx.journal()?;
    let today = ctx.today()?;
    let entry = store.get_by_date(today)?;

    let ui_ctx = UiContext::from_env(args.json, OutputFormat::Table);
    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "date": date_key(today),
            "has_entry": entry.is_some(),
            "entry_id": entry.as_ref().map(|e| e.id),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match entry {
        Some(entry) => {
            println!(
                "{}",
                ui::badge(&ui_ctx, Badge::Ok, &format!("Written today: {}", entry.title))
            );
            if !ctx.quiet() {
                println!("{}", ui::kv(&ui_ctx, "ID", &entry.id.to_string()));
            }
        }
        None => {
            println!(
                "{}",
                ui::badge(&ui_ctx, Badge::Warn, &format!("No entry for {} yet", date_key(today)))
            );
            if !ctx.quiet() {
                println!("{}", ui::hint(&ui_ctx, "daybook add --title ... --mood ..."));
            }
        }
    }
    Ok(())
}
