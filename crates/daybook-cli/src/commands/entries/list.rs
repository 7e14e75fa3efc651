use daybook_core::JournalStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_optional_date, parse_output_format};
use crate::output::print_entry_list;
use crate::ui::UiContext;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let store = ctx.journal()?;
    let today = ctx.today()?;
    let since = parse_optional_date(args.since.as_deref(), today)?;
    let until = parse_optional_date(args.until.as_deref(), today)?;

    let mut entries = store.get_in_range(since, until)?;
    if let Some(tag) = args.tag.as_deref() {
        let wanted = tag.trim().to_lowercase();
        entries.retain(|entry| entry.tags.iter().any(|t| t.to_lowercase() == wanted));
    }
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    let ui_ctx = UiContext::from_env(args.json, format);
    print_entry_list(&ui_ctx, &entries, ctx.quiet())
}
