use daybook_core::storage::date_key;
use daybook_core::JournalStore;

use crate::app::AppContext;
use crate::cli::InsightsArgs;
use crate::helpers::parse_optional_date;
use crate::output::print_insights;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

pub fn handle_insights(ctx: &AppContext, args: &InsightsArgs) -> anyhow::Result<()> {
    let store = ctx.journal()?;
    let today = ctx.today()?;
    let since = parse_optional_date(args.since.as_deref(), today)?;
    let until = parse_optional_date(args.until.as_deref(), today)?;

    let insights = store.insights_as_of(since, until, today)?;

    let window_label = match (since, until) {
        (None, None) => None,
        (start, end) => Some(format!(
            "{}..{}",
            start.map(date_key).unwrap_or_default(),
            end.map(date_key).unwrap_or_default()
        )),
    };
    let ui_ctx = UiContext::from_env(args.json, OutputFormat::Table);
    print_insights(&ui_ctx, &insights, window_label.as_deref())
}
