use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::print_entry;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::lookup::find_entry;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.journal()?;
    let entry = find_entry(store, &args.target, ctx.today()?)?;
    let ui_ctx = UiContext::from_env(args.json, OutputFormat::Table);
    print_entry(&ui_ctx, &entry, ctx.quiet())
}
