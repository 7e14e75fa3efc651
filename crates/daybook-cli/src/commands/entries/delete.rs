use daybook_core::storage::date_key;
use daybook_core::JournalStore;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::confirm;

use super::lookup::find_by_id;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.journal()?;
    let entry = find_by_id(store, &args.id)?;

    if !args.yes {
        let prompt = format!(
            "Delete the entry for {} (\"{}\")?",
            date_key(entry.entry_date),
            entry.title
        );
        if !confirm(&prompt, ctx.no_input())? {
            if !ctx.quiet() {
                println!("Cancelled.");
            }
            return Ok(());
        }
    }

    if !store.delete(&entry.id)? {
        return Err(CliError::not_found(
            format!("Entry not found: {}", entry.id),
            "Hint: Run `daybook list` to find entry IDs.",
        )
        .into());
    }
    if !ctx.quiet() {
        println!("Deleted entry {}", entry.id);
    }
    Ok(())
}
