use daybook_core::storage::{date_key, EntryDraft};
use daybook_core::{DaybookError, JournalStore};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_date_arg, read_entry_body};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let store = ctx.journal()?;
    let today = ctx.today()?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date_arg(value, today)?,
        None => today,
    };

    // Fail before asking for a body if the day is already written.
    if store.has_entry_for_date(date)? {
        return Err(DaybookError::DuplicateDate(date).into());
    }

    let body = read_entry_body(args.body.as_deref(), ctx.no_input(), None)?;
    let draft = EntryDraft::new(args.title.as_str(), body, date, args.mood.as_str())
        .with_secondary_moods(args.also.clone())
        .with_tags(args.tag.clone())
        .with_category(args.category.clone().unwrap_or_default());

    let entry = store.create(&draft)?;
    if ctx.quiet() {
        println!("{}", entry.id);
    } else {
        println!("Added entry {} for {}", entry.id, date_key(entry.entry_date));
    }
    Ok(())
}
