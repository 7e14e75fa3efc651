use daybook_core::storage::date_key;
use daybook_core::JournalStore;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{parse_date_arg, read_entry_body};

use super::lookup::find_by_id;

fn has_field_flags(args: &EditArgs) -> bool {
    args.title.is_some()
        || args.body.is_some()
        || args.date.is_some()
        || args.mood.is_some()
        || !args.also.is_empty()
        || !args.tag.is_empty()
        || args.clear_tags
        || args.category.is_some()
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let store = ctx.journal()?;
    let entry = find_by_id(store, &args.id)?;
    let mut draft = entry.to_draft();

    if !has_field_flags(args) {
        // No flags: edit the body in $EDITOR (or take it from stdin).
        draft.content = read_entry_body(None, ctx.no_input(), Some(&entry.content))?;
    }

    if let Some(title) = &args.title {
        draft.title = title.clone();
    }
    if let Some(body) = &args.body {
        draft.content = body.clone();
    }
    if let Some(date) = args.date.as_deref() {
        draft.entry_date = parse_date_arg(date, ctx.today()?)?;
    }
    if let Some(mood) = &args.mood {
        if !mood.trim().eq_ignore_ascii_case(entry.primary_mood.trim()) {
            // Secondary moods belong to the old primary mood.
            draft.secondary_moods.clear();
        }
        draft.primary_mood = mood.clone();
    }
    if !args.also.is_empty() {
        draft.secondary_moods = args.also.clone();
    }
    if args.clear_tags {
        draft.tags.clear();
    }
    draft.tags.extend(args.tag.iter().cloned());
    if let Some(category) = &args.category {
        draft.category = category.clone();
    }

    let updated = store.update(&entry.id, &draft)?;
    if !ctx.quiet() {
        println!(
            "Edited entry {} for {}",
            updated.id,
            date_key(updated.entry_date)
        );
    }
    Ok(())
}
