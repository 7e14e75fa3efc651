//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries
//! and insights as JSON, tables, or plain text.

mod json;
mod text;

pub use json::{entries_json, entry_json};
pub use text::{print_entry, print_entry_list, print_insights};
