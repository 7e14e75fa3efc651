//! Helper functions for the CLI.
//!
//! - **parsing**: dates, "today" in the configured timezone, output formats
//! - **input**: entry body and PIN input from flags, env, stdin or prompts

mod input;
mod parsing;

pub use input::{confirm, read_entry_body, read_new_pin, read_pin, PinSource};
pub use parsing::{
    parse_date_arg, parse_optional_date, parse_output_format, parse_timezone, today_in,
    OutputFormat,
};
