//! UI context for environment detection.

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

use super::mode::{OutputMode, Terminal};

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Terminal width from `COLUMNS`; `None` lets the table renderer ask the terminal
    pub width: Option<usize>,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Context for stdout output, from `--json` / `--format` and the environment.
    pub fn from_env(json: bool, format: OutputFormat) -> Self {
        Self::for_stream(std::io::stdout().is_terminal(), json, format)
    }

    /// Context for messages written to stderr.
    pub fn for_stderr() -> Self {
        Self::for_stream(std::io::stderr().is_terminal(), false, OutputFormat::Table)
    }

    fn for_stream(is_tty: bool, json: bool, format: OutputFormat) -> Self {
        let terminal = Terminal {
            is_tty,
            dumb: term_is_dumb(),
        };
        Self {
            color: is_tty && color_allowed(),
            width: columns_width(std::env::var("COLUMNS").ok().as_deref()),
            mode: OutputMode::resolve(json, format, terminal),
        }
    }
}

fn term_is_dumb() -> bool {
    std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false)
}

fn color_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none() && !term_is_dumb()
}

fn columns_width(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, OutputFormat::Plain);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_columns_width() {
        assert_eq!(columns_width(Some("120")), Some(120));
        assert_eq!(columns_width(Some(" 90 ")), Some(90));
        assert_eq!(columns_width(Some("0")), None);
        assert_eq!(columns_width(Some("wide")), None);
        assert_eq!(columns_width(None), None);
    }
}
