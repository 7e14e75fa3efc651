//! Output mode routing.

use crate::helpers::OutputFormat;

/// How a command renders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// JSON on stdout and nothing else
    Json,
    /// Tab-separated lines and uncolored `key=value` pairs
    #[default]
    Plain,
    /// Colors, badges and tables
    Pretty,
}

/// What the output stream is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub is_tty: bool,
    pub dumb: bool,
}

impl Terminal {
    fn supports_pretty(self) -> bool {
        self.is_tty && !self.dumb
    }
}

impl OutputMode {
    /// `--json` wins, then `--format plain`. Tables only reach a capable terminal.
    pub fn resolve(json: bool, format: OutputFormat, terminal: Terminal) -> Self {
        match (json, format) {
            (true, _) => Self::Json,
            (false, OutputFormat::Plain) => Self::Plain,
            (false, OutputFormat::Table) if terminal.supports_pretty() => Self::Pretty,
            (false, OutputFormat::Table) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
