use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use daybook_core::VERSION;

/// Daybook - a private, one-entry-per-day journal
#[derive(Parser)]
#[command(name = "daybook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(short, long, global = true, env = "DAYBOOK_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Where to keep the PIN hash (keychain, file)
    #[arg(long, value_name = "BACKEND")]
    pub secrets: Option<String>,

    /// Secrets file path (file backend only)
    #[arg(long, value_name = "PATH")]
    pub secrets_path: Option<String>,

    /// IANA timezone that defines "today" (e.g. Europe/Berlin)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry title
    #[arg(long)]
    pub title: String,

    /// Primary mood (Happy, Neutral, Sad)
    #[arg(short, long)]
    pub mood: String,

    /// Secondary mood (repeatable, at most two are kept)
    #[arg(long = "also", value_name = "MOOD")]
    pub also: Vec<String>,

    /// Add tags to the entry
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Entry date (YYYY-MM-DD, today, yesterday); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Entry body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (or prefix), date (YYYY-MM-DD), or "today"
    #[arg(value_name = "ID|DATE")]
    pub target: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Only entries with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,

    /// Move the entry to another date (YYYY-MM-DD, today, yesterday)
    #[arg(long)]
    pub date: Option<String>,

    /// New primary mood
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Replace secondary moods (repeatable)
    #[arg(long = "also", value_name = "MOOD")]
    pub also: Vec<String>,

    /// Add tags (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Remove all existing tags before adding new ones
    #[arg(long)]
    pub clear_tags: bool,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `today` command
#[derive(Args)]
pub struct TodayArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `insights` command
#[derive(Args)]
pub struct InsightsArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Export format (json, jsonl)
    #[arg(long, default_value = "json")]
    pub format: String,
}

/// Arguments for the `pin` command
#[derive(Args)]
pub struct PinArgs {
    #[command(subcommand)]
    pub command: PinSubcommand,
}

#[derive(Subcommand)]
pub enum PinSubcommand {
    /// Protect the journal with a PIN
    Set,
    /// Replace the current PIN
    Change,
    /// Remove PIN protection
    Clear,
    /// Show whether a PIN is set
    Status,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and journal database
    Init(InitArgs),

    /// Write the entry for a day
    Add(AddArgs),

    /// Show one entry
    Show(ShowArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Change an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Check whether today already has an entry
    Today(TodayArgs),

    /// Streaks, mood and tag counts, word trends
    Insights(InsightsArgs),

    /// Export entries as JSON or JSONL
    Export(ExportArgs),

    /// Manage the journal PIN
    Pin(PinArgs),

    /// List the mood catalog
    Moods,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
