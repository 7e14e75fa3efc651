//! Daybook CLI - a private, one-entry-per-day journal
//!
//! This is the command-line interface for Daybook. It wires the core entry
//! store, insights and PIN gate to subcommands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod fs;
mod helpers;
mod output;
mod secrets;
mod ui;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use daybook_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, insights, misc, pin};
use crate::constants::LOG_ENV;
use crate::errors::classify;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = UiContext::for_stderr();
        match classify(&e) {
            Some(err) => {
                print_error(&ui_ctx, &err.to_string(), err.hint());
                std::process::exit(err.exit_code());
            }
            None => {
                tracing::debug!(error = ?e, "Command failed");
                print_error(&ui_ctx, &format!("{:#}", e), None);
                std::process::exit(1);
            }
        }
    }
}

/// Log to stderr. DAYBOOK_LOG sets the filter; `--verbose` lowers the default to debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Add(args)) => entries::handle_add(ctx, args)?,
        Some(Commands::Show(args)) => entries::handle_show(ctx, args)?,
        Some(Commands::List(args)) => entries::handle_list(ctx, args)?,
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args)?,
        Some(Commands::Delete(args)) => entries::handle_delete(ctx, args)?,
        Some(Commands::Today(args)) => entries::handle_today(ctx, args)?,
        Some(Commands::Insights(args)) => insights::handle_insights(ctx, args)?,
        Some(Commands::Export(args)) => entries::handle_export(ctx, args)?,
        Some(Commands::Pin(args)) => pin::handle_pin(ctx, args)?,
        Some(Commands::Moods) => misc::handle_moods()?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Daybook v{}", VERSION);
            println!("\nQuickstart:");
            println!("  daybook init");
            println!("  daybook add --title \"First day\" --mood Happy --body \"Hello\"");
            println!("  daybook today");
            println!("  daybook insights");
            println!("  daybook pin set");
            println!("\nRun `daybook --help` for full usage.");
        }
    }

    Ok(())
}
