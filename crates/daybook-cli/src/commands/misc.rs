use clap::CommandFactory;
use clap_complete::generate;

use daybook_core::moods::{secondary_moods, PRIMARY_MOODS};

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "daybook", &mut std::io::stdout());
    Ok(())
}

pub fn handle_moods() -> anyhow::Result<()> {
    for primary in PRIMARY_MOODS {
        println!("{}: {}", primary, secondary_moods(primary).join(", "));
    }
    Ok(())
}
