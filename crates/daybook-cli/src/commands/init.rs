//! `daybook init`: write the config file and create the journal database.

use std::path::PathBuf;

use daybook_core::{JournalStore, SqliteJournalStore};
use tracing::info;

use crate::app::{resolve_config_path, secrets_backend_override, AppContext};
use crate::cli::InitArgs;
use crate::config::{
    default_journal_path, default_secrets_path, write_config, DaybookConfig, SecretBackend,
};
use crate::errors::CliError;
use crate::helpers::parse_timezone;
use crate::helpers::OutputFormat;
use crate::ui::{self, Badge, UiContext};

fn resolve_backend(args: &InitArgs) -> anyhow::Result<SecretBackend> {
    if let Some(value) = args.secrets.as_deref() {
        return value
            .parse()
            .map_err(|e: anyhow::Error| CliError::invalid_input(e.to_string()).into());
    }
    Ok(secrets_backend_override()?.unwrap_or_default())
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Hint: Pass --force to overwrite it.",
        )
        .into());
    }

    let journal_path = match args.path.as_deref().or(ctx.cli().journal.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_journal_path()?,
    };

    let backend = resolve_backend(args)?;
    let secrets_path = match (backend, args.secrets_path.as_deref()) {
        (_, Some(path)) => Some(PathBuf::from(path)),
        (SecretBackend::File, None) => Some(default_secrets_path()?),
        (SecretBackend::Keychain, None) => None,
    };

    let timezone = match args.timezone.as_deref() {
        Some(tz) => Some(parse_timezone(tz)?.name().to_string()),
        None => None,
    };

    let config = DaybookConfig::new(journal_path.clone(), backend, secrets_path, timezone);
    write_config(&config_path, &config)?;

    let store = SqliteJournalStore::open(&journal_path);
    store.initialize()?;
    info!(journal = %journal_path.display(), backend = %backend, "Journal initialized");

    if !ctx.quiet() {
        let ui_ctx = UiContext::from_env(false, OutputFormat::Table);
        println!("{}", ui::badge(&ui_ctx, Badge::Ok, "Daybook is ready"));
        println!("{}", ui::kv(&ui_ctx, "Journal", &journal_path.display().to_string()));
        println!("{}", ui::kv(&ui_ctx, "Config", &config_path.display().to_string()));
        println!("{}", ui::kv(&ui_ctx, "Secrets", &backend.to_string()));
        println!("{}", ui::hint(&ui_ctx, "Run `daybook pin set` to protect the journal with a PIN."));
    }
    Ok(())
}
