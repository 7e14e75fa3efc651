//! Path and settings resolution for config, journal and secrets.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;

use crate::cli::Cli;
use crate::config::{default_config_path, default_secrets_path, read_config, SecretBackend};
use crate::constants::{CONFIG_ENV, SECRETS_ENV};
use crate::errors::CliError;
use crate::helpers::parse_timezone;

/// Everything a command needs to locate the journal and its secrets.
#[derive(Debug, Clone)]
pub struct Settings {
    pub journal_path: PathBuf,
    pub secrets_backend: SecretBackend,
    pub secrets_path: PathBuf,
    pub timezone: Option<Tz>,
}

/// Resolve the config file path, checking DAYBOOK_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Secret backend override from DAYBOOK_SECRETS, if set.
pub fn secrets_backend_override() -> anyhow::Result<Option<SecretBackend>> {
    match std::env::var(SECRETS_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(Some(value.parse()?)),
        _ => Ok(None),
    }
}

/// Resolve settings: `--journal`/DAYBOOK_PATH, then the config file.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config_path = resolve_config_path()?;
    let config = if config_path.exists() {
        Some(read_config(&config_path)?)
    } else {
        None
    };

    let journal_path = match (cli.journal.as_deref(), config.as_ref()) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(config)) => PathBuf::from(&config.journal.path),
        (None, None) => {
            return Err(CliError::not_found(
                missing_config_message(&config_path),
                "Hint: Run `daybook init`, or set DAYBOOK_PATH=/path/to/daybook.db3.",
            )
            .into())
        }
    };

    let secrets_backend = match secrets_backend_override()? {
        Some(backend) => backend,
        None => config
            .as_ref()
            .map(|c| c.secrets.backend)
            .unwrap_or_default(),
    };

    let secrets_path = match config.as_ref().and_then(|c| c.secrets.path.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_secrets_path()?,
    };

    let timezone = config
        .as_ref()
        .and_then(|c| c.ui.timezone.as_deref())
        .filter(|tz| !tz.trim().is_empty())
        .map(parse_timezone)
        .transpose()?;

    Ok(Settings {
        journal_path,
        secrets_backend,
        secrets_path,
        timezone,
    })
}

/// Error message when the journal database is missing.
pub fn missing_journal_message(path: &Path) -> String {
    format!("No journal found at {}", path.display())
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No config found at {}", config_path.display())
}
