//! Application context for the Daybook CLI.
//!
//! Bundles CLI arguments with lazily resolved settings and owns the one
//! entry store and credential gate used by a command.

use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;

use daybook_core::auth::{CredentialGate, SecretStore};
use daybook_core::{JournalStore, SqliteJournalStore};

use crate::cli::Cli;
use crate::errors::CliError;
use crate::helpers::today_in;
use crate::secrets::open_secret_store;

use super::resolver::{load_settings, missing_journal_message, Settings};
use super::unlock::unlock_gate;

pub struct AppContext<'a> {
    cli: &'a Cli,
    settings: OnceCell<Settings>,
    store: OnceCell<SqliteJournalStore>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            settings: OnceCell::new(),
            store: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn no_input(&self) -> bool {
        self.cli.no_input
    }

    /// Resolved settings, loaded on first use.
    pub fn settings(&self) -> anyhow::Result<&Settings> {
        self.settings.get_or_try_init(|| load_settings(self.cli))
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        Ok(today_in(self.settings()?.timezone))
    }

    /// The secret store selected by config or DAYBOOK_SECRETS.
    pub fn secrets(&self) -> anyhow::Result<Arc<dyn SecretStore>> {
        let settings = self.settings()?;
        Ok(open_secret_store(
            settings.secrets_backend,
            &settings.secrets_path,
        ))
    }

    /// A credential gate loaded from the secret store. Locked if a PIN is set.
    pub fn gate(&self) -> anyhow::Result<CredentialGate> {
        Ok(CredentialGate::load(self.secrets()?))
    }

    /// The entry store, after the gate has been unlocked.
    ///
    /// Fails with NotFound when the journal database does not exist yet.
    pub fn journal(&self) -> anyhow::Result<&SqliteJournalStore> {
        if let Some(store) = self.store.get() {
            return Ok(store);
        }

        let path = self.settings()?.journal_path.clone();
        if !path.exists() {
            return Err(CliError::not_found(
                missing_journal_message(&path),
                "Hint: Run `daybook init` to create it.",
            )
            .into());
        }

        let mut gate = self.gate()?;
        unlock_gate(&mut gate, self.no_input())?;

        let store = SqliteJournalStore::open(path);
        store.initialize()?;
        Ok(self.store.get_or_init(|| store))
    }
}
