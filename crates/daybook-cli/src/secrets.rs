//! Secret store backends for the PIN hash.
//!
//! Both backends swallow their own failures: a read error looks like an
//! absent secret and a write error is logged and dropped.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use daybook_core::auth::SecretStore;
use tracing::{debug, warn};

use crate::config::SecretBackend;
use crate::fs::write_private_atomic;

const KEYCHAIN_SERVICE: &str = "daybook";

/// Build the store for the selected backend.
pub fn open_secret_store(backend: SecretBackend, file_path: &Path) -> Arc<dyn SecretStore> {
    match backend {
        SecretBackend::Keychain => Arc::new(KeychainSecretStore::new(KEYCHAIN_SERVICE)),
        SecretBackend::File => Arc::new(FileSecretStore::new(file_path)),
    }
}

/// Secrets held by the OS keychain, one keychain item per key.
pub struct KeychainSecretStore {
    service: String,
}

impl KeychainSecretStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Option<keyring::Entry> {
        match keyring::Entry::new(&self.service, key) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(key, error = %err, "Keychain entry unavailable");
                None
            }
        }
    }
}

impl SecretStore for KeychainSecretStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entry(key)?.get_password() {
            Ok(value) => Some(value),
            Err(keyring::Error::NoEntry) => None,
            Err(err) => {
                warn!(key, error = %err, "Keychain read failed");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(entry) = self.entry(key) {
            if let Err(err) = entry.set_password(value) {
                warn!(key, error = %err, "Keychain write failed");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(entry) = self.entry(key) {
            match entry.delete_password() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(err) => warn!(key, error = %err, "Keychain delete failed"),
            }
        }
    }
}

/// Secrets kept in a JSON object on disk, mode 0600 on Unix.
pub struct FileSecretStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        write_private_atomic(&self.path, serde_json::to_string_pretty(values)?.as_bytes())?;
        Ok(())
    }

    fn update(&self, key: &str, change: impl FnOnce(&mut BTreeMap<String, String>)) {
        let Ok(_guard) = self.lock.lock() else {
            warn!(key, "Secret file lock poisoned");
            return;
        };
        let result = self.read_all().and_then(|mut values| {
            change(&mut values);
            self.write_all(&values)
        });
        match result {
            Ok(()) => debug!(key, path = %self.path.display(), "Secret file updated"),
            Err(err) => warn!(key, path = %self.path.display(), error = %err, "Secret file write failed"),
        }
    }
}

impl SecretStore for FileSecretStore {
    fn get(&self, key: &str) -> Option<String> {
        let Ok(_guard) = self.lock.lock() else {
            warn!(key, "Secret file lock poisoned");
            return None;
        };
        match self.read_all() {
            Ok(mut values) => values.remove(key),
            Err(err) => {
                warn!(key, path = %self.path.display(), error = %err, "Secret file read failed");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        self.update(key, |values| {
            values.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.update(key, |values| {
            values.remove(key);
        });
    }
}
