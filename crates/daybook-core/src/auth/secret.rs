//! Secret store interface.
//!
//! Small string secrets (the PIN hash, preferences) live in an opaque
//! key/value store. Implementations never surface errors: a failed read is
//! reported as an absent key and a failed write or removal is a no-op, so
//! upstream code behaves as if the value was never configured.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::warn;

/// Key/value store for small secrets.
pub trait SecretStore: Send + Sync {
    /// Read a value; `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, silently ignoring failures.
    fn set(&self, key: &str, value: &str);

    /// Remove a value, silently ignoring failures.
    fn remove(&self, key: &str);
}

/// Process-local secret store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemorySecretStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.values.lock() {
            Ok(values) => values.get(key).cloned(),
            Err(_) => {
                warn!(key, "secret store poisoned; treating key as absent");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self.values.lock() {
            Ok(mut values) => {
                values.insert(key.to_string(), value.to_string());
            }
            Err(_) => warn!(key, "secret store poisoned; write dropped"),
        }
    }

    fn remove(&self, key: &str) {
        match self.values.lock() {
            Ok(mut values) => {
                values.remove(key);
            }
            Err(_) => warn!(key, "secret store poisoned; removal dropped"),
        }
    }
}
