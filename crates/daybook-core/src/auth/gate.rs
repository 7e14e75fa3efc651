//! Credential gate: PIN lifecycle and lock state.
//!
//! The gate starts unlocked when no PIN has ever been set, and locked
//! otherwise. It does not guard the entry store itself; the application
//! checks `is_unlocked` before handing out access.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::notify::Subscribers;

use super::pin::{hash_pin, validate_pin, verify_pin, PinHashParams};
use super::secret::SecretStore;

/// Secret store key holding `base64(salt):base64(hash)`.
pub const PIN_HASH_KEY: &str = "journal_pin_hash";

/// Snapshot of the gate, sent to subscribers after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateState {
    pub unlocked: bool,
    pub pin_set: bool,
}

/// PIN-based lock in front of the journal.
pub struct CredentialGate {
    secrets: Arc<dyn SecretStore>,
    params: PinHashParams,
    stored_hash: Option<String>,
    unlocked: bool,
    subscribers: Subscribers<GateState>,
}

impl CredentialGate {
    /// Load the gate from `secrets` with production hashing parameters.
    pub fn load(secrets: Arc<dyn SecretStore>) -> Self {
        Self::load_with_params(secrets, PinHashParams::default())
    }

    /// Load the gate with explicit hashing parameters.
    pub fn load_with_params(secrets: Arc<dyn SecretStore>, params: PinHashParams) -> Self {
        let stored_hash = secrets
            .get(PIN_HASH_KEY)
            .filter(|value| !value.trim().is_empty());
        let unlocked = stored_hash.is_none();
        debug!(pin_set = !unlocked, "credential gate loaded");

        Self {
            secrets,
            params,
            stored_hash,
            unlocked,
            subscribers: Subscribers::new(),
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_pin_set(&self) -> bool {
        self.stored_hash.is_some()
    }

    pub fn state(&self) -> GateState {
        GateState {
            unlocked: self.unlocked,
            pin_set: self.is_pin_set(),
        }
    }

    /// Receive a `GateState` after every change. Drop the receiver to stop.
    pub fn subscribe(&mut self) -> Receiver<GateState> {
        self.subscribers.subscribe()
    }

    /// Hash and store a new PIN, replacing any existing one. Leaves the gate unlocked.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::InvalidInput` if the PIN is not 4 to 12 digits,
    /// or `DaybookError::Crypto` if hashing fails.
    pub fn set_pin(&mut self, pin: &str) -> Result<()> {
        validate_pin(pin)?;
        let value = hash_pin(pin, &self.params)?;
        self.secrets.set(PIN_HASH_KEY, &value);
        self.stored_hash = Some(value);
        self.unlocked = true;
        info!("PIN set");
        self.notify();
        Ok(())
    }

    /// Unlock with `pin`. Always succeeds when no PIN is set.
    ///
    /// A mismatch leaves the lock state untouched.
    pub fn unlock(&mut self, pin: &str) -> bool {
        if self.is_pin_set() && !self.verify(pin) {
            debug!("unlock rejected");
            return false;
        }
        self.unlocked = true;
        self.notify();
        true
    }

    /// Replace the PIN after verifying the current one.
    ///
    /// Returns `Ok(false)` when `current` does not match.
    pub fn change_pin(&mut self, current: &str, new: &str) -> Result<bool> {
        if !self.verify(current) {
            debug!("PIN change rejected");
            return Ok(false);
        }
        self.set_pin(new)?;
        Ok(true)
    }

    /// Remove the PIN after verifying it. The gate is unlocked afterwards.
    pub fn clear_pin(&mut self, pin: &str) -> bool {
        if !self.verify(pin) {
            debug!("PIN clear rejected");
            return false;
        }
        self.secrets.remove(PIN_HASH_KEY);
        self.stored_hash = None;
        self.unlocked = true;
        info!("PIN cleared");
        self.notify();
        true
    }

    /// Lock the gate. Without a PIN there is nothing to lock against.
    pub fn lock(&mut self) {
        if !self.is_pin_set() {
            return;
        }
        self.unlocked = false;
        self.notify();
    }

    fn verify(&self, pin: &str) -> bool {
        match self.stored_hash.as_deref() {
            Some(stored) => verify_pin(pin, stored, &self.params),
            None => false,
        }
    }

    fn notify(&mut self) {
        let state = self.state();
        self.subscribers.broadcast(&state);
    }
}

impl std::fmt::Debug for CredentialGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialGate")
            .field("unlocked", &self.unlocked)
            .field("pin_set", &self.is_pin_set())
            .field("stored_hash", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::pin::tests::fast_params;
    use crate::auth::secret::MemorySecretStore;

    fn gate_with(secrets: Arc<dyn SecretStore>) -> CredentialGate {
        CredentialGate::load_with_params(secrets, fast_params())
    }

    fn fresh_gate() -> (CredentialGate, Arc<MemorySecretStore>) {
        let secrets = Arc::new(MemorySecretStore::new());
        (gate_with(secrets.clone()), secrets)
    }

    /// A store whose backing service is down.
    struct UnavailableSecretStore;

    impl SecretStore for UnavailableSecretStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) {}
        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn test_starts_unlocked_without_pin() {
        let (gate, _) = fresh_gate();
        assert!(gate.is_unlocked());
        assert!(!gate.is_pin_set());
    }

    #[test]
    fn test_starts_locked_with_stored_pin() {
        let secrets = Arc::new(MemorySecretStore::new());
        gate_with(secrets.clone()).set_pin("1234").unwrap();

        let reloaded = gate_with(secrets);
        assert!(reloaded.is_pin_set());
        assert!(!reloaded.is_unlocked());
    }

    #[test]
    fn test_blank_stored_hash_counts_as_no_pin() {
        let secrets = Arc::new(MemorySecretStore::new());
        secrets.set(PIN_HASH_KEY, "   ");

        let gate = gate_with(secrets);
        assert!(!gate.is_pin_set());
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_pin_lifecycle() {
        let (mut gate, secrets) = fresh_gate();

        gate.set_pin("1234").unwrap();
        assert!(gate.is_unlocked());
        let stored = secrets.get(PIN_HASH_KEY).unwrap();
        assert!(!stored.contains("1234"));

        gate.lock();
        assert!(!gate.is_unlocked());

        assert!(!gate.unlock("9999"));
        assert!(!gate.is_unlocked());

        assert!(gate.unlock("1234"));
        assert!(gate.is_unlocked());

        assert!(gate.clear_pin("1234"));
        assert!(!gate.is_pin_set());
        assert_eq!(secrets.get(PIN_HASH_KEY), None);

        gate.lock();
        assert!(gate.is_unlocked());
        assert!(gate.unlock("anything"));
    }

    #[test]
    fn test_failed_unlock_keeps_unlocked_state() {
        let (mut gate, _) = fresh_gate();
        gate.set_pin("1234").unwrap();

        assert!(!gate.unlock("9999"));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_change_pin_requires_current() {
        let (mut gate, _) = fresh_gate();
        gate.set_pin("1234").unwrap();

        assert!(!gate.change_pin("0000", "5678").unwrap());
        gate.lock();
        assert!(gate.unlock("1234"));

        assert!(gate.change_pin("1234", "5678").unwrap());
        gate.lock();
        assert!(!gate.unlock("1234"));
        assert!(gate.unlock("5678"));
    }

    #[test]
    fn test_change_pin_rejects_invalid_new_pin() {
        let (mut gate, _) = fresh_gate();
        gate.set_pin("1234").unwrap();

        assert!(gate.change_pin("1234", "12").is_err());
        gate.lock();
        assert!(gate.unlock("1234"));
    }

    #[test]
    fn test_clear_pin_with_wrong_pin_fails() {
        let (mut gate, secrets) = fresh_gate();
        gate.set_pin("1234").unwrap();
        gate.lock();

        assert!(!gate.clear_pin("4321"));
        assert!(gate.is_pin_set());
        assert!(!gate.is_unlocked());
        assert!(secrets.get(PIN_HASH_KEY).is_some());
    }

    #[test]
    fn test_change_and_clear_without_pin_fail() {
        let (mut gate, _) = fresh_gate();
        assert!(!gate.change_pin("1234", "5678").unwrap());
        assert!(!gate.clear_pin("1234"));
    }

    #[test]
    fn test_corrupt_stored_hash_never_unlocks() {
        let secrets = Arc::new(MemorySecretStore::new());
        secrets.set(PIN_HASH_KEY, "not-a-valid-hash");

        let mut gate = gate_with(secrets);
        assert!(gate.is_pin_set());
        assert!(!gate.unlock("1234"));
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_unavailable_store_behaves_as_unconfigured() {
        let mut gate = gate_with(Arc::new(UnavailableSecretStore));
        assert!(!gate.is_pin_set());
        assert!(gate.unlock("0000"));
    }

    #[test]
    fn test_subscribers_see_each_change() {
        let (mut gate, _) = fresh_gate();
        let events = gate.subscribe();

        gate.set_pin("1234").unwrap();
        gate.lock();
        assert!(!gate.unlock("0000"));
        assert!(gate.unlock("1234"));

        let seen: Vec<GateState> = events.try_iter().collect();
        assert_eq!(
            seen,
            vec![
                GateState { unlocked: true, pin_set: true },
                GateState { unlocked: false, pin_set: true },
                GateState { unlocked: true, pin_set: true },
            ]
        );
    }

    #[test]
    fn test_debug_redacts_hash() {
        let (mut gate, secrets) = fresh_gate();
        gate.set_pin("1234").unwrap();
        let stored = secrets.get(PIN_HASH_KEY).unwrap();

        let debug_output = format!("{:?}", gate);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains(&stored));
    }
}
