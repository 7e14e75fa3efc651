//! PIN unlock with retry logic.

use daybook_core::auth::CredentialGate;
use tracing::debug;

use crate::constants::MAX_PIN_ATTEMPTS;
use crate::errors::CliError;
use crate::helpers::{read_pin, PinSource};

/// Unlock `gate`, prompting for the PIN if one is set.
///
/// A PIN from the environment gets one attempt; a prompted PIN gets
/// `MAX_PIN_ATTEMPTS`. Failures never say why.
pub fn unlock_gate(gate: &mut CredentialGate, no_input: bool) -> anyhow::Result<()> {
    if gate.is_unlocked() {
        return Ok(());
    }

    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let (pin, source) = read_pin("PIN", no_input)?;
        if gate.unlock(&pin) {
            debug!(attempts, "Journal unlocked");
            return Ok(());
        }

        let remaining = MAX_PIN_ATTEMPTS.saturating_sub(attempts);
        if source == PinSource::Env || remaining == 0 {
            return Err(CliError::incorrect_pin().into());
        }
        eprintln!(
            "Incorrect PIN. {} attempt{} remaining.",
            remaining,
            if remaining == 1 { "" } else { "s" }
        );
    }
}
