//! PIN hashing using Argon2id.
//!
//! Stored form is `base64(salt):base64(hash)` with the standard alphabet.

use argon2::Argon2;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{DaybookError, Result};

/// Length of the random salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of the derived hash in bytes.
pub const HASH_LENGTH: usize = 32;

const MIN_PIN_LENGTH: usize = 4;
const MAX_PIN_LENGTH: usize = 12;

/// Argon2id cost parameters.
///
/// The default is the fixed production setting. Changing it invalidates
/// every stored hash, so only tests construct other values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinHashParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for PinHashParams {
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl PinHashParams {
    fn argon2(&self, output_len: usize) -> Result<Argon2<'static>> {
        let params = argon2::Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(output_len),
        )
        .map_err(|e| DaybookError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;
        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}

/// Check that a PIN is 4 to 12 ASCII digits.
pub fn validate_pin(pin: &str) -> Result<()> {
    if pin.len() < MIN_PIN_LENGTH || pin.len() > MAX_PIN_LENGTH {
        return Err(DaybookError::InvalidInput(format!(
            "PIN must be {} to {} digits",
            MIN_PIN_LENGTH, MAX_PIN_LENGTH
        )));
    }
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(DaybookError::InvalidInput(
            "PIN must contain digits only".to_string(),
        ));
    }
    Ok(())
}

/// Hash `pin` with a fresh random salt, returning the storable string.
pub fn hash_pin(pin: &str, params: &PinHashParams) -> Result<String> {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt)
        .map_err(|e| DaybookError::Crypto(format!("Failed to generate salt: {}", e)))?;

    let hash = derive(pin, &salt, HASH_LENGTH, params)?;
    Ok(format!("{}:{}", STANDARD.encode(salt), STANDARD.encode(&*hash)))
}

/// Check `pin` against a stored `salt:hash` string.
///
/// Malformed stored values and derivation failures verify as `false`.
pub fn verify_pin(pin: &str, stored: &str, params: &PinHashParams) -> bool {
    let mut parts = stored.split(':');
    let (salt_b64, hash_b64) = match (parts.next(), parts.next(), parts.next()) {
        (Some(salt), Some(hash), None) => (salt, hash),
        _ => return false,
    };

    let (salt, expected) = match (STANDARD.decode(salt_b64), STANDARD.decode(hash_b64)) {
        (Ok(salt), Ok(hash)) => (salt, Zeroizing::new(hash)),
        _ => return false,
    };

    match derive(pin, &salt, expected.len(), params) {
        Ok(actual) => bool::from(actual.as_slice().ct_eq(expected.as_slice())),
        Err(_) => false,
    }
}

fn derive(
    pin: &str,
    salt: &[u8],
    output_len: usize,
    params: &PinHashParams,
) -> Result<Zeroizing<Vec<u8>>> {
    let argon2 = params.argon2(output_len)?;
    let mut output = Zeroizing::new(vec![0u8; output_len]);
    argon2
        .hash_password_into(pin.as_bytes(), salt, &mut output)
        .map_err(|e| DaybookError::Crypto(format!("PIN derivation failed: {}", e)))?;
    Ok(output)
}
