//! PIN-based access control.
//!
//! - **pin**: Argon2id hashing and constant-time verification of PINs
//! - **secret**: The secret store interface the gate persists through
//! - **gate**: Lock state and PIN lifecycle
//!
//! ## Security Model
//!
//! - The PIN itself is never stored; only `base64(salt):base64(hash)`
//! - A fresh random salt is drawn for every hash
//! - Verification never short-circuits on the first mismatched byte
//! - Callers learn only "match" or "no match", never why

pub mod gate;
pub mod pin;
pub mod secret;

pub use gate::{CredentialGate, GateState, PIN_HASH_KEY};
pub use pin::{hash_pin, validate_pin, verify_pin, PinHashParams};
pub use secret::{MemorySecretStore, SecretStore};
