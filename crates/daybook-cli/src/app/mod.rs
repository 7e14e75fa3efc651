//! Application-level utilities for the Daybook CLI.
//!
//! This module provides:
//! - Path and settings resolution from flags, env and config
//! - The per-invocation context that owns the store and credential gate
//! - PIN unlock with retry logic

mod context;
mod resolver;
mod unlock;

pub use context::AppContext;
pub use resolver::{resolve_config_path, secrets_backend_override};
