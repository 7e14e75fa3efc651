//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, journal, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, or a write that conflicts with an existing entry.
    pub const INVALID_INPUT: i32 = 4;

    /// PIN verification failed.
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variable holding the current PIN.
pub const PIN_ENV: &str = "DAYBOOK_PIN";

/// Environment variable holding the replacement PIN for `pin set` / `pin change`.
pub const NEW_PIN_ENV: &str = "DAYBOOK_NEW_PIN";

/// Environment variable overriding the secret store backend.
pub const SECRETS_ENV: &str = "DAYBOOK_SECRETS";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DAYBOOK_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DAYBOOK_LOG";

/// Attempts allowed when prompting for a PIN on a terminal.
pub const MAX_PIN_ATTEMPTS: u32 = 3;
