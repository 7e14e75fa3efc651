//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; everything else exits with 1.

use std::fmt;

use daybook_core::DaybookError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Resource not found (config, journal, entry)
    NotFound { message: String, hint: String },

    /// PIN verification failed. The message never says why.
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The write would break the one-entry-per-day rule
    Conflict { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. }
            | CliError::AuthFailed { message, .. }
            | CliError::InvalidInput { message, .. }
            | CliError::Conflict { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// The single message shown for every failed PIN check.
    pub fn incorrect_pin() -> Self {
        CliError::AuthFailed {
            message: "Incorrect PIN".to_string(),
            hint: None,
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create a Conflict error with message and hint.
    pub fn conflict(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Conflict {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Hint line shown below the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } | CliError::Conflict { hint, .. } => Some(hint),
            CliError::AuthFailed { hint, .. } | CliError::InvalidInput { hint, .. } => {
                hint.as_deref()
            }
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput { .. } | CliError::Conflict { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

/// Map an error from a command handler to the typed CLI error it carries, if any.
///
/// Core errors without a user-facing category (storage, I/O) return `None`
/// and exit with the generic code.
pub fn classify(err: &anyhow::Error) -> Option<CliError> {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return Some(cli.clone());
    }
    match err.downcast_ref::<DaybookError>()? {
        DaybookError::DuplicateDate(date) => Some(CliError::conflict(
            format!(
                "A journal entry already exists for {}. Only one entry per day is allowed.",
                date
            ),
            format!(
                "Hint: Run `daybook show {}` to read it, or `daybook edit <id>` to change it.",
                date
            ),
        )),
        DaybookError::EntryNotFound(id) => Some(CliError::not_found(
            format!("Entry not found: {}", id),
            "Hint: Run `daybook list` to find entry IDs.",
        )),
        DaybookError::Validation(message) if message.to_lowercase().contains("mood") => {
            Some(CliError::invalid_input_with_hint(
                message.clone(),
                "Hint: Run `daybook moods` to see the mood catalog.",
            ))
        }
        DaybookError::Validation(message) | DaybookError::InvalidInput(message) => {
            Some(CliError::invalid_input(message.clone()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::incorrect_pin().exit_code(), exit_codes::AUTH_FAILED);
        assert_eq!(
            CliError::not_found("missing", "hint").exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            CliError::conflict("taken", "hint").exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            CliError::invalid_input("bad").exit_code(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_incorrect_pin_discloses_nothing() {
        let err = CliError::incorrect_pin();
        assert_eq!(err.to_string(), "Incorrect PIN");
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_classify_core_errors() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let err = anyhow::Error::new(DaybookError::DuplicateDate(date));
        let classified = classify(&err).unwrap();
        assert!(matches!(classified, CliError::Conflict { .. }));
        assert!(classified.hint().unwrap().contains("2024-01-02"));

        let storage = anyhow::Error::new(DaybookError::Storage("disk".to_string()));
        assert!(classify(&storage).is_none());
    }

    #[test]
    fn test_classify_passes_cli_errors_through() {
        let err = anyhow::Error::new(CliError::not_found("Entry not found", "Hint: list"));
        let classified = classify(&err).unwrap();
        assert_eq!(classified.exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(classified.hint(), Some("Hint: list"));
    }
}
