//! Input helpers for entry bodies, PINs and confirmations.

use std::io::{IsTerminal, Read};
use std::process::Command;

use dialoguer::{Confirm, Password};
use zeroize::Zeroizing;

use crate::constants::{NEW_PIN_ENV, PIN_ENV};
use crate::errors::CliError;

/// Where a PIN came from. Env-supplied PINs are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSource {
    Env,
    Prompt,
}

fn env_value(name: &str) -> Option<Zeroizing<String>> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(Zeroizing::new)
}

fn interactive(no_input: bool) -> bool {
    !no_input && std::io::stdin().is_terminal()
}

/// Read the current PIN from `DAYBOOK_PIN`, or prompt for it.
pub fn read_pin(prompt: &str, no_input: bool) -> anyhow::Result<(Zeroizing<String>, PinSource)> {
    if let Some(pin) = env_value(PIN_ENV) {
        return Ok((pin, PinSource::Env));
    }
    if !interactive(no_input) {
        return Err(CliError::auth_failed_with_hint(
            "The journal is protected by a PIN",
            format!("Hint: Set {} or run without --no-input on a terminal.", PIN_ENV),
        )
        .into());
    }
    let pin = Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read PIN: {}", e))?;
    Ok((Zeroizing::new(pin), PinSource::Prompt))
}

/// Read a replacement PIN from `DAYBOOK_NEW_PIN`, or prompt twice for it.
pub fn read_new_pin(no_input: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(pin) = env_value(NEW_PIN_ENV) {
        return Ok(pin);
    }
    if !interactive(no_input) {
        return Err(CliError::invalid_input_with_hint(
            "No new PIN provided",
            format!("Hint: Set {} or run without --no-input on a terminal.", NEW_PIN_ENV),
        )
        .into());
    }
    let pin = Password::new()
        .with_prompt("New PIN (4-12 digits)")
        .with_confirmation("Confirm PIN", "PINs do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read PIN: {}", e))?;
    Ok(Zeroizing::new(pin))
}

/// Ask a yes/no question. Non-interactive sessions must pass `--yes` instead.
pub fn confirm(prompt: &str, no_input: bool) -> anyhow::Result<bool> {
    if !interactive(no_input) {
        return Err(CliError::invalid_input_with_hint(
            "Confirmation required",
            "Hint: Pass --yes to confirm without a prompt.",
        )
        .into());
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Resolve an entry body from `--body`, stdin, or `$EDITOR`.
pub fn read_entry_body(
    body: Option<&str>,
    no_input: bool,
    existing: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value.to_string());
    }

    if !std::io::stdin().is_terminal() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.is_empty() {
            return Err(CliError::invalid_input("No input provided on stdin").into());
        }
        return Ok(trimmed);
    }

    if no_input {
        return Err(CliError::invalid_input("--no-input requires --body or content from stdin").into());
    }

    read_body_from_editor(existing.unwrap_or(""))
}

fn read_body_from_editor(initial: &str) -> anyhow::Result<String> {
    let editor = std::env::var("EDITOR")
        .map_err(|_| anyhow::anyhow!("$EDITOR is not set; use --body or pipe content via stdin"))?;

    let file = tempfile_path();
    std::fs::write(&file, initial)
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    let status = Command::new(editor)
        .arg(&file)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?;
    let contents = std::fs::read_to_string(&file);
    let _ = std::fs::remove_file(&file);

    if !status.success() {
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }
    let contents = contents.map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;

    let trimmed = contents.trim_end().to_string();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("Entry body is empty").into());
    }
    Ok(trimmed)
}

fn tempfile_path() -> std::path::PathBuf {
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    std::env::temp_dir().join(format!("daybook_entry_{}_{}.md", std::process::id(), stamp))
}
