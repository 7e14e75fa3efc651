//! PIN management commands.

use std::sync::mpsc::Receiver;

use daybook_core::auth::{CredentialGate, GateState};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::{PinArgs, PinSubcommand};
use crate::errors::CliError;
use crate::helpers::{read_new_pin, read_pin, OutputFormat};
use crate::ui::{self, Badge, UiContext};

pub fn handle_pin(ctx: &AppContext, args: &PinArgs) -> anyhow::Result<()> {
    match args.command {
        PinSubcommand::Set => handle_set(ctx),
        PinSubcommand::Change => handle_change(ctx),
        PinSubcommand::Clear => handle_clear(ctx),
        PinSubcommand::Status => handle_status(ctx),
    }
}

fn log_transitions(events: &Receiver<GateState>) {
    for state in events.try_iter() {
        debug!(unlocked = state.unlocked, pin_set = state.pin_set, "Gate state changed");
    }
}

fn confirm_saved(gate: &CredentialGate) -> anyhow::Result<()> {
    // Secret stores never report write failures; a reload shows whether it stuck.
    if !gate.is_pin_set() {
        return Err(anyhow::anyhow!("Failed to store the PIN in the secret store"));
    }
    Ok(())
}

fn handle_set(ctx: &AppContext) -> anyhow::Result<()> {
    let mut gate = ctx.gate()?;
    if gate.is_pin_set() {
        return Err(CliError::invalid_input_with_hint(
            "A PIN is already set",
            "Hint: Use `daybook pin change` to replace it.",
        )
        .into());
    }
    let events = gate.subscribe();

    let new_pin = read_new_pin(ctx.no_input())?;
    gate.set_pin(&new_pin)?;
    log_transitions(&events);
    confirm_saved(&ctx.gate()?)?;

    if !ctx.quiet() {
        println!("PIN set. The journal now asks for it before opening.");
    }
    Ok(())
}

fn require_pin_set(gate: &CredentialGate) -> anyhow::Result<()> {
    if !gate.is_pin_set() {
        return Err(CliError::invalid_input_with_hint(
            "No PIN is set",
            "Hint: Use `daybook pin set` to add one.",
        )
        .into());
    }
    Ok(())
}

fn handle_change(ctx: &AppContext) -> anyhow::Result<()> {
    let mut gate = ctx.gate()?;
    require_pin_set(&gate)?;
    let events = gate.subscribe();

    let (current, _) = read_pin("Current PIN", ctx.no_input())?;
    let new_pin = read_new_pin(ctx.no_input())?;
    if !gate.change_pin(&current, &new_pin)? {
        return Err(CliError::incorrect_pin().into());
    }
    log_transitions(&events);
    confirm_saved(&ctx.gate()?)?;

    if !ctx.quiet() {
        println!("PIN changed.");
    }
    Ok(())
}

fn handle_clear(ctx: &AppContext) -> anyhow::Result<()> {
    let mut gate = ctx.gate()?;
    require_pin_set(&gate)?;
    let events = gate.subscribe();

    let (current, _) = read_pin("Current PIN", ctx.no_input())?;
    if !gate.clear_pin(&current) {
        return Err(CliError::incorrect_pin().into());
    }
    log_transitions(&events);

    if !ctx.quiet() {
        println!("PIN removed. The journal opens without a PIN.");
    }
    Ok(())
}

fn handle_status(ctx: &AppContext) -> anyhow::Result<()> {
    let gate = ctx.gate()?;
    let settings = ctx.settings()?;
    let ui_ctx = UiContext::from_env(false, OutputFormat::Table);

    if gate.is_pin_set() {
        println!("{}", ui::badge(&ui_ctx, Badge::Locked, "PIN is set"));
    } else {
        println!("{}", ui::badge(&ui_ctx, Badge::Warn, "No PIN set"));
    }
    if !ctx.quiet() {
        println!(
            "{}",
            ui::kv(&ui_ctx, "Secrets", &settings.secrets_backend.to_string())
        );
    }
    Ok(())
}
