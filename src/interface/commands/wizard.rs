//! # Wizard Command Handler
//!
//! Handles the commands that edit the character: `.pick`, `.toggle`,
//! `.occupation`, `.name`, `.age`, and `.ok` for the main button.
//! Each one forwards a single user event to the `WizardController`.

use crate::application::wizard::{ActionOutcome, WizardController};
use crate::domain::catalog::{Catalog, SelectionTarget};
use crate::domain::error::WizardError;
use crate::domain::traits::ChatProvider;
use crate::domain::types::TextField;
use crate::domain::validation;
use crate::strings::messages;
use anyhow::Result;

use super::{reply, split_first};

fn describe_error(err: &WizardError) -> String {
    match err {
        WizardError::UnknownLabel { target, label } => messages::unknown_option(target.key(), label),
        WizardError::InactiveField(field) => messages::inactive_field(field),
        WizardError::Closed => messages::SESSION_CLOSED.to_string(),
    }
}

async fn select(
    wizard: &WizardController,
    chat: &impl ChatProvider,
    target: SelectionTarget,
    label: &str,
) -> Result<()> {
    match wizard.on_selection(target, label).await {
        Ok(selected) => {
            let canonical = target.canonical(label).unwrap_or(label);
            let msg = match target {
                SelectionTarget::Personality(catalog) if catalog.is_multi() => {
                    messages::option_toggled(target.key(), canonical, selected)
                }
                _ => messages::option_picked(target.key(), canonical),
            };
            reply(chat, &msg).await
        }
        Err(e) => {
            tracing::debug!("Selection rejected: {}", e);
            reply(chat, &describe_error(&e)).await
        }
    }
}

/// `.pick <field> <option>`; any field with a single choice.
pub async fn handle_pick(wizard: &WizardController, chat: &impl ChatProvider, args: &str) -> Result<()> {
    let (key, label) = split_first(args);
    if key.is_empty() || label.is_empty() {
        return reply(chat, &messages::usage("pick", "<field> <option>")).await;
    }
    let target = match SelectionTarget::from_key(key) {
        Some(SelectionTarget::Personality(catalog)) if catalog.is_multi() => {
            return reply(chat, &messages::usage("toggle", &format!("{} <option>", catalog.key()))).await;
        }
        Some(target) => target,
        None => return reply(chat, &messages::unknown_field(key)).await,
    };
    select(wizard, chat, target, label).await
}

/// `.toggle <traits|interests> <option>`
pub async fn handle_toggle(wizard: &WizardController, chat: &impl ChatProvider, args: &str) -> Result<()> {
    let (key, label) = split_first(args);
    if key.is_empty() || label.is_empty() {
        return reply(chat, &messages::usage("toggle", "<traits|interests> <option>")).await;
    }
    match Catalog::from_key(key) {
        Some(catalog) if catalog.is_multi() => {
            select(wizard, chat, SelectionTarget::Personality(catalog), label).await
        }
        Some(_) => reply(chat, &messages::usage("occupation", "<option>")).await,
        None => reply(chat, &messages::unknown_field(key)).await,
    }
}

pub async fn handle_occupation(
    wizard: &WizardController,
    chat: &impl ChatProvider,
    args: &str,
) -> Result<()> {
    let label = args.trim();
    if label.is_empty() {
        return reply(chat, &messages::usage("occupation", "<option>")).await;
    }
    select(wizard, chat, SelectionTarget::Personality(Catalog::Occupations), label).await
}

/// `.name` and `.age`. The raw text goes to the controller like keystrokes in a field.
pub async fn handle_text(
    wizard: &WizardController,
    chat: &impl ChatProvider,
    field: TextField,
    args: &str,
) -> Result<()> {
    if let Err(e) = wizard.on_text_changed(field, args).await {
        return reply(chat, &describe_error(&e)).await;
    }

    let session = wizard.snapshot().await;
    let msg = match field {
        TextField::Name if session.personality.character_name.is_empty() => {
            "✏️ Name cleared".to_string()
        }
        TextField::Name => format!("✏️ Name: {}", session.personality.character_name),
        TextField::Age => match session.personality.character_age {
            Some(age)
                if (validation::MIN_CHARACTER_AGE..=validation::MAX_CHARACTER_AGE).contains(&age) =>
            {
                format!("✏️ Age: {}", age)
            }
            Some(age) => format!(
                "⚠️ Age {} is outside {}-{}",
                age,
                validation::MIN_CHARACTER_AGE,
                validation::MAX_CHARACTER_AGE
            ),
            None => "✏️ Age cleared".to_string(),
        },
    };
    reply(chat, &msg).await
}

/// `.ok` presses the main button. Transitions, errors and the close are
/// reported by the view; only outcomes without visible effect get a reply.
pub async fn handle_ok(wizard: &WizardController, chat: &impl ChatProvider) -> Result<()> {
    let outcome = wizard.on_primary_action().await;
    tracing::info!("Primary action outcome: {:?}", outcome);
    match outcome {
        ActionOutcome::Busy => reply(chat, messages::STILL_WORKING).await,
        ActionOutcome::Incomplete => {
            let session = wizard.snapshot().await;
            let missing = validation::missing_appearance_fields(&session.appearance);
            reply(chat, &messages::step_incomplete(&missing)).await
        }
        ActionOutcome::Closed => reply(chat, messages::SESSION_CLOSED).await,
        ActionOutcome::Advanced
        | ActionOutcome::Rejected
        | ActionOutcome::Saved
        | ActionOutcome::SaveFailed(_) => Ok(()),
    }
}
