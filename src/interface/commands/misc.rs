//! # Miscellaneous Commands
//!
//! Handles `.show` and `.options`.
//! Read-only views of the wizard session.

use crate::application::wizard::WizardController;
use crate::domain::catalog::SelectionTarget;
use crate::domain::preview::render_preview;
use crate::domain::traits::ChatProvider;
use crate::strings::{messages, wizard as wizard_strings};
use anyhow::Result;

use super::reply;

pub async fn handle_show(wizard: &WizardController, chat: &impl ChatProvider) -> Result<()> {
    let session = wizard.snapshot().await;
    if session.closed {
        return reply(chat, messages::SESSION_CLOSED).await;
    }
    let preview = render_preview(session.confirmed_appearance.as_ref(), &session.personality);
    let msg = format!("{}\n\n👤 {}", wizard_strings::format_wizard_step(&session), preview);
    reply(chat, &msg).await
}

pub async fn handle_options(wizard: &WizardController, chat: &impl ChatProvider, args: &str) -> Result<()> {
    let key = args.trim();
    if key.is_empty() {
        return reply(chat, &wizard_strings::format_field_index()).await;
    }
    let Some(target) = SelectionTarget::from_key(key) else {
        return reply(chat, &messages::unknown_field(key)).await;
    };
    let session = wizard.snapshot().await;
    reply(chat, &wizard_strings::format_options(&session, target)).await
}
