//! # Domain Traits
//!
//! Abstract interfaces for the wizard's collaborators (host platform, view, backend, chat).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

use crate::domain::character::CharacterRecord;
use crate::domain::error::GatewayError;
use crate::domain::types::WizardStep;

/// The chat platform hosting the mini-app (identity token, main button, close).
pub trait HostPlatform: Send + Sync {
    /// Opaque session token proving the user's identity to the backend
    fn init_data(&self) -> String;

    /// Set the label of the primary action button
    fn set_main_button_text(&self, text: &str);

    /// Show or hide the primary action button
    fn set_main_button_visible(&self, visible: bool);

    /// Hand control back to the host
    fn close(&self);
}

/// Display surface of the wizard form.
pub trait WizardView: Send + Sync {
    fn show_error(&self, message: &str);

    fn clear_error(&self);

    /// Hide the panel of `step`
    fn deactivate_step(&self, step: WizardStep);

    /// Reveal the panel of `step`
    fn activate_step(&self, step: WizardStep);

    fn focus_name_field(&self);

    fn render_preview(&self, text: &str);
}

/// Remote source and sink of the character record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterGateway: Send + Sync {
    /// Fetch a previously saved character. `Ok(None)` means a new character.
    async fn load(&self, init_data: &str) -> Result<Option<CharacterRecord>, GatewayError>;

    /// Persist the finished character.
    async fn save(&self, init_data: &str, character: &CharacterRecord) -> Result<(), GatewayError>;
}

/// Channel the command handlers answer on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the user
    async fn send_message(&self, content: &str) -> Result<(), String>;
}
