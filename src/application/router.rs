//! # Command Router
//!
//! Routes incoming lines to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `.pick`) and dispatches it with the wizard controller.

use anyhow::Result;
use std::sync::Arc;

use crate::application::wizard::WizardController;
use crate::domain::traits::ChatProvider;
use crate::domain::types::TextField;
use crate::interface::commands;
use crate::strings::messages;

/// Whether the input loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Continue,
    Quit,
}

pub struct CommandRouter {
    wizard: Arc<WizardController>,
}

impl CommandRouter {
    pub fn new(wizard: Arc<WizardController>) -> Self {
        Self { wizard }
    }

    pub async fn route<C>(&self, chat: &C, message: &str) -> Result<RouteOutcome>
    where
        C: ChatProvider,
    {
        let msg = message.trim();
        if msg.is_empty() {
            return Ok(RouteOutcome::Continue);
        }

        let (cmd, args) = commands::split_first(msg);
        tracing::debug!("Router dispatching cmd='{}' args='{}'", cmd, args);

        let wizard = self.wizard.as_ref();
        match cmd {
            ".pick" => commands::wizard::handle_pick(wizard, chat, args).await?,
            ".toggle" => commands::wizard::handle_toggle(wizard, chat, args).await?,
            ".occupation" => commands::wizard::handle_occupation(wizard, chat, args).await?,
            ".name" => commands::wizard::handle_text(wizard, chat, TextField::Name, args).await?,
            ".age" => commands::wizard::handle_text(wizard, chat, TextField::Age, args).await?,
            ".ok" => commands::wizard::handle_ok(wizard, chat).await?,
            ".show" => commands::misc::handle_show(wizard, chat).await?,
            ".options" => commands::misc::handle_options(wizard, chat, args).await?,
            ".help" => commands::help::handle_help(chat).await?,
            ".quit" => {
                commands::reply(chat, messages::BYE).await?;
                return Ok(RouteOutcome::Quit);
            }
            _ => commands::reply(chat, messages::UNKNOWN_COMMAND).await?,
        }
        Ok(RouteOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::WizardStep;
    use crate::interface::commands::testing::{RecordingChat, started_controller};

    #[tokio::test]
    async fn test_routes_commands_to_wizard() {
        let (wizard, _host) = started_controller().await;
        let router = CommandRouter::new(wizard.clone());
        let chat = RecordingChat::default();

        let outcome = router.route(&chat, "  .pick gender Female ").await.unwrap();
        assert_eq!(outcome, RouteOutcome::Continue);
        assert_eq!(chat.last(), "✅ gender: Female");
        assert_eq!(wizard.snapshot().await.step, WizardStep::Appearance);
    }

    #[tokio::test]
    async fn test_unknown_and_empty_input() {
        let (wizard, _host) = started_controller().await;
        let router = CommandRouter::new(wizard);
        let chat = RecordingChat::default();

        router.route(&chat, "   ").await.unwrap();
        assert_eq!(chat.count(), 0);

        router.route(&chat, "hello").await.unwrap();
        assert_eq!(chat.last(), messages::UNKNOWN_COMMAND);

        router.route(&chat, ".help").await.unwrap();
        assert!(chat.last().contains("Character Wizard Help"));
    }

    #[tokio::test]
    async fn test_quit_stops_loop() {
        let (wizard, _host) = started_controller().await;
        let router = CommandRouter::new(wizard);
        let chat = RecordingChat::default();

        assert_eq!(router.route(&chat, ".quit").await.unwrap(), RouteOutcome::Quit);
        assert_eq!(chat.last(), messages::BYE);
    }
}
