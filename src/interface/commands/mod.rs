//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., .pick, .ok, .show).
//! These handlers are invoked by the Router.

pub mod help;
pub mod misc;
pub mod wizard;

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub(crate) async fn reply(chat: &impl ChatProvider, content: &str) -> Result<()> {
    chat.send_message(content).await.map_err(|e| anyhow::anyhow!(e))
}

/// Splits `args` into the first word and the remainder.
pub(crate) fn split_first(args: &str) -> (&str, &str) {
    let args = args.trim();
    match args.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (args, ""),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::application::wizard::WizardController;
    use crate::domain::config::WizardConfig;
    use crate::domain::traits::{ChatProvider, MockCharacterGateway};
    use crate::infrastructure::console::ConsoleHost;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Controller on a silent console host, with a backend holding no character.
    pub async fn started_controller() -> (Arc<WizardController>, Arc<ConsoleHost>) {
        let mut gateway = MockCharacterGateway::new();
        gateway.expect_load().returning(|_| Ok(None));
        gateway.expect_save().returning(|_, _| Ok(()));
        let host = Arc::new(ConsoleHost::with_writer(
            "token".to_string(),
            Box::new(std::io::sink()),
        ));
        let config = WizardConfig {
            transition_delay_ms: 0,
            focus_delay_ms: 0,
        };
        let wizard = Arc::new(WizardController::new(
            config,
            host.clone(),
            host.clone(),
            Arc::new(gateway),
        ));
        wizard.start().await;
        (wizard, host)
    }

    /// Chat fake collecting every reply.
    #[derive(Default)]
    pub struct RecordingChat {
        pub sent: Mutex<Vec<String>>,
    }

    impl RecordingChat {
        pub fn last(&self) -> String {
            self.sent.lock().unwrap().last().cloned().unwrap_or_default()
        }

        pub fn count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatProvider for RecordingChat {
        async fn send_message(&self, content: &str) -> Result<(), String> {
            self.sent.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }
}
