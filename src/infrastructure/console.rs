//! # Console Host
//!
//! Implements `HostPlatform`, `WizardView` and `ChatProvider` on a plain terminal.
//! Plays the part of the chat mini-app host: prints the main button, error box,
//! step panels and preview, and signals session close through a watch channel.

use async_trait::async_trait;
use chrono::Local;
use std::io::Write;
use std::sync::Mutex;
use tokio::sync::watch;

use crate::domain::traits::{ChatProvider, HostPlatform, WizardView};
use crate::domain::types::WizardStep;
use crate::strings::messages;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ButtonState {
    text: String,
    visible: bool,
}

pub struct ConsoleHost {
    init_data: String,
    out: Mutex<Box<dyn Write + Send>>,
    button: Mutex<ButtonState>,
    last_preview: Mutex<String>,
    closed_tx: watch::Sender<bool>,
}

impl ConsoleHost {
    pub fn new(init_data: String) -> Self {
        Self::with_writer(init_data, Box::new(std::io::stdout()))
    }

    pub fn with_writer(init_data: String, out: Box<dyn Write + Send>) -> Self {
        let (closed_tx, _) = watch::channel(false);
        Self {
            init_data,
            out: Mutex::new(out),
            button: Mutex::new(ButtonState::default()),
            last_preview: Mutex::new(String::new()),
            closed_tx,
        }
    }

    /// Resolves once the wizard asked the host to close.
    pub fn closed(&self) -> watch::Receiver<bool> {
        self.closed_tx.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        *self.closed_tx.borrow()
    }

    /// Prints a line prefixed with the local time.
    pub fn print(&self, text: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        if let Ok(mut out) = self.out.lock() {
            for line in text.lines() {
                let _ = writeln!(out, "[{}] {}", timestamp, line);
            }
            let _ = out.flush();
        }
    }

    fn update_button(&self, apply: impl FnOnce(&mut ButtonState)) {
        let changed = {
            let Ok(mut button) = self.button.lock() else {
                return;
            };
            let before = button.clone();
            apply(&mut button);
            (*button != before).then(|| button.clone())
        };
        if let Some(state) = changed {
            if state.visible {
                self.print(&format!("[ {} ]  (type `.ok`)", state.text));
            } else {
                tracing::debug!("Main button '{}' hidden", state.text);
            }
        }
    }
}

impl HostPlatform for ConsoleHost {
    fn init_data(&self) -> String {
        self.init_data.clone()
    }

    fn set_main_button_text(&self, text: &str) {
        self.update_button(|b| b.text = text.to_string());
    }

    fn set_main_button_visible(&self, visible: bool) {
        self.update_button(|b| b.visible = visible);
    }

    fn close(&self) {
        self.print(messages::SESSION_CLOSED);
        // Stored even when nobody subscribed yet.
        let was_closed = self.closed_tx.send_replace(true);
        if was_closed {
            tracing::debug!("Close requested twice");
        }
    }
}

#[async_trait]
impl ChatProvider for ConsoleHost {
    async fn send_message(&self, content: &str) -> Result<(), String> {
        self.print(content);
        Ok(())
    }
}

impl WizardView for ConsoleHost {
    fn show_error(&self, message: &str) {
        self.print(&format!("❌ {}", message));
    }

    // Printed errors scroll away with the next line; there is no box to empty.
    fn clear_error(&self) {}

    fn deactivate_step(&self, step: WizardStep) {
        tracing::debug!("Step {} hidden", step.number());
    }

    fn activate_step(&self, step: WizardStep) {
        self.print(&messages::step_header(step.number(), step.title()));
    }

    fn focus_name_field(&self) {
        self.print("✏️ Enter a name with `.name <name>`");
    }

    fn render_preview(&self, text: &str) {
        let Ok(mut last) = self.last_preview.lock() else {
            return;
        };
        if *last == text {
            return;
        }
        *last = text.to_string();
        drop(last);
        self.print(&format!("👤 {}", text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer sharing its buffer with the test.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn host() -> (ConsoleHost, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let host = ConsoleHost::with_writer("token".to_string(), Box::new(buffer.clone()));
        (host, buffer)
    }

    #[test]
    fn test_button_printed_only_on_change() {
        let (host, buffer) = host();
        host.set_main_button_text("Next");
        host.set_main_button_visible(true);
        host.set_main_button_visible(true);

        assert_eq!(buffer.contents().matches("[ Next ]").count(), 1);
        assert_eq!(host.init_data(), "token");
    }

    #[test]
    fn test_preview_deduplicated() {
        let (host, buffer) = host();
        host.render_preview("Complete Step 1");
        host.render_preview("Complete Step 1");
        host.render_preview("Other");

        let out = buffer.contents();
        assert_eq!(out.matches("Complete Step 1").count(), 1);
        assert!(out.contains("Other"));
    }

    #[tokio::test]
    async fn test_chat_replies_are_timestamped() {
        let (host, buffer) = host();
        host.send_message("line one\nline two").await.unwrap();

        let out = buffer.contents();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('[') && lines[0].ends_with("] line one"));
        assert!(lines[1].ends_with("] line two"));
    }

    #[test]
    fn test_close_without_subscriber_is_remembered() {
        let (host, _buffer) = host();
        host.close();

        assert!(host.is_closed());
        assert!(*host.closed().borrow());
    }

    #[tokio::test]
    async fn test_close_signals_watchers() {
        let (host, buffer) = host();
        let mut closed = host.closed();
        assert!(!host.is_closed());

        host.close();

        closed.changed().await.unwrap();
        assert!(*closed.borrow());
        assert!(buffer.contents().contains(messages::SESSION_CLOSED));
    }
}
