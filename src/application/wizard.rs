//! # Wizard Controller
//!
//! Drives the two-step character wizard: applies user events to the session,
//! keeps the host's main button in sync with the active step's validator,
//! performs the step 1 -> step 2 handoff and runs the save protocol.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::application::state::WizardSession;
use crate::domain::catalog::SelectionTarget;
use crate::domain::character::CharacterRecord;
use crate::domain::config::WizardConfig;
use crate::domain::error::{GatewayError, WizardError};
use crate::domain::preview::render_preview;
use crate::domain::traits::{CharacterGateway, HostPlatform, WizardView};
use crate::domain::types::{TextField, WizardStep};
use crate::domain::validation;
use crate::strings::messages;

/// Portrait seeds are drawn from `0..PORTRAIT_SEED_LIMIT`.
pub const PORTRAIT_SEED_LIMIT: u32 = 1_000_000_000;

/// What a primary action invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Another primary action is still running
    Busy,
    /// Session already closed after a successful save
    Closed,
    /// Step 1 is incomplete; nothing happened
    Incomplete,
    /// Moved from step 1 to step 2
    Advanced,
    /// Step 2 validation failed; nothing was sent
    Rejected,
    Saved,
    SaveFailed(String),
}

/// Clears the busy flag when the primary action ends, including when its
/// future is dropped mid-save.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct WizardController {
    config: WizardConfig,
    host: Arc<dyn HostPlatform>,
    view: Arc<dyn WizardView>,
    gateway: Arc<dyn CharacterGateway>,
    session: Mutex<WizardSession>,
    busy: AtomicBool,
}

impl WizardController {
    pub fn new(
        config: WizardConfig,
        host: Arc<dyn HostPlatform>,
        view: Arc<dyn WizardView>,
        gateway: Arc<dyn CharacterGateway>,
    ) -> Self {
        Self {
            config,
            host,
            view,
            gateway,
            session: Mutex::new(WizardSession::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Shows step 1 and pre-fills the form from the backend.
    pub async fn start(&self) {
        self.host.set_main_button_text(messages::BUTTON_NEXT);
        self.host.set_main_button_visible(false);
        self.view.activate_step(WizardStep::Appearance);
        self.load_initial().await;
    }

    /// Loads a previously saved character. An existing, complete character skips
    /// straight to step 2 without the animated handoff.
    pub async fn load_initial(&self) {
        let init_data = self.host.init_data();
        let result = self.gateway.load(&init_data).await;

        let mut session = self.session.lock().await;
        match result {
            Ok(Some(record)) => {
                let record = record.sanitized();
                session.appearance = record.appearance;
                session.personality = record.personality;

                if validation::appearance_valid(&session.appearance) {
                    session.confirm_appearance();
                    self.view.deactivate_step(WizardStep::Appearance);
                    self.view.activate_step(WizardStep::Personality);
                    self.host.set_main_button_text(messages::BUTTON_SAVE);
                    tracing::info!("Loaded saved character, resuming at step 2");
                } else {
                    tracing::warn!(
                        "Loaded character has incomplete appearance ({:?}), staying on step 1",
                        validation::missing_appearance_fields(&session.appearance)
                    );
                }
            }
            Ok(None) => {
                tracing::info!("No saved character, starting fresh");
            }
            Err(GatewayError::Rejected { message }) => {
                tracing::warn!("Character load rejected: {:?}", message);
                self.view.show_error(messages::LOAD_FAILED);
            }
            Err(e) => {
                tracing::error!("Character load failed: {}", e);
                self.view.show_error(messages::CONNECTION_ERROR);
            }
        }
        self.refresh(&session);
    }

    /// Click on a selectable token. Returns whether the token is selected afterwards.
    pub async fn on_selection(
        &self,
        target: SelectionTarget,
        label: &str,
    ) -> Result<bool, WizardError> {
        let mut session = self.session.lock().await;
        Self::ensure_open(&session)?;

        let selected = match target {
            SelectionTarget::Appearance(field) => {
                if session.step != WizardStep::Appearance {
                    return Err(WizardError::InactiveField(field.key()));
                }
                session.appearance.set(field, label)?;
                true
            }
            SelectionTarget::Personality(catalog) => {
                if session.step != WizardStep::Personality {
                    return Err(WizardError::InactiveField(catalog.key()));
                }
                session.personality.select(catalog, label)?
            }
        };
        tracing::debug!("Selection {}={} -> {}", target.key(), label, selected);

        self.view.clear_error();
        self.refresh(&session);
        Ok(selected)
    }

    /// Input in the name or age field of step 2.
    pub async fn on_text_changed(&self, field: TextField, value: &str) -> Result<(), WizardError> {
        let mut session = self.session.lock().await;
        Self::ensure_open(&session)?;

        let key = match field {
            TextField::Name => "character_name",
            TextField::Age => "character_age",
        };
        if session.step != WizardStep::Personality {
            return Err(WizardError::InactiveField(key));
        }
        match field {
            TextField::Name => session.personality.set_name(value),
            TextField::Age => session.personality.set_age_text(value),
        }

        self.refresh(&session);
        Ok(())
    }

    /// Main button press. At most one invocation runs at a time; overlapping
    /// presses return `ActionOutcome::Busy` without side effects.
    pub async fn on_primary_action(&self) -> ActionOutcome {
        if self.busy.swap(true, Ordering::AcqRel) {
            tracing::debug!("Primary action ignored, previous one still running");
            return ActionOutcome::Busy;
        }
        let _guard = BusyGuard(&self.busy);
        self.run_primary_action().await
    }

    async fn run_primary_action(&self) -> ActionOutcome {
        let mut session = self.session.lock().await;
        if session.closed {
            return ActionOutcome::Closed;
        }

        match session.step {
            WizardStep::Appearance => {
                if !validation::appearance_valid(&session.appearance) {
                    return ActionOutcome::Incomplete;
                }
                session.confirm_appearance();
                self.host.set_main_button_text(messages::BUTTON_SAVE);
                self.begin_handoff();
                self.refresh(&session);
                tracing::info!("Appearance confirmed, moving to step 2");
                ActionOutcome::Advanced
            }
            WizardStep::Personality => {
                if !session.ready_to_save() {
                    tracing::debug!(
                        "Save blocked, missing appearance {:?} personality {:?}",
                        validation::missing_appearance_fields(&session.appearance),
                        validation::missing_personality_fields(&session.personality)
                    );
                    self.view.show_error(messages::FILL_ALL_FIELDS);
                    return ActionOutcome::Rejected;
                }
                self.view.clear_error();

                if session.appearance.portrait_seed.is_none() {
                    session.appearance.portrait_seed =
                        Some(rand::random_range(0..PORTRAIT_SEED_LIMIT));
                }
                let record = session.record();
                // Events may still arrive while the request is in flight.
                drop(session);

                self.save(record).await
            }
        }
    }

    async fn save(&self, record: CharacterRecord) -> ActionOutcome {
        let init_data = self.host.init_data();
        tracing::info!(
            "Saving character '{}' (seed {:?})",
            record.personality.character_name,
            record.appearance.portrait_seed
        );
        let result = self.gateway.save(&init_data, &record).await;

        let mut session = self.session.lock().await;
        match result {
            Ok(()) => {
                session.closed = true;
                tracing::info!("Character saved, closing session");
                self.host.close();
                ActionOutcome::Saved
            }
            Err(e) => {
                // A retry must draw a fresh seed.
                session.appearance.portrait_seed = None;
                let message = match e {
                    GatewayError::Rejected {
                        message: Some(message),
                    } if !message.is_empty() => message,
                    GatewayError::Rejected { .. } => messages::UNKNOWN_ERROR.to_string(),
                    GatewayError::Transport(ref cause) => {
                        tracing::error!("Save transport failure: {}", cause);
                        messages::CONNECTION_ERROR.to_string()
                    }
                };
                tracing::warn!("Character save failed: {}", message);
                self.view.show_error(&message);
                self.refresh(&session);
                ActionOutcome::SaveFailed(message)
            }
        }
    }

    /// Hides step 1 now, reveals step 2 after the transition delay and focuses
    /// the name field after the focus delay.
    fn begin_handoff(&self) {
        self.view.deactivate_step(WizardStep::Appearance);

        let view = self.view.clone();
        let transition = self.config.transition_delay();
        let focus = self.config.focus_delay();
        tokio::spawn(async move {
            tokio::time::sleep(transition).await;
            view.activate_step(WizardStep::Personality);
            tokio::time::sleep(focus).await;
            view.focus_name_field();
        });
    }

    /// Main button visible iff the active step validates; preview re-rendered.
    fn refresh(&self, session: &WizardSession) {
        self.host.set_main_button_visible(!session.closed && session.step_valid());
        self.view.render_preview(&render_preview(
            session.confirmed_appearance.as_ref(),
            &session.personality,
        ));
    }

    fn ensure_open(session: &WizardSession) -> Result<(), WizardError> {
        if session.closed {
            Err(WizardError::Closed)
        } else {
            Ok(())
        }
    }

    /// Copy of the current session, for display and inspection.
    pub async fn snapshot(&self) -> WizardSession {
        self.session.lock().await.clone()
    }
}
