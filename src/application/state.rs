//! # Wizard Session
//!
//! In-memory state of one wizard run: the active step, the two records being
//! edited and the appearance snapshot confirmed when leaving step 1.
//! Nothing here is persisted locally.

use crate::domain::catalog::SelectionTarget;
use crate::domain::character::{Appearance, CharacterRecord, Personality};
use crate::domain::types::WizardStep;
use crate::domain::validation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardSession {
    pub step: WizardStep,
    pub appearance: Appearance,
    pub personality: Personality,
    /// Appearance as it was when step 1 was confirmed; drives the preview
    pub confirmed_appearance: Option<Appearance>,
    /// Set once the character was saved and the host was asked to close
    pub closed: bool,
}

impl WizardSession {
    /// Validator for the active step.
    pub fn step_valid(&self) -> bool {
        match self.step {
            WizardStep::Appearance => validation::appearance_valid(&self.appearance),
            WizardStep::Personality => validation::personality_valid(&self.personality),
        }
    }

    pub fn ready_to_save(&self) -> bool {
        validation::appearance_valid(&self.appearance)
            && validation::personality_valid(&self.personality)
    }

    pub fn is_selected(&self, target: SelectionTarget, label: &str) -> bool {
        match target {
            SelectionTarget::Appearance(field) => self.appearance.is_selected(field, label),
            SelectionTarget::Personality(catalog) => self.personality.is_selected(catalog, label),
        }
    }

    /// Confirms the current appearance and moves to step 2.
    pub fn confirm_appearance(&mut self) {
        self.confirmed_appearance = Some(self.appearance.clone());
        self.step = WizardStep::Personality;
    }

    pub fn record(&self) -> CharacterRecord {
        CharacterRecord {
            appearance: self.appearance.clone(),
            personality: self.personality.clone(),
        }
    }
}
