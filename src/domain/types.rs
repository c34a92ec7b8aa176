//! # Domain Types
//!
//! Small shared enums used across the wizard layers.

/// The two panels of the wizard. There is no way back from `Personality`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Appearance,
    Personality,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            Self::Appearance => 1,
            Self::Personality => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Appearance => "Appearance",
            Self::Personality => "Personality",
        }
    }
}

/// Free-text inputs of step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Age,
}
