//! # Wizard Strings
//!
//! Renders the wizard session for the terminal: the active step with its
//! selections, the option list of a field, and the field index.

use crate::application::state::WizardSession;
use crate::domain::catalog::{AppearanceField, Catalog, SelectionTarget};
use crate::domain::types::WizardStep;
use crate::domain::validation;
use crate::strings::messages;

const UNSET: &str = "_not set_";

fn target_title(target: SelectionTarget) -> &'static str {
    match target {
        SelectionTarget::Appearance(field) => field.title(),
        SelectionTarget::Personality(catalog) => catalog.title(),
    }
}

pub fn format_wizard_step(session: &WizardSession) -> String {
    let mut output = messages::step_header(session.step.number(), session.step.title());
    output.push('\n');

    match session.step {
        WizardStep::Appearance => {
            for field in AppearanceField::ALL {
                output.push_str(&format!(
                    "* {} (`{}`): {}\n",
                    field.title(),
                    field.key(),
                    session.appearance.get(field).unwrap_or(UNSET)
                ));
            }
        }
        WizardStep::Personality => {
            let personality = &session.personality;
            let name = if personality.character_name.is_empty() {
                UNSET.to_string()
            } else {
                personality.character_name.clone()
            };
            let age = personality
                .character_age
                .map(|age| age.to_string())
                .unwrap_or_else(|| UNSET.to_string());
            output.push_str(&format!("* Name: {}\n", name));
            output.push_str(&format!(
                "* Age ({}-{}): {}\n",
                validation::MIN_CHARACTER_AGE,
                validation::MAX_CHARACTER_AGE,
                age
            ));
            for catalog in Catalog::ALL {
                let selected = personality.selected(catalog);
                let value = if selected.is_empty() {
                    UNSET.to_string()
                } else {
                    selected.join(", ")
                };
                output.push_str(&format!("* {} (`{}`): {}\n", catalog.title(), catalog.key(), value));
            }
        }
    }

    let missing = match session.step {
        WizardStep::Appearance => validation::missing_appearance_fields(&session.appearance),
        WizardStep::Personality => validation::missing_personality_fields(&session.personality),
    };
    if missing.is_empty() {
        output.push_str("\nAll set. Type `.ok` to continue.");
    } else {
        output.push_str(&format!("\nStill needed: {}", missing.join(", ")));
    }
    output
}

/// Option list of one field, selected entries ticked.
pub fn format_options(session: &WizardSession, target: SelectionTarget) -> String {
    let mode = match target {
        SelectionTarget::Personality(catalog) if catalog.is_multi() => "pick any",
        _ => "pick one",
    };
    let mut output = format!("**{}** (`{}`, {})\n", target_title(target), target.key(), mode);
    for label in target.options() {
        let mark = if session.is_selected(target, label) { "✅" } else { "▫️" };
        output.push_str(&format!("{} {}\n", mark, label));
    }
    output
}

pub fn format_field_index() -> String {
    let mut output = String::from("**Step 1 fields** (`.pick <field> <option>`)\n");
    for field in AppearanceField::ALL {
        output.push_str(&format!("* `{}`: {}\n", field.key(), field.title()));
    }
    output.push_str("\n**Step 2 fields**\n");
    for catalog in Catalog::ALL {
        let command = if catalog.is_multi() { ".toggle" } else { ".occupation" };
        output.push_str(&format!("* `{}`: {} ({})\n", catalog.key(), catalog.title(), command));
    }
    output.push_str("\nUse `.options <field>` to list the choices.");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_one_lists_missing_fields() {
        let mut session = WizardSession::default();
        session.appearance.set(AppearanceField::Gender, "Female").unwrap();

        let text = format_wizard_step(&session);
        assert!(text.starts_with("### Step 1: Appearance"));
        assert!(text.contains("* Gender (`gender`): Female"));
        assert!(text.contains("Still needed: ethnicity"));
        assert!(!text.contains("Still needed: gender"));
    }

    #[test]
    fn test_options_mark_selection() {
        let mut session = WizardSession::default();
        session.personality.select(Catalog::Traits, "Kind").unwrap();

        let text = format_options(&session, SelectionTarget::Personality(Catalog::Traits));
        assert!(text.contains("pick any"));
        assert!(text.contains("✅ Kind"));
        assert!(text.contains("▫️ Bold"));
    }

    #[test]
    fn test_field_index_covers_all_fields() {
        let text = format_field_index();
        for field in AppearanceField::ALL {
            assert!(text.contains(field.key()));
        }
        assert!(text.contains("`occupation`"));
    }
}
