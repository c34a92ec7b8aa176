//! # Preview
//!
//! Renders the two-line character summary shown under the form.

use crate::domain::character::{Appearance, Personality};
use crate::strings::messages::PREVIEW_PLACEHOLDER;

/// `confirmed` is the appearance snapshot taken when step 1 was confirmed.
/// Without it only the placeholder prompt is shown.
pub fn render_preview(confirmed: Option<&Appearance>, personality: &Personality) -> String {
    let Some(a) = confirmed else {
        return PREVIEW_PLACEHOLDER.to_string();
    };

    let age = personality
        .character_age
        .filter(|age| *age > 0)
        .map(|age| age.to_string())
        .unwrap_or_else(|| "??".to_string());
    let line1 = format!(
        "{}yo {} {} {}, {} style",
        age,
        a.ethnicity.as_deref().unwrap_or("?"),
        a.body_shape.as_deref().unwrap_or("?"),
        a.gender.as_deref().unwrap_or("?"),
        a.style_vibe.as_deref().unwrap_or("?"),
    );

    let name = if personality.character_name.is_empty() {
        "Unnamed"
    } else {
        personality.character_name.as_str()
    };
    let traits = if personality.personality_traits.is_empty() {
        "None".to_string()
    } else {
        personality.personality_traits.join(", ")
    };
    let line2 = format!(
        "Name: {} • Traits: {} • Occupation: {}",
        name,
        traits,
        personality.occupation.as_deref().unwrap_or("?"),
    );

    format!("{line1}\n{line2}")
}
