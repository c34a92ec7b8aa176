//! # Character Records
//!
//! The two mutable records edited by the wizard (`Appearance` and `Personality`)
//! and the combined `CharacterRecord` exchanged with the backend.
//! Every setter checks labels against the field registry.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::catalog::{self, AppearanceField, Catalog, SelectionTarget};
use crate::domain::error::WizardError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub age_group: Option<String>,
    pub eye_color: Option<String>,
    pub hair_style: Option<String>,
    pub hair_color: Option<String>,
    pub body_shape: Option<String>,
    pub style_vibe: Option<String>,
    #[serde(deserialize_with = "lenient_u32")]
    pub portrait_seed: Option<u32>,
}

impl Appearance {
    pub fn get(&self, field: AppearanceField) -> Option<&str> {
        match field {
            AppearanceField::Gender => self.gender.as_deref(),
            AppearanceField::Ethnicity => self.ethnicity.as_deref(),
            AppearanceField::AgeGroup => self.age_group.as_deref(),
            AppearanceField::EyeColor => self.eye_color.as_deref(),
            AppearanceField::HairStyle => self.hair_style.as_deref(),
            AppearanceField::HairColor => self.hair_color.as_deref(),
            AppearanceField::BodyShape => self.body_shape.as_deref(),
            AppearanceField::StyleVibe => self.style_vibe.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: AppearanceField) -> &mut Option<String> {
        match field {
            AppearanceField::Gender => &mut self.gender,
            AppearanceField::Ethnicity => &mut self.ethnicity,
            AppearanceField::AgeGroup => &mut self.age_group,
            AppearanceField::EyeColor => &mut self.eye_color,
            AppearanceField::HairStyle => &mut self.hair_style,
            AppearanceField::HairColor => &mut self.hair_color,
            AppearanceField::BodyShape => &mut self.body_shape,
            AppearanceField::StyleVibe => &mut self.style_vibe,
        }
    }

    /// Sets `field` exclusively, replacing any previous value.
    pub fn set(&mut self, field: AppearanceField, label: &str) -> Result<&'static str, WizardError> {
        let canonical =
            catalog::canonical(field.options(), label).ok_or_else(|| WizardError::UnknownLabel {
                target: SelectionTarget::Appearance(field),
                label: label.to_string(),
            })?;
        *self.slot_mut(field) = Some(canonical.to_string());
        Ok(canonical)
    }

    pub fn is_selected(&self, field: AppearanceField, label: &str) -> bool {
        self.get(field)
            .is_some_and(|current| current.eq_ignore_ascii_case(label.trim()))
    }

    /// Normalizes a record received from the backend: labels are mapped onto the
    /// registry spelling, unknown or empty labels and a zero seed become unset.
    pub fn sanitized(self) -> Self {
        let mut clean = Appearance {
            portrait_seed: self.portrait_seed.filter(|seed| *seed > 0),
            ..Default::default()
        };
        for field in AppearanceField::ALL {
            let Some(raw) = self.get(field).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            if clean.set(field, raw).is_err() {
                tracing::warn!("Dropping unknown {} '{}' from loaded character", field.key(), raw);
            }
        }
        clean
    }
}

/// Backends send `null` for untouched lists and names.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Any JSON shape a numeric field may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Negative, fractional, oversized or non-numeric values read as unset
/// instead of failing the whole record.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Int(n)) => u32::try_from(n).ok(),
        Some(LooseNumber::Float(f)) if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => {
            Some(f as u32)
        }
        Some(LooseNumber::Text(text)) => text.trim().parse::<u32>().ok(),
        Some(LooseNumber::Float(_) | LooseNumber::Other(_)) | None => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    #[serde(deserialize_with = "null_as_default")]
    pub character_name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub character_age: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub personality_traits: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    pub occupation: Option<String>,
}

impl Personality {
    pub fn set_name(&mut self, raw: &str) {
        self.character_name = raw.trim().to_string();
    }

    /// Parses free-text age input from its leading digits (`"25.5"` and `"25abc"`
    /// read as 25). Input without leading digits unsets the age.
    pub fn set_age_text(&mut self, raw: &str) {
        let raw = raw.trim();
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        self.character_age = digits[..end].parse::<u32>().ok();
    }

    fn canonical(catalog: Catalog, label: &str) -> Result<&'static str, WizardError> {
        catalog::canonical(catalog.options(), label).ok_or_else(|| WizardError::UnknownLabel {
            target: SelectionTarget::Personality(catalog),
            label: label.to_string(),
        })
    }

    /// Applies a click on a catalog token. Multi-select catalogs toggle the label,
    /// the occupation catalog sets it exclusively.
    /// Returns whether the label is selected afterwards.
    pub fn select(&mut self, catalog: Catalog, label: &str) -> Result<bool, WizardError> {
        let canonical = Self::canonical(catalog, label)?;
        let list = match catalog {
            Catalog::Traits => &mut self.personality_traits,
            Catalog::Interests => &mut self.interests,
            Catalog::Occupations => {
                self.occupation = Some(canonical.to_string());
                return Ok(true);
            }
        };
        if let Some(pos) = list.iter().position(|l| l == canonical) {
            list.remove(pos);
            Ok(false)
        } else {
            list.push(canonical.to_string());
            Ok(true)
        }
    }

    pub fn set_occupation(&mut self, label: &str) -> Result<&'static str, WizardError> {
        let canonical = Self::canonical(Catalog::Occupations, label)?;
        self.occupation = Some(canonical.to_string());
        Ok(canonical)
    }

    pub fn selected(&self, catalog: Catalog) -> Vec<&str> {
        match catalog {
            Catalog::Traits => self.personality_traits.iter().map(String::as_str).collect(),
            Catalog::Interests => self.interests.iter().map(String::as_str).collect(),
            Catalog::Occupations => self.occupation.as_deref().into_iter().collect(),
        }
    }

    pub fn is_selected(&self, catalog: Catalog, label: &str) -> bool {
        self.selected(catalog)
            .iter()
            .any(|current| current.eq_ignore_ascii_case(label.trim()))
    }

    /// Normalizes a record received from the backend, dropping labels outside the
    /// catalogs and duplicate entries.
    pub fn sanitized(self) -> Self {
        let mut clean = Personality {
            character_name: self.character_name.trim().to_string(),
            character_age: self.character_age.filter(|age| *age > 0),
            ..Default::default()
        };
        for (catalog, labels) in [
            (Catalog::Traits, &self.personality_traits),
            (Catalog::Interests, &self.interests),
        ] {
            for raw in labels {
                if clean.is_selected(catalog, raw) {
                    continue;
                }
                if clean.select(catalog, raw).is_err() {
                    tracing::warn!("Dropping unknown {} '{}' from loaded character", catalog.key(), raw);
                }
            }
        }
        if let Some(raw) = self.occupation.as_deref().filter(|v| !v.trim().is_empty())
            && clean.set_occupation(raw).is_err()
        {
            tracing::warn!("Dropping unknown occupation '{}' from loaded character", raw);
        }
        clean
    }
}

/// The combined record submitted at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub appearance: Appearance,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personality: Personality,
}

impl CharacterRecord {
    pub fn sanitized(self) -> Self {
        Self {
            appearance: self.appearance.sanitized(),
            personality: self.personality.sanitized(),
        }
    }
}
