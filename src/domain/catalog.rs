//! # Field Registry
//!
//! Static label sets for every selectable field of the wizard.
//! Appearance fields are single-select categories; personality adds three catalogs
//! (traits, interests, occupations). All membership checks go through this module.

pub const GENDERS: &[&str] = &["Female", "Male"];
pub const ETHNICITIES: &[&str] = &[
    "Asian",
    "Black",
    "Caucasian",
    "Latina",
    "Middle Eastern",
    "Mixed",
];
pub const AGE_GROUPS: &[&str] = &["18-24", "25-34", "35-44", "45+"];
pub const EYE_COLORS: &[&str] = &["Brown", "Blue", "Green", "Hazel", "Gray"];
pub const HAIR_STYLES: &[&str] = &["Short", "Long", "Curly", "Wavy", "Braided", "Ponytail"];
pub const HAIR_COLORS: &[&str] = &["Black", "Brown", "Blonde", "Red", "Auburn", "Gray"];
pub const BODY_SHAPES: &[&str] = &["Slim", "Athletic", "Average", "Curvy"];
pub const STYLE_VIBES: &[&str] = &["Casual", "Elegant", "Sporty", "Street", "Bohemian"];

pub const TRAITS: &[&str] = &[
    "Kind", "Shy", "Confident", "Playful", "Serious", "Romantic", "Sarcastic", "Caring", "Bold",
    "Energetic",
];
pub const INTERESTS: &[&str] = &[
    "Music", "Sports", "Art", "Reading", "Travel", "Cooking", "Gaming", "Dancing", "Fashion",
    "Outdoors",
];
pub const OCCUPATIONS: &[&str] = &[
    "Student",
    "Engineer",
    "Designer",
    "Artist",
    "Writer",
    "Model",
    "Nurse",
    "Teacher",
    "Entrepreneur",
    "Other",
];

/// The eight single-select appearance categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppearanceField {
    Gender,
    Ethnicity,
    AgeGroup,
    EyeColor,
    HairStyle,
    HairColor,
    BodyShape,
    StyleVibe,
}

impl AppearanceField {
    pub const ALL: [AppearanceField; 8] = [
        Self::Gender,
        Self::Ethnicity,
        Self::AgeGroup,
        Self::EyeColor,
        Self::HairStyle,
        Self::HairColor,
        Self::BodyShape,
        Self::StyleVibe,
    ];

    /// Wire name of the field (matches the backend JSON keys).
    pub fn key(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Ethnicity => "ethnicity",
            Self::AgeGroup => "age_group",
            Self::EyeColor => "eye_color",
            Self::HairStyle => "hair_style",
            Self::HairColor => "hair_color",
            Self::BodyShape => "body_shape",
            Self::StyleVibe => "style_vibe",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Human-readable title for section headers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Ethnicity => "Ethnicity",
            Self::AgeGroup => "Age group",
            Self::EyeColor => "Eye color",
            Self::HairStyle => "Hair style",
            Self::HairColor => "Hair color",
            Self::BodyShape => "Body shape",
            Self::StyleVibe => "Style",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Gender => GENDERS,
            Self::Ethnicity => ETHNICITIES,
            Self::AgeGroup => AGE_GROUPS,
            Self::EyeColor => EYE_COLORS,
            Self::HairStyle => HAIR_STYLES,
            Self::HairColor => HAIR_COLORS,
            Self::BodyShape => BODY_SHAPES,
            Self::StyleVibe => STYLE_VIBES,
        }
    }
}

/// Personality catalogs. Traits and interests are multi-select, occupation is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Traits,
    Interests,
    Occupations,
}

impl Catalog {
    pub const ALL: [Catalog; 3] = [Self::Traits, Self::Interests, Self::Occupations];

    pub fn key(self) -> &'static str {
        match self {
            Self::Traits => "traits",
            Self::Interests => "interests",
            Self::Occupations => "occupation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "traits" | "trait" | "personality_traits" => Some(Self::Traits),
            "interests" | "interest" => Some(Self::Interests),
            "occupation" | "occupations" => Some(Self::Occupations),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Traits => "Personality traits",
            Self::Interests => "Interests",
            Self::Occupations => "Occupation",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Traits => TRAITS,
            Self::Interests => INTERESTS,
            Self::Occupations => OCCUPATIONS,
        }
    }

    pub fn is_multi(self) -> bool {
        !matches!(self, Self::Occupations)
    }
}

/// Identifies the group a clickable token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionTarget {
    Appearance(AppearanceField),
    Personality(Catalog),
}

impl SelectionTarget {
    /// Resolves a user-facing key such as `hair_color` or `traits`.
    pub fn from_key(key: &str) -> Option<Self> {
        AppearanceField::from_key(key)
            .map(Self::Appearance)
            .or_else(|| Catalog::from_key(key).map(Self::Personality))
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Appearance(field) => field.key(),
            Self::Personality(catalog) => catalog.key(),
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Appearance(field) => field.options(),
            Self::Personality(catalog) => catalog.options(),
        }
    }

    pub fn canonical(self, label: &str) -> Option<&'static str> {
        canonical(self.options(), label)
    }
}

/// Looks `label` up in `options`, ignoring surrounding whitespace and ASCII case.
/// Returns the registry spelling.
pub fn canonical(options: &'static [&'static str], label: &str) -> Option<&'static str> {
    let label = label.trim();
    options
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personality_catalogs_have_ten_entries() {
        for catalog in Catalog::ALL {
            assert_eq!(catalog.options().len(), 10, "{:?}", catalog);
        }
        assert!(OCCUPATIONS.contains(&"Other"));
    }

    #[test]
    fn test_appearance_keys_resolve() {
        for field in AppearanceField::ALL {
            assert_eq!(AppearanceField::from_key(field.key()), Some(field));
            assert!(!field.options().is_empty());
        }
        assert_eq!(AppearanceField::from_key("Hair-Color"), Some(AppearanceField::HairColor));
        assert_eq!(AppearanceField::from_key("height"), None);
    }

    #[test]
    fn test_selection_target_from_key() {
        assert_eq!(
            SelectionTarget::from_key("eye_color"),
            Some(SelectionTarget::Appearance(AppearanceField::EyeColor))
        );
        assert_eq!(
            SelectionTarget::from_key("traits"),
            Some(SelectionTarget::Personality(Catalog::Traits))
        );
        assert_eq!(SelectionTarget::from_key("unknown"), None);
    }

    #[test]
    fn test_canonical_is_case_insensitive() {
        assert_eq!(canonical(HAIR_COLORS, "  blonde "), Some("Blonde"));
        assert_eq!(canonical(ETHNICITIES, "middle eastern"), Some("Middle Eastern"));
        assert_eq!(canonical(TRAITS, "Grumpy"), None);
        assert_eq!(canonical(TRAITS, ""), None);
    }

    #[test]
    fn test_only_occupation_is_exclusive() {
        assert!(Catalog::Traits.is_multi());
        assert!(Catalog::Interests.is_multi());
        assert!(!Catalog::Occupations.is_multi());
    }
}
