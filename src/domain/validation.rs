//! # Validation
//!
//! Pure completeness checks over the wizard records.
//! Cheap enough to re-run after every event.

use crate::domain::catalog::AppearanceField;
use crate::domain::character::{Appearance, Personality};

pub const MIN_CHARACTER_AGE: u32 = 18;
pub const MAX_CHARACTER_AGE: u32 = 80;

pub fn appearance_valid(appearance: &Appearance) -> bool {
    missing_appearance_fields(appearance).is_empty()
}

pub fn personality_valid(personality: &Personality) -> bool {
    missing_personality_fields(personality).is_empty()
}

pub fn missing_appearance_fields(appearance: &Appearance) -> Vec<&'static str> {
    AppearanceField::ALL
        .into_iter()
        .filter(|field| appearance.get(*field).is_none_or(|v| v.is_empty()))
        .map(AppearanceField::key)
        .collect()
}

pub fn missing_personality_fields(personality: &Personality) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if personality.character_name.is_empty() {
        missing.push("character_name");
    }
    if !personality
        .character_age
        .is_some_and(|age| (MIN_CHARACTER_AGE..=MAX_CHARACTER_AGE).contains(&age))
    {
        missing.push("character_age");
    }
    if personality.personality_traits.is_empty() {
        missing.push("personality_traits");
    }
    if personality.interests.is_empty() {
        missing.push("interests");
    }
    if personality.occupation.is_none() {
        missing.push("occupation");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn complete_personality() -> Personality {
        let mut personality = Personality::default();
        personality.set_name("Lena");
        personality.character_age = Some(25);
        personality.select(Catalog::Traits, "Kind").unwrap();
        personality.select(Catalog::Interests, "Travel").unwrap();
        personality.set_occupation("Teacher").unwrap();
        personality
    }

    #[test]
    fn test_appearance_valid_iff_all_fields_set() {
        // Every subset of the eight fields: valid only when nothing is left out.
        for mask in 0u16..(1 << 8) {
            let mut appearance = Appearance::default();
            for (bit, field) in AppearanceField::ALL.into_iter().enumerate() {
                if mask & (1 << bit) == 0 {
                    appearance.set(field, field.options()[0]).unwrap();
                }
            }
            assert_eq!(appearance_valid(&appearance), mask == 0, "mask {mask:08b}");
        }
    }

    #[test]
    fn test_empty_records_are_invalid() {
        assert!(!appearance_valid(&Appearance::default()));
        assert!(!personality_valid(&Personality::default()));
        assert_eq!(missing_appearance_fields(&Appearance::default()).len(), 8);
        assert_eq!(missing_personality_fields(&Personality::default()).len(), 5);
    }

    #[test]
    fn test_age_bounds() {
        let mut personality = complete_personality();
        for (age, expected) in [(17, false), (18, true), (45, true), (80, true), (81, false)] {
            personality.character_age = Some(age);
            assert_eq!(personality_valid(&personality), expected, "age {age}");
        }
        personality.character_age = None;
        assert!(!personality_valid(&personality));
    }

    #[test]
    fn test_personality_requires_each_field() {
        assert!(personality_valid(&complete_personality()));

        let mut p = complete_personality();
        p.set_name("   ");
        assert_eq!(missing_personality_fields(&p), vec!["character_name"]);

        let mut p = complete_personality();
        p.personality_traits.clear();
        assert_eq!(missing_personality_fields(&p), vec!["personality_traits"]);

        let mut p = complete_personality();
        p.interests.clear();
        assert!(!personality_valid(&p));

        let mut p = complete_personality();
        p.occupation = None;
        assert_eq!(missing_personality_fields(&p), vec!["occupation"]);
    }
}
