//! Measurement model
//!
//! The per-session input record: body weight, sex category, age, height and
//! self-reported activity level, plus the closed bounds each field must
//! satisfy before a calculation runs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Field Bounds (inclusive)
// ============================================================================

/// Minimum accepted body weight in kilograms
pub const WEIGHT_KG_MIN: u32 = 1;
/// Maximum accepted body weight in kilograms
pub const WEIGHT_KG_MAX: u32 = 1250;
/// Minimum accepted age in years
pub const AGE_YEARS_MIN: u32 = 1;
/// Maximum accepted age in years
pub const AGE_YEARS_MAX: u32 = 150;
/// Minimum accepted height in centimeters
pub const HEIGHT_CM_MIN: u32 = 1;
/// Maximum accepted height in centimeters
pub const HEIGHT_CM_MAX: u32 = 315;

/// Sex category enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse an exact token; only the lowercase forms are recognized
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Resolve a free-form token the way the legacy flow does: anything that
    /// is not "male" (case-insensitive) counts as female.
    pub fn classify_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("male") {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Activity level enum, ordinal 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// All levels in menu order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    /// Ordinal used in prompts and menus (1-5)
    pub fn as_index(&self) -> u8 {
        match self {
            ActivityLevel::Sedentary => 1,
            ActivityLevel::LightlyActive => 2,
            ActivityLevel::ModeratelyActive => 3,
            ActivityLevel::VeryActive => 4,
            ActivityLevel::ExtremelyActive => 5,
        }
    }

    /// Convert a raw menu selection; values outside 1-5 have no level
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(ActivityLevel::Sedentary),
            2 => Some(ActivityLevel::LightlyActive),
            3 => Some(ActivityLevel::ModeratelyActive),
            4 => Some(ActivityLevel::VeryActive),
            5 => Some(ActivityLevel::ExtremelyActive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(' ', "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Some(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Some(ActivityLevel::ModeratelyActive),
            "very_active" => Some(ActivityLevel::VeryActive),
            "extremely_active" | "extreme" => Some(ActivityLevel::ExtremelyActive),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtremelyActive => "Extremely active",
        }
    }

    /// Short description shown in the activity menu
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little to no exercise",
            ActivityLevel::LightlyActive => "exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "exercise 3-5 days/week",
            ActivityLevel::VeryActive => "exercise 6-7 days/week",
            ActivityLevel::ExtremelyActive => "physical job + exercise",
        }
    }
}

/// A set of per-session body measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub weight_kg: u32,
    pub sex: Sex,
    pub age_years: u32,
    pub height_cm: u32,
    pub activity_level: ActivityLevel,
}

impl Measurement {
    /// Whether every field sits inside its closed bound.
    ///
    /// The interactive collector only produces in-bound measurements; the
    /// legacy collector can produce out-of-bound ones, which this flags.
    pub fn is_within_bounds(&self) -> bool {
        (WEIGHT_KG_MIN..=WEIGHT_KG_MAX).contains(&self.weight_kg)
            && (AGE_YEARS_MIN..=AGE_YEARS_MAX).contains(&self.age_years)
            && (HEIGHT_CM_MIN..=HEIGHT_CM_MAX).contains(&self.height_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_tokens() {
        assert_eq!(Sex::Male.as_str(), "male");
        assert_eq!(Sex::Female.as_str(), "female");
        assert_eq!(Sex::from_str("male"), Some(Sex::Male));
        assert_eq!(Sex::from_str("female"), Some(Sex::Female));
        assert_eq!(Sex::Male.display_name(), "Male");
        assert_eq!(Sex::Female.display_name(), "Female");
    }

    #[test]
    fn test_sex_from_str_is_case_sensitive() {
        assert_eq!(Sex::from_str("Male"), None);
        assert_eq!(Sex::from_str("FEMALE"), None);
        assert_eq!(Sex::from_str("m"), None);
        assert_eq!(Sex::from_str(""), None);
    }

    #[test]
    fn test_sex_lenient_classification() {
        assert_eq!(Sex::classify_lenient("male"), Sex::Male);
        assert_eq!(Sex::classify_lenient("MALE"), Sex::Male);
        assert_eq!(Sex::classify_lenient("Male"), Sex::Male);
        assert_eq!(Sex::classify_lenient("female"), Sex::Female);
        assert_eq!(Sex::classify_lenient("other"), Sex::Female);
        assert_eq!(Sex::classify_lenient(""), Sex::Female);
    }

    #[test]
    fn test_activity_level_from_index() {
        assert_eq!(ActivityLevel::from_index(1), Some(ActivityLevel::Sedentary));
        assert_eq!(ActivityLevel::from_index(3), Some(ActivityLevel::ModeratelyActive));
        assert_eq!(ActivityLevel::from_index(5), Some(ActivityLevel::ExtremelyActive));
        assert_eq!(ActivityLevel::from_index(0), None);
        assert_eq!(ActivityLevel::from_index(6), None);
        assert_eq!(ActivityLevel::from_index(-1), None);
    }

    #[test]
    fn test_activity_level_all_in_menu_order() {
        for (i, level) in ActivityLevel::ALL.iter().enumerate() {
            assert_eq!(level.as_index() as usize, i + 1);
            assert_eq!(ActivityLevel::from_index(level.as_index() as i64), Some(*level));
        }
    }

    #[test]
    fn test_activity_level_strings() {
        assert_eq!(ActivityLevel::LightlyActive.as_str(), "lightly_active");
        assert_eq!(ActivityLevel::from_str("lightly active"), Some(ActivityLevel::LightlyActive));
        assert_eq!(ActivityLevel::from_str("SEDENTARY"), Some(ActivityLevel::Sedentary));
        assert_eq!(ActivityLevel::from_str("couch"), None);
        assert_eq!(ActivityLevel::VeryActive.display_name(), "Very active");
        assert_eq!(ActivityLevel::Sedentary.description(), "little to no exercise");
    }

    #[test]
    fn test_measurement_bounds() {
        let ok = Measurement {
            weight_kg: 70,
            sex: Sex::Male,
            age_years: 30,
            height_cm: 175,
            activity_level: ActivityLevel::ModeratelyActive,
        };
        assert!(ok.is_within_bounds());

        let zero_weight = Measurement { weight_kg: 0, ..ok };
        assert!(!zero_weight.is_within_bounds());

        let heavy = Measurement { weight_kg: 1251, ..ok };
        assert!(!heavy.is_within_bounds());

        let old = Measurement { age_years: 151, ..ok };
        assert!(!old.is_within_bounds());

        let tall = Measurement { height_cm: 316, ..ok };
        assert!(!tall.is_within_bounds());

        let edge = Measurement {
            weight_kg: 1250,
            sex: Sex::Female,
            age_years: 150,
            height_cm: 315,
            activity_level: ActivityLevel::ExtremelyActive,
        };
        assert!(edge.is_within_bounds());
    }

    #[test]
    fn test_measurement_json_shape() {
        let measurement = Measurement {
            weight_kg: 70,
            sex: Sex::Male,
            age_years: 30,
            height_cm: 175,
            activity_level: ActivityLevel::ModeratelyActive,
        };

        let value = serde_json::to_value(measurement).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "weight_kg": 70,
                "sex": "male",
                "age_years": 30,
                "height_cm": 175,
                "activity_level": "moderately_active",
            })
        );

        let back: Measurement = serde_json::from_value(value).unwrap();
        assert_eq!(back, measurement);
    }
}
