//! Activity-level adjustment
//!
//! Scales a resting estimate into total daily energy expenditure and derives
//! the protein requirement, both keyed by the activity level. Total over the
//! closed enum; there is no out-of-range branch here.

use crate::models::{ActivityLevel, DailyRequirement, EnergyEstimate};

use super::bmr::Equation;

/// TDEE multiplier for an activity level
pub fn tdee_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtremelyActive => 1.9,
    }
}

/// Protein factor in grams per kilogram of body weight.
///
/// The table pairs with the equation: the Mifflin-St Jeor revision caps the
/// top factor at 2.0 g/kg, the Harris-Benedict table keeps 2.5 g/kg.
pub fn protein_factor(level: ActivityLevel, equation: Equation) -> f64 {
    match (level, equation) {
        (ActivityLevel::Sedentary, _) => 0.8,
        (ActivityLevel::LightlyActive, _) => 1.1,
        (ActivityLevel::ModeratelyActive, _) => 1.4,
        (ActivityLevel::VeryActive, _) => 1.9,
        (ActivityLevel::ExtremelyActive, Equation::HarrisBenedict) => 2.5,
        (ActivityLevel::ExtremelyActive, Equation::MifflinStJeor) => 2.0,
    }
}

/// Apply the activity adjustment:
/// TDEE = BMR × multiplier, protein = weight × factor.
pub fn daily_requirement(
    estimate: &EnergyEstimate,
    weight_kg: u32,
    level: ActivityLevel,
    equation: Equation,
) -> DailyRequirement {
    DailyRequirement {
        tdee_kcal_per_day: estimate.bmr_kcal_per_day * tdee_multiplier(level),
        protein_g_per_day: f64::from(weight_kg) * protein_factor(level, equation),
    }
}
