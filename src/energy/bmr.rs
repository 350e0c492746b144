//! Basal metabolic rate estimation
//!
//! Two published regression equations over weight, sex, age and height. The
//! equation is fixed per build; the estimator itself is a pure function and
//! leaves display rounding to the reporter.

use serde::{Deserialize, Serialize};

use crate::models::{EnergyEstimate, Measurement, Sex};

/// BMR regression equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equation {
    HarrisBenedict,
    MifflinStJeor,
}

impl Equation {
    /// Equation compiled into the shipped binaries
    #[cfg(feature = "harris-benedict")]
    pub const DEFAULT: Equation = Equation::HarrisBenedict;
    /// Equation compiled into the shipped binaries
    #[cfg(not(feature = "harris-benedict"))]
    pub const DEFAULT: Equation = Equation::MifflinStJeor;

    pub fn as_str(&self) -> &'static str {
        match self {
            Equation::HarrisBenedict => "harris_benedict",
            Equation::MifflinStJeor => "mifflin_st_jeor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "harris_benedict" | "hb" => Some(Equation::HarrisBenedict),
            "mifflin_st_jeor" | "mifflin" | "msj" => Some(Equation::MifflinStJeor),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Equation::HarrisBenedict => "Harris-Benedict (1918)",
            Equation::MifflinStJeor => "Mifflin-St Jeor (1990)",
        }
    }
}

// ============================================================================
// Harris-Benedict (1918) Coefficients
// ============================================================================

/// Male base term
const HB_MALE_BASE: f64 = 88.362;
/// Male weight coefficient (per kg)
const HB_MALE_WEIGHT_COEF: f64 = 13.397;
/// Male height coefficient (per cm)
const HB_MALE_HEIGHT_COEF: f64 = 4.799;
/// Male age coefficient (per year, subtracted)
const HB_MALE_AGE_COEF: f64 = 5.677;
/// Female base term
const HB_FEMALE_BASE: f64 = 447.593;
/// Female weight coefficient (per kg)
const HB_FEMALE_WEIGHT_COEF: f64 = 9.247;
/// Female height coefficient (per cm)
const HB_FEMALE_HEIGHT_COEF: f64 = 3.098;
/// Female age coefficient (per year, subtracted)
const HB_FEMALE_AGE_COEF: f64 = 4.330;

// ============================================================================
// Mifflin-St Jeor (1990) Coefficients
// ============================================================================

/// Weight coefficient (per kg, both sexes)
const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Height coefficient (per cm, both sexes)
const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Age coefficient (per year, subtracted, both sexes)
const MSJ_AGE_COEF: f64 = 5.0;
/// Male constant term
const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Female constant term
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Estimate basal metabolic rate in calories per day.
///
/// Pure function of the measurement's weight, sex, age and height; the
/// activity level plays no part here. All arithmetic is f64 and the raw
/// regression value is returned unrounded.
///
/// References: Harris, J. A., & Benedict, F. G. (1918);
/// Mifflin, M. D., et al. (1990).
pub fn basal_metabolic_rate(measurement: &Measurement, equation: Equation) -> EnergyEstimate {
    let weight = f64::from(measurement.weight_kg);
    let height = f64::from(measurement.height_cm);
    let age = f64::from(measurement.age_years);

    let bmr = match equation {
        Equation::HarrisBenedict => harris_benedict(weight, measurement.sex, age, height),
        Equation::MifflinStJeor => mifflin_st_jeor(weight, measurement.sex, age, height),
    };

    EnergyEstimate { bmr_kcal_per_day: bmr }
}

/// Harris-Benedict (1918) formula:
/// male:   BMR = 88.362 + 13.397 × weight + 4.799 × height - 5.677 × age
/// female: BMR = 447.593 + 9.247 × weight + 3.098 × height - 4.330 × age
fn harris_benedict(weight_kg: f64, sex: Sex, age_years: f64, height_cm: f64) -> f64 {
    match sex {
        Sex::Male => {
            HB_MALE_BASE + HB_MALE_WEIGHT_COEF * weight_kg + HB_MALE_HEIGHT_COEF * height_cm
                - HB_MALE_AGE_COEF * age_years
        }
        Sex::Female => {
            HB_FEMALE_BASE + HB_FEMALE_WEIGHT_COEF * weight_kg + HB_FEMALE_HEIGHT_COEF * height_cm
                - HB_FEMALE_AGE_COEF * age_years
        }
    }
}

/// Mifflin-St Jeor (1990) formula:
/// male:   BMR = 10 × weight + 6.25 × height - 5 × age + 5
/// female: BMR = 10 × weight + 6.25 × height - 5 × age - 161
fn mifflin_st_jeor(weight_kg: f64, sex: Sex, age_years: f64, height_cm: f64) -> f64 {
    let base = MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * age_years;
    match sex {
        Sex::Male => base + MSJ_MALE_CONSTANT,
        Sex::Female => base + MSJ_FEMALE_CONSTANT,
    }
}
