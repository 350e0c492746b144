//! Data models
//!
//! Value records for collected measurements and computed requirements.

mod measurement;
mod requirement;

pub use measurement::{
    ActivityLevel, Measurement, Sex, AGE_YEARS_MAX, AGE_YEARS_MIN, HEIGHT_CM_MAX, HEIGHT_CM_MIN,
    WEIGHT_KG_MAX, WEIGHT_KG_MIN,
};
pub use requirement::{DailyRequirement, EnergyEstimate};
