//! Computed requirement records
//!
//! Outputs of the calculation pipeline: the resting energy estimate and the
//! activity-adjusted daily requirement. Both are derived values, computed
//! once per session and handed to the reporter.

use serde::{Deserialize, Serialize};

/// Resting energy estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub bmr_kcal_per_day: f64,
}

/// Activity-adjusted daily requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRequirement {
    pub tdee_kcal_per_day: f64,
    pub protein_g_per_day: f64,
}
