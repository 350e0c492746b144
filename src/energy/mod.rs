//! Energy estimation module
//!
//! Basal metabolic rate equations and activity-level adjustment.

pub mod activity;
pub mod bmr;

pub use activity::{daily_requirement, protein_factor, tdee_multiplier};
pub use bmr::{basal_metabolic_rate, Equation};
