//! Protein & Calorie Calculator (PCC) Library
//!
//! Core functionality for estimating basal metabolic rate, total daily
//! energy expenditure and daily protein intake from interactive input.

pub mod build_info;
pub mod energy;
pub mod intake;
pub mod models;
pub mod report;
pub mod session;
