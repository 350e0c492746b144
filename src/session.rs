//! Session orchestration
//!
//! One pipeline pass: collect a measurement, estimate resting energy, apply
//! the activity adjustment and write the report. Generic over the input and
//! output channels so a test harness can drive a whole session in memory.

use std::io::{BufRead, Write};

use crate::energy::{basal_metabolic_rate, daily_requirement, Equation};
use crate::intake;
use crate::intake::IntakeResult;
use crate::models::{DailyRequirement, EnergyEstimate, Measurement};
use crate::report;

/// Everything computed by one completed session
#[derive(Debug, Clone, Copy)]
pub struct SessionOutcome {
    pub measurement: Measurement,
    pub estimate: EnergyEstimate,
    pub requirement: DailyRequirement,
}

/// Run one interactive session.
///
/// Collects until every field is valid, so the only errors are channel
/// failures. The report is written to the same output channel the prompts
/// went to.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    equation: Equation,
) -> IntakeResult<SessionOutcome> {
    let measurement = intake::collect(input, output)?;
    let outcome = complete(output, measurement, equation)?;
    Ok(outcome)
}

/// Run one legacy single-shot session.
///
/// Returns `Ok(None)` when the weight input produced no value; bad input to
/// any later field surfaces as an error.
pub fn run_single_shot<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    equation: Equation,
) -> IntakeResult<Option<SessionOutcome>> {
    let measurement = match intake::collect_single_shot(input, output)? {
        Some(measurement) => measurement,
        None => return Ok(None),
    };
    let outcome = complete(output, measurement, equation)?;
    Ok(Some(outcome))
}

/// Shared tail of both session flavors: estimate, adjust, report
fn complete<W: Write>(
    output: &mut W,
    measurement: Measurement,
    equation: Equation,
) -> IntakeResult<SessionOutcome> {
    let estimate = basal_metabolic_rate(&measurement, equation);
    let requirement = daily_requirement(
        &estimate,
        measurement.weight_kg,
        measurement.activity_level,
        equation,
    );

    report::write_full_report(output, &estimate, &requirement)?;

    tracing::info!(
        "session complete ({}): bmr={:.3} tdee={:.1} protein={:.1}",
        equation.as_str(),
        estimate.bmr_kcal_per_day,
        requirement.tdee_kcal_per_day,
        requirement.protein_g_per_day
    );

    Ok(SessionOutcome {
        measurement,
        estimate,
        requirement,
    })
}
