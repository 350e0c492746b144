//! Interactive input collection
//!
//! Prompts for each field until it passes validation. Invalid entries print
//! a diagnostic and re-prompt the same field, so the caller always receives
//! an in-bounds measurement; only channel failures surface as errors.

use std::io::{BufRead, Write};

use crate::models::{
    ActivityLevel, Measurement, Sex, AGE_YEARS_MAX, AGE_YEARS_MIN, HEIGHT_CM_MAX, HEIGHT_CM_MIN,
    WEIGHT_KG_MAX, WEIGHT_KG_MIN,
};

use super::field::{parse_field, prompt_until_valid, IntakeError, IntakeResult};

/// Separator printed between field groups
pub(crate) const SEPARATOR: &str = "=============================================";

/// Collect a fully validated measurement.
///
/// Field order: weight, sex, age, height, activity level. Sex accepts only
/// the exact lowercase tokens; every numeric field must parse and sit inside
/// its closed bound.
pub fn collect<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> IntakeResult<Measurement> {
    let weight_kg = prompt_until_valid(
        input,
        output,
        "What is your weight in kilograms? ",
        "weight",
        |token| {
            let value = parse_field("weight", token)?;
            bounded_u32(
                "weight",
                value,
                WEIGHT_KG_MIN,
                WEIGHT_KG_MAX,
                "Weight must be between 1 and 1250.",
            )
        },
    )?;

    writeln!(output, "{}", SEPARATOR)?;
    let sex = prompt_until_valid(
        input,
        output,
        "What is your gender? (male/female) ",
        "sex",
        |token| {
            Sex::from_str(token).ok_or_else(|| IntakeError::UnrecognizedSex {
                token: token.to_string(),
            })
        },
    )?;

    writeln!(output, "{}", SEPARATOR)?;
    let age_years = prompt_until_valid(
        input,
        output,
        "What is your age in years? ",
        "age",
        |token| {
            let value = parse_field("age", token)?;
            bounded_u32(
                "age",
                value,
                AGE_YEARS_MIN,
                AGE_YEARS_MAX,
                "Please enter a realistic age.",
            )
        },
    )?;

    writeln!(output, "{}", SEPARATOR)?;
    let height_cm = prompt_until_valid(
        input,
        output,
        "What is your height in centimeters? ",
        "height",
        |token| {
            let value = parse_field("height", token)?;
            bounded_u32(
                "height",
                value,
                HEIGHT_CM_MIN,
                HEIGHT_CM_MAX,
                "Please enter a realistic height.",
            )
        },
    )?;

    writeln!(output, "{}", SEPARATOR)?;
    write_activity_menu(output)?;
    let activity_level = prompt_until_valid(
        input,
        output,
        "Choose your activity level (1-5): ",
        "activity level",
        |token| {
            let value = parse_field("activity level", token)?;
            ActivityLevel::from_index(value).ok_or(IntakeError::UnknownActivityLevel { value })
        },
    )?;

    Ok(Measurement {
        weight_kg,
        sex,
        age_years,
        height_cm,
        activity_level,
    })
}

/// Range-check a parsed value into the u32 field type
fn bounded_u32(
    field: &'static str,
    value: i64,
    min: u32,
    max: u32,
    diagnostic: &'static str,
) -> IntakeResult<u32> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(IntakeError::OutOfRange {
            field,
            value,
            diagnostic,
        });
    }
    Ok(value as u32)
}

/// Print the activity level menu (once, ahead of the selection prompt)
pub(crate) fn write_activity_menu<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "Activity levels:")?;
    for level in ActivityLevel::ALL {
        writeln!(
            output,
            "{} - {} ({})",
            level.as_index(),
            level.display_name(),
            level.description()
        )?;
    }
    Ok(())
}
