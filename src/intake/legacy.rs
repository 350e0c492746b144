//! Single-shot legacy collection
//!
//! The historical degraded intake flow, kept for compatibility behind its
//! own binary. Every field is read exactly once: a bad weight yields no
//! value instead of an error, sex falls back to female, and age and height
//! are accepted without range checks.

use std::io::{BufRead, Write};

use crate::models::{ActivityLevel, Measurement, Sex};

use super::field::{parse_field, read_trimmed_line, IntakeError, IntakeResult};
use super::interactive::{write_activity_menu, SEPARATOR};

/// Collect a measurement without retries.
///
/// A weight that does not parse, or parses negative, yields `Ok(None)`.
/// Weight 0 passes; the historical check was `< 0`, not `<= 0`, and that
/// inconsistency is kept. Parse failures on age or height, and an activity
/// selection outside 1-5, are returned as errors.
pub fn collect_single_shot<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> IntakeResult<Option<Measurement>> {
    tracing::warn!("single-shot intake skips range validation");

    let weight_token = ask(input, output, "What is your weight in kilograms? ", "weight")?;
    let weight_kg = match parse_field::<i64>("weight", &weight_token) {
        Ok(value) if value < 0 => {
            tracing::warn!("negative weight {} yields no value", value);
            return Ok(None);
        }
        Ok(value) => match u32::try_from(value) {
            Ok(weight) => weight,
            Err(_) => {
                tracing::warn!("weight {} is beyond the storable range", value);
                return Ok(None);
            }
        },
        Err(_) => {
            tracing::warn!("weight '{}' is not a number, no value", weight_token);
            return Ok(None);
        }
    };

    writeln!(output, "{}", SEPARATOR)?;
    let sex_token = ask(input, output, "What is your gender? (male/female) ", "sex")?;
    let sex = Sex::classify_lenient(&sex_token);
    if sex == Sex::Female && !sex_token.eq_ignore_ascii_case("female") {
        tracing::warn!("unrecognized sex token '{}', treated as female", sex_token);
    }

    writeln!(output, "{}", SEPARATOR)?;
    let age_token = ask(input, output, "What is your age in years? ", "age")?;
    let age_years = parse_field::<u32>("age", &age_token)?;

    writeln!(output, "{}", SEPARATOR)?;
    let height_token = ask(input, output, "What is your height in centimeters? ", "height")?;
    let height_cm = parse_field::<u32>("height", &height_token)?;

    writeln!(output, "{}", SEPARATOR)?;
    write_activity_menu(output)?;
    let level_token = ask(input, output, "Choose your activity level (1-5): ", "activity level")?;
    let level_index = parse_field::<i64>("activity level", &level_token)?;
    let activity_level = ActivityLevel::from_index(level_index)
        .ok_or(IntakeError::UnknownActivityLevel { value: level_index })?;

    let measurement = Measurement {
        weight_kg,
        sex,
        age_years,
        height_cm,
        activity_level,
    };
    if !measurement.is_within_bounds() {
        tracing::warn!("accepted out-of-bounds measurement: {:?}", measurement);
    }

    Ok(Some(measurement))
}

/// Prompt once and read one line
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &'static str,
) -> IntakeResult<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    read_trimmed_line(input)?.ok_or(IntakeError::UnexpectedEof { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_from(script: &str) -> IntakeResult<Option<Measurement>> {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        collect_single_shot(&mut input, &mut output)
    }

    #[test]
    fn test_single_shot_happy_path() {
        let measurement = collect_from("70\nmale\n30\n175\n3\n").unwrap().unwrap();
        assert_eq!(measurement.weight_kg, 70);
        assert_eq!(measurement.sex, Sex::Male);
        assert_eq!(measurement.age_years, 30);
        assert_eq!(measurement.height_cm, 175);
        assert_eq!(measurement.activity_level, ActivityLevel::ModeratelyActive);
    }

    #[test]
    fn test_unparseable_weight_yields_no_value() {
        assert!(collect_from("abc\n").unwrap().is_none());
    }

    #[test]
    fn test_negative_weight_yields_no_value() {
        assert!(collect_from("-5\n").unwrap().is_none());
    }

    #[test]
    fn test_zero_weight_is_accepted() {
        let measurement = collect_from("0\nmale\n30\n175\n3\n").unwrap().unwrap();
        assert_eq!(measurement.weight_kg, 0);
        assert!(!measurement.is_within_bounds());
    }

    #[test]
    fn test_oversized_weight_yields_no_value() {
        assert!(collect_from("99999999999\n").unwrap().is_none());
    }

    #[test]
    fn test_sex_classification_is_case_insensitive() {
        let measurement = collect_from("70\nMALE\n30\n175\n3\n").unwrap().unwrap();
        assert_eq!(measurement.sex, Sex::Male);

        let measurement = collect_from("70\nsomething\n30\n175\n3\n").unwrap().unwrap();
        assert_eq!(measurement.sex, Sex::Female);
    }

    #[test]
    fn test_out_of_range_age_is_accepted() {
        let measurement = collect_from("70\nmale\n500\n175\n3\n").unwrap().unwrap();
        assert_eq!(measurement.age_years, 500);
        assert!(!measurement.is_within_bounds());
    }

    #[test]
    fn test_unparseable_age_propagates() {
        let result = collect_from("70\nmale\nabc\n175\n3\n");
        assert!(matches!(result, Err(IntakeError::Parse { field: "age", .. })));
    }

    #[test]
    fn test_negative_age_propagates_as_parse_failure() {
        let result = collect_from("70\nmale\n-5\n175\n3\n");
        assert!(matches!(result, Err(IntakeError::Parse { field: "age", .. })));
    }

    #[test]
    fn test_unparseable_height_propagates() {
        let result = collect_from("70\nmale\n30\ntall\n3\n");
        assert!(matches!(
            result,
            Err(IntakeError::Parse { field: "height", .. })
        ));
    }

    #[test]
    fn test_out_of_range_activity_level_propagates() {
        let result = collect_from("70\nmale\n30\n175\n9\n");
        assert!(matches!(
            result,
            Err(IntakeError::UnknownActivityLevel { value: 9 })
        ));
    }

    #[test]
    fn test_eof_propagates() {
        let result = collect_from("70\n");
        assert!(matches!(
            result,
            Err(IntakeError::UnexpectedEof { field: "sex" })
        ));
    }
}
