//! Result rendering
//!
//! Formats the computed quantities into the session report. BMR prints to
//! three decimal places, TDEE and protein to one; everything else on the
//! report is cosmetic.

use std::io::Write;

use crate::models::{DailyRequirement, EnergyEstimate};

/// Header above the reported quantities
const RESULTS_HEADER: &str = "=============== Results ===============";
/// Rule closing the report
const CLOSING_RULE: &str = "========================================";

/// Render the results block.
///
/// The TDEE line is omitted when no value is supplied, matching the older
/// two-quantity report layout.
pub fn write_report<W: Write>(
    output: &mut W,
    bmr_kcal_per_day: f64,
    tdee_kcal_per_day: Option<f64>,
    protein_g_per_day: f64,
) -> std::io::Result<()> {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

    writeln!(output, "{}", RESULTS_HEADER)?;
    writeln!(output, "Generated: {}", generated)?;
    writeln!(
        output,
        "Your basal metabolic rate is {:.3} calories.",
        bmr_kcal_per_day
    )?;
    if let Some(tdee) = tdee_kcal_per_day {
        writeln!(
            output,
            "Your total daily energy expenditure is {:.1} calories.",
            tdee
        )?;
    }
    writeln!(
        output,
        "Your protein requirement is {:.1} grams.",
        protein_g_per_day
    )?;
    writeln!(output, "{}", CLOSING_RULE)?;
    Ok(())
}

/// Render the full three-quantity report
pub fn write_full_report<W: Write>(
    output: &mut W,
    estimate: &EnergyEstimate,
    requirement: &DailyRequirement,
) -> std::io::Result<()> {
    write_report(
        output,
        estimate.bmr_kcal_per_day,
        Some(requirement.tdee_kcal_per_day),
        requirement.protein_g_per_day,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bmr: f64, tdee: Option<f64>, protein: f64) -> String {
        let mut output = Vec::new();
        write_report(&mut output, bmr, tdee, protein).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_report_contains_all_quantities() {
        let report = render(1048.75, Some(1625.5625), 98.0);
        assert!(report.contains("Your basal metabolic rate is 1048.750 calories."));
        assert!(report.contains("Your total daily energy expenditure is 1625.6 calories."));
        assert!(report.contains("Your protein requirement is 98.0 grams."));
        assert!(report.contains("Generated: "));
    }

    #[test]
    fn test_report_without_tdee() {
        let report = render(1012.339, None, 175.0);
        assert!(report.contains("Your basal metabolic rate is 1012.339 calories."));
        assert!(!report.contains("total daily energy expenditure"));
        assert!(report.contains("Your protein requirement is 175.0 grams."));
    }

    #[test]
    fn test_report_banners() {
        let report = render(1500.0, Some(1800.0), 100.0);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.first(), Some(&RESULTS_HEADER));
        assert_eq!(lines.last(), Some(&CLOSING_RULE));
        assert_eq!(RESULTS_HEADER.len(), 39);
        assert_eq!(CLOSING_RULE.len(), 40);
    }

    #[test]
    fn test_full_report_uses_requirement_values() {
        let estimate = EnergyEstimate { bmr_kcal_per_day: 1346.5 };
        let requirement = DailyRequirement {
            tdee_kcal_per_day: 2322.7125,
            protein_g_per_day: 129.2,
        };

        let mut output = Vec::new();
        write_full_report(&mut output, &estimate, &requirement).unwrap();
        let report = String::from_utf8(output).unwrap();

        assert!(report.contains("Your basal metabolic rate is 1346.500 calories."));
        assert!(report.contains("Your total daily energy expenditure is 2322.7 calories."));
        assert!(report.contains("Your protein requirement is 129.2 grams."));
    }
}
