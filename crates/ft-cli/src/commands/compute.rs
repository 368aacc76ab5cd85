//! Compute command: one sensor package in, one report line out.

use std::io::Write;

use anyhow::{Context, Result};

use ft_core::Workout;

use crate::format::format_report;

pub fn run<W: Write>(writer: &mut W, tag: &str, data: &[f64], json: bool) -> Result<()> {
    let workout = Workout::from_package(tag, data)
        .with_context(|| format!("failed to read package {tag:?}"))?;
    let report = workout.report();
    tracing::debug!(workout_type = %report.workout_type, json, "report computed");

    if json {
        let line = serde_json::to_string(&report).context("failed to serialize report")?;
        writeln!(writer, "{line}")?;
    } else {
        writeln!(writer, "{}", format_report(&report))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_prints_formatted_line() {
        let mut output = Vec::new();
        run(&mut output, "RUN", &[15_000.0, 1.0, 75.0], false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Training type: Running;"));
        assert!(output.ends_with("kcal.\n"));
    }

    #[test]
    fn compute_json_emits_all_report_fields() {
        let mut output = Vec::new();
        run(&mut output, "SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["workout_type"], "Swimming");
        assert_eq!(value["mean_speed_kmh"], 1.0);
        assert_eq!(value["calories_kcal"], 336.0);
    }

    #[test]
    fn compute_surfaces_unknown_tag() {
        let mut output = Vec::new();
        let err = run(&mut output, "XYZ", &[1.0, 1.0, 1.0], false).unwrap_err();

        assert!(err.root_cause().to_string().contains("unknown workout type"));
        assert!(output.is_empty(), "no partial output on failure");
    }

    #[test]
    fn compute_surfaces_arity_mismatch() {
        let mut output = Vec::new();
        let err = run(&mut output, "RUN", &[15_000.0, 1.0], false).unwrap_err();

        assert!(err.root_cause().to_string().contains("expects 3 parameters"));
    }
}
