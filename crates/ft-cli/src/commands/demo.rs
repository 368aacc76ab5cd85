//! Demo command: runs the built-in sample packages through the engine.

use std::io::Write;

use anyhow::{Context, Result};

use ft_core::Workout;

use crate::format::format_report;

/// Sample sensor packages, in wire order, as the upstream pipeline
/// delivers them.
const SAMPLE_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

pub fn run<W: Write>(writer: &mut W, json: bool) -> Result<()> {
    for (tag, data) in SAMPLE_PACKAGES {
        let workout = Workout::from_package(tag, data)
            .with_context(|| format!("failed to read sample package {tag:?}"))?;
        let report = workout.report();
        tracing::debug!(tag, workout_type = %report.workout_type, "sample package rendered");

        if json {
            let line = serde_json::to_string(&report).context("failed to serialize report")?;
            writeln!(writer, "{line}")?;
        } else {
            writeln!(writer, "{}", format_report(&report))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_prints_one_line_per_sample_package() {
        let mut output = Vec::new();
        run(&mut output, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                 Mean speed: 1.000 km/h; Calories burnt: 336.000 kcal.",
                "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                 Mean speed: 9.750 km/h; Calories burnt: 699.750 kcal.",
                "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                 Mean speed: 5.850 km/h; Calories burnt: 157.500 kcal.",
            ]
        );
    }

    #[test]
    fn demo_json_emits_one_report_per_line() {
        let mut output = Vec::new();
        run(&mut output, true).unwrap();

        let output = String::from_utf8(output).unwrap();
        let reports: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0]["workout_type"], "Swimming");
        assert_eq!(reports[1]["workout_type"], "Running");
        assert_eq!(reports[2]["workout_type"], "SportsWalking");
    }
}
