//! Rendering of training reports as fixed-precision text.

use ft_core::TrainingReport;

/// Formats a report as the single-line, 3-decimal summary.
#[must_use]
pub fn format_report(report: &TrainingReport) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
         Mean speed: {:.3} km/h; Calories burnt: {:.3} kcal.",
        report.workout_type,
        report.duration_h,
        report.distance_km,
        report.mean_speed_kmh,
        report.calories_kcal,
    )
}
