//! Training report value object.

use serde::Serialize;

use crate::workout_type::WorkoutType;

/// The computed summary for one workout.
///
/// A plain value with no identity beyond its fields: derived on demand by
/// [`crate::Workout::report`] and handed to the presentation layer, which
/// owns all formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingReport {
    /// Activity label (`Running`, `SportsWalking`, `Swimming`).
    pub workout_type: WorkoutType,

    /// Session duration in fractional hours.
    pub duration_h: f64,

    /// Distance covered, kilometers.
    pub distance_km: f64,

    /// Mean speed, km/h.
    pub mean_speed_kmh: f64,

    /// Estimated energy expenditure, kcal.
    pub calories_kcal: f64,
}
