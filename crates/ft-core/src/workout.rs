//! Workout computation engine.
//!
//! A sensor package is a workout tag plus a flat sequence of numbers. The
//! factory ([`Workout::from_package`]) validates the tag and the parameters
//! and builds the matching variant; the variant then computes distance,
//! mean speed, and calories with its own formula set.
//!
//! The variant set is closed: every formula is selected by an exhaustive
//! `match`, so adding an activity without its calorie formula is a compile
//! error rather than a runtime surprise.

use std::str::FromStr;

use thiserror::Error;

use crate::report::TrainingReport;
use crate::workout_type::{UnknownWorkoutType, WorkoutType};

/// Meters per kilometer.
const M_IN_KM: f64 = 1000.0;

/// Minutes per hour.
const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, in meters (running and walking).
const STEP_LEN_M: f64 = 0.65;

/// Distance covered by one stroke, in meters (swimming).
const STROKE_LEN_M: f64 = 1.38;

// Running calorie coefficients.
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

// Sports walking calorie coefficients.
const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Swimming calorie coefficients.
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Errors from workout construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    /// The package tag is not one of the known activity codes.
    #[error(transparent)]
    UnknownType(#[from] UnknownWorkoutType),

    /// The package carried the wrong number of parameters for its tag.
    #[error("{workout_type} package expects {expected} parameters, got {got}")]
    ParameterCount {
        workout_type: WorkoutType,
        expected: usize,
        got: usize,
    },

    /// A parameter used as a divisor (or weight) was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveParameter { field: &'static str, value: f64 },

    /// A counter parameter was negative or not a number.
    #[error("{field} must be a non-negative count, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}

/// One recorded workout: the raw sensor inputs for a single session.
///
/// Immutable after construction. Each variant carries exactly the
/// parameters its formulas need; shared fields are `action` (steps or
/// strokes), `duration_h`, and `weight_kg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    SportsWalking {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

/// Rejects zero, negative, and NaN values for divisor-like parameters.
fn require_positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::NonPositiveParameter { field, value })
    }
}

/// Narrows a raw numeric counter to `u32`, rejecting negatives and NaN.
/// Fractional readings are truncated: counts are whole by nature, and a
/// stray fraction is sensor noise rather than a caller defect.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn require_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidCount { field, value })
    }
}

impl Workout {
    /// Creates a running workout.
    pub fn running(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self::Running {
            action,
            duration_h: require_positive("duration_h", duration_h)?,
            weight_kg: require_positive("weight_kg", weight_kg)?,
        })
    }

    /// Creates a sports walking workout. `height_cm` is a divisor in the
    /// calorie formula and must be positive.
    pub fn sports_walking(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self::SportsWalking {
            action,
            duration_h: require_positive("duration_h", duration_h)?,
            weight_kg: require_positive("weight_kg", weight_kg)?,
            height_cm: require_positive("height_cm", height_cm)?,
        })
    }

    /// Creates a swimming workout.
    pub fn swimming(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self::Swimming {
            action,
            duration_h: require_positive("duration_h", duration_h)?,
            weight_kg: require_positive("weight_kg", weight_kg)?,
            pool_length_m: require_positive("pool_length_m", pool_length_m)?,
            pool_laps,
        })
    }

    /// Number of parameters a package must carry for the given type.
    #[must_use]
    pub const fn package_arity(workout_type: WorkoutType) -> usize {
        match workout_type {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }

    /// Builds a workout from a sensor package: an activity tag plus the
    /// positional parameter sequence the tagged variant expects.
    ///
    /// Parameter order matches the sensor wire format:
    /// `RUN` — action, duration, weight;
    /// `WLK` — action, duration, weight, height;
    /// `SWM` — action, duration, weight, pool length, pool laps.
    pub fn from_package(tag: &str, params: &[f64]) -> Result<Self, WorkoutError> {
        let workout_type = WorkoutType::from_str(tag)?;

        let expected = Self::package_arity(workout_type);
        if params.len() != expected {
            return Err(WorkoutError::ParameterCount {
                workout_type,
                expected,
                got: params.len(),
            });
        }

        let action = require_count("action", params[0])?;
        let workout = match workout_type {
            WorkoutType::Running => Self::running(action, params[1], params[2])?,
            WorkoutType::SportsWalking => {
                Self::sports_walking(action, params[1], params[2], params[3])?
            }
            WorkoutType::Swimming => {
                let pool_laps = require_count("pool_laps", params[4])?;
                Self::swimming(action, params[1], params[2], params[3], pool_laps)?
            }
        };

        tracing::debug!(%workout_type, ?params, "constructed workout from package");
        Ok(workout)
    }

    /// The activity tag of this workout.
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::SportsWalking { .. } => WorkoutType::SportsWalking,
            Self::Swimming { .. } => WorkoutType::Swimming,
        }
    }

    const fn action(&self) -> u32 {
        match self {
            Self::Running { action, .. }
            | Self::SportsWalking { action, .. }
            | Self::Swimming { action, .. } => *action,
        }
    }

    /// Session duration in fractional hours. Always positive.
    #[must_use]
    pub const fn duration_h(&self) -> f64 {
        match self {
            Self::Running { duration_h, .. }
            | Self::SportsWalking { duration_h, .. }
            | Self::Swimming { duration_h, .. } => *duration_h,
        }
    }

    /// Distance covered by one action, in meters.
    const fn action_len_m(&self) -> f64 {
        match self {
            Self::Running { .. } | Self::SportsWalking { .. } => STEP_LEN_M,
            Self::Swimming { .. } => STROKE_LEN_M,
        }
    }

    /// Distance in kilometers, derived from the action counter.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.action_len_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    ///
    /// Swimming uses the pool geometry (length × laps) instead of the
    /// stroke counter: laps measure what was actually swum.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming {
                duration_h,
                pool_length_m,
                pool_laps,
                ..
            } => pool_length_m * f64::from(*pool_laps) / M_IN_KM / duration_h,
            Self::Running { .. } | Self::SportsWalking { .. } => {
                self.distance_km() / self.duration_h()
            }
        }
    }

    /// Estimated energy expenditure in kcal, by the activity's own formula.
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        match *self {
            Self::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * weight_kg
                    / M_IN_KM
                    * (duration_h * MIN_IN_H)
            }
            Self::SportsWalking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed = self.mean_speed_kmh();
                // Floor division, not true division: the speed term only
                // kicks in once speed² reaches a whole multiple of height.
                let speed_height_term = (speed * speed / height_cm).floor();
                (WALK_WEIGHT_MULTIPLIER * weight_kg
                    + speed_height_term * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * (duration_h * MIN_IN_H)
            }
            Self::Swimming { weight_kg, .. } => {
                (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg
            }
        }
    }

    /// Composes the full training report. Recomputed on every call, never
    /// cached.
    #[must_use]
    pub fn report(&self) -> TrainingReport {
        TrainingReport {
            workout_type: self.workout_type(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}
