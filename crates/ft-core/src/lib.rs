//! Workout calculation engine for the fitness tracker.
//!
//! This crate contains the core record-to-report pipeline:
//! - Factory: parsing a sensor package (tag + numeric parameters) into a
//!   validated [`Workout`]
//! - Computation: distance, mean speed, and activity-specific calorie
//!   formulas
//! - [`TrainingReport`]: the value object handed to the presentation layer
//!
//! Everything here is pure and synchronous; formatting and the driver loop
//! live in the CLI crate.

mod report;
mod workout;
mod workout_type;

pub use report::TrainingReport;
pub use workout::{Workout, WorkoutError};
pub use workout_type::{UnknownWorkoutType, WorkoutType};
