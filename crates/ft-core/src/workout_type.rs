//! Workout type enum as the single source of truth for activity tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of activities the calculator knows about.
///
/// Parses from the three-letter sensor package codes (`"RUN"`, `"WLK"`,
/// `"SWM"`) or from the report labels; displays as the label carried by
/// the training report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutType {
    /// The package code this type parses from.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// The human-readable label used in report headings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = UnknownWorkoutType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Labels parse too, so serialized reports roundtrip.
        match s {
            "RUN" | "Running" => Ok(Self::Running),
            "WLK" | "SportsWalking" => Ok(Self::SportsWalking),
            "SWM" | "Swimming" => Ok(Self::Swimming),
            _ => Err(UnknownWorkoutType(s.to_string())),
        }
    }
}

impl Serialize for WorkoutType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unrecognized activity tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWorkoutType(pub String);

impl fmt::Display for UnknownWorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown workout type: {}", self.0)
    }
}

impl std::error::Error for UnknownWorkoutType {}
