//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Workout report calculator.
///
/// Turns raw sensor packages (activity tag plus numeric parameters) into
/// normalized training reports: distance, mean speed, and calories.
#[derive(Debug, Parser)]
#[command(name = "fit", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the report for a single sensor package.
    Compute {
        /// Activity tag (RUN, WLK, or SWM).
        #[arg(long)]
        workout: String,

        /// Positional package parameters, in wire order
        /// (action, duration, weight, then activity-specific extras).
        #[arg(long, num_args = 1.., required = true)]
        data: Vec<f64>,

        /// Emit the report as JSON instead of the formatted line.
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in sample packages and print one report per record.
    Demo {
        /// Emit reports as JSON lines instead of formatted text.
        #[arg(long)]
        json: bool,
    },
}
