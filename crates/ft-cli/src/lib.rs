//! Fitness tracker CLI library.
//!
//! This crate provides the presentation layer over the `ft-core`
//! calculation engine: the clap definitions, the report formatter, and the
//! command bodies.

mod cli;
pub mod commands;
pub mod format;

pub use cli::{Cli, Commands};
