//! CLI subcommand implementations.

pub mod compute;
pub mod demo;
