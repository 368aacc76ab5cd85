use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ft_cli::commands::{compute, demo};
use ft_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Commands::Compute {
            workout,
            data,
            json,
        } => {
            compute::run(&mut stdout, workout, data, *json)?;
        }
        Commands::Demo { json } => {
            demo::run(&mut stdout, *json)?;
        }
    }

    Ok(())
}
