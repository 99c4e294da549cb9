mod commands;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::completions_cmd::completions_command;
use crate::commands::run_once_cmd::run_once_command;
use crate::commands::simulate_cmd::simulate_command;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::RunOnce { .. } => run_once_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
