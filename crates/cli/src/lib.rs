pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "upkeep",
    about = "Upkeep maintenance recommendation CLI",
    long_about = "Derive maintenance recommendations from a service-history payload, inspect configuration, and run engine smoke checks.",
    after_help = "Examples:\n  upkeep recommend < request.json\n  upkeep config\n  upkeep smoke"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Read one JSON request from stdin and write the recommendation response to stdout"
    )]
    Recommend,
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Run engine self-checks with per-check timing details")]
    Smoke,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend => commands::recommend::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Smoke => commands::smoke::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
