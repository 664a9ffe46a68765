//! Bingham Bank CLI - banking session in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{account_types, logs, session};

/// Bingham Bank - sign up, log in and manage an account
#[derive(Parser)]
#[command(name = "bingham", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive banking session (default)
    Session,

    /// Show deposit and withdrawal rules for each account type
    AccountTypes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => session::run(),
        Commands::AccountTypes { json } => account_types::run(json),
        Commands::Logs { command } => logs::run(command),
    }
}
