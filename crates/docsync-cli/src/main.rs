//! Stacks docsync CLI
//!
//! The command-line interface for refreshing the embedded documentation
//! index and inspecting the plugin's per-project state.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Stacks docs index tooling", "docsync".green().bold());
            println!();
            println!("Run {} for available commands.", "docsync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Update { target } => commands::run_update(&cwd, target.as_deref()),
        Commands::Status { json } => commands::run_status(&cwd, json),
        Commands::OptOut => commands::run_opt_out(&cwd),
    }
}
