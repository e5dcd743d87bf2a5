//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stacks docsync - keep the documentation index and plugin state in sync
#[derive(Parser, Debug)]
#[command(name = "docsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch the latest page listing and refresh the embedded index
    ///
    /// Examples:
    ///   docsync update                         # Patch the project's knowledge file
    ///   docsync update path/to/knowledge.md    # Patch a specific copy
    Update {
        /// Knowledge file to patch (default: the workspace's plugin copy)
        target: Option<PathBuf>,
    },

    /// Show the detected project and knowledge state
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Suppress initialization prompts for this workspace
    OptOut,
}
