//! Status command implementation

use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use docsync_project::{KnowledgeState, ProjectFacts, evaluate};

use crate::error::Result;

/// Run the status command
pub fn run_status(workspace: &Path, json: bool) -> Result<()> {
    let facts = ProjectFacts::gather(workspace);
    let state = evaluate(&facts, Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    match &state {
        KnowledgeState::NoProject => {
            println!("{}", "No Clarinet project found".red().bold());
            println!();
            println!(
                "Looked for {} in this directory, conventional monorepo \
                 subdirectories, and immediate subdirectories.",
                "Clarinet.toml".cyan()
            );
        }
        KnowledgeState::OptedOut => {
            println!("{}", "Opted out".yellow().bold());
            println!("Initialization prompts are suppressed for this workspace.");
        }
        KnowledgeState::Uninitialized { location } => {
            println!("{}", "Not initialized".yellow().bold());
            println!();
            println!(
                "{}:  {}{}",
                "Project".dimmed(),
                location.root.display(),
                if location.monorepo {
                    " (monorepo subdirectory)"
                } else {
                    ""
                }
            );
            println!("Run {} to set up the knowledge file.", "/stacks:init".cyan());
        }
        KnowledgeState::Fresh => {
            println!("{}", "Initialized".green().bold());
            println!("Docs index is up to date.");
        }
        KnowledgeState::Stale {
            age_days,
            last_updated,
        } => {
            println!("{}", "Initialized, index stale".yellow().bold());
            println!();
            println!(
                "Docs index is {} days old {}",
                age_days,
                format!("(last updated: {last_updated})").dimmed()
            );
            println!("Run {} to refresh.", "docsync update".cyan());
        }
    }

    Ok(())
}
