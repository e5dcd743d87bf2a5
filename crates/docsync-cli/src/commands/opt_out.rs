//! Opt-out command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;

use docsync_project::{KnowledgeLayout, locate_project};

use crate::error::{CliError, Result};

/// Run the opt-out command
///
/// Creates the opt-out marker so session-start checks stay silent for this
/// workspace. Refuses outside a Clarinet project, where the marker would be
/// meaningless.
pub fn run_opt_out(workspace: &Path) -> Result<()> {
    if locate_project(workspace).is_none() {
        return Err(CliError::user(
            "No Clarinet project found here; nothing to opt out of",
        ));
    }

    let layout = KnowledgeLayout::new(workspace);
    fs::create_dir_all(layout.knowledge_dir())?;
    fs::write(layout.opt_out_marker(), "")?;

    println!(
        "{} Initialization prompts are now suppressed for {}",
        "Opted out.".green(),
        workspace.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn opt_out_creates_the_marker_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Clarinet.toml"), "[project]\n").unwrap();

        run_opt_out(temp_dir.path()).unwrap();

        let layout = KnowledgeLayout::new(temp_dir.path());
        assert!(layout.opt_out_marker().is_file());
    }

    #[test]
    fn opt_out_outside_a_project_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_opt_out(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CliError::User(_)));
    }

    #[test]
    fn opt_out_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Clarinet.toml"), "[project]\n").unwrap();

        run_opt_out(temp_dir.path()).unwrap();
        run_opt_out(temp_dir.path()).unwrap();
    }
}
