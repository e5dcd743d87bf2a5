//! Update command implementation
//!
//! Fetches the current page listing, compresses it, and splices the result
//! into the knowledge file between the index markers.

use std::path::Path;

use colored::Colorize;

use docsync_fetch::{LLMS_TXT_URL, PAGE_LIST_TIMEOUT, fetch_text};
use docsync_index::{MarkerPair, compress};
use docsync_project::KnowledgeLayout;

use crate::error::{CliError, Result};

/// Run the update command
pub fn run_update(workspace: &Path, target: Option<&Path>) -> Result<()> {
    let target = match target {
        Some(path) => path.to_path_buf(),
        None => KnowledgeLayout::new(workspace).knowledge_file(),
    };

    if !target.is_file() {
        return Err(CliError::user(format!(
            "File not found: {} (run /stacks:init first, or pass a target path)",
            target.display()
        )));
    }

    println!("Fetching {} ...", LLMS_TXT_URL.cyan());
    let listing = fetch_text(LLMS_TXT_URL, PAGE_LIST_TIMEOUT)?;

    println!("Compressing index...");
    let index = compress(&listing);

    println!("Updating {} ...", target.display());
    MarkerPair::DOCS_INDEX.patch_file(&target, &index.line)?;

    println!("{}", "Done!".green());
    println!("  Paths: {}", index.path_count);
    println!("  Size: {:.1}KB", index.len() as f64 / 1024.0);

    Ok(())
}
