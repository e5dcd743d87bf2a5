//! Clarinet project root detection
//!
//! Probes a fixed, ordered set of layouts for the root marker file. The
//! order is load-bearing: a marker in the workspace itself always beats a
//! conventional subdirectory, which beats an arbitrary one.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::KnowledgePath;

/// Conventional monorepo subdirectories, probed in this order
pub const MONOREPO_PATTERNS: [&str; 4] =
    ["clarity", "contracts", "packages/contracts", "packages/clarity"];

/// Dependency cache directory excluded from the subdirectory sweep
const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// A detected project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLocation {
    /// Directory containing the root marker file
    pub root: PathBuf,
    /// True when the root differs from the directory detection started in
    pub monorepo: bool,
}

/// Find the Clarinet project root for `start`, if any.
///
/// Strategies run in strict priority order; the first hit wins. A failure
/// to list subdirectories in the last strategy is treated as "no match",
/// never surfaced.
pub fn locate_project(start: &Path) -> Option<ProjectLocation> {
    let root = in_workspace(start)
        .or_else(|| under_conventional_pattern(start))
        .or_else(|| under_any_subdirectory(start))?;

    tracing::debug!(root = %root.display(), "located Clarinet project");

    Some(ProjectLocation {
        monorepo: root != start,
        root,
    })
}

fn has_root_marker(dir: &Path) -> bool {
    dir.join(KnowledgePath::RootMarker).is_file()
}

fn in_workspace(start: &Path) -> Option<PathBuf> {
    has_root_marker(start).then(|| start.to_path_buf())
}

fn under_conventional_pattern(start: &Path) -> Option<PathBuf> {
    MONOREPO_PATTERNS
        .iter()
        .map(|pattern| start.join(pattern))
        .find(|candidate| has_root_marker(candidate))
}

fn under_any_subdirectory(start: &Path) -> Option<PathBuf> {
    let entries = match fs::read_dir(start) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(%err, "subdirectory sweep failed, treating as no match");
            return None;
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name == DEPENDENCY_CACHE_DIR {
            continue;
        }
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let candidate = entry.path();
        if has_root_marker(&candidate) {
            return Some(candidate);
        }
    }

    None
}
