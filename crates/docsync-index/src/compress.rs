//! Index compression
//!
//! Groups extracted documentation paths by parent directory and serializes
//! them into the single-line compressed format embedded in knowledge files.

use std::collections::BTreeMap;

use crate::extract;

/// Fixed header for the compressed index line
pub const INDEX_HEADER: &str = "[Stacks Docs Index]|root: https://docs.stacks.co\
|IMPORTANT: Prefer retrieval-led reasoning over pre-training-led reasoning. \
Fetch docs before writing code.";

/// Group key for paths with no directory component
pub const ROOT_GROUP: &str = "root";

/// A compressed index line plus the raw extraction count behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedIndex {
    /// The single-line serialized index
    pub line: String,
    /// Total number of extracted paths, duplicates included
    pub path_count: usize,
}

impl CompressedIndex {
    /// Serialized size in bytes
    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

/// Documentation paths grouped by parent directory.
///
/// Filenames within a directory are unique and keep first-seen order;
/// directory keys iterate in ascending lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl DirectoryGroups {
    /// Insert one path, splitting it into directory key and filename.
    ///
    /// A path with no directory component lands in the [`ROOT_GROUP`].
    pub fn insert(&mut self, path: &str) {
        let mut parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(file) = parts.pop() else {
            // A bare "/" carries no filename; nothing to group.
            return;
        };
        let dir = if parts.is_empty() {
            ROOT_GROUP.to_string()
        } else {
            parts.join("/")
        };
        let files = self.groups.entry(dir).or_default();
        if !files.iter().any(|f| f == file) {
            files.push(file.to_string());
        }
    }

    /// Filenames recorded for one directory key
    pub fn files(&self, dir: &str) -> Option<&[String]> {
        self.groups.get(dir).map(Vec::as_slice)
    }

    /// Number of directory groups, root included
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Serialize the non-root groups as `dir:{f1,f2}` segments joined by `|`.
    ///
    /// Root-level files are indexed by the header metadata only and never
    /// emitted as a body segment.
    pub fn serialize_body(&self) -> String {
        self.groups
            .iter()
            .filter(|(dir, _)| dir.as_str() != ROOT_GROUP)
            .map(|(dir, files)| format!("{dir}:{{{}}}", files.join(",")))
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Compress a raw page-list document into a single-line index.
///
/// Deterministic: the same input text always yields a byte-identical line.
pub fn compress(text: &str) -> CompressedIndex {
    let mut groups = DirectoryGroups::default();
    let mut path_count = 0usize;

    for path in extract::doc_paths(text) {
        path_count += 1;
        groups.insert(path);
    }

    let body = groups.serialize_body();
    let line = if body.is_empty() {
        INDEX_HEADER.to_string()
    } else {
        format!("{INDEX_HEADER}|{body}")
    };

    tracing::debug!(path_count, groups = groups.len(), bytes = line.len(), "compressed index");

    CompressedIndex { line, path_count }
}
