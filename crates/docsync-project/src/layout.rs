//! Well-known filesystem paths for the knowledge state machinery.

use std::path::{Path, PathBuf};

/// Standard plugin filesystem markers and paths, relative to a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgePath {
    /// The `.claude/stacks/knowledge` directory (plugin-local state root)
    KnowledgeDir,
    /// The knowledge file whose age drives staleness
    KnowledgeFile,
    /// The opt-out marker suppressing initialization prompts
    OptOutMarker,
    /// The root document expected to reference the knowledge file
    RootDocument,
    /// The file whose presence identifies a Clarinet project root
    RootMarker,
}

impl KnowledgePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KnowledgeDir => ".claude/stacks/knowledge",
            Self::KnowledgeFile => ".claude/stacks/knowledge/general-stacks-knowledge.md",
            Self::OptOutMarker => ".claude/stacks/knowledge/.stacks-init-opt-out",
            Self::RootDocument => "CLAUDE.md",
            Self::RootMarker => "Clarinet.toml",
        }
    }
}

impl AsRef<Path> for KnowledgePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for KnowledgePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for KnowledgePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The filename the root document must mention for the workspace to count
/// as initialized.
pub const KNOWLEDGE_FILE_NAME: &str = "general-stacks-knowledge.md";

/// Plugin paths anchored at one workspace directory.
///
/// The anchor is the directory an invocation starts from, not the detected
/// project root: plugin state lives beside the workspace even when the
/// Clarinet project sits in a subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeLayout {
    workspace: PathBuf,
}

impl KnowledgeLayout {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn knowledge_dir(&self) -> PathBuf {
        self.workspace.join(KnowledgePath::KnowledgeDir)
    }

    pub fn knowledge_file(&self) -> PathBuf {
        self.workspace.join(KnowledgePath::KnowledgeFile)
    }

    pub fn opt_out_marker(&self) -> PathBuf {
        self.workspace.join(KnowledgePath::OptOutMarker)
    }

    pub fn root_document(&self) -> PathBuf {
        self.workspace.join(KnowledgePath::RootDocument)
    }
}
