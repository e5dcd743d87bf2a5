//! Project detection and knowledge state for stacks-docsync
//!
//! Answers two questions per invocation, from the filesystem alone:
//!
//! - Is there a Clarinet project here, and where is its root?
//! - What shape is the plugin's local knowledge state in: absent, opted
//!   out, uninitialized, fresh, or stale?
//!
//! All probe failures (unreadable directories, failed stats) degrade to
//! "no signal" rather than surfacing as errors; a detection pass never
//! fails, it only classifies.

pub mod layout;
pub mod locate;
pub mod state;

pub use layout::{KNOWLEDGE_FILE_NAME, KnowledgeLayout, KnowledgePath};
pub use locate::{MONOREPO_PATTERNS, ProjectLocation, locate_project};
pub use state::{DOCS_MAX_AGE_DAYS, KnowledgeState, ProjectFacts, evaluate};
