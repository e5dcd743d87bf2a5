//! Knowledge-state evaluation
//!
//! Classifies a workspace into one of five states from a snapshot of
//! filesystem facts. The evaluation itself is a pure function so the state
//! machine can be exercised without touching the filesystem; only
//! [`ProjectFacts::gather`] reads from disk.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::layout::{KNOWLEDGE_FILE_NAME, KnowledgeLayout};
use crate::locate::{ProjectLocation, locate_project};

/// Maximum index age before the knowledge file counts as stale
pub const DOCS_MAX_AGE_DAYS: i64 = 30;

/// The plugin state of one workspace, derived fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum KnowledgeState {
    /// No Clarinet project found; nothing applies
    NoProject,
    /// The workspace opted out of initialization prompts
    OptedOut,
    /// A project exists but the root document does not reference the
    /// knowledge file
    Uninitialized { location: ProjectLocation },
    /// Initialized, and the index is recent enough (or gives no signal)
    Fresh,
    /// Initialized, but the index has not been refreshed within the limit
    Stale {
        age_days: i64,
        last_updated: NaiveDate,
    },
}

/// Filesystem facts feeding the evaluation, gathered once per invocation.
#[derive(Debug, Clone, Default)]
pub struct ProjectFacts {
    /// Detected Clarinet project root, if any
    pub location: Option<ProjectLocation>,
    /// Whether the opt-out marker file exists
    pub opted_out: bool,
    /// Content of the root document, if readable
    pub root_document: Option<String>,
    /// Modification time of the knowledge file, if it could be stat'ed
    pub knowledge_mtime: Option<SystemTime>,
}

impl ProjectFacts {
    /// Read the facts for a workspace directory.
    ///
    /// Read and stat failures are swallowed into `None`; staleness and
    /// initialization checks degrade gracefully rather than erroring.
    pub fn gather(workspace: &Path) -> Self {
        let layout = KnowledgeLayout::new(workspace);
        Self {
            location: locate_project(workspace),
            opted_out: layout.opt_out_marker().exists(),
            root_document: fs::read_to_string(layout.root_document()).ok(),
            knowledge_mtime: fs::metadata(layout.knowledge_file())
                .and_then(|meta| meta.modified())
                .ok(),
        }
    }
}

/// Derive the knowledge state from a facts snapshot.
///
/// Pure in its inputs: the same facts and the same `now` always produce the
/// same state.
pub fn evaluate(facts: &ProjectFacts, now: DateTime<Utc>) -> KnowledgeState {
    let Some(location) = &facts.location else {
        return KnowledgeState::NoProject;
    };

    if facts.opted_out {
        return KnowledgeState::OptedOut;
    }

    let initialized = facts
        .root_document
        .as_deref()
        .is_some_and(|doc| doc.contains(KNOWLEDGE_FILE_NAME));
    if !initialized {
        return KnowledgeState::Uninitialized {
            location: location.clone(),
        };
    }

    // No knowledge file means no staleness signal to raise.
    let Some(mtime) = facts.knowledge_mtime else {
        return KnowledgeState::Fresh;
    };

    let updated: DateTime<Utc> = mtime.into();
    let age_days = (now - updated).num_days();
    if age_days > DOCS_MAX_AGE_DAYS {
        KnowledgeState::Stale {
            age_days,
            last_updated: updated.date_naive(),
        }
    } else {
        KnowledgeState::Fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn located() -> ProjectLocation {
        ProjectLocation {
            root: PathBuf::from("/work"),
            monorepo: false,
        }
    }

    fn initialized_facts() -> ProjectFacts {
        ProjectFacts {
            location: Some(located()),
            opted_out: false,
            root_document: Some(format!("See {KNOWLEDGE_FILE_NAME} before coding.\n")),
            knowledge_mtime: None,
        }
    }

    fn mtime_days_ago(now: DateTime<Utc>, days: i64) -> SystemTime {
        SystemTime::from(now - TimeDelta::days(days))
    }

    #[test]
    fn no_location_is_terminal() {
        let facts = ProjectFacts {
            // Opt-out and init markers must not be consulted without a project.
            opted_out: true,
            ..ProjectFacts::default()
        };
        assert_eq!(evaluate(&facts, Utc::now()), KnowledgeState::NoProject);
    }

    #[test]
    fn opt_out_wins_over_initialization_checks() {
        let facts = ProjectFacts {
            opted_out: true,
            ..initialized_facts()
        };
        assert_eq!(evaluate(&facts, Utc::now()), KnowledgeState::OptedOut);
    }

    #[rstest]
    #[case::missing_root_document(None)]
    #[case::reference_absent(Some("# Notes\nnothing relevant\n".to_string()))]
    fn uninitialized_when_reference_is_absent(#[case] root_document: Option<String>) {
        let facts = ProjectFacts {
            root_document,
            ..initialized_facts()
        };
        assert_eq!(
            evaluate(&facts, Utc::now()),
            KnowledgeState::Uninitialized { location: located() }
        );
    }

    #[test]
    fn missing_knowledge_file_reads_as_fresh() {
        assert_eq!(evaluate(&initialized_facts(), Utc::now()), KnowledgeState::Fresh);
    }

    #[rstest]
    #[case::recent(3, false)]
    #[case::exactly_at_threshold(30, false)]
    #[case::just_past_threshold(31, true)]
    #[case::long_past_threshold(45, true)]
    fn staleness_threshold_is_strictly_exceeded(#[case] days: i64, #[case] stale: bool) {
        let now = Utc::now();
        let facts = ProjectFacts {
            knowledge_mtime: Some(mtime_days_ago(now, days)),
            ..initialized_facts()
        };

        match evaluate(&facts, now) {
            KnowledgeState::Stale { age_days, last_updated } => {
                assert!(stale, "expected fresh at {days} days");
                assert_eq!(age_days, days);
                assert_eq!(last_updated, (now - TimeDelta::days(days)).date_naive());
            }
            KnowledgeState::Fresh => assert!(!stale, "expected stale at {days} days"),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn evaluation_is_reproducible_from_the_same_inputs() {
        let now = Utc::now();
        let facts = ProjectFacts {
            knowledge_mtime: Some(mtime_days_ago(now, 45)),
            ..initialized_facts()
        };
        assert_eq!(evaluate(&facts, now), evaluate(&facts, now));
    }

    #[test]
    fn gather_reads_all_facts_from_a_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = temp_dir.path();
        std::fs::write(workspace.join("Clarinet.toml"), "[project]\n").unwrap();
        std::fs::write(
            workspace.join("CLAUDE.md"),
            format!("Read {KNOWLEDGE_FILE_NAME} first.\n"),
        )
        .unwrap();
        let layout = KnowledgeLayout::new(workspace);
        std::fs::create_dir_all(layout.knowledge_dir()).unwrap();
        std::fs::write(layout.knowledge_file(), "# knowledge\n").unwrap();

        let facts = ProjectFacts::gather(workspace);

        assert!(facts.location.is_some());
        assert!(!facts.opted_out);
        assert!(facts.root_document.is_some());
        assert!(facts.knowledge_mtime.is_some());
        assert_eq!(evaluate(&facts, Utc::now()), KnowledgeState::Fresh);
    }

    #[test]
    fn gather_sees_the_opt_out_marker() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = temp_dir.path();
        std::fs::write(workspace.join("Clarinet.toml"), "[project]\n").unwrap();
        let layout = KnowledgeLayout::new(workspace);
        std::fs::create_dir_all(layout.knowledge_dir()).unwrap();
        std::fs::write(layout.opt_out_marker(), "").unwrap();

        let facts = ProjectFacts::gather(workspace);
        assert_eq!(evaluate(&facts, Utc::now()), KnowledgeState::OptedOut);
    }
}
