//! End-to-end test of the detection path
//!
//! Builds Clarinet workspaces on disk and walks them through
//! locate -> gather -> evaluate, including the session-start hook output.

use chrono::{TimeDelta, Utc};
use docsync_hooks::session_start;
use docsync_project::{
    KNOWLEDGE_FILE_NAME, KnowledgeLayout, KnowledgeState, ProjectFacts, evaluate, locate_project,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_clarinet_toml(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("Clarinet.toml"),
        "[project]\nname = \"counter\"\n",
    )
    .unwrap();
}

fn initialize(workspace: &Path) {
    fs::write(
        workspace.join("CLAUDE.md"),
        format!("## Stacks\n\nRead .claude/stacks/knowledge/{KNOWLEDGE_FILE_NAME} first.\n"),
    )
    .unwrap();
    let layout = KnowledgeLayout::new(workspace);
    fs::create_dir_all(layout.knowledge_dir()).unwrap();
    fs::write(layout.knowledge_file(), "# General Stacks Knowledge\n").unwrap();
}

#[test]
fn monorepo_contracts_layout_is_detected() {
    let temp = TempDir::new().unwrap();
    write_clarinet_toml(&temp.path().join("contracts"));

    let location = locate_project(temp.path()).unwrap();
    assert_eq!(location.root, temp.path().join("contracts"));
    assert!(location.monorepo);
}

#[test]
fn fresh_workspace_evaluates_quiet_end_to_end() {
    let temp = TempDir::new().unwrap();
    write_clarinet_toml(temp.path());
    initialize(temp.path());

    let facts = ProjectFacts::gather(temp.path());
    assert_eq!(evaluate(&facts, Utc::now()), KnowledgeState::Fresh);
    assert_eq!(session_start::run(temp.path()), None);
}

#[test]
fn uninitialized_monorepo_reports_through_the_hook() {
    let temp = TempDir::new().unwrap();
    write_clarinet_toml(&temp.path().join("packages/contracts"));

    let facts = ProjectFacts::gather(temp.path());
    match evaluate(&facts, Utc::now()) {
        KnowledgeState::Uninitialized { location } => {
            assert_eq!(location.root, temp.path().join("packages/contracts"));
            assert!(location.monorepo);
        }
        other => panic!("unexpected state: {other:?}"),
    }

    let output = session_start::run(temp.path()).unwrap();
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"hookEventName\":\"SessionStart\""));
    assert!(json.contains("suppressOutput"));
}

#[test]
fn old_knowledge_file_evaluates_stale_with_age() {
    let temp = TempDir::new().unwrap();
    write_clarinet_toml(temp.path());
    initialize(temp.path());

    // Backdate the mtime through the facts snapshot; filesystem timestamps
    // are not portable to set directly.
    let now = Utc::now();
    let facts = ProjectFacts {
        knowledge_mtime: Some((now - TimeDelta::days(45)).into()),
        ..ProjectFacts::gather(temp.path())
    };

    match evaluate(&facts, now) {
        KnowledgeState::Stale {
            age_days,
            last_updated,
        } => {
            assert_eq!(age_days, 45);
            assert_eq!(last_updated, (now - TimeDelta::days(45)).date_naive());
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[test]
fn opt_out_marker_silences_an_uninitialized_project() {
    let temp = TempDir::new().unwrap();
    write_clarinet_toml(temp.path());
    let layout = KnowledgeLayout::new(temp.path());
    fs::create_dir_all(layout.knowledge_dir()).unwrap();
    fs::write(layout.opt_out_marker(), "").unwrap();

    let facts = ProjectFacts::gather(temp.path());
    assert_eq!(evaluate(&facts, Utc::now()), KnowledgeState::OptedOut);
    assert_eq!(session_start::run(temp.path()), None);
}
