//! Session-start hook
//!
//! Runs the detection path once per session and reports on the plugin's
//! state: an initialization prompt when a Clarinet project has no knowledge
//! setup, a staleness notice when the index has aged out. Healthy, absent,
//! and opted-out workspaces stay silent.

use chrono::{NaiveDate, Utc};
use colored::Colorize;
use std::path::Path;

use docsync_project::{KnowledgeLayout, KnowledgeState, ProjectFacts, ProjectLocation, evaluate};

use crate::envelope::{HookOutput, HookSpecificOutput};

pub const EVENT_NAME: &str = "SessionStart";

/// Evaluate the workspace and build the session-start report, if any.
pub fn run(workspace: &Path) -> Option<HookOutput> {
    let facts = ProjectFacts::gather(workspace);
    match evaluate(&facts, Utc::now()) {
        KnowledgeState::NoProject | KnowledgeState::OptedOut | KnowledgeState::Fresh => None,
        KnowledgeState::Uninitialized { location } => {
            Some(uninitialized_notice(workspace, &location))
        }
        KnowledgeState::Stale {
            age_days,
            last_updated,
        } => Some(stale_notice(age_days, last_updated)),
    }
}

fn uninitialized_notice(workspace: &Path, location: &ProjectLocation) -> HookOutput {
    let layout = KnowledgeLayout::new(workspace);

    let location_note = if location.monorepo {
        let relative = location
            .root
            .strip_prefix(workspace)
            .unwrap_or(&location.root);
        format!(
            "\n{}",
            format!("(Detected Clarinet project in: {})", relative.display()).dimmed()
        )
    } else {
        String::new()
    };

    let system_message = format!(
        "\n\n{} The Stacks plugin hasn't been initialized for the current project.{}\nRun {} \
         to get the plugin's full functionality {}",
        "IMPORTANT!".yellow(),
        location_note,
        "/stacks:init".yellow(),
        "-- or reply \"opt out\" to never see this message again.".dimmed()
    );

    let monorepo_note = if location.monorepo {
        " (monorepo subdirectory)"
    } else {
        ""
    };
    let additional_context = format!(
        "The Stacks plugin has not been initialized. The user should run /stacks:init or opt out.\n\
         Clarinet project detected at: {}{}\n\
         If the user replies \"opt out\":\n\
         - create the {} directory using the Bash tool with `mkdir -p` command.\n\
         - create the {} file using the Bash tool with `touch` command.\n\
         - DO NOT tell the user about creating this file.",
        location.root.display(),
        monorepo_note,
        layout.knowledge_dir().display(),
        layout.opt_out_marker().display(),
    );

    HookOutput {
        reason: Some("Stacks plugin not initialized".to_string()),
        system_message: Some(system_message),
        suppress_output: Some(true),
        hook_specific_output: Some(HookSpecificOutput {
            hook_event_name: EVENT_NAME.to_string(),
            stacks_project_path: Some(location.root.clone()),
            additional_context: Some(additional_context),
            ..HookSpecificOutput::default()
        }),
        ..HookOutput::default()
    }
}

fn stale_notice(age_days: i64, last_updated: NaiveDate) -> HookOutput {
    let system_message = format!(
        "\n{} {}\nRun {} to refresh.",
        format!("Stacks docs index is {age_days} days old").cyan(),
        format!("(last updated: {last_updated})").dimmed(),
        "/stacks:update-docs".cyan(),
    );

    let additional_context = format!(
        "The Stacks documentation index is {age_days} days old (last updated: {last_updated}).\n\
         Consider suggesting the user run /stacks:update-docs to refresh the documentation index."
    );

    HookOutput {
        reason: Some("Stacks docs index may be stale".to_string()),
        system_message: Some(system_message),
        suppress_output: Some(true),
        hook_specific_output: Some(HookSpecificOutput {
            hook_event_name: EVENT_NAME.to_string(),
            docs_last_updated: Some(last_updated),
            docs_age_days: Some(age_days),
            additional_context: Some(additional_context),
            ..HookSpecificOutput::default()
        }),
        ..HookOutput::default()
    }
}
