//! Hook payload types
//!
//! JSON structures exchanged with the hosting assistant runtime: one input
//! payload on stdin, at most one output payload on stdout. Output field
//! names are camelCase on the wire; absent fields are omitted entirely.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Payload the runtime writes to a hook's stdin
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// The user prompt, for prompt-submit hooks
    #[serde(default)]
    pub prompt: String,

    /// Workspace directory the session runs in
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// Tool invocation details, for tool-use hooks
    #[serde(default)]
    pub tool_input: ToolInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: String,
}

/// Payload a hook may write to stdout
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Styled text the runtime shows to the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_output: Option<bool>,

    /// Context injected into the model conversation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<HookSpecificOutput>,
}

/// Event-specific details nested under `hookSpecificOutput`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks_project_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_last_updated: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_age_days: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}
