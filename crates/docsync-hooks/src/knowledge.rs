//! Prompt-time knowledge injection
//!
//! When a prompt looks Stacks-related (or the workspace is a Clarinet
//! project) and the local knowledge file exists, injects a mandatory
//! read-this-first directive so the model consults current material
//! instead of its training data.

use std::path::Path;

use docsync_project::{KnowledgeLayout, KnowledgePath, locate_project};

use crate::envelope::{HookInput, HookOutput};

/// Prompt substrings that mark a request as Stacks-related
const STACKS_KEYWORDS: [&str; 14] = [
    "clarity",
    "contract",
    ".clar",
    "stacks",
    "clarinet",
    "stx",
    "sip-010",
    "sip-009",
    "devnet",
    "testnet",
    "post-condition",
    "principal",
    "define-public",
    "define-read-only",
];

/// Build the knowledge directive for a prompt, if it applies.
pub fn run(input: &HookInput, workspace: &Path) -> Option<HookOutput> {
    let prompt = input.prompt.to_lowercase();
    let keyword_hit = STACKS_KEYWORDS.iter().any(|kw| prompt.contains(kw));
    let in_project = locate_project(workspace).is_some();

    if !keyword_hit && !in_project {
        return None;
    }

    let layout = KnowledgeLayout::new(workspace);
    if !layout.knowledge_file().is_file() {
        return None;
    }

    Some(HookOutput {
        additional_context: Some(directive()),
        ..HookOutput::default()
    })
}

fn directive() -> String {
    format!(
        "STACKS PROJECT DETECTED - MANDATORY FIRST STEP:\n\
         \n\
         Before planning or executing ANY work in this Stacks project, you MUST read the knowledge file:\n\
         {}\n\
         \n\
         This file contains:\n\
         - Current Clarity best practices (your training data may be outdated)\n\
         - Testing patterns with Clarinet SDK\n\
         - Common mistakes and how to avoid them\n\
         - Frontend integration patterns\n\
         \n\
         If you are creating a plan, include \"Read Stacks knowledge file\" as Step 1.\n\
         If you are executing, read this file before writing any code.\n\
         \n\
         DO NOT SKIP THIS STEP - the knowledge file contains critical information that differs from your training data.",
        KnowledgePath::KnowledgeFile
    )
}
