//! Hook binary for the hosting assistant runtime
//!
//! Reads one JSON payload from stdin, dispatches to the handler for the
//! invoked event, and writes at most one JSON payload to stdout. Always
//! exits 0: a broken hook must never take the host session down with it.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use docsync_hooks::{HookInput, HookOutput, clarity, knowledge, session_start};

#[derive(Parser, Debug)]
#[command(name = "docsync-hook")]
#[command(author, version, about = "Stacks docsync lifecycle hooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    event: Event,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Event {
    /// Report plugin state at session start
    SessionStart,
    /// Inject the knowledge directive for Stacks-related prompts
    UserPrompt,
    /// Inject the Clarity function reference after contract edits
    PostEdit,
}

fn main() {
    let cli = Cli::parse();

    // The runtime renders the embedded styling itself; stdout being a pipe
    // must not strip it.
    colored::control::set_override(true);

    let input = read_input();
    let workspace = input
        .cwd
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let output = match cli.event {
        Event::SessionStart => session_start::run(&workspace),
        Event::UserPrompt => knowledge::run(&input, &workspace),
        Event::PostEdit => clarity::run(&input),
    };

    if let Some(output) = output {
        emit(&output);
    }
}

/// Parse the stdin payload, tolerating absent or malformed input.
fn read_input() -> HookInput {
    let mut raw = String::new();
    if std::io::stdin().read_to_string(&mut raw).is_err() {
        return HookInput::default();
    }
    serde_json::from_str(&raw).unwrap_or_default()
}

fn emit(output: &HookOutput) {
    match serde_json::to_string(output) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("docsync-hook: failed to serialize output: {err}"),
    }
}
