//! Lifecycle hooks for the hosting assistant runtime
//!
//! Three hooks, each invoked once per trigger with a JSON payload on stdin:
//!
//! - [`session_start`] — report uninitialized or stale knowledge state
//! - [`knowledge`] — inject the knowledge-file directive on Stacks prompts
//! - [`clarity`] — inject the function reference on Clarity file edits
//!
//! A hook either emits one JSON payload on stdout or stays silent; it never
//! fails the hosting runtime.

pub mod clarity;
pub mod envelope;
pub mod knowledge;
pub mod session_start;

pub use envelope::{HookInput, HookOutput, HookSpecificOutput, ToolInput};
