//! Clarity edit guard
//!
//! After an edit to a `.clar` file, injects the official Clarity function
//! reference so the model verifies functions against the live docs. When
//! the reference cannot be fetched, falls back to a fetch-it-yourself
//! instruction. The hook itself never fails.

use docsync_fetch::{CLARITY_FUNCTIONS_URL, REFERENCE_TIMEOUT, fetch_text};

use crate::envelope::{HookInput, HookOutput};

/// Bodies at or below this size are treated as a failed fetch
const MIN_REFERENCE_BYTES: usize = 100;

/// Build the function-verification context for a tool-use payload.
///
/// Non-Clarity files produce no output; fetch failures degrade to the
/// fallback instruction rather than erroring.
pub fn run(input: &HookInput) -> Option<HookOutput> {
    if !input.tool_input.file_path.ends_with(".clar") {
        return None;
    }

    let reference = match fetch_text(CLARITY_FUNCTIONS_URL, REFERENCE_TIMEOUT) {
        Ok(body) => Some(body),
        Err(err) => {
            tracing::debug!(%err, "function reference fetch failed, using fallback");
            None
        }
    };

    Some(HookOutput {
        additional_context: Some(build_context(reference.as_deref())),
        ..HookOutput::default()
    })
}

fn build_context(reference: Option<&str>) -> String {
    match reference {
        Some(doc) if doc.len() > MIN_REFERENCE_BYTES => format!(
            "CLARITY FILE EDIT DETECTED - FUNCTION VERIFICATION REQUIRED:\n\
             \n\
             You are editing a Clarity smart contract. ONLY use functions that exist in the official Clarity reference below.\n\
             \n\
             RULES:\n\
             1. ONLY use functions documented below - do NOT invent functions\n\
             2. Verify argument types and order match the documentation\n\
             3. If a function you want doesn't exist below, it doesn't exist in Clarity\n\
             \n\
             === OFFICIAL CLARITY FUNCTIONS REFERENCE ===\n\
             \n\
             {doc}\n\
             \n\
             === END REFERENCE ===\n\
             \n\
             Use ONLY the functions documented above."
        ),
        _ => format!(
            "CLARITY FILE EDIT DETECTED - FUNCTION VERIFICATION REQUIRED:\n\
             \n\
             You are editing a Clarity smart contract. Before proceeding:\n\
             \n\
             1. Fetch the official Clarity functions reference: {CLARITY_FUNCTIONS_URL}\n\
             2. ONLY use functions documented in that reference\n\
             3. Do NOT invent or assume functions exist\n\
             4. Verify argument types and order match the documentation\n\
             \n\
             If a function you want to use is not in the official docs, it does not exist in Clarity."
        ),
    }
}
