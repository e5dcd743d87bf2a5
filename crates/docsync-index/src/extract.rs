//! Page-list scanning
//!
//! Pulls site-relative documentation paths out of a raw line-oriented
//! document, such as an `llms.txt` page listing.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern to match a markdown hyperlink with a site-absolute target
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\((/[^)]+)\)").unwrap());

/// Pattern to match a bullet-listed raw path, optionally backtick-quoted
static RAW_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^- `?(/[a-z0-9\-/]+\.md)`?").unwrap());

/// Section headers that disable extraction for the remainder of the document
const EXCLUDED_SECTIONS: [&str; 2] = ["## Press", "## Stacks Brand"];

/// Locale segments excluded from the index (non-English mirrors)
const EXCLUDED_LOCALES: [&str; 2] = ["/zh/", "/es/"];

/// Scan `text` for documentation paths, in source order.
///
/// Duplicates are preserved; deduplication happens at grouping time.
/// The returned iterator is cheap to construct, so callers that need to
/// traverse twice simply call this again on the same text.
pub fn doc_paths(text: &str) -> DocPaths<'_> {
    DocPaths {
        lines: text.lines(),
        skipping: false,
    }
}

/// Iterator over the documentation paths found in a page-list document.
///
/// Carries a one-way latch: once a line opens an excluded section, no
/// further line yields a path. The latch is never cleared, matching the
/// established index format.
pub struct DocPaths<'a> {
    lines: std::str::Lines<'a>,
    skipping: bool,
}

impl<'a> Iterator for DocPaths<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for line in self.lines.by_ref() {
            if EXCLUDED_SECTIONS.iter().any(|h| line.starts_with(h)) {
                self.skipping = true;
            }
            if self.skipping {
                continue;
            }
            let Some(path) = match_line(line) else {
                continue;
            };
            if EXCLUDED_LOCALES.iter().any(|seg| path.contains(seg)) {
                continue;
            }
            return Some(path);
        }
        None
    }
}

/// Try the two recognized line shapes in order; first match wins.
fn match_line(line: &str) -> Option<&str> {
    if let Some(cap) = LINK_PATTERN.captures(line) {
        return cap.get(1).map(|m| m.as_str());
    }
    RAW_PATH_PATTERN
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
