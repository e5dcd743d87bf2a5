//! Marker-delimited patching
//!
//! Replaces the region between two sentinel comments in a knowledge file
//! with a freshly compressed index, leaving everything else untouched.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::io;

/// A start/end sentinel pair delimiting the replaceable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl MarkerPair<'static> {
    /// The sentinels wrapping the compressed docs index in knowledge files
    pub const DOCS_INDEX: Self = Self {
        start: "<!--DOCS-INDEX-START-->",
        end: "<!--DOCS-INDEX-END-->",
    };
}

impl<'a> MarkerPair<'a> {
    /// Replace everything strictly between the markers with `payload`.
    ///
    /// The markers themselves are preserved verbatim. The end marker must
    /// occur after the start marker; an out-of-order end marker is reported
    /// as missing, since the required ordered pair is absent.
    pub fn patch(&self, document: &str, payload: &str) -> Result<String> {
        let start = document
            .find(self.start)
            .ok_or_else(|| Error::missing_marker(self.start))?;
        let content_start = start + self.start.len();

        let end = document[content_start..]
            .find(self.end)
            .map(|rel| content_start + rel)
            .ok_or_else(|| Error::missing_marker(self.end))?;

        let mut result =
            String::with_capacity(content_start + payload.len() + (document.len() - end));
        result.push_str(&document[..content_start]);
        result.push_str(payload);
        result.push_str(&document[end..]);
        Ok(result)
    }

    /// Patch a file on disk: read, splice, write back atomically.
    ///
    /// If either marker is absent the file is left byte-identical.
    pub fn patch_file(&self, path: &Path, payload: &str) -> Result<()> {
        let document = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let patched = self.patch(&document, payload)?;
        io::write_atomic(path, patched.as_bytes())
    }
}
