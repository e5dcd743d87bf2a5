//! Documentation index pipeline for stacks-docsync
//!
//! Turns a raw page-list document into a single-line compressed index and
//! splices it into a knowledge file between sentinel markers:
//!
//! ```text
//! raw text --extract--> doc paths --compress--> index line --patch--> file
//! ```
//!
//! Extraction and compression never fail; malformed lines are simply
//! non-matches. Patching is the only fallible step, and it either rewrites
//! the whole file or leaves it untouched.

pub mod compress;
pub mod error;
pub mod extract;
pub mod io;
pub mod patch;

pub use compress::{CompressedIndex, DirectoryGroups, INDEX_HEADER, ROOT_GROUP, compress};
pub use error::{Error, Result};
pub use extract::{DocPaths, doc_paths};
pub use patch::MarkerPair;
