//! End-to-end test of the index sync path
//!
//! Exercises the complete flow on a fixture page listing:
//! extract -> compress -> patch the knowledge file on disk.

use docsync_index::{INDEX_HEADER, MarkerPair, compress, doc_paths};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const PAGE_LISTING: &str = "\
# Stacks Documentation

## Guides
- [Introduction](/guides/intro.md)
- [Introduction](/guides/intro.md)
- [Advanced](/guides/advanced.md)
- `/reference/clarity/functions.md`

## Translations
- [中文](/zh/guides/intro.md)
- [Español](/es/guides/intro.md)

## Press
- [Press kit](/press/kit.md)

## Stacks Brand
- [Logo pack](/brand/logos.md)
";

fn knowledge_document(index_line: &str) -> String {
    format!(
        "# General Stacks Knowledge\n\nSome prose.\n\n\
         <!--DOCS-INDEX-START-->{index_line}<!--DOCS-INDEX-END-->\n\n\
         More prose.\n"
    )
}

#[test]
fn listing_compresses_to_the_expected_line() {
    let index = compress(PAGE_LISTING);

    // Two intro duplicates count separately; locale and post-press paths do not.
    assert_eq!(index.path_count, 4);
    assert_eq!(
        index.line,
        format!("{INDEX_HEADER}|guides:{{intro.md,advanced.md}}|reference/clarity:{{functions.md}}")
    );
}

#[test]
fn extraction_stops_at_the_first_excluded_section() {
    let paths: Vec<_> = doc_paths(PAGE_LISTING).collect();
    assert!(!paths.iter().any(|p| p.starts_with("/press")));
    assert!(!paths.iter().any(|p| p.starts_with("/brand")));
}

#[test]
fn full_sync_rewrites_only_the_marked_region() {
    let temp = TempDir::new().unwrap();
    let knowledge = temp.path().join("general-stacks-knowledge.md");
    fs::write(&knowledge, knowledge_document("stale index")).unwrap();

    let index = compress(PAGE_LISTING);
    MarkerPair::DOCS_INDEX
        .patch_file(&knowledge, &index.line)
        .unwrap();

    let patched = fs::read_to_string(&knowledge).unwrap();
    assert_eq!(patched, knowledge_document(&index.line));
}

#[test]
fn repeated_sync_is_a_fixed_point() {
    let temp = TempDir::new().unwrap();
    let knowledge = temp.path().join("general-stacks-knowledge.md");
    fs::write(&knowledge, knowledge_document("stale index")).unwrap();

    let index = compress(PAGE_LISTING);
    MarkerPair::DOCS_INDEX
        .patch_file(&knowledge, &index.line)
        .unwrap();
    let first = fs::read_to_string(&knowledge).unwrap();

    let index = compress(PAGE_LISTING);
    MarkerPair::DOCS_INDEX
        .patch_file(&knowledge, &index.line)
        .unwrap();
    let second = fs::read_to_string(&knowledge).unwrap();

    assert_eq!(first, second);
}

#[test]
fn sync_against_a_markerless_file_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let knowledge = temp.path().join("plain.md");
    fs::write(&knowledge, "no markers\n").unwrap();

    let index = compress(PAGE_LISTING);
    let result = MarkerPair::DOCS_INDEX.patch_file(&knowledge, &index.line);

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&knowledge).unwrap(), "no markers\n");
}
