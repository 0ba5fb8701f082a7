// Integration tests for page text extraction
// These tests build small PDFs with lopdf and read them back page by page

mod common;

use std::fs;

use pdfsearch::{LopdfExtractor, PageExtractor, SearchError};

#[test]
fn test_extracts_one_text_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::pdf_in(dir.path(), "three.pdf", &["first page", "second page", "third page"]);

    let pages = LopdfExtractor::new().extract_pages(&path).unwrap();

    assert_eq!(pages.len(), 3);
    assert!(pages[0].contains("first page"));
    assert!(pages[1].contains("second page"));
    assert!(pages[2].contains("third page"));
}

#[test]
fn test_page_without_text_layer_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::pdf_in(dir.path(), "scan.pdf", &["", "typed text"]);

    let pages = LopdfExtractor::new().extract_pages(&path).unwrap();

    assert_eq!(pages.len(), 2);
    assert!(pages[0].trim().is_empty());
    assert!(pages[1].contains("typed text"));
}

#[test]
fn test_truncated_pdf_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::pdf_in(dir.path(), "whole.pdf", &["some text"]);
    let bytes = fs::read(&path).unwrap();
    let truncated = dir.path().join("truncated.pdf");
    fs::write(&truncated, &bytes[..12]).unwrap();

    match LopdfExtractor::new().extract_pages(&truncated) {
        Err(SearchError::CorruptDocument { path, reason }) => {
            assert_eq!(path, truncated);
            assert!(!reason.is_empty());
        }
        other => panic!("expected CorruptDocument, got {:?}", other),
    }
}

#[test]
fn test_empty_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.pdf");
    fs::write(&path, b"").unwrap();

    assert!(matches!(
        LopdfExtractor::new().extract_pages(&path),
        Err(SearchError::CorruptDocument { .. })
    ));
}
