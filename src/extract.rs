use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use log::{debug, warn};
use lopdf::Document;

use crate::error::{Result, SearchError};

/// Source of plain page text for a document.
///
/// Implementations return one string per page, page 1 first. A file that
/// cannot be parsed as a document must be reported as
/// [`SearchError::CorruptDocument`] so the pipeline can skip it.
pub trait PageExtractor: Sync {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;
}

impl<T: PageExtractor + ?Sized> PageExtractor for &T {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        (**self).extract_pages(path)
    }
}

/// Extracts page text with lopdf.
///
/// Loading is lenient: a document lopdf can open at all is searched, and a
/// page whose content stream fails to decode is treated as having no text.
/// Image-only pages carry no text layer and come back empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for LopdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|e| SearchError::io(path, e))?;
        let document = load_document(path, &bytes)?;

        let pages = document.get_pages();
        debug!("{}: {} pages", path.display(), pages.len());

        let texts = pages
            .keys()
            .map(|&page_number| page_text(&document, path, page_number))
            .collect();
        Ok(texts)
    }
}

fn load_document(path: &Path, bytes: &[u8]) -> Result<Document> {
    // Malformed fonts and xref tables can make the parser panic
    let loaded = panic::catch_unwind(AssertUnwindSafe(|| Document::load_mem(bytes)));

    match loaded {
        Ok(Ok(document)) => Ok(document),
        Ok(Err(e)) => Err(SearchError::CorruptDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
        Err(_) => Err(SearchError::CorruptDocument {
            path: path.to_path_buf(),
            reason: "parser panicked".to_string(),
        }),
    }
}

fn page_text(document: &Document, path: &Path, page_number: u32) -> String {
    let extracted = panic::catch_unwind(AssertUnwindSafe(|| document.extract_text(&[page_number])));

    match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(
                "No text from page {} of {}: {}",
                page_number,
                path.display(),
                e
            );
            String::new()
        }
        Err(_) => {
            warn!(
                "Text extraction panicked on page {} of {}",
                page_number,
                path.display()
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.pdf");
        fs::write(&path, b"this is not a pdf at all").unwrap();

        match LopdfExtractor::new().extract_pages(&path) {
            Err(SearchError::CorruptDocument { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected CorruptDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.pdf");

        assert!(matches!(
            LopdfExtractor::new().extract_pages(&path),
            Err(SearchError::Io { .. })
        ));
    }
}
