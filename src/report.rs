use std::fmt::Write;

use crate::search::{SearchResult, SkippedFile};

/// Text shown when nothing matched
pub const NOT_FOUND: &str = "Not found";

/// Render a search result for display.
///
/// Each file with hits becomes one entry:
///
/// ```text
/// "foo" found on page(s) 2, 5, in file:
/// /docs/a.pdf
/// ```
pub fn render(result: &SearchResult) -> String {
    let mut out = String::new();

    if result.is_not_found() {
        out.push_str(NOT_FOUND);
        out.push('\n');
        return out;
    }

    let term = result.matches().first().map_or("", |m| m.term.as_str());
    for (path, pages) in result.by_file() {
        let page_list: String = pages.iter().map(|page| format!("{}, ", page)).collect();
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "\"{}\" found on page(s) {}in file:\n{}\n",
            term,
            page_list,
            path.display()
        );
    }
    out
}

/// One line per file that was skipped as unreadable
pub fn render_skipped(skipped: &[SkippedFile]) -> String {
    skipped
        .iter()
        .map(|file| format!("Skipped {}: {}\n", file.path.display(), file.reason))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PageMatch;
    use std::path::PathBuf;

    #[test]
    fn test_single_page() {
        let result = SearchResult::from_matches(vec![PageMatch::new("a.pdf", 2, "foo")]);
        assert_eq!(render(&result), "\"foo\" found on page(s) 2, in file:\na.pdf\n");
    }

    #[test]
    fn test_pages_are_grouped_per_file() {
        let result = SearchResult::from_matches(vec![
            PageMatch::new("a.pdf", 2, "foo"),
            PageMatch::new("a.pdf", 5, "foo"),
            PageMatch::new("b.pdf", 1, "foo"),
        ]);

        assert_eq!(
            render(&result),
            "\"foo\" found on page(s) 2, 5, in file:\na.pdf\n\
             \"foo\" found on page(s) 1, in file:\nb.pdf\n"
        );
    }

    #[test]
    fn test_not_found() {
        assert_eq!(render(&SearchResult::NotFound), "Not found\n");
    }

    #[test]
    fn test_skipped() {
        let skipped = vec![SkippedFile {
            path: PathBuf::from("bad.pdf"),
            reason: "invalid file header".to_string(),
        }];
        assert_eq!(render_skipped(&skipped), "Skipped bad.pdf: invalid file header\n");
        assert_eq!(render_skipped(&[]), "");
    }
}
