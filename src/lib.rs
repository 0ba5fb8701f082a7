//! Find which pages of which PDF files contain a search term.
//!
//! Files are picked with [`collect`] (a directory scan or an explicit list),
//! searched page by page with [`search`], and rendered with [`report`].

pub mod collect;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod report;
pub mod search;
pub mod selection;

#[cfg(feature = "gui")]
pub mod gui;

pub use collect::{collect_from_directory, collect_from_files, FileList};
pub use error::{Result, SearchError};
pub use extract::{LopdfExtractor, PageExtractor};
pub use matcher::{MatchMode, TermMatcher};
pub use search::{search, PageMatch, SearchOutcome, SearchRequest, SearchResult, Searcher, SkippedFile};
pub use selection::{PendingFiles, SelectionPolicy};
