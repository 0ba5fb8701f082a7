use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::collect::FileList;
use crate::error::{Result, SearchError};
use crate::extract::{LopdfExtractor, PageExtractor};
use crate::matcher::{MatchMode, TermMatcher};

/// A search term plus the files it applies to
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub term: String,
    pub files: FileList,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>, files: FileList) -> Self {
        Self {
            term: term.into(),
            files,
        }
    }
}

/// One page of one file on which the term was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMatch {
    pub path: PathBuf,
    /// 1-based
    pub page: usize,
    pub term: String,
}

impl PageMatch {
    pub fn new(path: impl Into<PathBuf>, page: usize, term: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            page,
            term: term.into(),
        }
    }
}

/// Matches of one search, grouped by file in search order and by ascending
/// page within a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    NotFound,
    /// Never empty
    Found(Vec<PageMatch>),
}

impl SearchResult {
    pub fn from_matches(matches: Vec<PageMatch>) -> Self {
        if matches.is_empty() {
            SearchResult::NotFound
        } else {
            SearchResult::Found(matches)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchResult::NotFound)
    }

    pub fn matches(&self) -> &[PageMatch] {
        match self {
            SearchResult::NotFound => &[],
            SearchResult::Found(matches) => matches,
        }
    }

    /// Consecutive matches of the same file folded into one entry
    pub fn by_file(&self) -> Vec<(&Path, Vec<usize>)> {
        let mut groups: Vec<(&Path, Vec<usize>)> = Vec::new();
        for m in self.matches() {
            match groups.last_mut() {
                Some((path, pages)) if *path == m.path.as_path() => pages.push(m.page),
                _ => groups.push((m.path.as_path(), vec![m.page])),
            }
        }
        groups
    }
}

/// A file left out of the search because it could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of a search together with the files it had to skip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub skipped: Vec<SkippedFile>,
}

/// Per-file scan result before aggregation
enum FileScan {
    Pages(Vec<usize>),
    Skipped(SkippedFile),
}

/// Search the files for the term with the default lopdf extractor, treating
/// the term as a case-insensitive regular expression.
pub fn search(file_list: FileList, term: &str) -> Result<SearchOutcome> {
    Searcher::new().search(file_list, term)
}

/// Configurable search pipeline.
///
/// Every file is opened by exactly one worker. With more than one job the
/// files are spread over a dedicated rayon pool, but the output order is
/// always file order, then page order.
pub struct Searcher<E = LopdfExtractor> {
    extractor: E,
    mode: MatchMode,
    jobs: usize,
    progress: ProgressBar,
}

impl Searcher<LopdfExtractor> {
    pub fn new() -> Self {
        Self::with_extractor(LopdfExtractor::new())
    }
}

impl Default for Searcher<LopdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PageExtractor> Searcher<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            mode: MatchMode::default(),
            jobs: 1,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Number of files searched at once. `1` keeps everything on the calling
    /// thread, `0` lets rayon pick from the number of CPUs.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Progress bar advanced once per finished file
    pub fn progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn execute(&self, request: SearchRequest) -> Result<SearchOutcome> {
        self.search(request.files, &request.term)
    }

    /// Run one search. The file list is consumed; a new selection is needed
    /// for the next search.
    pub fn search(&self, file_list: FileList, term: &str) -> Result<SearchOutcome> {
        let matcher = TermMatcher::new(term, self.mode)?;
        let paths = file_list.into_vec();
        self.progress.set_length(paths.len() as u64);

        let scans = self.scan_all(&paths, &matcher)?;

        let mut matches = Vec::new();
        let mut skipped = Vec::new();
        for (path, scan) in paths.into_iter().zip(scans) {
            match scan {
                FileScan::Pages(pages) => matches.extend(
                    pages
                        .into_iter()
                        .map(|page| PageMatch::new(path.clone(), page, matcher.term())),
                ),
                FileScan::Skipped(file) => skipped.push(file),
            }
        }

        info!(
            "Search for {:?} finished: {} matching pages, {} skipped files",
            term,
            matches.len(),
            skipped.len()
        );

        Ok(SearchOutcome {
            result: SearchResult::from_matches(matches),
            skipped,
        })
    }

    /// Scan every file in order. The first fatal error ends the search; on
    /// the sequential path no later file is opened after it.
    fn scan_all(&self, paths: &[PathBuf], matcher: &TermMatcher) -> Result<Vec<FileScan>> {
        if self.jobs == 1 || paths.len() < 2 {
            return self.scan_sequential(paths, matcher);
        }

        match ThreadPoolBuilder::new().num_threads(self.jobs).build() {
            Ok(pool) => {
                let scans: Vec<Result<FileScan>> = pool.install(|| {
                    paths
                        .par_iter()
                        .map(|p| self.scan_file(p, matcher))
                        .collect()
                });
                // Report the earliest failing file, whatever finished first
                scans.into_iter().collect()
            }
            Err(e) => {
                warn!("Could not start worker pool, searching sequentially: {}", e);
                self.scan_sequential(paths, matcher)
            }
        }
    }

    fn scan_sequential(&self, paths: &[PathBuf], matcher: &TermMatcher) -> Result<Vec<FileScan>> {
        paths.iter().map(|p| self.scan_file(p, matcher)).collect()
    }

    fn scan_file(&self, path: &Path, matcher: &TermMatcher) -> Result<FileScan> {
        let scan = match self.extractor.extract_pages(path) {
            Ok(pages) => {
                let hits: Vec<usize> = pages
                    .iter()
                    .enumerate()
                    .filter(|(_, text)| matcher.is_match(text))
                    .map(|(index, _)| index + 1)
                    .collect();
                debug!(
                    "{}: {} of {} pages match",
                    path.display(),
                    hits.len(),
                    pages.len()
                );
                FileScan::Pages(hits)
            }
            Err(SearchError::CorruptDocument { path, reason }) => {
                warn!("Skipping {}: {}", path.display(), reason);
                FileScan::Skipped(SkippedFile { path, reason })
            }
            Err(e) => return Err(e),
        };

        self.progress.inc(1);
        Ok(scan)
    }
}
