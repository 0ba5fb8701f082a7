use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::error::{Result, SearchError};

/// Suffix a directory entry must carry to be picked up by a scan. Matched
/// case-sensitively, so `report.PDF` is left out.
pub const PDF_SUFFIX: &str = ".pdf";

/// Ordered PDF paths selected for the next search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }

    /// Appends another list, keeping both orders. Paths already present are
    /// not added a second time.
    pub fn append(&mut self, other: FileList) {
        for path in other.paths {
            if !self.contains(&path) {
                self.paths.push(path);
            }
        }
    }
}

impl From<Vec<PathBuf>> for FileList {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl IntoIterator for FileList {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Collect the PDF files sitting directly inside `dir`.
///
/// Subdirectories are not descended into. A symlink is kept when it points
/// at a regular file; dangling links are left out. The result keeps the order
/// the directory listing yields, which depends on the platform. A listing
/// that cannot be read is an error, not an empty result.
pub fn collect_from_directory(dir: &Path) -> Result<FileList> {
    if !dir.is_dir() {
        return Err(SearchError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            SearchError::io(path, io::Error::from(e))
        })?;

        if !has_pdf_suffix(entry.file_name()) {
            continue;
        }
        // Follows symlinks, unlike the entry's own file type
        if !entry.path().is_file() {
            continue;
        }
        debug!("Collected {}", entry.path().display());
        paths.push(entry.into_path());
    }

    info!("Found {} PDF files in {}", paths.len(), dir.display());
    Ok(FileList::from(paths))
}

/// Case-sensitive suffix test on the raw name, so names that are not valid
/// UTF-8 still qualify
fn has_pdf_suffix(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(PDF_SUFFIX.as_bytes())
}

/// Wrap an explicit selection. The paths are expected to have been filtered
/// already (for example by a file dialog) and are returned as given.
pub fn collect_from_files<I, P>(paths: I) -> FileList
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    FileList::from(paths.into_iter().map(Into::into).collect::<Vec<_>>())
}
