use std::path::{Path, PathBuf};

use log::debug;

use crate::collect::{collect_from_directory, collect_from_files, FileList};
use crate::error::Result;

/// What a new pick does to files that are already pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// The new pick replaces whatever was pending
    #[default]
    Replace,
    /// The new pick is added after whatever was pending; a file already
    /// pending is not listed twice
    Append,
}

/// Files waiting for the next search
#[derive(Debug, Default)]
pub struct PendingFiles {
    policy: SelectionPolicy,
    files: FileList,
}

impl PendingFiles {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            files: FileList::new(),
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Pick every PDF directly inside `dir`. On error nothing pending changes.
    pub fn select_directory(&mut self, dir: &Path) -> Result<usize> {
        let collected = collect_from_directory(dir)?;
        self.apply(collected);
        Ok(self.files.len())
    }

    pub fn select_files<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.apply(collect_from_files(paths));
        self.files.len()
    }

    pub fn files(&self) -> &[PathBuf] {
        self.files.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Hand the pending files to a search, leaving nothing pending
    pub fn take(&mut self) -> FileList {
        std::mem::take(&mut self.files)
    }

    pub fn clear(&mut self) {
        self.files = FileList::new();
    }

    fn apply(&mut self, picked: FileList) {
        debug!("Selected {} files ({:?})", picked.len(), self.policy);
        match self.policy {
            SelectionPolicy::Replace => self.files = picked,
            SelectionPolicy::Append => self.files.append(picked),
        }
    }
}
