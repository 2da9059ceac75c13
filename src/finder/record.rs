//! Match records
//!
//! A record is the output unit of a search: one file that passed every filter.

use std::path::{Path, PathBuf};

/// One file that passed every active filter
///
/// The size is always known because the size filters need it, but it is only
/// reported through [`MatchRecord::size_bytes`] when size display was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    name: String,
    size: u64,
    show_size: bool,
    path: Option<PathBuf>,
}

impl MatchRecord {
    /// Create a record. `path` should be `None` unless path display was
    /// requested; `show_size` controls whether `size_bytes` reports the size.
    pub fn new(name: String, size: u64, show_size: bool, path: Option<PathBuf>) -> Self {
        Self { name, size, show_size, path }
    }

    /// File name including its extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes, if size display was requested
    pub fn size_bytes(&self) -> Option<u64> {
        self.show_size.then_some(self.size)
    }

    /// Path of the file, if path display was requested
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Size used for ordering, available whether or not it is displayed
    pub(crate) fn sort_size(&self) -> u64 {
        self.size
    }
}
