//! Options for file finding
//!
//! This module provides the search request consumed by the finder: which
//! names, extensions and sizes to match, where to look, and how to report.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::Cli;

/// Field used to order the results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// File name, lexicographic
    Name,
    /// File size in bytes, numeric
    Size,
    /// Full path, lexicographic
    Path,
}

/// Options for configuring the file finding process
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Directory to search
    pub root: PathBuf,

    /// Text matched against the file name without its extension
    pub name_pattern: String,

    /// Text matched against the extension (leading dot optional)
    pub extension_pattern: String,

    /// Require the base name to equal the pattern
    pub exact_name: bool,

    /// Require the extension to equal the pattern
    pub exact_extension: bool,

    /// Compare names without case folding. Extensions are always folded.
    pub case_sensitive: bool,

    /// Inclusive lower bound in KiB
    pub min_size_kib: Option<u64>,

    /// Inclusive upper bound in KiB
    pub max_size_kib: Option<u64>,

    /// Exact size in bytes
    pub exact_size_bytes: Option<u64>,

    /// Populate `MatchRecord::size_bytes`
    pub show_size: bool,

    /// Populate `MatchRecord::path`
    pub show_path: bool,

    /// Result ordering; `None` keeps traversal order
    pub sort_key: Option<SortKey>,

    /// Maximum depth to search
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links into directories
    pub follow_links: bool,
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("."),
            name_pattern: String::new(),
            extension_pattern: String::new(),
            exact_name: false,
            exact_extension: false,
            case_sensitive: false,
            min_size_kib: None,
            max_size_kib: None,
            exact_size_bytes: None,
            show_size: false,
            show_path: false,
            sort_key: None,
            max_depth: None,
            follow_links: false,
        }
    }

    /// Set the directory to search
    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = root.into();
        self
    }

    /// Set the name pattern and whether it must match exactly
    pub fn with_name(mut self, pattern: impl Into<String>, exact: bool) -> Self {
        self.name_pattern = pattern.into();
        self.exact_name = exact;
        self
    }

    /// Set the extension pattern and whether it must match exactly
    pub fn with_extension(mut self, pattern: impl Into<String>, exact: bool) -> Self {
        self.extension_pattern = pattern.into();
        self.exact_extension = exact;
        self
    }

    /// Set whether name matching is case sensitive
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the inclusive KiB size bounds
    pub fn with_size_range(mut self, min_kib: Option<u64>, max_kib: Option<u64>) -> Self {
        self.min_size_kib = min_kib;
        self.max_size_kib = max_kib;
        self
    }

    /// Set the exact size in bytes
    pub fn with_exact_size(mut self, bytes: Option<u64>) -> Self {
        self.exact_size_bytes = bytes;
        self
    }

    /// Set which optional fields the match records carry
    pub fn with_display(mut self, show_size: bool, show_path: bool) -> Self {
        self.show_size = show_size;
        self.show_path = show_path;
        self
    }

    /// Set the result ordering
    pub fn with_sort_key(mut self, sort_key: Option<SortKey>) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Set the maximum depth to search
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Create FindOptions from CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_root(&cli.target_dir)
            .with_name(cli.name.as_str(), cli.exact_name)
            .with_extension(cli.extension.as_str(), cli.exact_extension)
            .with_case_sensitive(cli.case_sensitive)
            .with_size_range(cli.min_size, cli.max_size)
            .with_exact_size(cli.size)
            .with_display(cli.show_size, cli.show_path)
            .with_sort_key(cli.sort)
            .with_max_depth(cli.max_depth)
            .with_follow_links(cli.follow_links)
    }

    /// Inclusive byte bounds derived from the KiB settings
    pub fn size_bounds_bytes(&self) -> (Option<u64>, Option<u64>) {
        let to_bytes = |kib: u64| kib.saturating_mul(1024);
        (self.min_size_kib.map(to_bytes), self.max_size_kib.map(to_bytes))
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}
