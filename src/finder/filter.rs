//! File filtering functionality
//!
//! This module provides filters for matching files based on name, extension
//! and size. Each filter is a predicate over a [`Candidate`]; the finder
//! applies them in order and stops at the first one that rejects.

use std::borrow::Cow;
use std::path::Path;

use glob::Pattern;
use log::debug;

use crate::errors::{FindError, FindResult};
use super::options::FindOptions;

/// The parts of a regular file the filters look at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// File name with the extension and its dot removed
    pub base_name: String,
    /// Extension without the dot, empty when there is none
    pub extension: String,
    /// Size in bytes
    pub size: u64,
}

impl Candidate {
    /// Describe the file at `path` with the given size
    ///
    /// A name ending in a dot, such as `foo.`, has no extension and keeps the
    /// dot in its base name.
    pub fn new(path: &Path, size: u64) -> Self {
        let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        if file_name.ends_with('.') {
            return Self {
                base_name: file_name.into_owned(),
                extension: String::new(),
                size,
            };
        }

        let base_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self { base_name, extension, size }
    }
}

/// Trait for file filters
pub trait FileFilter {
    /// Check if the candidate matches the filter
    fn matches(&self, candidate: &Candidate) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Factory for creating filters from search options
pub struct FilterFactory;

impl FilterFactory {
    /// Create the filter chain for `options`, in evaluation order:
    /// name, extension, exact size, size range.
    ///
    /// Filters that would accept every file are left out.
    pub fn create_filters(options: &FindOptions) -> FindResult<Vec<Box<dyn FileFilter>>> {
        let mut filters: Vec<Box<dyn FileFilter>> = Vec::new();

        if options.exact_name || !options.name_pattern.is_empty() {
            filters.push(Box::new(NameFilter::new(
                &options.name_pattern,
                options.exact_name,
                options.case_sensitive,
            )));
        }

        let extension = ExtensionFilter::new(&options.extension_pattern, options.exact_extension)?;
        if options.exact_extension || !extension.pattern.is_empty() {
            filters.push(Box::new(extension));
        }

        if let Some(bytes) = options.exact_size_bytes {
            filters.push(Box::new(ExactSizeFilter::new(bytes)));
        }

        let (min, max) = options.size_bounds_bytes();
        if min.is_some() || max.is_some() {
            filters.push(Box::new(SizeRangeFilter::new(min, max)));
        }

        for filter in &filters {
            debug!("Active filter: {}", filter.description());
        }

        Ok(filters)
    }
}

/// Filter for matching the base name against a pattern
pub struct NameFilter {
    pattern: String,
    exact: bool,
    case_sensitive: bool,
}

impl NameFilter {
    /// Create a new NameFilter
    pub fn new(pattern: &str, exact: bool, case_sensitive: bool) -> Self {
        let pattern = if case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };

        Self { pattern, exact, case_sensitive }
    }
}

impl FileFilter for NameFilter {
    fn matches(&self, candidate: &Candidate) -> bool {
        let name: Cow<'_, str> = if self.case_sensitive {
            Cow::Borrowed(&candidate.base_name)
        } else {
            Cow::Owned(candidate.base_name.to_lowercase())
        };

        if self.exact {
            name == self.pattern.as_str()
        } else {
            self.pattern.is_empty() || name.contains(self.pattern.as_str())
        }
    }

    fn description(&self) -> String {
        let mode = if self.exact { "equals" } else { "contains" };
        let case = if self.case_sensitive { "" } else { " (ignore case)" };
        format!("name{} {} '{}'", case, mode, self.pattern)
    }
}

/// Filter for matching the extension, always ignoring case
pub struct ExtensionFilter {
    pattern: String,
    exact: bool,
    wildcard: Option<Pattern>,
}

impl ExtensionFilter {
    /// Create a new ExtensionFilter. A leading dot on `pattern` is ignored.
    pub fn new(pattern: &str, exact: bool) -> FindResult<Self> {
        let pattern = pattern.trim_start_matches('.').to_lowercase();

        let wildcard = if exact || pattern.is_empty() {
            None
        } else {
            let glob = format!("*{}*", Pattern::escape(&pattern));
            let compiled = Pattern::new(&glob).map_err(|e| FindError::PatternError {
                message: format!("Invalid extension pattern '{}': {}", pattern, e),
            })?;
            Some(compiled)
        };

        Ok(Self { pattern, exact, wildcard })
    }
}

impl FileFilter for ExtensionFilter {
    fn matches(&self, candidate: &Candidate) -> bool {
        let extension = candidate.extension.trim_start_matches('.').to_lowercase();

        if self.exact {
            return extension == self.pattern;
        }

        match &self.wildcard {
            Some(pattern) => pattern.matches(&extension),
            None => true,
        }
    }

    fn description(&self) -> String {
        let mode = if self.exact { "equals" } else { "contains" };
        format!("extension (ignore case) {} '{}'", mode, self.pattern)
    }
}

/// Filter for an exact size in bytes
pub struct ExactSizeFilter {
    bytes: u64,
}

impl ExactSizeFilter {
    pub fn new(bytes: u64) -> Self {
        Self { bytes }
    }
}

impl FileFilter for ExactSizeFilter {
    fn matches(&self, candidate: &Candidate) -> bool {
        candidate.size == self.bytes
    }

    fn description(&self) -> String {
        format!("size is exactly {} bytes", self.bytes)
    }
}

/// Filter for an inclusive size range in bytes
pub struct SizeRangeFilter {
    min_bytes: Option<u64>,
    max_bytes: Option<u64>,
}

impl SizeRangeFilter {
    pub fn new(min_bytes: Option<u64>, max_bytes: Option<u64>) -> Self {
        Self { min_bytes, max_bytes }
    }
}

impl FileFilter for SizeRangeFilter {
    fn matches(&self, candidate: &Candidate) -> bool {
        self.min_bytes.map_or(true, |min| candidate.size >= min)
            && self.max_bytes.map_or(true, |max| candidate.size <= max)
    }

    fn description(&self) -> String {
        let bound = |b: Option<u64>| b.map_or_else(|| "-".to_string(), |v| v.to_string());
        format!("size within [{}, {}] bytes", bound(self.min_bytes), bound(self.max_bytes))
    }
}
