//! Result presentation
//!
//! Sorts the records returned by the finder and renders them as numbered
//! lines, optionally colored for terminals.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

use colored::{Color, Colorize};

use crate::finder::{FindOptions, MatchRecord, SortKey};

/// Printed instead of a list when nothing matched
pub const NO_MATCHES: &str = "No files found matching the criteria.";

/// Sort `records` in place by `key`. The sort is stable and `None` keeps the
/// current order.
pub fn sort_records(records: &mut [MatchRecord], key: Option<SortKey>) {
    let compare: fn(&MatchRecord, &MatchRecord) -> Ordering = match key {
        None => return,
        Some(SortKey::Name) => |a, b| a.name().cmp(b.name()),
        Some(SortKey::Size) => |a, b| a.sort_size().cmp(&b.sort_size()),
        Some(SortKey::Path) => |a, b| path_key(a.path()).cmp(path_key(b.path())),
    };
    records.sort_by(compare);
}

// Compared as the raw path string, not component-wise, so `a-b/` sorts
// before `a/`. A missing path sorts as the empty string.
fn path_key(path: Option<&Path>) -> &OsStr {
    path.map_or(OsStr::new(""), Path::as_os_str)
}

/// Sorts and renders match records
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    sort_key: Option<SortKey>,
    show_size: bool,
    show_path: bool,
    color: bool,
}

impl Presenter {
    pub fn new(sort_key: Option<SortKey>, show_size: bool, show_path: bool) -> Self {
        Self {
            sort_key,
            show_size,
            show_path,
            color: false,
        }
    }

    /// Presenter matching the display settings of a search
    pub fn from_options(options: &FindOptions) -> Self {
        Self::new(options.sort_key, options.show_size, options.show_path)
    }

    /// Enable or disable ANSI colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sort `records` and write one line per record, or the no-match notice
    pub fn present<W: Write>(&self, out: &mut W, mut records: Vec<MatchRecord>) -> io::Result<()> {
        if records.is_empty() {
            return writeln!(out, "{}", self.paint(NO_MATCHES.to_string(), Color::Yellow));
        }

        sort_records(&mut records, self.sort_key);
        for (idx, record) in records.iter().enumerate() {
            writeln!(out, "{}", self.render(idx + 1, record))?;
        }
        Ok(())
    }

    /// Render a single record with its 1-based index
    pub fn render(&self, index: usize, record: &MatchRecord) -> String {
        let mut line = self.paint(format!("{}. File: {}", index, record.name()), Color::Cyan);

        if self.show_size {
            if let Some(bytes) = record.size_bytes() {
                let kib = bytes as f64 / 1024.0;
                line.push_str(&self.paint(format!(", Size: {:.2} KiB", kib), Color::Green));
            }
        }

        if self.show_path {
            if let Some(path) = record.path() {
                line.push_str(&self.paint(format!(", Path: {}", path.display()), Color::Yellow));
            }
        }

        line
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text
        }
    }
}

/// Format a fatal error for stderr
pub fn render_error(message: &str, color: bool) -> String {
    let line = format!("Error: {}", message);
    if color {
        line.red().to_string()
    } else {
        line
    }
}
