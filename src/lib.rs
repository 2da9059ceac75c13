//! 按名称、扩展名和大小查找文件的库
//!
//! 本库递归遍历一个目录，并对每个普通文件依次应用过滤器：
//! - 文件名（部分或完全匹配，可区分大小写）
//! - 扩展名（部分或完全匹配，始终不区分大小写）
//! - 精确大小（字节）与大小范围（KiB，包含边界）
//!
//! 匹配结果由 [`output::Presenter`] 排序并输出。
//!
//! # 示例
//!
//! ```no_run
//! use rust_crawler::finder::{search, FindOptions, SortKey};
//! use rust_crawler::output::Presenter;
//!
//! let options = FindOptions::new()
//!     .with_root(".")
//!     .with_name("report", false)
//!     .with_extension("txt", false)
//!     .with_size_range(Some(1), None)
//!     .with_display(true, true)
//!     .with_sort_key(Some(SortKey::Size));
//!
//! let records = search(&options).unwrap();
//! Presenter::from_options(&options)
//!     .present(&mut std::io::stdout(), records)
//!     .unwrap();
//! ```

pub mod cli;
pub mod errors;
pub mod finder;
pub mod output;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{search, Finder, FindOptions, MatchRecord, SortKey};
