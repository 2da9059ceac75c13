//! 文件查找模块
//!
//! 这个模块遍历目标目录，把每个普通文件依次交给过滤器链，
//! 并为通过全部过滤器的文件生成 [`MatchRecord`]。

pub mod options;
pub mod filter;
pub mod record;
pub mod walker;

use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};

use crate::errors::{FindError, FindResult};

pub use self::filter::{Candidate, FileFilter, FilterFactory};
pub use self::options::{FindOptions, SortKey};
pub use self::record::MatchRecord;
pub use self::walker::{FileWalker, WalkedFile};

/// 在 `options.root` 下查找匹配的文件
///
/// 结果按遍历顺序返回，排序由输出层负责。
pub fn search(options: &FindOptions) -> FindResult<Vec<MatchRecord>> {
    Finder::new(options.clone())?.find()
}

/// 文件查找器
pub struct Finder {
    options: FindOptions,
    filters: Vec<Box<dyn FileFilter>>,
}

impl Finder {
    /// 根据选项创建查找器并构建过滤器链
    pub fn new(options: FindOptions) -> FindResult<Self> {
        let filters = FilterFactory::create_filters(&options)?;
        Ok(Self { options, filters })
    }

    /// 在过滤器链末尾追加一个过滤器
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: FileFilter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// 执行查找
    pub fn find(&self) -> FindResult<Vec<MatchRecord>> {
        let root = self.resolve_root()?;
        let start_time = Instant::now();
        info!("Starting search in {}", root.display());

        let mut matches = Vec::new();
        let mut scanned = 0usize;

        for file in FileWalker::new(&root, &self.options) {
            let file = file?;
            scanned += 1;

            let candidate = Candidate::new(&file.path, file.size);
            if !self.filters.iter().all(|filter| filter.matches(&candidate)) {
                continue;
            }

            debug!("Matched {}", file.path.display());
            matches.push(self.to_record(file));
        }

        info!(
            "Search finished: {} of {} files matched in {:.2?}",
            matches.len(),
            scanned,
            start_time.elapsed()
        );

        Ok(matches)
    }

    /// 将根目录解析为绝对路径，并确认它是目录
    fn resolve_root(&self) -> FindResult<PathBuf> {
        let root = &self.options.root;
        let resolved = root
            .canonicalize()
            .map_err(|_| FindError::InvalidRoot(root.clone()))?;

        if !resolved.is_dir() {
            return Err(FindError::InvalidRoot(root.clone()));
        }

        Ok(resolved)
    }

    fn to_record(&self, file: WalkedFile) -> MatchRecord {
        let name = file.file_name();
        let path = self.options.show_path.then_some(file.path);
        MatchRecord::new(name, file.size, self.options.show_size, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_file(path: &Path, size: usize) -> std::io::Result<()> {
        File::create(path)?.write_all(&vec![b'x'; size])
    }

    /// report.TXT (100 bytes) and report_final.txt (2048 bytes)
    fn create_report_dir() -> std::io::Result<TempDir> {
        let temp_dir = TempDir::new()?;
        write_file(&temp_dir.path().join("report.TXT"), 100)?;
        write_file(&temp_dir.path().join("report_final.txt"), 2048)?;
        Ok(temp_dir)
    }

    fn names(records: &[MatchRecord]) -> Vec<String> {
        let mut names: Vec<String> = records.iter().map(|r| r.name().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_finder_substring_match() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_report_dir()?;
        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_name("report", false)
            .with_extension("txt", false);

        let results = search(&options)?;
        assert_eq!(names(&results), vec!["report.TXT", "report_final.txt"]);
        Ok(())
    }

    #[test]
    fn test_finder_exact_name() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_report_dir()?;
        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_name("report", true)
            .with_extension("txt", false);

        // report.TXT has base name "report"
        assert_eq!(names(&search(&options)?), vec!["report.TXT"]);

        let options = options.with_name("report_fin", true);
        assert!(search(&options)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_finder_min_size() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_report_dir()?;
        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_name("report", false)
            .with_extension("txt", false)
            .with_size_range(Some(1), None);

        assert_eq!(names(&search(&options)?), vec!["report_final.txt"]);
        Ok(())
    }

    #[test]
    fn test_finder_size_bounds_inclusive() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        write_file(&temp_dir.path().join("exact.bin"), 1024)?;
        write_file(&temp_dir.path().join("below.bin"), 1023)?;
        write_file(&temp_dir.path().join("above.bin"), 2049)?;

        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_size_range(Some(1), Some(2));

        assert_eq!(names(&search(&options)?), vec!["exact.bin"]);
        Ok(())
    }

    #[test]
    fn test_finder_case_sensitive_name_but_not_extension() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        write_file(&temp_dir.path().join("Notes.MD"), 1)?;
        write_file(&temp_dir.path().join("notes.md"), 1)?;

        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_name("Notes", false)
            .with_extension("md", true)
            .with_case_sensitive(true);

        assert_eq!(names(&search(&options)?), vec!["Notes.MD"]);
        Ok(())
    }

    #[test]
    fn test_finder_recurses_and_skips_directories() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("a/b/c"))?;
        fs::create_dir(temp_dir.path().join("data.txt"))?;
        write_file(&temp_dir.path().join("a/b/c/deep_data.txt"), 5)?;

        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_name("data", false);

        assert_eq!(names(&search(&options)?), vec!["deep_data.txt"]);
        Ok(())
    }

    #[test]
    fn test_finder_record_fields() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_report_dir()?;

        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_name("final", false);
        let results = search(&options)?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].size_bytes(), None);
        assert_eq!(results[0].path(), None);

        let options = options.with_display(true, true);
        let results = search(&options)?;
        assert_eq!(results[0].size_bytes(), Some(2048));
        let path = results[0].path().ok_or("path missing")?;
        assert!(path.is_absolute());
        assert!(path.ends_with("report_final.txt"));
        Ok(())
    }

    #[test]
    fn test_finder_custom_filter() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_report_dir()?;

        struct LargeOnly;
        impl FileFilter for LargeOnly {
            fn matches(&self, candidate: &Candidate) -> bool {
                candidate.size > 1000
            }

            fn description(&self) -> String {
                "larger than 1000 bytes".to_string()
            }
        }

        let finder = Finder::new(FindOptions::new().with_root(temp_dir.path()))?
            .with_filter(LargeOnly);
        assert_eq!(names(&finder.find()?), vec!["report_final.txt"]);
        Ok(())
    }

    #[test]
    fn test_finder_invalid_root() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("missing");
        let result = search(&FindOptions::new().with_root(&missing));
        assert!(matches!(result, Err(FindError::InvalidRoot(p)) if p == missing));

        let file = temp_dir.path().join("plain.txt");
        write_file(&file, 1)?;
        let result = search(&FindOptions::new().with_root(&file));
        assert!(matches!(result, Err(FindError::InvalidRoot(_))));
        Ok(())
    }

    #[test]
    fn test_finder_empty_result() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_report_dir()?;
        let options = FindOptions::new()
            .with_root(temp_dir.path())
            .with_name("missing", false);
        assert!(search(&options)?.is_empty());
        Ok(())
    }
}
