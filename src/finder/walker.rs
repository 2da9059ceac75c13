//! 文件系统遍历功能
//!
//! 本模块遍历目录树并只产出普通文件。单个条目的错误（权限不足、
//! 条目在读取元数据前消失、符号链接循环）会被跳过并记录到调试日志；
//! 只有根目录本身无法读取时才返回错误。

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::errors::{FindError, FindResult};
use super::options::FindOptions;

/// 遍历中发现的普通文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// 文件路径
    pub path: PathBuf,
    /// 文件大小（字节）
    pub size: u64,
}

impl WalkedFile {
    /// 含扩展名的文件名
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// 基于迭代器的文件系统遍历器
pub struct FileWalker {
    inner: walkdir::IntoIter,
}

impl FileWalker {
    /// 使用给定路径和选项创建新的 FileWalker
    pub fn new<P: AsRef<Path>>(path: P, options: &FindOptions) -> Self {
        let mut walker = WalkDir::new(path.as_ref())
            .follow_links(options.follow_links)
            .min_depth(1);

        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }

        Self {
            inner: walker.into_iter(),
        }
    }

    /// 将条目解析为普通文件，非普通文件或无法读取的条目返回 None
    fn process_entry(&self, entry: DirEntry) -> Option<WalkedFile> {
        if entry.file_type().is_dir() {
            return None;
        }

        // 跟随符号链接，与 "is a file" 的语义一致
        match fs::metadata(entry.path()) {
            Ok(metadata) if metadata.is_file() => Some(WalkedFile {
                path: entry.into_path(),
                size: metadata.len(),
            }),
            Ok(_) => None,
            Err(e) => {
                debug!("Skipping {}: {}", entry.path().display(), e);
                None
            }
        }
    }

    /// 根目录的错误是致命的，其余错误被跳过
    fn handle_error(&self, err: walkdir::Error) -> Option<FindResult<WalkedFile>> {
        if err.depth() == 0 {
            return Some(Err(FindError::from(err)));
        }

        debug!("Skipping entry: {}", err);
        None
    }
}

impl Iterator for FileWalker {
    type Item = FindResult<WalkedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if let Some(file) = self.process_entry(entry) {
                        return Some(Ok(file));
                    }
                }
                Err(err) => {
                    if let Some(result) = self.handle_error(err) {
                        return Some(result);
                    }
                }
            }
        }
    }
}
