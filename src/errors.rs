use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// rust-crawler 的自定义错误类型
///
/// 这里的每个变体都会中止整个搜索；单个条目的访问错误在遍历时被跳过，
/// 不会以 `FindError` 的形式返回。
#[derive(Debug, Error)]
pub enum FindError {
    /// 目标目录不存在或不是目录
    #[error("Target directory '{}' does not exist or is not accessible.", .0.display())]
    InvalidRoot(PathBuf),

    /// 目标目录存在但无法读取
    #[error("Target directory '{}' cannot be read: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 模式匹配错误
    #[error("Invalid pattern: {message}")]
    PatternError { message: String },

    /// 最小值大于最大值
    #[error("Minimum size ({min} KiB) is greater than maximum size ({max} KiB)")]
    InvalidSizeRange { min: u64, max: u64 },

    /// 最大深度为 0
    #[error("Maximum depth must be greater than 0")]
    InvalidDepth,

    /// 遍历目录时的错误
    #[error("Directory traversal error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => FindError::RootUnreadable {
                source: std::io::Error::new(io_err.kind(), io_err.to_string()),
                path,
            },
            None => FindError::WalkDirError(err.to_string()),
        }
    }
}
