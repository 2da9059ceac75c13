//! crawler 工具的命令行接口
//!
//! 本模块提供了命令行参数的定义、验证，以及到 [`FindOptions`] 的转换。

use std::path::PathBuf;

use clap::Parser;

use crate::errors::FindError;
use crate::finder::options::{FindOptions, SortKey};

/// 按名称、扩展名和大小递归查找文件
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 要查找的文件名（不含扩展名，默认部分匹配）
    pub name: String,

    /// 要查找的扩展名（可省略前导点，默认部分匹配）
    #[arg(default_value = "")]
    pub extension: String,

    /// 文件名完全匹配
    #[arg(short = 'n', long, visible_alias = "exact-filename")]
    pub exact_name: bool,

    /// 扩展名完全匹配
    #[arg(short = 'e', long)]
    pub exact_extension: bool,

    /// 搜索目录（默认：当前目录）
    #[arg(short = 't', long, value_name = "DIR", default_value = ".")]
    pub target_dir: PathBuf,

    /// 最小文件大小（KiB，包含）
    #[arg(long, value_name = "KIB")]
    pub min_size: Option<u64>,

    /// 最大文件大小（KiB，包含）
    #[arg(long, value_name = "KIB")]
    pub max_size: Option<u64>,

    /// 精确文件大小（字节）
    #[arg(long, value_name = "BYTES")]
    pub size: Option<u64>,

    /// 显示文件大小（KiB）
    #[arg(short = 's', long)]
    pub show_size: bool,

    /// 显示文件路径
    #[arg(short = 'p', long)]
    pub show_path: bool,

    /// 排序字段
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// 文件名区分大小写（扩展名始终不区分）
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// 最大搜索深度
    #[arg(long, value_name = "NUM")]
    pub max_depth: Option<usize>,

    /// 跟随符号链接进入目录
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// 启用调试日志
    #[arg(short, long)]
    pub debug: bool,

    /// 禁用彩色输出
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// 构建查找选项
    pub fn build_options(&self) -> FindOptions {
        FindOptions::from_cli(self)
    }

    /// 验证命令行参数
    pub fn validate(&self) -> Result<(), FindError> {
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                return Err(FindError::InvalidSizeRange { min, max });
            }
        }

        if self.max_depth == Some(0) {
            return Err(FindError::InvalidDepth);
        }

        Ok(())
    }
}
