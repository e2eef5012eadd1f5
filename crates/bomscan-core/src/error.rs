//! 错误类型
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 单个文件的访问错误：仅记录日志并跳过，不会中断遍历
#[derive(Debug, Error)]
pub enum FileAccessError {
    #[error("open {}: {source}", path.display())]
    Open { path: PathBuf, #[source] source: io::Error },
    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, #[source] source: io::Error },
}

/// 扫描整体失败（返回给调用方）
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access scan root {}: {source}", path.display())]
    RootInaccessible { path: PathBuf, #[source] source: io::Error },
    #[error("scan root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },
    #[error("write report: {0}")]
    Output(#[from] io::Error),
}
