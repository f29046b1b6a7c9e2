//! 存储层错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("路径不存在: {0}")]
    NotFound(String),

    #[error("文件已存在: {0}")]
    AlreadyExists(String),

    #[error("文件不存在: {0}")]
    NotAFile(String),

    #[error("路径是目录: {0}")]
    IsADirectory(String),

    #[error("父目录不存在: {0}")]
    ParentNotFound(String),

    #[error("路径超出根目录: {0}")]
    OutsideRoot(String),

    #[error("无效的过滤表达式 {pattern}: {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("根目录不可用 {root}: {source}")]
    RootUnavailable {
        root: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
