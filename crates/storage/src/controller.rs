//! 文件资源控制器。
//!
//! 每个动词都重新解析路径，并按其存在性前置条件决定成功或失败：
//!
//! | 动词 | 前置条件 | 失败 |
//! |---|---|---|
//! | read | 目录或文件 | 不存在 → [`StorageError::NotFound`] |
//! | create | 不存在 | 已是文件 → [`StorageError::AlreadyExists`] |
//! | update | 已是文件 | 否则 → [`StorageError::NotAFile`] |
//! | delete | 已是文件 | 目录 → [`StorageError::IsADirectory`]，不存在 → [`StorageError::NotAFile`] |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use filehost_core::ListOptions;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::error::{Result, StorageError};
use crate::listing::{self, FileEntry};
use crate::locks::PathLocks;
use crate::resolver::{PathKind, PathResolver, ResolvedPath};

/// 读取结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// 目录：过滤并排序后的文件列表。
    Listing(Vec<FileEntry>),
    /// 文件：完整内容。
    File(Vec<u8>),
}

/// 根目录受限的文件 CRUD 控制器。
#[derive(Debug)]
pub struct ResourceController {
    resolver: PathResolver,
    locks: PathLocks,
}

impl ResourceController {
    /// 以给定根目录创建控制器。
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            resolver: PathResolver::new(root)?,
            locks: PathLocks::new(),
        })
    }

    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    /// 读取目录列表或文件内容。
    pub async fn read(&self, relative: &str, options: &ListOptions) -> Result<Resource> {
        let resolved = self.resolver.resolve(relative)?;

        match resolved.kind {
            PathKind::Directory => {
                let entries = listing::list(&resolved.absolute, options).await?;
                Ok(Resource::Listing(entries))
            }
            PathKind::File => match tokio::fs::read(&resolved.absolute).await {
                Ok(content) => Ok(Resource::File(content)),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    Err(StorageError::NotFound(resolved.relative))
                }
                Err(e) => Err(e.into()),
            },
            PathKind::Absent => Err(StorageError::NotFound(resolved.relative)),
        }
    }

    /// 创建新文件。路径上已有文件或目录时失败。
    pub async fn create(&self, relative: &str, content: &[u8]) -> Result<ResolvedPath> {
        let located = self.resolver.locate(relative)?;
        let _guard = self.locks.acquire(&located.lock_key()).await;
        let resolved = located.classify();

        match resolved.kind {
            PathKind::File => return Err(StorageError::AlreadyExists(resolved.relative)),
            PathKind::Directory => return Err(StorageError::IsADirectory(resolved.relative)),
            PathKind::Absent => {}
        }

        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&resolved.absolute)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(resolved.relative));
            }
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Err(StorageError::ParentNotFound(resolved.relative));
            }
            Err(e) => return Err(e.into()),
        };
        write_new_file(file, &resolved.absolute, content).await?;

        info!(path = %resolved.absolute.display(), bytes = content.len(), "File created");
        Ok(ResolvedPath {
            kind: PathKind::File,
            ..resolved
        })
    }

    /// 以新内容完整覆盖已有文件（截断后写入）。
    pub async fn update(&self, relative: &str, content: &[u8]) -> Result<ResolvedPath> {
        let located = self.resolver.locate(relative)?;
        let _guard = self.locks.acquire(&located.lock_key()).await;
        let resolved = located.classify();

        match resolved.kind {
            PathKind::File => {}
            PathKind::Directory => return Err(StorageError::IsADirectory(resolved.relative)),
            PathKind::Absent => return Err(StorageError::NotAFile(resolved.relative)),
        }

        // 不带 create，文件在检查后消失时不会被重新创建
        let mut file = match OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&resolved.absolute)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotAFile(resolved.relative));
            }
            Err(e) => return Err(e.into()),
        };
        file.write_all(content).await?;
        file.flush().await?;

        info!(path = %resolved.absolute.display(), bytes = content.len(), "File updated");
        Ok(resolved)
    }

    /// 删除文件。目录不会被删除。
    pub async fn delete(&self, relative: &str) -> Result<ResolvedPath> {
        let located = self.resolver.locate(relative)?;
        let _guard = self.locks.acquire(&located.lock_key()).await;
        let resolved = located.classify();

        match resolved.kind {
            PathKind::File => {}
            PathKind::Directory => {
                warn!(path = %resolved.absolute.display(), "Refusing to delete directory");
                return Err(StorageError::IsADirectory(resolved.relative));
            }
            PathKind::Absent => return Err(StorageError::NotAFile(resolved.relative)),
        }

        match tokio::fs::remove_file(&resolved.absolute).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotAFile(resolved.relative));
            }
            Err(e) => return Err(e.into()),
        }

        info!(path = %resolved.absolute.display(), "File deleted");
        Ok(ResolvedPath {
            kind: PathKind::Absent,
            ..resolved
        })
    }
}

/// 写入刚创建的文件。写入失败时删除该文件，避免残留的半截文件阻塞后续创建。
async fn write_new_file<W>(mut writer: W, path: &Path, content: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        writer.write_all(content).await?;
        writer.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(writer);
        if let Err(remove_err) = tokio::fs::remove_file(path).await {
            warn!(
                path = %path.display(),
                error = %remove_err,
                "Failed to remove partially written file"
            );
        }
        return Err(e.into());
    }
    Ok(())
}
