//! filehost-storage - 根目录受限的文件资源模块。
//!
//! 提供路径解析、目录列表（过滤与排序）以及按动词区分前置条件的文件 CRUD，
//! 供 server 集成为 HTTP 路由。

pub mod controller;
pub mod error;
pub mod listing;
pub mod locks;
pub mod resolver;

pub use controller::{Resource, ResourceController};
pub use error::{Result, StorageError};
pub use listing::FileEntry;
pub use locks::PathLocks;
pub use resolver::{LocatedPath, PathKind, PathResolver, ResolvedPath};
