//! 路径解析。
//!
//! 将请求中的相对路径锚定到固定根目录下，并分类为目录、文件或不存在。

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StorageError};

/// 路径在请求时刻的分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    File,
    Absent,
}

/// 解析后的路径。每次请求重新生成，不做缓存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// 根目录下的绝对路径。
    pub absolute: PathBuf,
    /// 规范化后的相对路径，用于错误信息与日志。
    pub relative: String,
    pub kind: PathKind,
}

impl ResolvedPath {
    pub fn is_directory(&self) -> bool {
        self.kind == PathKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == PathKind::File
    }
}

/// 位于根目录内、尚未分类的路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedPath {
    pub absolute: PathBuf,
    pub relative: String,
}

impl LocatedPath {
    /// 写操作的加锁键：规范化的父目录加文件名。
    ///
    /// 经由根目录内符号链接的不同写法会得到同一个键。
    pub fn lock_key(&self) -> PathBuf {
        let parent = self
            .absolute
            .parent()
            .and_then(|parent| parent.canonicalize().ok());
        match (parent, self.absolute.file_name()) {
            (Some(parent), Some(name)) => parent.join(name),
            _ => self.absolute.clone(),
        }
    }

    /// 按“先目录、后文件、否则不存在”的顺序分类。
    pub fn classify(self) -> ResolvedPath {
        let kind = if self.absolute.is_dir() {
            PathKind::Directory
        } else if self.absolute.is_file() {
            PathKind::File
        } else {
            PathKind::Absent
        };

        ResolvedPath {
            absolute: self.absolute,
            relative: self.relative,
            kind,
        }
    }
}

/// 路径解析器，持有已规范化的根目录。
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// 创建解析器。根目录必须存在且为目录。
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let canonical = root
            .canonicalize()
            .map_err(|source| StorageError::RootUnavailable {
                root: root.display().to_string(),
                source,
            })?;

        if !canonical.is_dir() {
            return Err(StorageError::RootUnavailable {
                root: root.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "root is not a directory",
                ),
            });
        }

        Ok(Self { root: canonical })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 解析并分类相对路径。
    pub fn resolve(&self, relative: &str) -> Result<ResolvedPath> {
        let resolved = self.locate(relative)?.classify();
        debug!(
            path = %resolved.absolute.display(),
            kind = ?resolved.kind,
            "resolved path"
        );
        Ok(resolved)
    }

    /// 将相对路径拼接到根目录下，并检查是否仍在根目录内。
    ///
    /// `..`、绝对路径以及经由符号链接逃出根目录的路径都会被拒绝。
    pub fn locate(&self, relative: &str) -> Result<LocatedPath> {
        let mut absolute = self.root.clone();
        let mut parts = Vec::new();

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => {
                    absolute.push(part);
                    parts.push(part.to_string_lossy().into_owned());
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(StorageError::OutsideRoot(relative.to_string()));
                }
            }
        }

        // 不存在的路径按最近的已存在祖先判断
        let contained = absolute
            .ancestors()
            .find_map(|ancestor| ancestor.canonicalize().ok())
            .is_some_and(|canonical| canonical.starts_with(&self.root));
        if !contained {
            return Err(StorageError::OutsideRoot(relative.to_string()));
        }

        Ok(LocatedPath {
            absolute,
            relative: parts.join("/"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup() -> (tempfile::TempDir, PathResolver) {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir(dir.path().join("docs")).expect("create docs");
        fs::write(dir.path().join("docs/readme.txt"), "hello").expect("write readme");
        let resolver = PathResolver::new(dir.path()).expect("resolver should initialize");
        (dir, resolver)
    }

    #[test]
    fn test_classifies_directory_file_and_absent() {
        let (_dir, resolver) = setup();

        assert_eq!(resolver.resolve("docs").unwrap().kind, PathKind::Directory);
        assert_eq!(
            resolver.resolve("docs/readme.txt").unwrap().kind,
            PathKind::File
        );
        assert_eq!(
            resolver.resolve("docs/missing.txt").unwrap().kind,
            PathKind::Absent
        );
        assert_eq!(
            resolver.resolve("nowhere/missing.txt").unwrap().kind,
            PathKind::Absent
        );
    }

    #[test]
    fn test_anchors_at_root() {
        let (_dir, resolver) = setup();

        let resolved = resolver.resolve("docs/./readme.txt/").unwrap();

        assert_eq!(resolved.absolute, resolver.root().join("docs/readme.txt"));
        assert_eq!(resolved.relative, "docs/readme.txt");
    }

    #[test]
    fn test_empty_path_is_root() {
        let (_dir, resolver) = setup();

        let resolved = resolver.resolve("").unwrap();

        assert_eq!(resolved.absolute, resolver.root());
        assert!(resolved.is_directory());
    }

    #[test]
    fn test_rejects_parent_traversal() {
        let (_dir, resolver) = setup();

        for path in ["..", "docs/../../etc/passwd", "docs/.."] {
            let err = resolver.resolve(path).expect_err("traversal should fail");
            assert!(matches!(err, StorageError::OutsideRoot(p) if p == path));
        }
    }

    #[test]
    fn test_rejects_absolute_path() {
        let (_dir, resolver) = setup();

        let err = resolver.resolve("/etc/passwd").expect_err("absolute path should fail");

        assert!(matches!(err, StorageError::OutsideRoot(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_rejects_symlink_escape() {
        let (dir, resolver) = setup();
        let outside = tempfile::tempdir().expect("create outside dir");
        fs::write(outside.path().join("secret.txt"), "secret").expect("write secret");
        std::os::unix::fs::symlink(outside.path(), dir.path().join("escape"))
            .expect("create symlink");

        let err = resolver
            .resolve("escape/secret.txt")
            .expect_err("symlink escape should fail");
        assert!(matches!(err, StorageError::OutsideRoot(_)));

        let err = resolver
            .resolve("escape/new.txt")
            .expect_err("absent path under escaping symlink should fail");
        assert!(matches!(err, StorageError::OutsideRoot(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_allows_symlink_inside_root() {
        let (dir, resolver) = setup();
        std::os::unix::fs::symlink(dir.path().join("docs"), dir.path().join("alias"))
            .expect("create symlink");

        let resolved = resolver.resolve("alias/readme.txt").unwrap();

        assert!(resolved.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_lock_key_follows_parent_symlink() {
        let (dir, resolver) = setup();
        std::os::unix::fs::symlink(dir.path().join("docs"), dir.path().join("alias"))
            .expect("create symlink");

        let direct = resolver.locate("docs/readme.txt").unwrap();
        let aliased = resolver.locate("alias/readme.txt").unwrap();

        assert_ne!(direct.absolute, aliased.absolute);
        assert_eq!(direct.lock_key(), aliased.lock_key());
        assert_eq!(direct.lock_key(), resolver.root().join("docs/readme.txt"));
    }

    #[test]
    fn test_lock_key_of_absent_path_under_missing_parent() {
        let (_dir, resolver) = setup();

        let located = resolver.locate("nowhere/new.txt").unwrap();

        assert_eq!(located.lock_key(), located.absolute);
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");

        let err = PathResolver::new(dir.path().join("missing")).expect_err("root must exist");

        assert!(matches!(err, StorageError::RootUnavailable { .. }));
    }
}
