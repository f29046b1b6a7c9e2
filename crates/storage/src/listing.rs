//! 目录列表：枚举、过滤、排序。

use std::cmp::Ordering;
use std::path::Path;

use chrono::{DateTime, Utc};
use filehost_core::{ListOptions, SortDirection, SortKey};
use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, StorageError};

/// 列表时刻的文件快照。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// 文件名（不含路径）。
    pub name: String,
    /// 文件大小（字节）。
    pub size: u64,
    /// 修改时间。
    pub last_modify_time: DateTime<Utc>,
}

/// 列出目录下直接包含的普通文件，按名称过滤并排序。
///
/// 子目录不会出现在结果中。
pub async fn list(directory: &Path, options: &ListOptions) -> Result<Vec<FileEntry>> {
    let filter = compile_filter(&options.filter)?;

    info!(
        path = %directory.display(),
        filter = %options.filter,
        sort_key = %options.sort_key,
        direction = %options.direction,
        "Listing directory"
    );

    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(directory).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !filter.is_match(&name) {
            continue;
        }

        // 跟随符号链接，与目录/文件分类保持一致；读取失败的条目直接跳过
        let Ok(metadata) = tokio::fs::metadata(entry.path()).await else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }

        let last_modify_time = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or(DateTime::UNIX_EPOCH);

        files.push(FileEntry {
            name,
            size: metadata.len(),
            last_modify_time,
        });
    }

    sort_entries(&mut files, options.sort_key, options.direction);
    Ok(files)
}

/// 编译名称过滤表达式。匹配采用“任意位置命中”语义，空表达式匹配全部。
pub fn compile_filter(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| StorageError::InvalidFilter {
        pattern: pattern.to_string(),
        source,
    })
}

/// 稳定排序。键相同的条目在升序和降序下都保持原有顺序。
pub fn sort_entries(entries: &mut [FileEntry], key: SortKey, direction: SortDirection) {
    let compare: fn(&FileEntry, &FileEntry) -> Ordering = match key {
        SortKey::Name => |a, b| a.name.cmp(&b.name),
        SortKey::Size => |a, b| a.size.cmp(&b.size),
        SortKey::LastModified => |a, b| a.last_modify_time.cmp(&b.last_modify_time),
    };

    if direction.is_descending() {
        entries.sort_by(|a, b| compare(b, a));
    } else {
        entries.sort_by(compare);
    }
}
