use std::path::Path;
use std::time::Instant;

use binsize_common::SizeReportError;
use binsize_domain::{SizeEntry, SizeReport};

use crate::human_size;

/// 测量目录下所有常规文件的体积，按体积从大到小排序
pub fn measure_dir(path: &Path) -> Result<SizeReport, SizeReportError> {
    let start = Instant::now();

    if !path.exists() {
        return Err(SizeReportError::InvalidPath(format!(
            "路径不存在: {}",
            path.display()
        )));
    }

    let mut dir_entries: Vec<_> = std::fs::read_dir(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                SizeReportError::PermissionDenied(path.display().to_string())
            } else {
                SizeReportError::Io(e)
            }
        })?
        .filter_map(|e| e.ok())
        .collect();

    // 按文件名排序，保证枚举顺序与平台无关
    dir_entries.sort_by_key(|e| e.file_name());

    let mut entries = Vec::new();
    let mut total_size = 0u64;
    for entry in dir_entries {
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }

        let size = metadata.len();
        total_size += size;
        entries.push(SizeEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            size,
            nice: human_size(size),
        });
    }

    // 稳定排序：体积相同的条目保持枚举顺序
    entries.sort_by(|a, b| b.size.cmp(&a.size));

    Ok(SizeReport {
        file_count: entries.len() as u64,
        total_size,
        measure_time_ms: start.elapsed().as_millis() as u64,
        entries,
    })
}
