use serde::{Deserialize, Serialize};

use crate::SizeEntry;

/// 一次目录测量的结果，条目已按体积从大到小排序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeReport {
    pub entries: Vec<SizeEntry>,
    pub file_count: u64,
    /// 本次测量到的文件总大小（字节）
    pub total_size: u64,
    pub measure_time_ms: u64,
}
