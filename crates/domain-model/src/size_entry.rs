use serde::{Deserialize, Serialize};

/// 体积报告中的一条记录，字段顺序即 CSV 列顺序（name,size,nice）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeEntry {
    pub name: String,
    /// 原始字节数
    pub size: u64,
    /// 人类可读体积，如 "3.5M"
    pub nice: String,
}
