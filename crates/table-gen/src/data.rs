use std::fs;
use std::path::Path;

use binsize_common::SizeReportError;
use binsize_domain::BinRow;

/// 读取二进制清单 YAML 文件，保持记录的文件内顺序
pub fn load_rows(path: &Path) -> Result<Vec<BinRow>, SizeReportError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}
