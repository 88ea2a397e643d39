use std::path::Path;

use binsize_common::SizeReportError;
use binsize_domain::SizeEntry;

/// 将体积条目写入 CSV 文件，表头固定为 name,size,nice，
/// 条目顺序即行顺序
pub fn write_csv(path: &Path, entries: &[SizeEntry]) -> Result<(), SizeReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["name", "size", "nice"])?;

    for entry in entries {
        let size = entry.size.to_string();
        writer.write_record([entry.name.as_str(), size.as_str(), entry.nice.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
