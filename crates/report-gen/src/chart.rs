use std::path::Path;
use std::process::Command;

use binsize_common::SizeReportError;

/// 调用外部绘图程序，参数依次为 CSV 路径、全量图路径、小体积图路径。
/// 启动失败或非零退出均视为本次报告失败
pub fn render_charts(
    plotter: &Path,
    csv_path: &Path,
    all_chart_path: &Path,
    tiny_chart_path: &Path,
) -> Result<(), SizeReportError> {
    let status = Command::new(plotter)
        .arg(csv_path)
        .arg(all_chart_path)
        .arg(tiny_chart_path)
        .status()
        .map_err(|e| SizeReportError::ChartRender {
            message: format!("无法启动绘图程序 {}: {}", plotter.display(), e),
            code: None,
        })?;

    if !status.success() {
        return Err(SizeReportError::ChartRender {
            message: format!("绘图程序 {} 退出异常: {}", plotter.display(), status),
            code: status.code(),
        });
    }

    Ok(())
}
