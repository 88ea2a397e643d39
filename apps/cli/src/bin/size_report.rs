//! 体积报告入口：测量二进制目录，写出 CSV，再调用外部绘图程序。
//! 绘图程序失败时以其退出码退出。

use std::path::PathBuf;
use std::process;

use binsize_common::{ReportConfig, SizeReportError};
use binsize_report::{render_charts, write_csv};
use binsize_scanner::measure_dir;
use clap::Parser;

/// 生成二进制体积 CSV 报告并绘制图表
#[derive(Parser, Debug)]
#[command(name = "size-report")]
struct Cli {
    /// CSV 输出路径
    csv_path: PathBuf,
    /// 全量图表输出路径
    all_chart_path: PathBuf,
    /// 小体积图表输出路径
    tiny_chart_path: PathBuf,
}

fn run(cli: &Cli, config: &ReportConfig) -> Result<(), SizeReportError> {
    log::info!("measure start, dir: {}", config.bin_dir.display());
    let report = measure_dir(&config.bin_dir)?;
    log::info!(
        "measure done, file_count: {}, total_size: {}, time: {}ms",
        report.file_count,
        report.total_size,
        report.measure_time_ms
    );

    write_csv(&cli.csv_path, &report.entries)?;

    render_charts(
        &config.plotter,
        &cli.csv_path,
        &cli.all_chart_path,
        &cli.tiny_chart_path,
    )
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = ReportConfig::default();

    if let Err(e) = run(&cli, &config) {
        log::error!("报告生成失败: {}", e);
        let code = match e {
            SizeReportError::ChartRender { code: Some(code), .. } => code,
            _ => 1,
        };
        process::exit(code);
    }
}
