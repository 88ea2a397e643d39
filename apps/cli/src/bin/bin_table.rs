//! README 表格入口：读取二进制清单 YAML，向标准输出打印 markdown 表格。

use std::process;

use binsize_common::{SizeReportError, TableConfig};
use binsize_table::{load_rows, render_table};

fn run(config: &TableConfig) -> Result<(), SizeReportError> {
    let rows = load_rows(&config.data_file)?;
    print!("{}", render_table(&rows));
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(&TableConfig::default()) {
        log::error!("表格生成失败: {}", e);
        process::exit(1);
    }
}
