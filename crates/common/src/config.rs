use std::path::PathBuf;

/// 体积报告配置
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 待测量的二进制目录
    pub bin_dir: PathBuf,
    /// 外部绘图程序路径
    pub plotter: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bin_dir: PathBuf::from("/out/bin"),
            plotter: PathBuf::from("/plot.py"),
        }
    }
}

/// README 表格配置
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// 二进制清单数据文件
    pub data_file: PathBuf,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/bins.yaml"),
        }
    }
}
