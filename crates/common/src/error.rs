use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizeReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Chart renderer failed: {message}")]
    ChartRender {
        message: String,
        /// 绘图程序的退出码，被信号终止或启动失败时为 None
        code: Option<i32>,
    },
}
