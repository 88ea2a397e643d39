use serde::{Deserialize, Serialize};

/// README 表格中的一行，缺失字段按空字符串处理
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub text: String,
}
