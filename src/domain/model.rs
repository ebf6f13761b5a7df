use serde::Deserialize;
use serde_json::Value;

/// 清理日誌的單一步驟：每筆記錄的結構由後端決定，逐步渲染
pub type LogStep = Vec<serde_json::Map<String, Value>>;

/// 後端處理完成後回傳的報告
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub overview: Option<Overview>,
    #[serde(default)]
    pub log_report: Vec<LogStep>,
    pub eda_report: String,
    pub cleaned_file: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Overview {
    pub shape: Option<Shape>,
    /// 僅在為數字時渲染
    pub duplicates: Option<Value>,
    pub memory_usage: Option<MemoryUsage>,
    #[serde(default)]
    pub missing_values: serde_json::Map<String, Value>,
    #[serde(default)]
    pub dtypes: serde_json::Map<String, Value>,
    pub outliers: Option<serde_json::Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Shape {
    pub rows: u64,
    pub columns: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemoryUsage {
    pub total: Option<Value>,
}

/// 渲染指令：純 view-model 的輸出，由 View adapter 實際呈現
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Table(TableBlock),
    Link(LinkBlock),
    Notice(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub title: Option<String>,
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    /// 資料為空時顯示的單一佔位列
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkBlock {
    pub label: String,
    pub url: String,
    pub filename: String,
}
