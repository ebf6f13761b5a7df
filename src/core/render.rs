use crate::domain::model::{Block, LinkBlock, LogStep, Overview, Report, TableBlock};
use serde_json::Value;

/// 純函式：把報告轉成渲染指令，不碰任何 UI
pub fn report_blocks(report: &Report, base_url: &str) -> Vec<Block> {
    let base = base_url.trim_end_matches('/');
    let mut blocks = Vec::new();

    match &report.overview {
        Some(overview) => {
            blocks.push(Block::Table(basic_info_table(overview)));
            blocks.push(Block::Table(mapping_table(
                "Missing Values",
                &overview.missing_values,
                "No missing values",
            )));
            blocks.push(Block::Table(mapping_table(
                "Data Types",
                &overview.dtypes,
                "No dtype info",
            )));
            if let Some(outliers) = &overview.outliers {
                blocks.push(Block::Table(mapping_table(
                    "Outliers",
                    outliers,
                    "No outliers detected",
                )));
            }
        }
        None => blocks.push(Block::Notice("Overview data is missing.".to_string())),
    }

    blocks.extend(log_blocks(&report.log_report));

    blocks.push(Block::Link(LinkBlock {
        label: "View EDA Report".to_string(),
        url: format!("{}/eda/{}", base, report.eda_report),
        filename: report.eda_report.clone(),
    }));
    blocks.push(Block::Link(LinkBlock {
        label: "Download Cleaned File".to_string(),
        url: format!("{}/download/{}", base, report.cleaned_file),
        filename: report.cleaned_file.clone(),
    }));

    blocks
}

fn basic_info_table(overview: &Overview) -> TableBlock {
    let mut rows = Vec::new();

    if let Some(shape) = &overview.shape {
        rows.push(vec!["Rows".to_string(), shape.rows.to_string()]);
        rows.push(vec!["Columns".to_string(), shape.columns.to_string()]);
    }

    if let Some(duplicates) = &overview.duplicates {
        if duplicates.is_number() {
            rows.push(vec!["Duplicate Rows".to_string(), duplicates.to_string()]);
        }
    }

    if let Some(total) = overview
        .memory_usage
        .as_ref()
        .and_then(|usage| usage.total.as_ref())
    {
        if !total.is_null() {
            rows.push(vec!["Memory Usage".to_string(), value_text(total)]);
        }
    }

    TableBlock {
        title: Some("Basic Info".to_string()),
        header: None,
        rows,
        placeholder: None,
    }
}

fn mapping_table(
    title: &str,
    map: &serde_json::Map<String, Value>,
    empty_note: &str,
) -> TableBlock {
    if map.is_empty() {
        return TableBlock {
            title: Some(title.to_string()),
            header: None,
            rows: Vec::new(),
            placeholder: Some(empty_note.to_string()),
        };
    }

    TableBlock {
        title: Some(title.to_string()),
        header: None,
        rows: map
            .iter()
            .map(|(column, value)| vec![column.clone(), value_text(value)])
            .collect(),
        placeholder: None,
    }
}

/// 每個非空步驟一張表，表頭取自該步驟第一筆記錄的鍵
fn log_blocks(log_report: &[LogStep]) -> Vec<Block> {
    if log_report.is_empty() {
        return vec![Block::Notice("No cleaning log provided.".to_string())];
    }

    let mut blocks = Vec::new();
    for step in log_report {
        if step.is_empty() {
            continue;
        }

        let headers: Vec<String> = step[0].keys().cloned().collect();
        let rows = step
            .iter()
            .map(|entry| {
                headers
                    .iter()
                    .map(|key| entry.get(key).map(value_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        blocks.push(Block::Table(TableBlock {
            title: None,
            header: Some(headers),
            rows,
            placeholder: None,
        }));
    }

    blocks
}

/// 物件與陣列輸出為 JSON 字面值，null 輸出空字串，其餘純文字
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
