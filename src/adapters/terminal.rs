use crate::domain::model::{Block, TableBlock};
use crate::domain::ports::View;

/// 把渲染指令印成對齊的終端表格
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl View for TerminalView {
    fn reset(&mut self) {}

    fn show_loading(&mut self) {
        println!("⏳ Uploading and processing file...");
    }

    fn hide_loading(&mut self) {}

    fn show_error(&mut self, message: &str) {
        eprintln!("❌ {}", message);
    }

    fn show_results(&mut self, blocks: &[Block]) {
        for block in blocks {
            match block {
                Block::Table(table) => print_table(table),
                Block::Notice(text) => println!("\n{}", text),
                Block::Link(link) => {
                    println!("\n{}: {} (save as {})", link.label, link.url, link.filename)
                }
            }
        }
    }
}

fn print_table(table: &TableBlock) {
    if let Some(title) = &table.title {
        println!("\n{}", title);
    } else {
        println!();
    }

    if let Some(placeholder) = &table.placeholder {
        println!("  {}", placeholder);
        return;
    }

    let widths = column_widths(table);

    if let Some(header) = &table.header {
        println!("  {}", format_row(header, &widths));
        let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        println!("  {}", underline.join("  "));
    }

    for row in &table.rows {
        println!("  {}", format_row(row, &widths));
    }
}

fn column_widths(table: &TableBlock) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .header
        .as_ref()
        .map(|header| header.iter().map(|cell| cell.chars().count()).collect())
        .unwrap_or_default();

    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if index >= widths.len() {
                widths.push(len);
            } else if len > widths[index] {
                widths[index] = len;
            }
        }
    }

    widths
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .enumerate()
        .map(|(index, cell)| {
            let width = widths.get(index).copied().unwrap_or(cell.len());
            format!("{:<width$}", cell, width = width)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
