//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text through the minijinja templates in
//! `templates.rs`, with a `style` filter backed by the theme in `styles.rs`.
//!
//! Layout (column widths, padding, human sizes) is computed here, since it needs
//! Unicode-aware width handling. Templates only select styles.

use super::styles::{self, names};
use super::templates::{
    CONFIG_TEMPLATE, MESSAGES_TEMPLATE, RENDERERS_TEMPLATE, SHEET_LIST_TEMPLATE,
    SHEET_TABLE_TEMPLATE,
};
use cheeto::api::{CmdMessage, MessageLevel, RendererInfo, SheetSummary};
use cheeto::config::CheetoConfig;
use cheeto::error::Result;
use minijinja::{Environment, Value};
use serde::Serialize;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_LIST_MESSAGE: &str = "No sheets found.";
pub const MARKDOWN_MARKER: &str = "✓";

const COLUMN_GAP: usize = 2;
const SIZE_UNITS: &[&str] = &["KiB", "MiB", "GiB", "TiB", "PiB"];

#[derive(Serialize)]
struct SheetListData {
    sheets: Vec<String>,
}

#[derive(Serialize)]
struct SheetRow {
    name: String,
    filename: String,
    title: String,
    size: String,
    markdown: String,
}

#[derive(Serialize)]
struct SheetTableData {
    title: String,
    header: String,
    rule: String,
    rows: Vec<SheetRow>,
    empty_message: &'static str,
}

/// JSON shape of one sheet in `list-sheets --json`.
#[derive(Serialize)]
struct SheetJson<'a> {
    name: &'a str,
    path: String,
    title: &'a str,
    size: usize,
    markdown: bool,
}

#[derive(Serialize)]
struct RendererLine {
    marker: &'static str,
    name: String,
    description: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
struct RenderersData {
    renderers: Vec<RendererLine>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> std::result::Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    env.add_template("output", template)?;
    env.get_template("output")?.render(data)
}

/// One sheet name per line, and nothing at all for an empty collection.
pub fn render_sheet_names(sheets: &[SheetSummary], use_color: bool) -> String {
    let data = SheetListData {
        sheets: sheets.iter().map(|s| s.name.to_string()).collect(),
    };
    render_template(SHEET_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Detailed table, titled with the data path.
pub fn render_sheet_table(data_path: &Path, sheets: &[SheetSummary], use_color: bool) -> String {
    let headers = ["Name", "Filename", "Title", "Size", "MD?"];
    let cells: Vec<[String; 5]> = sheets
        .iter()
        .map(|sheet| {
            let filename = if sheet.filename == sheet.name.as_str() {
                String::new()
            } else {
                sheet.filename.clone()
            };
            let markdown = if sheet.markdown { MARKDOWN_MARKER } else { "" };
            [
                sheet.name.to_string(),
                filename,
                sheet.title.clone(),
                human_size(sheet.size),
                markdown.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header = headers
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad(h, *w))
        .collect::<Vec<_>>()
        .join(&" ".repeat(COLUMN_GAP));
    let total_width = widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1);

    let rows = cells
        .into_iter()
        .map(|[name, filename, title, size, markdown]| {
            let has_marker = !markdown.is_empty();
            SheetRow {
                name: pad(&name, widths[0]),
                filename: pad(&filename, widths[1]),
                title: pad(&title, widths[2]),
                size: if has_marker { pad(&size, widths[3]) } else { size },
                markdown: if has_marker {
                    format!("{}{}", " ".repeat(COLUMN_GAP), markdown)
                } else {
                    String::new()
                },
            }
        })
        .collect();

    let data = SheetTableData {
        title: data_path.display().to_string(),
        header: header.trim_end().to_string(),
        rule: "─".repeat(total_width),
        rows,
        empty_message: EMPTY_LIST_MESSAGE,
    };
    render_template(SHEET_TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Pretty-printed JSON array; paths are home-abbreviated.
pub fn render_sheets_json(sheets: &[SheetSummary]) -> Result<String> {
    let entries: Vec<SheetJson> = sheets
        .iter()
        .map(|sheet| SheetJson {
            name: sheet.name.as_str(),
            path: sheet.path.display().to_string(),
            title: &sheet.title,
            size: sheet.size,
            markdown: sheet.markdown,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

pub fn render_renderers(renderers: &[RendererInfo], use_color: bool) -> String {
    let width = renderers.iter().map(|r| r.name.width()).max().unwrap_or(0);
    let data = RenderersData {
        renderers: renderers
            .iter()
            .map(|r| RendererLine {
                marker: if r.is_default { "*" } else { " " },
                name: pad(r.name, width),
                description: r.description,
                status: if r.available { "" } else { " (not installed)" },
            })
            .collect(),
    };
    render_template(RENDERERS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_config(config: &CheetoConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: config
            .list_all()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Unstyled clash report for stderr.
pub fn render_name_clash(name: &str, first: &Path, second: &Path) -> String {
    format!(
        "Sheet name clash:\n  {}\n  {}\n  {}\n",
        name,
        first.display(),
        second.display()
    )
}

/// Binary (1024-based) human-readable size: `1 Byte`, `12 Bytes`, `1.5 KiB`.
pub fn human_size(bytes: usize) -> String {
    if bytes == 1 {
        return "1 Byte".to_string();
    }
    if bytes < 1024 {
        return format!("{} Bytes", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = SIZE_UNITS[0];
    for next in SIZE_UNITS[1..].iter().copied() {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
