//! # Rendering Module
//!
//! Styled terminal output using the `outstanding` crate.
//!
//! Layout (column widths, padding) stays in Rust because it needs Unicode-aware width
//! calculation. Templates only decide what goes on each line and which style it gets.
//!
//! Customer ids are printed exactly as stored. They are already padded to a common
//! width, so the id column lines up on its own.

use super::styles::{names, ROSTER_THEME};
use super::templates::{CONFIG_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE};
use outstanding::{render, render_with_color, ThemeChoice};
use rosterapp::commands::{CmdMessage, MessageLevel};
use rosterapp::config::RosterConfig;
use rosterapp::model::CustomerRow;
use serde::Serialize;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 5] = ["ID", "Name", "Email", "Phone", "Created"];

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    email: String,
    phone: String,
    created: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<RowData>,
    header: String,
    gap: &'static str,
    empty: bool,
    empty_message: String,
    from_cache: bool,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
    source: String,
}

/// Shape of `--output json`.
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub customers: &'a [CustomerRow],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub messages: &'a [CmdMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<&'a RosterConfig>,
}

/// Pads `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn column_widths(rows: &[CustomerRow]) -> [usize; 5] {
    let mut widths = HEADERS.map(UnicodeWidthStr::width);
    for row in rows {
        let cells = [&row.id, &row.name, &row.email, &row.phone, &row.created];
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.width());
        }
    }
    widths
}

/// Renders with terminal color detection, or with color forced on or off.
fn render_or_plain<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> Option<String> {
    let rendered = match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*ROSTER_THEME), c),
        None => render(template, data, ThemeChoice::from(&*ROSTER_THEME)),
    };
    rendered.ok()
}

/// Renders customers as an aligned table.
pub fn render_customer_table(rows: &[CustomerRow], empty_message: &str, from_cache: bool) -> String {
    render_customer_table_internal(rows, empty_message, from_cache, None)
}

fn render_customer_table_internal(
    rows: &[CustomerRow],
    empty_message: &str,
    from_cache: bool,
    use_color: Option<bool>,
) -> String {
    let widths = column_widths(rows);
    let last = widths.len() - 1;

    let header = HEADERS
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (h, w))| if i == last { h.to_string() } else { pad(h, w) })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    let row_data: Vec<RowData> = rows
        .iter()
        .map(|r| RowData {
            id: pad(&r.id, widths[0]),
            name: pad(&r.name, widths[1]),
            email: pad(&r.email, widths[2]),
            phone: pad(&r.phone, widths[3]),
            created: r.created.clone(),
        })
        .collect();

    let data = ListData {
        empty: row_data.is_empty(),
        rows: row_data,
        header,
        gap: COLUMN_GAP,
        empty_message: empty_message.to_string(),
        from_cache,
    };

    render_or_plain(LIST_TEMPLATE, &data, use_color).unwrap_or_else(|| {
        rows.iter()
            .map(|r| format!("{} {} {} {}\n", r.id, r.name, r.email, r.phone))
            .collect()
    })
}

/// Renders command messages with a style per level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect(),
    };

    render_or_plain(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Renders the effective configuration as `key = value` lines.
pub fn render_config(config: &RosterConfig, config_file: &Path) -> String {
    render_config_internal(config, config_file, None)
}

fn render_config_internal(
    config: &RosterConfig,
    config_file: &Path,
    use_color: Option<bool>,
) -> String {
    let pairs = [
        ("cache_enabled", config.cache_enabled.to_string()),
        ("cache_ttl_secs", config.cache_ttl_secs.to_string()),
        (
            "resequence_on_startup",
            config.resequence_on_startup.to_string(),
        ),
    ];
    let key_width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);

    let source = if config_file.exists() {
        format!("# from {}", config_file.display())
    } else {
        format!("# defaults ({} not found)", config_file.display())
    };
    let data = ConfigData {
        entries: pairs
            .iter()
            .map(|(k, v)| ConfigEntry {
                key: pad(k, key_width),
                value: v.clone(),
            })
            .collect(),
        source,
    };

    render_or_plain(CONFIG_TEMPLATE, &data, use_color).unwrap_or_else(|| {
        pairs
            .iter()
            .map(|(k, v)| format!("{} = {}\n", k, v))
            .collect()
    })
}

pub fn to_json(output: &JsonOutput<'_>) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
}
