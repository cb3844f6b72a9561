use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names referenced from templates through the `style` filter.
pub mod names {
    pub const NAME: &str = "name";
    pub const FILENAME: &str = "filename";
    pub const MUTED: &str = "muted";
    pub const TABLE_TITLE: &str = "table_title";
    pub const TABLE_HEADER: &str = "table_header";
    pub const MARKDOWN: &str = "markdown";
    pub const CONFIG_KEY: &str = "config_key";
    pub const DEFAULT: &str = "default";
    pub const UNAVAILABLE: &str = "unavailable";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

pub static CHEETO_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let muted = Style::new().color256(246);
    HashMap::from([
        (names::NAME, Style::new().cyan().bold()),
        (names::FILENAME, muted.clone()),
        (names::MUTED, muted.clone()),
        (names::TABLE_TITLE, Style::new().bold().italic()),
        (names::TABLE_HEADER, Style::new().bold()),
        (names::MARKDOWN, Style::new().green()),
        (names::CONFIG_KEY, Style::new().yellow()),
        (names::DEFAULT, Style::new().green().bold()),
        (names::UNAVAILABLE, muted.italic()),
        (names::INFO, Style::new()),
        (names::SUCCESS, Style::new().green()),
        (names::ERROR, Style::new().red()),
    ])
});

/// Applies the named theme style. Unknown names and empty text pass through.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match CHEETO_THEME.get(name) {
        Some(style) if use_color && !text.is_empty() => {
            style.clone().force_styling(true).apply_to(text).to_string()
        }
        _ => text.to_string(),
    }
}
