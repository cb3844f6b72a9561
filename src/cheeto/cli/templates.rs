//! # CLI Templates
//!
//! Output layout lives in standalone minijinja files under `templates/`, embedded
//! here as string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a line holding
//! only a block tag produces no output. A line whose last token is a block tag
//! loses its newline; keep a `{{ ... }}` expression at the end of output lines.
//!
//! Column widths and padding are computed in `render.rs`; templates only pick
//! styles with the `style` filter.

pub const SHEET_LIST_TEMPLATE: &str = include_str!("templates/sheet_list.tmp");
pub const SHEET_TABLE_TEMPLATE: &str = include_str!("templates/sheet_table.tmp");
pub const RENDERERS_TEMPLATE: &str = include_str!("templates/renderers.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
