use crate::config::CheetoConfig;
use crate::sheet::SheetName;
use std::path::PathBuf;

pub mod config;
pub mod list;
pub mod renderers;
pub mod show;

#[derive(Debug, Clone)]
pub struct CheetoPaths {
    /// Root directory searched for sheets, already `~`-expanded.
    pub data: PathBuf,
    /// Directory holding `config.json`.
    pub config: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of `list-sheets` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    /// The unique, possibly disambiguated, collection key.
    pub name: SheetName,
    pub filename: String,
    /// Home-abbreviated path.
    pub path: PathBuf,
    pub title: String,
    pub size: usize,
    pub markdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub available: bool,
    pub is_default: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_sheets: Vec<SheetSummary>,
    /// Sheet content ready to be written out, as produced by `show-sheet`.
    pub output: Option<String>,
    pub renderers: Vec<RendererInfo>,
    pub config: Option<CheetoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_sheets(mut self, sheets: Vec<SheetSummary>) -> Self {
        self.listed_sheets = sheets;
        self
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_renderers(mut self, renderers: Vec<RendererInfo>) -> Self {
        self.renderers = renderers;
        self
    }

    pub fn with_config(mut self, config: CheetoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
