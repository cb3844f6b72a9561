//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! cheeto operation, whatever the UI.
//!
//! The API dispatches to `commands/*.rs`, fills in defaults from the loaded
//! configuration, and returns `Result<CmdResult>`. It does no I/O beyond what
//! the commands do and never formats output.

use crate::commands;
use crate::config::CheetoConfig;
use crate::error::Result;

pub struct CheetoApi {
    paths: commands::CheetoPaths,
    config: CheetoConfig,
}

impl CheetoApi {
    pub fn new(paths: commands::CheetoPaths, config: CheetoConfig) -> Self {
        Self { paths, config }
    }

    pub fn list_sheets(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.paths, self.config.discovery)
    }

    /// Shows sheet `name`, using `renderer` or the configured default.
    pub fn show_sheet(&self, name: &str, renderer: Option<&str>) -> Result<commands::CmdResult> {
        let renderer = renderer.unwrap_or(&self.config.markdown_renderer);
        commands::show::run(&self.paths, self.config.discovery, name, renderer)
    }

    pub fn renderers(&self) -> Result<commands::CmdResult> {
        commands::renderers::run(&self.config.markdown_renderer)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::CheetoPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CheetoPaths, CmdMessage, CmdResult, MessageLevel, RendererInfo, SheetSummary};
