//! # CLI
//!
//! One UI client for cheeto, and the only place that knows about terminal I/O,
//! exit codes and output formatting.
//!
//! ## Behavior
//!
//! - `cheeto ls` lists sheet names; `-t` shows a table, `-j` prints JSON.
//! - `cheeto show NAME` prints a sheet. Markdown sheets go through the configured
//!   renderer, everything else is printed verbatim. An unknown name is reported
//!   and is not an error.
//! - A sheet name clash aborts any sheet command with a report on stderr and
//!   exit status 1.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch, logging setup and per-command handlers
//! - `render`: output formatting through templates
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles
//! - `templates`: output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
