//! # cheeto
//!
//! A personal cheatsheet finder. Cheatsheets are plain or markdown files kept
//! under one data directory; cheeto discovers them, gives each a short unique
//! name, and lists or shows them on the terminal.
//!
//! ## Architecture
//!
//! Like any UI-agnostic library with a thin CLI on top, the code is layered:
//!
//! 1. **CLI** (`src/cheeto/cli/`, binary only): argument parsing, terminal
//!    output, exit codes. The only layer that touches stdout/stderr.
//! 2. **API** ([`api`]): a facade dispatching to commands with configured defaults.
//! 3. **Commands** ([`commands`]): one module per operation, each returning a
//!    [`commands::CmdResult`] of structured data and messages.
//! 4. **Core**:
//!    - [`sheet`]: a single sheet and how its name, title and kind are derived.
//!    - [`sheets`]: discovery under a root and collision-free naming.
//!    - [`markdown`]: pluggable markdown renderers.
//!    - [`config`], [`paths`], [`error`]: configuration, path helpers, errors.
//!
//! ## Naming in one example
//!
//! ```text
//! ~/.local/share/cheeto/
//!   git.cheatsheet.md       -> git
//!   lang/python.cheatsheet  -> lang/python
//!   tools/python.cheatsheet -> tools/python
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod markdown;
pub mod paths;
pub mod sheet;
pub mod sheets;
