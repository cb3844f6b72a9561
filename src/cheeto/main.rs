//! # cheeto CLI
//!
//! The binary is thin: the CLI lives in `cli/` and this file only invokes
//! `cli::run()` and turns errors into an exit status.
//!
//! ```text
//! cli/        clap parsing, dispatch, template rendering   (binary only)
//! api.rs      facade returning CmdResult                   (library)
//! commands/   list, show, renderers, config                (library)
//! core        sheet, sheets, markdown, config, paths        (library)
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic and never writes to the
//! terminal.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
