use cheeto::markdown::renderer_names;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cheeto", bin_name = "cheeto", version)]
#[command(about = "Find, list and show your personal cheatsheets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, help_heading = "Options")]
    pub debug: bool,

    /// Directory to search for cheatsheets
    #[arg(
        short = 'D',
        long,
        global = true,
        value_name = "PATH",
        help_heading = "Options"
    )]
    pub data_path: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

/// Output format for `list-sheets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_flags(table: bool, json: bool) -> Self {
        match (table, json) {
            (true, _) => OutputFormat::Table,
            (_, true) => OutputFormat::Json,
            _ => OutputFormat::Plain,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available sheets
    #[command(visible_aliases = ["ls", "list"], display_order = 1)]
    ListSheets {
        /// Just the sheet names, one per line (default)
        #[arg(short = 'P', long, group = "format")]
        plain: bool,

        /// A table of detailed sheet information
        #[arg(short, long, group = "format")]
        table: bool,

        /// JSON describing the discovered sheets
        #[arg(short, long, group = "format")]
        json: bool,
    },

    /// Show the specified sheet
    #[command(visible_aliases = ["s", "show"], display_order = 2)]
    ShowSheet {
        /// Name of the sheet, as shown by list-sheets
        name: String,

        /// Renderer used for markdown sheets (see `cheeto renderers`)
        #[arg(
            short,
            long,
            value_name = "RENDERER",
            value_parser = PossibleValuesParser::new(renderer_names())
        )]
        markdown: Option<String>,
    },

    /// List markdown renderers and whether they are installed
    #[command(display_order = 3)]
    Renderers,

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (data-path, markdown-renderer, discovery)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cheeto").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_list_formats() {
        match parse(&["ls", "-t"]).command {
            Commands::ListSheets { table, json, .. } => {
                assert_eq!(OutputFormat::from_flags(table, json), OutputFormat::Table)
            }
            other => panic!("unexpected command {:?}", other),
        }
        match parse(&["list-sheets"]).command {
            Commands::ListSheets { table, json, .. } => {
                assert_eq!(OutputFormat::from_flags(table, json), OutputFormat::Plain)
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn list_formats_are_exclusive() {
        let result = Cli::try_parse_from(["cheeto", "ls", "--table", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_show_with_renderer_and_globals() {
        let cli = parse(&["-d", "s", "git", "-m", "plain", "-D", "/tmp/sheets"]);
        assert!(cli.debug);
        assert_eq!(cli.data_path, Some(PathBuf::from("/tmp/sheets")));
        match cli.command {
            Commands::ShowSheet { name, markdown } => {
                assert_eq!(name, "git");
                assert_eq!(markdown.as_deref(), Some("plain"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_renderer() {
        let result = Cli::try_parse_from(["cheeto", "show", "git", "-m", "rich"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["cheeto"]).is_err());
    }

    #[test]
    fn parses_config_set() {
        match parse(&["config", "discovery", "flat"]).command {
            Commands::Config { key, value } => {
                assert_eq!(key.as_deref(), Some("discovery"));
                assert_eq!(value.as_deref(), Some("flat"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
