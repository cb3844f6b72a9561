//! # CLI Dispatch
//!
//! `run()` parses arguments, installs logging, resolves paths and configuration
//! through [`cheeto::init::initialize`], then hands off to one handler per
//! command. Handlers call the API facade and print the rendered `CmdResult`.
//!
//! Errors bubble up to `main.rs`, which prints them and exits 1. The one
//! exception is a sheet name clash, reported here in its own format.

use super::render::{
    print_messages, render_config, render_name_clash, render_renderers, render_sheet_names,
    render_sheet_table, render_sheets_json,
};
use super::setup::{Cli, Commands, OutputFormat};
use cheeto::api::{CheetoApi, ConfigAction};
use cheeto::error::{CheetoError, Result};
use cheeto::init::initialize;
use cheeto::paths::abbreviate_home;
use clap::Parser;
use console::Term;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CheetoApi,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!(?cli, "parsed arguments");

    if cli.no_color {
        console::set_colors_enabled(false);
    }
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    let ctx = AppContext {
        api: initialize(cli.data_path.as_deref())?.api,
        use_color,
    };

    let outcome = match cli.command {
        Commands::ListSheets { table, json, .. } => {
            handle_list(&ctx, OutputFormat::from_flags(table, json))
        }
        Commands::ShowSheet { name, markdown } => handle_show(&ctx, &name, markdown.as_deref()),
        Commands::Renderers => handle_renderers(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    };

    match outcome {
        Err(CheetoError::NameClash {
            name,
            first,
            second,
        }) => {
            eprint!("{}", render_name_clash(&name, &first, &second));
            std::process::exit(1);
        }
        other => other,
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--debug`, which wins over `info`.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_list(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    let result = ctx.api.list_sheets()?;
    let sheets = &result.listed_sheets;

    match format {
        OutputFormat::Plain => print!("{}", render_sheet_names(sheets, ctx.use_color)),
        OutputFormat::Table => {
            let title = abbreviate_home(&ctx.api.paths().data);
            print!("{}", render_sheet_table(&title, sheets, ctx.use_color));
        }
        OutputFormat::Json => println!("{}", render_sheets_json(sheets)?),
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str, renderer: Option<&str>) -> Result<()> {
    let result = ctx.api.show_sheet(name, renderer)?;
    if let Some(output) = &result.output {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_renderers(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.renderers()?;
    print!("{}", render_renderers(&result.renderers, ctx.use_color));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        print!("{}", render_config(config, ctx.use_color));
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}
