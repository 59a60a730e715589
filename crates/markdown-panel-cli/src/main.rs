//! `markdown-panel-cli`: classify a Markdown file and dump or view the result.
//!
//! Usage:
//!   markdown-panel-cli dump <file> [--format text|json] [--no-spans]
//!   markdown-panel-cli view <file>

mod dump;
mod render;
mod viewer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info};
use markdown_panel_config::{Config, OutputFormat};
use markdown_panel_engine::io;

use render::{RenderContext, render_document};

#[derive(Parser)]
#[command(
    name = "markdown-panel-cli",
    version,
    about = "Classify Markdown lines and their inline spans"
)]
struct Cli {
    /// More logging: -v for info, -vv for debug. RUST_LOG still wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every line's kind, fields and spans
    Dump {
        path: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Only print block classification
        #[arg(long)]
        no_spans: bool,
    },
    /// Show the rendered document in the terminal
    View { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    info!("Config path: {}", Config::config_path().display());
    let config = Config::load()?.unwrap_or_default();

    match cli.command {
        Command::Dump {
            path,
            format,
            no_spans,
        } => {
            let doc = io::load_document(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            let format = format.map(OutputFormat::from).unwrap_or(config.format);
            let show_spans = config.show_spans && !no_spans;
            print!("{}", dump::dump(&doc, format, show_spans)?);
        }
        Command::View { path } => {
            let doc = io::load_document(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            info!("Loaded {} lines from {}", doc.lines.len(), path.display());
            let ctx = RenderContext {
                document_dir: document_dir(&path),
                image_fallback: config.image_fallback,
            };
            viewer::run_viewer(&path, render_document(&doc, &ctx))?;
        }
    }
    Ok(())
}

fn document_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
