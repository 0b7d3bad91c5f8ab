//! submark CLI - render lightweight markup to HTML or a JSON node tree

mod config;

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment
    Html,
    /// Pretty-printed render tree
    Json,
}

#[derive(Parser)]
#[command(name = "submark")]
#[command(about = "Render submission markup to HTML or a JSON render tree")]
struct Cli {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// TOML config file with an `[inline]` table of marker switches
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };
    log::debug!("inline options: {:?}", config.inline);

    let input = match &cli.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let output = match cli.format {
        Format::Html => submark::to_html_with_options(&input, &config.inline),
        Format::Json => {
            let nodes = submark::render_with_options(&input, &config.inline);
            let mut json = serde_json::to_string_pretty(&nodes)?;
            json.push('\n');
            json
        }
    };

    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write output")?;

    Ok(())
}
