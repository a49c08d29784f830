//! Command-line argument definitions.

use clap::Parser;
use markdown_toolkit_config::OutputFormat;
use std::path::PathBuf;

/// Parse Markdown files and print their document tree.
#[derive(Parser, Debug)]
#[command(name = "markdown-toolkit-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Files or glob patterns to parse; `-` (or nothing) reads stdin
    pub inputs: Vec<String>,

    /// Output format (json, html, outline); defaults to the config file's
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of ~/.config/markdown-toolkit/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the maximum nesting depth of quotes, lists and inline spans
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Write one output file per input into this directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}
