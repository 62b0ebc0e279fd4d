//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stockta")]
#[command(author, version, about = "Technical-analysis indicators and trading signals")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate per-date signals and an indicator snapshot for symbols
    Analyze(AnalyzeArgs),
    /// List available indicators
    Indicators,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// CSV file or directory containing {symbol}.csv files
    #[arg(short, long)]
    pub data: PathBuf,

    /// Symbols to analyze (comma-separated)
    #[arg(short = 'S', long, value_delimiter = ',', default_value = "RUN")]
    pub symbols: Vec<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long, default_value = "2020-05-01")]
    pub start: String,

    /// End date (YYYY-MM-DD)
    #[arg(long, default_value = "2020-05-29")]
    pub end: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save feature tables to a JSON file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
