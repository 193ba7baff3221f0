use std::path::PathBuf;

use clap::Parser;

use super::config::{OrderSetting, OutputFormat};
use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "wordfreq")]
#[command(about = "Count words and word frequencies in a .txt file")]
#[command(version)]
pub struct Cli {
    /// Text file to count; exactly one is accepted
    pub files: Vec<PathBuf>,

    /// Also save the rendered report to this path (overwrites)
    #[arg(short, long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Output format for stdout
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Ordering of the per-word lines
    #[arg(short, long, value_enum)]
    pub order: Option<OrderSetting>,

    /// Custom configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
