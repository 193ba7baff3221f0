//! Layered settings: built-in defaults, then `wordfreq.ron`, then CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use log::LevelFilter;
use serde::Deserialize;
use wordfreq_core::ReportOrder;
use wordfreq_logging::wf_debug;

use super::cli::Cli;
use super::logging::LogDestination;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILENAME: &str = "wordfreq.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderSetting {
    #[default]
    Alphabetical,
    Count,
}

impl From<OrderSetting> for ReportOrder {
    fn from(value: OrderSetting) -> Self {
        match value {
            OrderSetting::Alphabetical => ReportOrder::Alphabetical,
            OrderSetting::Count => ReportOrder::ByCount,
        }
    }
}

/// Contents of the optional RON configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub log_destination: Option<LogDestination>,
    pub log_level: Option<String>,
    pub order: Option<OrderSetting>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub save: Option<PathBuf>,
    pub format: OutputFormat,
    pub order: ReportOrder,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self> {
        let level_text = cli.log_level.or(file.log_level);
        let log_level = match level_text {
            Some(text) => parse_level(&text)?,
            None => LevelFilter::Info,
        };
        Ok(Self {
            files: cli.files,
            save: cli.save,
            format: cli.format.or(file.format).unwrap_or_default(),
            order: cli.order.or(file.order).unwrap_or_default().into(),
            log_destination: cli.log.or(file.log_destination).unwrap_or_default(),
            log_level,
        })
    }
}

fn parse_level(text: &str) -> Result<LevelFilter> {
    text.trim()
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level {text:?}"))
}

/// Load the configuration file.
///
/// An explicit path must exist and parse. Without one, a missing default file
/// simply yields defaults.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FileConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };

    let config = parse_config(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    wf_debug!("Loaded configuration from {:?}", path);
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<FileConfig> {
    Ok(ron::from_str(text)?)
}
