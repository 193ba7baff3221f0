//! Command-line presentation shell around the wordfreq core and engine.
pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod logging;
pub(crate) mod output;

use std::process::ExitCode;

use anyhow::Result;

pub fn run(cli: cli::Cli) -> Result<ExitCode> {
    let file_config = config::load_file_config(cli.config.as_deref())?;
    let settings = config::Settings::resolve(cli, file_config)?;
    logging::initialize(settings.log_destination, settings.log_level);
    app::App::new(&settings).run(&settings)
}
