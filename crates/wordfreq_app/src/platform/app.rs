use std::collections::VecDeque;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use wordfreq_core::{update, AppState, Msg, NoticeLevel};
use wordfreq_logging::{wf_debug, wf_info};

use super::config::{OutputFormat, Settings};
use super::effects::{EffectOutcome, EffectRunner};
use super::output::render_json;

/// Drives the core state machine for one CLI invocation.
pub struct App {
    state: AppState,
    runner: EffectRunner,
    shutting_down: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: AppState::with_order(settings.order),
            runner: EffectRunner::new(),
            shutting_down: false,
        }
    }

    pub fn run(mut self, settings: &Settings) -> Result<ExitCode> {
        self.dispatch(Msg::FilesSelected(settings.files.clone()));

        if let Some(destination) = &settings.save {
            if self.state().report().is_some() {
                self.dispatch(Msg::SaveRequested(destination.clone()));
            }
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_output(&mut out, settings.format)?;
        let succeeded = self.succeeded();

        self.dispatch(Msg::CloseRequested);
        wf_debug!("Shutdown acknowledged: {}", self.is_shutting_down());

        Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    /// Feed a message and every follow-up produced by its effects.
    pub fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (next, effects) = update(state, msg);
            self.state = next;
            for effect in effects {
                match self.runner.run(effect) {
                    EffectOutcome::Reply(reply) => inbox.push_back(reply),
                    EffectOutcome::Shutdown => {
                        wf_info!("Shutdown requested");
                        self.shutting_down = true;
                    }
                }
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down
    }

    /// A report exists and nothing reported an error afterwards.
    pub fn succeeded(&self) -> bool {
        let errored = self
            .state
            .notice()
            .is_some_and(|n| n.level == NoticeLevel::Error);
        self.state.report().is_some() && !errored
    }

    pub fn write_output(&self, out: &mut impl Write, format: OutputFormat) -> Result<()> {
        if let Some(report) = self.state.report() {
            match format {
                OutputFormat::Text => {
                    if let Some(text) = self.state.rendered_report() {
                        out.write_all(text.as_bytes())?;
                    }
                }
                OutputFormat::Json => {
                    let json = render_json(report).context("failed to encode report as JSON")?;
                    writeln!(out, "{json}")?;
                }
            }
        }
        if let Some(notice) = self.state.notice() {
            match notice.level {
                NoticeLevel::Info => eprintln!("{}", notice.text),
                NoticeLevel::Error => eprintln!("error: {}", notice.text),
            }
        }
        out.flush()?;
        Ok(())
    }
}
