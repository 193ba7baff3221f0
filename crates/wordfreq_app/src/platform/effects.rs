use std::path::{Path, PathBuf};

use wordfreq_core::{CountReport, Effect, Msg};
use wordfreq_engine::{ReportWriter, WordCounter, WordStatistics};
use wordfreq_logging::{wf_error, wf_info};

/// Outcome of executing a single effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectOutcome {
    /// Feed this message back into the core.
    Reply(Msg),
    /// The core asked the host to wind down.
    Shutdown,
}

/// Executes core effects synchronously against the engine.
#[derive(Debug, Default)]
pub struct EffectRunner {
    writer: ReportWriter,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&self, effect: Effect) -> EffectOutcome {
        match effect {
            Effect::CountFile { path } => {
                let report = count_file(&path);
                EffectOutcome::Reply(Msg::CountFinished { path, report })
            }
            Effect::SaveReport {
                destination,
                content,
            } => EffectOutcome::Reply(Msg::SaveFinished(self.save(&destination, &content))),
            Effect::Shutdown => EffectOutcome::Shutdown,
        }
    }

    fn save(&self, destination: &Path, content: &str) -> Result<PathBuf, String> {
        match self.writer.write(destination, content) {
            Ok(path) => {
                wf_info!("Saved report to {:?} ({} bytes)", path, content.len());
                Ok(path)
            }
            Err(err) => {
                wf_error!("Failed to save report to {:?}: {}", destination, err);
                Err(err.to_string())
            }
        }
    }
}

/// A fresh counter per request; nothing is shared between counts.
fn count_file(path: &Path) -> Option<CountReport> {
    let mut counter = WordCounter::new(path);
    counter.statistics().map(to_report)
}

fn to_report(stats: WordStatistics) -> CountReport {
    CountReport {
        path: stats.path.display().to_string(),
        word_count: stats.word_count,
        distinct_word_count: stats.distinct_word_count,
        frequencies: stats.frequencies.into_iter().collect(),
    }
}
