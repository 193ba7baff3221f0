use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use wordfreq_logging::{wf_debug, wf_info, wf_warn};

use crate::decode::decode_text;
use crate::document::DocumentHandle;
use crate::frequency::{count_text, CountSummary, FrequencyTable};

/// Failure of the one-time counting pass on a loaded document.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read document: {0}")]
    Read(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CounterState {
    Pending,
    Processed(CountSummary),
}

/// Word-frequency statistics for a single document.
///
/// Validation happens once in [`WordCounter::new`]. The counting pass runs
/// lazily on the first query and its result is kept for the lifetime of the
/// counter. Unloaded documents answer every query with zero or `None`; a
/// read failure during the pass degrades to an empty result.
#[derive(Debug, Clone)]
pub struct WordCounter {
    document: DocumentHandle,
    state: CounterState,
}

/// All three query results bundled for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStatistics {
    pub path: PathBuf,
    pub word_count: usize,
    pub distinct_word_count: usize,
    pub frequencies: FrequencyTable,
}

impl WordCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_document(DocumentHandle::new(path))
    }

    pub fn from_document(document: DocumentHandle) -> Self {
        Self {
            document,
            state: CounterState::Pending,
        }
    }

    pub fn path(&self) -> &Path {
        self.document.path()
    }

    pub fn document(&self) -> &DocumentHandle {
        &self.document
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_loaded()
    }

    pub fn is_processed(&self) -> bool {
        matches!(self.state, CounterState::Processed(_))
    }

    /// Total raw tokens, including those that normalize to nothing.
    pub fn word_count(&mut self) -> usize {
        self.summary().map_or(0, |s| s.total_words)
    }

    pub fn distinct_word_count(&mut self) -> usize {
        self.summary().map_or(0, CountSummary::distinct_words)
    }

    /// An owned copy of the frequency table, or `None` if the document was not loaded.
    pub fn frequency_snapshot(&mut self) -> Option<FrequencyTable> {
        self.summary().map(|s| s.table.clone())
    }

    pub fn statistics(&mut self) -> Option<WordStatistics> {
        let path = self.document.path().to_path_buf();
        self.summary().map(|s| WordStatistics {
            path,
            word_count: s.total_words,
            distinct_word_count: s.distinct_words(),
            frequencies: s.table.clone(),
        })
    }

    fn summary(&mut self) -> Option<&CountSummary> {
        if !self.document.is_loaded() {
            return None;
        }
        if let CounterState::Pending = self.state {
            let summary = match read_summary(self.document.path()) {
                Ok(summary) => summary,
                Err(err) => {
                    wf_warn!(
                        "Counting {:?} failed, reporting no words: {}",
                        self.document.path(),
                        err
                    );
                    CountSummary::default()
                }
            };
            self.state = CounterState::Processed(summary);
        }
        match &self.state {
            CounterState::Processed(summary) => Some(summary),
            CounterState::Pending => None,
        }
    }
}

fn read_summary(path: &Path) -> Result<CountSummary, ProcessError> {
    wf_debug!("Counting words in {:?}", path);
    let bytes = fs::read(path)?;
    let decoded = decode_text(&bytes);
    if decoded.had_errors {
        wf_warn!(
            "Malformed {} bytes in {:?} were replaced",
            decoded.encoding_label,
            path
        );
    }
    let summary = count_text(&decoded.text);
    wf_info!(
        "Counted {:?} ({}): {} words, {} distinct",
        path,
        decoded.encoding_label,
        summary.total_words,
        summary.distinct_words()
    );
    Ok(summary)
}
