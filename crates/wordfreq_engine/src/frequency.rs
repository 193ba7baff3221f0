use std::collections::hash_map;
use std::collections::HashMap;

use crate::normalize::{normalize_token, tokens};

/// Mapping from normalized word to its occurrence count.
///
/// Every stored count is at least 1 and the empty string is never a key.
/// Cloning yields an independent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`. Empty words are ignored.
    pub fn record(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    pub fn sorted_by_word(&self) -> Vec<(String, usize)> {
        let mut entries = self.owned_entries();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Entries by count descending, ties broken alphabetically.
    pub fn sorted_by_count(&self) -> Vec<(String, usize)> {
        let mut entries = self.owned_entries();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    fn owned_entries(&self) -> Vec<(String, usize)> {
        self.counts
            .iter()
            .map(|(word, &count)| (word.clone(), count))
            .collect()
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, usize);
    type IntoIter = hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Result of one counting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Every raw token, including ones that normalize to nothing.
    pub total_words: usize,
    pub table: FrequencyTable,
}

impl CountSummary {
    pub fn distinct_words(&self) -> usize {
        self.table.len()
    }
}

/// Tokenize, normalize and accumulate `text` in document order.
pub fn count_text(text: &str) -> CountSummary {
    let mut summary = CountSummary::default();
    for token in tokens(text) {
        summary.total_words += 1;
        summary.table.record(&normalize_token(token));
    }
    summary
}
