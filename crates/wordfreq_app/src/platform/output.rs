use std::collections::BTreeMap;

use serde::Serialize;
use wordfreq_core::CountReport;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    word_count: usize,
    distinct_word_count: usize,
    frequencies: BTreeMap<&'a str, usize>,
}

/// Pretty JSON rendering with words sorted alphabetically.
pub fn render_json(report: &CountReport) -> serde_json::Result<String> {
    let json = JsonReport {
        path: &report.path,
        word_count: report.word_count,
        distinct_word_count: report.distinct_word_count,
        frequencies: report
            .frequencies
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect(),
    };
    serde_json::to_string_pretty(&json)
}
