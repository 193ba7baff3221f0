use crate::CountReport;

/// Ordering of the per-word lines in a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportOrder {
    #[default]
    Alphabetical,
    /// Most frequent first, ties alphabetically.
    ByCount,
}

/// Render a report as plain text.
///
/// ```text
/// <path>
/// Total number of words in file: <n>
/// Total number of different words: <n>
/// Count by word:
/// <word>: <count>
/// ```
pub fn render_report(report: &CountReport, order: ReportOrder) -> String {
    let mut entries: Vec<&(String, usize)> = report.frequencies.iter().collect();
    match order {
        ReportOrder::Alphabetical => entries.sort_by(|a, b| a.0.cmp(&b.0)),
        ReportOrder::ByCount => entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))),
    }

    let header = [
        report.path.clone(),
        format!("Total number of words in file: {}", report.word_count),
        format!("Total number of different words: {}", report.distinct_word_count),
        "Count by word:".to_string(),
    ];
    let lines = entries
        .into_iter()
        .map(|(word, count)| format!("{word}: {count}"));

    header
        .into_iter()
        .chain(lines)
        .map(|line| line + "\n")
        .collect()
}
