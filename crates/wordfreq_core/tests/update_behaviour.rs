use std::path::PathBuf;

use pretty_assertions::assert_eq;
use wordfreq_core::{
    update, AppState, CountReport, Effect, Msg, NoticeLevel, ReportOrder, FILE_PROBLEM_NOTICE,
    NOTHING_TO_SAVE_NOTICE, SINGLE_FILE_NOTICE,
};

fn report_for(path: &str) -> CountReport {
    CountReport {
        path: path.to_string(),
        word_count: 4,
        distinct_word_count: 2,
        frequencies: vec![("b".to_string(), 3), ("a".to_string(), 1)],
    }
}

fn counted_state(path: &str) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::FilesSelected(vec![PathBuf::from(path)]),
    );
    let (state, _) = update(
        state,
        Msg::CountFinished {
            path: PathBuf::from(path),
            report: Some(report_for(path)),
        },
    );
    state
}

#[test]
fn new_state_has_nothing_to_show() {
    let view = AppState::new().view();
    assert_eq!(view.report_text, None);
    assert_eq!(view.notice, None);
    assert!(!view.can_save);
    assert!(!view.busy);
    assert!(!view.shutdown_requested);
}

#[test]
fn single_file_selection_requests_count() {
    wordfreq_logging::initialize_for_tests();
    let (state, effects) = update(
        AppState::new(),
        Msg::FilesSelected(vec![PathBuf::from("a.txt")]),
    );

    assert_eq!(
        effects,
        vec![Effect::CountFile {
            path: PathBuf::from("a.txt")
        }]
    );
    assert!(state.view().busy);
    assert!(!state.view().can_save);
}

#[test]
fn multiple_files_are_rejected() {
    let (state, effects) = update(
        AppState::new(),
        Msg::FilesSelected(vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]),
    );

    assert!(effects.is_empty());
    let notice = state.notice().expect("notice set");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, SINGLE_FILE_NOTICE);
}

#[test]
fn empty_selection_is_rejected() {
    let (state, effects) = update(AppState::new(), Msg::FilesSelected(Vec::new()));
    assert!(effects.is_empty());
    assert_eq!(state.notice().map(|n| n.text.as_str()), Some(SINGLE_FILE_NOTICE));
}

#[test]
fn failed_count_reports_file_problem() {
    let (state, _) = update(
        AppState::new(),
        Msg::FilesSelected(vec![PathBuf::from("notes")]),
    );
    let (state, effects) = update(
        state,
        Msg::CountFinished {
            path: PathBuf::from("notes"),
            report: None,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.report(), None);
    assert_eq!(state.notice().map(|n| n.text.as_str()), Some(FILE_PROBLEM_NOTICE));
    assert!(!state.view().busy);
    assert_eq!(state.view().report_text, None);
}

#[test]
fn successful_count_renders_report() {
    let state = counted_state("doc.txt");
    let view = state.view();

    assert!(view.can_save);
    assert!(!view.busy);
    assert_eq!(view.notice, None);
    assert_eq!(
        view.report_text.as_deref(),
        Some(
            "doc.txt\n\
             Total number of words in file: 4\n\
             Total number of different words: 2\n\
             Count by word:\n\
             a: 1\n\
             b: 3\n"
        )
    );
}

#[test]
fn stale_count_result_is_ignored() {
    let (state, _) = update(
        AppState::new(),
        Msg::FilesSelected(vec![PathBuf::from("old.txt")]),
    );
    let (state, _) = update(state, Msg::FilesSelected(vec![PathBuf::from("new.txt")]));
    let (state, _) = update(
        state,
        Msg::CountFinished {
            path: PathBuf::from("old.txt"),
            report: Some(report_for("old.txt")),
        },
    );

    assert_eq!(state.report(), None);
    assert!(state.view().busy);
}

#[test]
fn new_selection_clears_previous_notice() {
    let (state, _) = update(AppState::new(), Msg::FilesSelected(Vec::new()));
    assert!(state.notice().is_some());
    let (state, _) = update(state, Msg::FilesSelected(vec![PathBuf::from("a.txt")]));
    assert_eq!(state.notice(), None);
}

#[test]
fn save_without_report_is_refused() {
    let (state, effects) = update(AppState::new(), Msg::SaveRequested(PathBuf::from("out.txt")));
    assert!(effects.is_empty());
    assert_eq!(state.notice().map(|n| n.text.as_str()), Some(NOTHING_TO_SAVE_NOTICE));
}

#[test]
fn save_emits_rendered_content() {
    let state = counted_state("doc.txt");
    let expected = state.rendered_report().unwrap();

    let (state, effects) = update(state, Msg::SaveRequested(PathBuf::from("out.txt")));
    assert_eq!(
        effects,
        vec![Effect::SaveReport {
            destination: PathBuf::from("out.txt"),
            content: expected,
        }]
    );
    assert!(!state.view().can_save);

    // A second request while saving is dropped.
    let (state, effects) = update(state, Msg::SaveRequested(PathBuf::from("other.txt")));
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::SaveFinished(Ok(PathBuf::from("out.txt"))));
    let notice = state.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.text, "Saved to out.txt");
    assert!(state.view().can_save);
}

#[test]
fn save_failure_is_a_notice_not_a_crash() {
    let state = counted_state("doc.txt");
    let (state, _) = update(state, Msg::SaveRequested(PathBuf::from("/nope/out.txt")));
    let (state, effects) = update(state, Msg::SaveFinished(Err("permission denied".to_string())));

    assert!(effects.is_empty());
    let notice = state.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "Could not save file: permission denied");
    assert!(state.report().is_some());
}

#[test]
fn order_change_rerenders() {
    let state = counted_state("doc.txt");
    assert!(state
        .rendered_report()
        .unwrap()
        .ends_with("Count by word:\na: 1\nb: 3\n"));

    let (state, effects) = update(state, Msg::OrderChanged(ReportOrder::ByCount));
    assert!(effects.is_empty());
    assert_eq!(state.order(), ReportOrder::ByCount);
    assert!(state
        .rendered_report()
        .unwrap()
        .ends_with("Count by word:\nb: 3\na: 1\n"));
}

#[test]
fn close_emits_single_shutdown() {
    let (state, effects) = update(AppState::new(), Msg::CloseRequested);
    assert_eq!(effects, vec![Effect::Shutdown]);
    assert!(state.view().shutdown_requested);

    let (state, effects) = update(state, Msg::CloseRequested);
    assert!(effects.is_empty());

    let (_, effects) = update(state, Msg::FilesSelected(vec![PathBuf::from("a.txt")]));
    assert!(effects.is_empty());
}
