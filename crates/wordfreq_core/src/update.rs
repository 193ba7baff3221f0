use crate::{AppState, Effect, Msg, Notice};

pub const SINGLE_FILE_NOTICE: &str = "Please select exactly one file.";
pub const FILE_PROBLEM_NOTICE: &str = "There was a problem with the file you tried to select.";
pub const NOTHING_TO_SAVE_NOTICE: &str = "There is nothing to save yet.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // Once closing, the shell is winding down and nothing new is started.
    if state.is_shutdown_requested() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::FilesSelected(mut paths) => {
            if paths.len() != 1 {
                state.set_notice(Notice::error(SINGLE_FILE_NOTICE));
                return (state, Vec::new());
            }
            let path = paths.remove(0);
            state.begin_count(path.clone());
            vec![Effect::CountFile { path }]
        }
        Msg::CountFinished { path, report } => {
            // A newer selection supersedes results for an older one.
            if state.pending_count() != Some(&path) {
                return (state, Vec::new());
            }
            let failed = report.is_none();
            state.finish_count(report);
            if failed {
                state.set_notice(Notice::error(FILE_PROBLEM_NOTICE));
            }
            Vec::new()
        }
        Msg::SaveRequested(destination) => {
            if state.is_saving() {
                return (state, Vec::new());
            }
            match state.rendered_report() {
                Some(content) => {
                    state.begin_save(destination.clone());
                    vec![Effect::SaveReport {
                        destination,
                        content,
                    }]
                }
                None => {
                    state.set_notice(Notice::error(NOTHING_TO_SAVE_NOTICE));
                    Vec::new()
                }
            }
        }
        Msg::SaveFinished(result) => {
            if !state.is_saving() {
                return (state, Vec::new());
            }
            state.finish_save();
            match result {
                Ok(path) => state.set_notice(Notice::info(format!("Saved to {}", path.display()))),
                Err(reason) => {
                    state.set_notice(Notice::error(format!("Could not save file: {reason}")))
                }
            }
            Vec::new()
        }
        Msg::OrderChanged(order) => {
            state.set_order(order);
            Vec::new()
        }
        Msg::CloseRequested => {
            state.request_shutdown();
            vec![Effect::Shutdown]
        }
    };

    (state, effects)
}
