//! Wordfreq core: pure presentation state machine and report rendering.
mod effect;
mod msg;
mod render;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use render::{render_report, ReportOrder};
pub use state::{AppState, CountReport, Notice, NoticeLevel};
pub use update::{
    update, FILE_PROBLEM_NOTICE, NOTHING_TO_SAVE_NOTICE, SINGLE_FILE_NOTICE,
};
pub use view_model::AppViewModel;
