use std::path::PathBuf;

use crate::render::{render_report, ReportOrder};
use crate::view_model::AppViewModel;

/// Counting results handed to the core by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountReport {
    pub path: String,
    pub word_count: usize,
    pub distinct_word_count: usize,
    /// Unordered `(word, count)` pairs; rendering picks the order.
    pub frequencies: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    report: Option<CountReport>,
    pending_count: Option<PathBuf>,
    pending_save: Option<PathBuf>,
    notice: Option<Notice>,
    order: ReportOrder,
    shutdown_requested: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: ReportOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            report_text: self.rendered_report(),
            notice: self.notice.clone(),
            can_save: self.report.is_some() && self.pending_save.is_none(),
            busy: self.pending_count.is_some() || self.pending_save.is_some(),
            shutdown_requested: self.shutdown_requested,
        }
    }

    pub fn report(&self) -> Option<&CountReport> {
        self.report.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn order(&self) -> ReportOrder {
        self.order
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }

    pub fn rendered_report(&self) -> Option<String> {
        self.report.as_ref().map(|r| render_report(r, self.order))
    }

    pub(crate) fn pending_count(&self) -> Option<&PathBuf> {
        self.pending_count.as_ref()
    }

    pub(crate) fn begin_count(&mut self, path: PathBuf) {
        self.pending_count = Some(path);
        self.notice = None;
    }

    pub(crate) fn finish_count(&mut self, report: Option<CountReport>) {
        self.pending_count = None;
        self.report = report;
    }

    pub(crate) fn begin_save(&mut self, destination: PathBuf) {
        self.pending_save = Some(destination);
    }

    pub(crate) fn finish_save(&mut self) {
        self.pending_save = None;
    }

    pub(crate) fn is_saving(&self) -> bool {
        self.pending_save.is_some()
    }

    pub(crate) fn set_order(&mut self, order: ReportOrder) {
        self.order = order;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub(crate) fn request_shutdown(&mut self) {
        self.shutdown_requested = true;
    }
}
