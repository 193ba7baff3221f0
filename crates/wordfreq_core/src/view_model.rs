use crate::Notice;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Rendered report, if a file has been counted successfully.
    pub report_text: Option<String>,
    pub notice: Option<Notice>,
    pub can_save: bool,
    pub busy: bool,
    pub shutdown_requested: bool,
}
