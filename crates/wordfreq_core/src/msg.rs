use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked or dropped one or more files.
    FilesSelected(Vec<PathBuf>),
    /// Engine finished counting; `None` means the file could not be used.
    CountFinished {
        path: PathBuf,
        report: Option<crate::CountReport>,
    },
    /// User asked to save the current report to a destination.
    SaveRequested(PathBuf),
    /// Result of a save, with the written path or an error description.
    SaveFinished(Result<PathBuf, String>),
    /// User switched how the word list is ordered.
    OrderChanged(crate::ReportOrder),
    /// User closed the window or quit.
    CloseRequested,
}
