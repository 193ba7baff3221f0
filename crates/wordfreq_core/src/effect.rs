use std::path::PathBuf;

/// Side effects requested by [`crate::update`] and executed by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Count words in a single document and answer with `Msg::CountFinished`.
    CountFile { path: PathBuf },
    /// Overwrite `destination` with `content` and answer with `Msg::SaveFinished`.
    SaveReport { destination: PathBuf, content: String },
    /// The user asked to close; the host decides how to wind down.
    Shutdown,
}
