use std::fs::{self, File};
use std::path::{Path, PathBuf};

use thiserror::Error;
use wordfreq_logging::{wf_debug, wf_warn};

/// File-name suffix accepted as a countable document, compared case-insensitively.
pub const ACCEPTED_EXTENSION: &str = ".txt";

/// Why a path was rejected at construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidSource {
    #[error("file does not exist")]
    Missing,
    #[error("path is not a regular file")]
    NotAFile,
    #[error("file is not readable: {0}")]
    Unreadable(String),
    #[error("file name does not end with .txt")]
    WrongExtension,
}

/// One input source, validated exactly once when it is created.
#[derive(Debug, Clone)]
pub struct DocumentHandle {
    path: PathBuf,
    rejection: Option<InvalidSource>,
}

impl DocumentHandle {
    /// Validate `path`. Never fails; an invalid path yields an unloaded handle.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let rejection = validate(&path).err();
        match &rejection {
            Some(reason) => wf_warn!("Rejected document {:?}: {}", path, reason),
            None => wf_debug!("Accepted document {:?}", path),
        }
        Self { path, rejection }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff the path passed validation at construction.
    pub fn is_loaded(&self) -> bool {
        self.rejection.is_none()
    }

    pub fn rejection(&self) -> Option<&InvalidSource> {
        self.rejection.as_ref()
    }
}

fn validate(path: &Path) -> Result<(), InvalidSource> {
    let meta = fs::metadata(path).map_err(|_| InvalidSource::Missing)?;
    if !meta.is_file() {
        return Err(InvalidSource::NotAFile);
    }
    // Opening is the only portable readability probe; the handle is dropped immediately.
    File::open(path).map_err(|e| InvalidSource::Unreadable(e.to_string()))?;
    if !has_accepted_extension(path) {
        return Err(InvalidSource::WrongExtension);
    }
    Ok(())
}

/// Case-insensitive `.txt` suffix check on the file name.
///
/// Names without any extension (e.g. `README`) fail the check.
pub fn has_accepted_extension(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let suffix_len = ACCEPTED_EXTENSION.len();
    name.len() >= suffix_len
        && name.is_char_boundary(name.len() - suffix_len)
        && name[name.len() - suffix_len..].eq_ignore_ascii_case(ACCEPTED_EXTENSION)
}
