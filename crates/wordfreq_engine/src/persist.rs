use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot use {path:?} as the report directory: {reason}")]
    ReportDir { path: PathBuf, reason: String },
    #[error("destination is a directory: {0}")]
    DestinationIsDir(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Saves rendered reports, fully overwriting the destination.
///
/// Content goes to a temp file next to the destination which is then renamed
/// over it, so a failed save never leaves a truncated file behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, destination: &Path, content: &str) -> Result<PathBuf, PersistError> {
        if destination.is_dir() {
            return Err(PersistError::DestinationIsDir(destination.to_path_buf()));
        }
        let dir = report_dir(destination)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        tmp.persist(destination)
            .map_err(|e| PersistError::Io(e.error))?;
        Ok(destination.to_path_buf())
    }
}

/// Directory that will hold `destination`, created on demand.
///
/// A bare file name resolves to the working directory.
fn report_dir(destination: &Path) -> Result<PathBuf, PersistError> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => return Ok(PathBuf::from(".")),
    };
    let reject = |reason: String| PersistError::ReportDir {
        path: dir.clone(),
        reason,
    };
    match fs::metadata(&dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(reject("not a directory".into())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(&dir).map_err(|e| reject(e.to_string()))?;
        }
        Err(err) => return Err(reject(err.to_string())),
    }
    Ok(dir)
}
