use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("library location does not exist: {0}")]
    Missing(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no cover candidate in {0}")]
    NoCover(PathBuf),
    #[error("failed to decode cover {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("background task failed: {0}")]
    Task(String),
}
