//! Error types for the ambient layers (configuration, scripts, files).
//!
//! The estimation engine itself never fails; out-of-range input is reported
//! through validation results. These errors cover everything around it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error for {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Replay script could not be parsed
    #[error("Invalid replay script {}: {message}", .path.display())]
    Script { path: PathBuf, message: String },

    /// Refused to overwrite an existing file
    #[error("{} already exists. Use --force to overwrite.", .0.display())]
    AlreadyExists(PathBuf),
}

impl Error {
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
