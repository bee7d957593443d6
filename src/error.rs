use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Settings
    #[error("invalid glob pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("{}: malformed settings file", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Filesystem
    #[error("{}: I/O error", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The filesystem path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Config { path, .. } | Self::Io { path, .. } => Some(path),
            Self::InvalidPattern { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
