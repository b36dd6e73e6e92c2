//! Error types for tsedit-fs

use std::path::PathBuf;

/// Result type for tsedit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tsedit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} was found neither in {game_dir} nor in any loaded archive")]
    SourceNotFound { name: String, game_dir: PathBuf },

    /// Raised by [`ArchiveProvider`](crate::ArchiveProvider) implementations
    /// that hold an entry but cannot decode it
    #[error("Failed to read entry {entry} from archive {archive}: {message}")]
    Archive {
        archive: String,
        entry: String,
        message: String,
    },

    #[error("Failed to parse {format} settings at {path}: {message}")]
    SettingsParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} settings for {path}: {message}")]
    SettingsSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported settings format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn archive(archive: &str, entry: &str, message: impl Into<String>) -> Self {
        Self::Archive {
            archive: archive.to_string(),
            entry: entry.to_string(),
            message: message.into(),
        }
    }
}
