//! Error types for tsedit-ini

/// Result type for tsedit-ini operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or converting configuration text
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text violates the section/key grammar
    #[error("Line {line}: {message}")]
    Structural { line: usize, message: String },

    /// A value cannot be converted to the type its key expects
    #[error("Invalid value {value:?} for {key}: expected {expected}")]
    Conversion {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// Filesystem error from tsedit-fs
    #[error(transparent)]
    Fs(#[from] tsedit_fs::Error),
}

impl Error {
    pub fn structural(line: usize, message: impl Into<String>) -> Self {
        Self::Structural {
            line,
            message: message.into(),
        }
    }

    pub fn conversion(key: &str, value: &str, expected: &'static str) -> Self {
        Self::Conversion {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        }
    }
}
