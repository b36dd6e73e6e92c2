//! Error types for tsedit-config

/// Result type for tsedit-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or reading game configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the base nor the Firestorm rules file could be found
    #[error("No rules configuration found (searched for {})", .searched.join(", "))]
    NoRulesConfiguration { searched: Vec<String> },

    /// A configuration file exists but is not well formed
    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: tsedit_ini::Error,
    },

    /// A value in a section could not be converted to its field type
    #[error("Invalid field in [{section}]: {source}")]
    Field {
        section: String,
        #[source]
        source: tsedit_ini::Error,
    },

    /// An event parameter declares a type tag outside the known set
    #[error("Unknown parameter type {tag:?} for P{slot}Type in [{section}]")]
    UnknownParamType {
        section: String,
        slot: usize,
        tag: String,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from tsedit-fs
    #[error(transparent)]
    Fs(#[from] tsedit_fs::Error),

    /// Configuration text error from tsedit-ini
    #[error(transparent)]
    Ini(#[from] tsedit_ini::Error),
}

impl Error {
    pub(crate) fn field(section: &str, source: tsedit_ini::Error) -> Self {
        Self::Field {
            section: section.to_string(),
            source,
        }
    }
}
