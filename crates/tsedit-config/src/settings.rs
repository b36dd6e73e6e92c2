//! Editor settings
//!
//! Stored as TOML (or JSON/YAML) in the user's config directory:
//!
//! ```toml
//! game_directory = "C:/Westwood/Sun"
//! config_directory = "Config"
//! allow_bare_lines = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tsedit_fs::{SettingsStore, SourceResolver};
use tsedit_ini::ParseOptions;

use crate::Result;
use crate::game::GameConfigLoader;

fn default_config_directory() -> PathBuf {
    PathBuf::from("Config")
}

/// User-level settings of the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Game installation holding the loose files
    #[serde(default)]
    pub game_directory: PathBuf,

    /// Editor data directory (art overrides, event catalog). Relative paths
    /// are resolved against the settings file's directory.
    #[serde(default = "default_config_directory")]
    pub config_directory: PathBuf,

    /// Tolerate lines without `=` in game configuration files
    #[serde(default)]
    pub allow_bare_lines: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            game_directory: PathBuf::new(),
            config_directory: default_config_directory(),
            allow_bare_lines: false,
        }
    }
}

impl EditorSettings {
    /// Platform location of the settings file:
    /// - Linux: `~/.config/tsedit/settings.toml`
    /// - macOS: `~/Library/Application Support/tsedit/settings.toml`
    /// - Windows: `%APPDATA%\tsedit\settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tsedit").join("settings.toml"))
    }

    /// Load settings from `path`.
    ///
    /// A relative `config_directory` is made relative to the settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings: Self = SettingsStore::new().load(path)?;
        if settings.config_directory.is_relative() {
            if let Some(parent) = path.parent() {
                settings.config_directory = parent.join(&settings.config_directory);
            }
        }
        tracing::debug!(path = %path.display(), "Loaded editor settings");
        Ok(settings)
    }

    /// Load settings from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        SettingsStore::new().save(path, self)?;
        Ok(())
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            allow_bare_lines: self.allow_bare_lines,
        }
    }

    /// A loader for the configured game directory, without archives.
    pub fn loader(&self) -> GameConfigLoader {
        GameConfigLoader::new(
            SourceResolver::new(&self.game_directory),
            &self.config_directory,
        )
        .with_parse_options(self.parse_options())
    }
}
