//! Format-agnostic settings loading and saving

use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

use crate::{Error, Result, io};

/// Loads and saves serde types as TOML, JSON or YAML.
///
/// The format is picked from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct SettingsStore;

impl SettingsStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a value from a settings file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let bytes = io::read_bytes(path)?;
        let content = crate::decode_text(&bytes);
        let parse_error = |format: &str, message: String| Error::SettingsParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension_of(path).as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => {
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))
            }
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            other => Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Save a value to a settings file with an atomic write.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let serialize_error = |format: &str, message: String| Error::SettingsSerialize {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let content = match extension_of(path).as_str() {
            "toml" => toml::to_string_pretty(value)
                .map_err(|e| serialize_error("TOML", e.to_string()))?,
            "json" => serde_json::to_string_pretty(value)
                .map_err(|e| serialize_error("JSON", e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::to_string(value).map_err(|e| serialize_error("YAML", e.to_string()))?
            }
            other => {
                return Err(Error::UnsupportedFormat {
                    extension: other.to_string(),
                });
            }
        };

        io::write_atomic(path, content.as_bytes())
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
