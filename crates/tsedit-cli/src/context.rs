//! Editor settings resolution for CLI commands

use tsedit_config::{ConfigFile, EditorSettings, GameConfigLoader};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Merge the settings file with command-line overrides.
///
/// An explicitly given settings file must exist; the default one is optional.
pub fn settings(cli: &Cli) -> Result<EditorSettings> {
    let mut settings = match &cli.settings {
        Some(path) => EditorSettings::load(path)?,
        None => match EditorSettings::default_path() {
            Some(path) => EditorSettings::load_or_default(&path)?,
            None => EditorSettings::default(),
        },
    };

    if let Some(game_dir) = &cli.game_dir {
        settings.game_directory = game_dir.clone();
    }
    if let Some(config_dir) = &cli.config_dir {
        settings.config_directory = config_dir.clone();
    }
    if cli.lenient {
        settings.allow_bare_lines = true;
    }

    if settings.game_directory.as_os_str().is_empty() {
        return Err(CliError::user(
            "No game directory configured; pass --game-dir or set game_directory in the settings file",
        ));
    }
    tracing::debug!(?settings, "Effective settings");
    Ok(settings)
}

/// Build the configuration loader for a command.
pub fn loader(cli: &Cli) -> Result<GameConfigLoader> {
    Ok(settings(cli)?.loader())
}

/// Map a user-supplied file name to a logical configuration file.
pub fn config_file(name: &str) -> Result<ConfigFile> {
    ConfigFile::from_file_name(name).ok_or_else(|| {
        let known: Vec<_> = ConfigFile::ALL.iter().map(|f| f.file_name()).collect();
        CliError::user(format!(
            "Unknown configuration file '{}' (expected one of: {})",
            name,
            known.join(", ")
        ))
    })
}
