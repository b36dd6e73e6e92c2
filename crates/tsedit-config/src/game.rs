//! The game configuration aggregate
//!
//! Loads the fixed set of game configuration files through a
//! [`SourceResolver`], parses them, and folds the editor's art overrides into
//! the Firestorm art file.
//!
//! # Load order
//!
//! 1. `rules.ini` and `firestrm.ini`: at least one must exist; a missing one
//!    is replaced by an empty configuration
//! 2. `art.ini`, `artfs.ini`, `ai.ini`, `aifs.ini`: optional, empty when missing
//! 3. The editor's `ArtOverrides.ini` is consolidated into `artfs.ini`

use std::fmt;
use std::path::{Path, PathBuf};

use tsedit_fs::SourceResolver;
use tsedit_ini::{ParseOptions, ParsedConfig};

use crate::art::ArtConfig;
use crate::events::EventTypeRegistry;
use crate::layered::{ReadFromSection, read_layered};
use crate::techno::TechnoRules;
use crate::{Error, Result};

/// Editor-owned file consolidated into the Firestorm art configuration.
pub const ART_OVERRIDES_FILE: &str = "ArtOverrides.ini";

/// Editor-owned trigger event catalog.
pub const EVENTS_FILE: &str = "Events.ini";

/// The logical game configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFile {
    Rules,
    FirestormRules,
    Art,
    FirestormArt,
    Ai,
    FirestormAi,
}

impl ConfigFile {
    pub const ALL: [ConfigFile; 6] = [
        Self::Rules,
        Self::FirestormRules,
        Self::Art,
        Self::FirestormArt,
        Self::Ai,
        Self::FirestormAi,
    ];

    /// File name as shipped with the game.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Rules => "rules.ini",
            Self::FirestormRules => "firestrm.ini",
            Self::Art => "art.ini",
            Self::FirestormArt => "artfs.ini",
            Self::Ai => "ai.ini",
            Self::FirestormAi => "aifs.ini",
        }
    }

    /// Look a file up by its shipped name, ignoring case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.file_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Locate and parse one logical file.
///
/// Returns `Ok(None)` when the file is absent and `required` is false.
///
/// # Errors
///
/// - [`Error::Fs`] with `SourceNotFound` when the file is absent and `required`
/// - [`Error::Parse`] when the file is not well formed
pub fn resolve(
    resolver: &SourceResolver,
    name: &str,
    required: bool,
    options: ParseOptions,
) -> Result<Option<ParsedConfig>> {
    let source = if required {
        Some(resolver.require(name)?)
    } else {
        resolver.locate(name)?
    };

    let Some(source) = source else {
        return Ok(None);
    };

    let config = ParsedConfig::parse_with(&source.text(), options).map_err(|e| Error::Parse {
        name: name.to_string(),
        source: e,
    })?;
    tracing::info!(
        name,
        origin = %source.origin,
        sections = config.len(),
        "Loaded configuration"
    );
    Ok(Some(config))
}

/// The resolved game configuration.
///
/// All six files are always present; a file that was not found is an empty
/// configuration, so lookups simply find nothing.
#[derive(Debug, Clone)]
pub struct GameConfig {
    rules: ParsedConfig,
    firestorm: ParsedConfig,
    art: ParsedConfig,
    art_fs: ParsedConfig,
    ai: ParsedConfig,
    ai_fs: ParsedConfig,
    overrides_applied: usize,
}

impl GameConfig {
    /// Load every game configuration file.
    ///
    /// # Arguments
    ///
    /// * `resolver` - Game directory and archives to search
    /// * `art_overrides` - Editor art overrides, consolidated into `artfs.ini`
    /// * `options` - Parser options applied to every file
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoRulesConfiguration`] if neither `rules.ini` nor
    /// `firestrm.ini` can be found, and with [`Error::Parse`] if any file
    /// that was found is malformed.
    pub fn load(
        resolver: &SourceResolver,
        art_overrides: &ParsedConfig,
        options: ParseOptions,
    ) -> Result<Self> {
        let load = |file: ConfigFile| resolve(resolver, file.file_name(), false, options);

        let rules = load(ConfigFile::Rules)?;
        let firestorm = load(ConfigFile::FirestormRules)?;
        if rules.is_none() && firestorm.is_none() {
            return Err(Error::NoRulesConfiguration {
                searched: vec![
                    ConfigFile::Rules.file_name().to_string(),
                    ConfigFile::FirestormRules.file_name().to_string(),
                ],
            });
        }

        let art = load(ConfigFile::Art)?.unwrap_or_default();
        let mut art_fs = load(ConfigFile::FirestormArt)?.unwrap_or_default();
        let ai = load(ConfigFile::Ai)?.unwrap_or_default();
        let ai_fs = load(ConfigFile::FirestormAi)?.unwrap_or_default();

        art_fs.consolidate(art_overrides);
        tracing::debug!(
            sections = art_overrides.len(),
            "Applied art overrides to {}",
            ConfigFile::FirestormArt
        );

        Ok(Self {
            rules: rules.unwrap_or_default(),
            firestorm: firestorm.unwrap_or_default(),
            art,
            art_fs,
            ai,
            ai_fs,
            overrides_applied: art_overrides.len(),
        })
    }

    /// `rules.ini`
    pub fn rules(&self) -> &ParsedConfig {
        &self.rules
    }

    /// `firestrm.ini`
    pub fn firestorm(&self) -> &ParsedConfig {
        &self.firestorm
    }

    /// `art.ini`
    pub fn art(&self) -> &ParsedConfig {
        &self.art
    }

    /// `artfs.ini`, with the editor's art overrides applied
    pub fn art_fs(&self) -> &ParsedConfig {
        &self.art_fs
    }

    /// `ai.ini`
    pub fn ai(&self) -> &ParsedConfig {
        &self.ai
    }

    /// `aifs.ini`
    pub fn ai_fs(&self) -> &ParsedConfig {
        &self.ai_fs
    }

    /// Number of `ArtOverrides.ini` sections consolidated into `artfs.ini`.
    pub fn art_overrides_applied(&self) -> usize {
        self.overrides_applied
    }

    pub fn get(&self, file: ConfigFile) -> &ParsedConfig {
        match file {
            ConfigFile::Rules => &self.rules,
            ConfigFile::FirestormRules => &self.firestorm,
            ConfigFile::Art => &self.art,
            ConfigFile::FirestormArt => &self.art_fs,
            ConfigFile::Ai => &self.ai,
            ConfigFile::FirestormAi => &self.ai_fs,
        }
    }

    /// Read a typed object from `rules.ini`, then `firestrm.ini`.
    ///
    /// Returns `None` if neither file has a section named `id`.
    pub fn read_rules_object<T: ReadFromSection + Default>(&self, id: &str) -> Result<Option<T>> {
        Self::read_object(&[&self.rules, &self.firestorm], id)
    }

    /// Read a typed object from `art.ini`, then `artfs.ini`.
    pub fn read_art_object<T: ReadFromSection + Default>(&self, id: &str) -> Result<Option<T>> {
        Self::read_object(&[&self.art, &self.art_fs], id)
    }

    /// Rules of a techno type, layered over both rules files.
    pub fn techno(&self, id: &str) -> Result<Option<TechnoRules>> {
        self.read_rules_object(id)
    }

    /// Art of an object, layered over both art files.
    pub fn art_config(&self, id: &str) -> Result<Option<ArtConfig>> {
        self.read_art_object(id)
    }

    fn read_object<T: ReadFromSection + Default>(
        layers: &[&ParsedConfig],
        id: &str,
    ) -> Result<Option<T>> {
        let mut object = T::default();
        let found = read_layered(&mut object, layers, id)?;
        Ok(found.then_some(object))
    }
}

/// Builds a [`GameConfig`] together with the editor's own configuration files.
#[derive(Debug)]
pub struct GameConfigLoader {
    resolver: SourceResolver,
    editor_files: SourceResolver,
    options: ParseOptions,
}

impl GameConfigLoader {
    /// # Arguments
    ///
    /// * `resolver` - Game directory and archives
    /// * `config_dir` - Directory holding the editor's `ArtOverrides.ini` and `Events.ini`
    pub fn new(resolver: SourceResolver, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            editor_files: SourceResolver::new(config_dir),
            options: ParseOptions::default(),
        }
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn resolver(&self) -> &SourceResolver {
        &self.resolver
    }

    pub fn config_dir(&self) -> &Path {
        self.editor_files.game_dir()
    }

    /// The editor's art overrides; empty if the file does not exist.
    pub fn art_overrides(&self) -> Result<ParsedConfig> {
        Ok(resolve(&self.editor_files, ART_OVERRIDES_FILE, false, self.options)?
            .unwrap_or_default())
    }

    /// Load the game configuration aggregate.
    pub fn load(&self) -> Result<GameConfig> {
        let overrides = self.art_overrides()?;
        GameConfig::load(&self.resolver, &overrides, self.options)
    }

    /// Load the trigger event catalog. The catalog file is required.
    pub fn load_event_types(&self) -> Result<EventTypeRegistry> {
        let catalog = resolve(&self.editor_files, EVENTS_FILE, true, self.options)?
            .unwrap_or_default();
        EventTypeRegistry::from_config(&catalog)
    }
}
