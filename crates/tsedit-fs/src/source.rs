//! Logical file resolution
//!
//! A logical file such as `rules.ini` may live as a loose file in the game
//! directory or as an entry inside one of the game's archives. Loose files
//! take priority, which is how mods override the shipped configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{ArchiveProvider, ArchiveSet};
use crate::{Error, Result, io};

/// Where the bytes of a resolved file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// A file inside the game directory
    LooseFile(PathBuf),
    /// An entry inside the named archive
    Archive(String),
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LooseFile(path) => write!(f, "{}", path.display()),
            Self::Archive(name) => write!(f, "archive {}", name),
        }
    }
}

/// The raw contents of a located logical file.
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    /// Logical name that was requested
    pub name: String,
    pub origin: SourceOrigin,
    pub bytes: Vec<u8>,
}

impl ResolvedSource {
    /// Decode the bytes into text, see [`crate::decode_text`].
    pub fn text(&self) -> String {
        crate::decode_text(&self.bytes)
    }
}

/// Resolves logical file names against a game directory and its archives.
///
/// Every call reads from disk or the archives again; nothing is cached.
#[derive(Debug)]
pub struct SourceResolver {
    game_dir: PathBuf,
    archives: ArchiveSet,
}

impl SourceResolver {
    /// Create a resolver for a game directory with no archives.
    pub fn new(game_dir: impl Into<PathBuf>) -> Self {
        Self {
            game_dir: game_dir.into(),
            archives: ArchiveSet::new(),
        }
    }

    /// Create a resolver with an already populated archive set.
    pub fn with_archives(game_dir: impl Into<PathBuf>, archives: ArchiveSet) -> Self {
        Self {
            game_dir: game_dir.into(),
            archives,
        }
    }

    /// Register another archive at the lowest priority.
    pub fn add_archive(&mut self, provider: impl ArchiveProvider + 'static) {
        self.archives.push(provider);
    }

    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    pub fn archives(&self) -> &ArchiveSet {
        &self.archives
    }

    /// Locate a logical file.
    ///
    /// Looks for a loose file in the game directory first, then asks the
    /// archives in priority order. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when a file exists but cannot be read.
    pub fn locate(&self, name: &str) -> Result<Option<ResolvedSource>> {
        if let Some(path) = self.find_loose_file(name)? {
            tracing::debug!(name, path = %path.display(), "Resolved loose file");
            let bytes = io::read_bytes(&path)?;
            return Ok(Some(ResolvedSource {
                name: name.to_string(),
                origin: SourceOrigin::LooseFile(path),
                bytes,
            }));
        }

        if let Some((archive, bytes)) = self.archives.find(name)? {
            tracing::debug!(name, archive = %archive, "Resolved archive entry");
            return Ok(Some(ResolvedSource {
                name: name.to_string(),
                origin: SourceOrigin::Archive(archive),
                bytes,
            }));
        }

        tracing::debug!(name, game_dir = %self.game_dir.display(), "File not found");
        Ok(None)
    }

    /// Locate a logical file that must exist.
    pub fn require(&self, name: &str) -> Result<ResolvedSource> {
        self.locate(name)?.ok_or_else(|| Error::SourceNotFound {
            name: name.to_string(),
            game_dir: self.game_dir.clone(),
        })
    }

    /// Find `name` in the game directory, ignoring the case of the file name.
    ///
    /// An exact match is preferred so case-sensitive file systems with several
    /// differently cased copies behave predictably.
    fn find_loose_file(&self, name: &str) -> Result<Option<PathBuf>> {
        let exact = self.game_dir.join(name);
        if exact.is_file() {
            return Ok(Some(exact));
        }

        // Names with directory parts are only matched exactly
        if name.contains(['/', '\\']) || !self.game_dir.is_dir() {
            return Ok(None);
        }

        let entries = fs::read_dir(&self.game_dir).map_err(|e| Error::io(&self.game_dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.game_dir, e))?;
            let file_name = entry.file_name();
            if file_name.to_string_lossy().eq_ignore_ascii_case(name) && entry.path().is_file() {
                return Ok(Some(entry.path()));
            }
        }
        Ok(None)
    }
}
