//! [`TestGame`] builder for game directory scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tsedit_fs::{ArchiveSet, MemoryArchive, SourceResolver};

/// A temporary game installation.
///
/// Loose files go into `<root>/game`, editor files into `<root>/Config`, and
/// archive entries into an in-memory archive handed to the resolver.
///
/// # Example
///
/// ```rust,no_run
/// use tsedit_test_utils::TestGame;
///
/// let game = TestGame::new()
///     .loose("rules.ini", "[General]\nName=TS\n")
///     .packed("art.ini", "[E1]\nSequence=InfantrySequence\n");
/// let resolver = game.resolver();
/// ```
pub struct TestGame {
    temp_dir: TempDir,
    archive: MemoryArchive,
}

impl Default for TestGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGame {
    /// Create empty game and config directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("game")).unwrap();
        fs::create_dir_all(temp_dir.path().join("Config")).unwrap();
        Self {
            temp_dir,
            archive: MemoryArchive::new("test.mix"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn game_dir(&self) -> PathBuf {
        self.root().join("game")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root().join("Config")
    }

    /// Write a loose file into the game directory.
    pub fn loose(self, name: &str, content: &str) -> Self {
        fs::write(self.game_dir().join(name), content).unwrap();
        self
    }

    /// Add an entry to the game's archive.
    pub fn packed(mut self, name: &str, content: &str) -> Self {
        self.archive.insert(name, content);
        self
    }

    /// Write a file into the editor config directory.
    pub fn editor_file(self, name: &str, content: &str) -> Self {
        fs::write(self.config_dir().join(name), content).unwrap();
        self
    }

    /// A resolver over the game directory and a copy of the archive.
    pub fn resolver(&self) -> SourceResolver {
        SourceResolver::with_archives(
            self.game_dir(),
            ArchiveSet::new().with(self.archive.clone()),
        )
    }
}
