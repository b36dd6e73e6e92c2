//! Archive-backed file providers
//!
//! The game ships most of its configuration inside packed archives. Decoding
//! the container format is left to the caller; this module only defines the
//! lookup contract and an ordered stack of providers.

use std::collections::BTreeMap;
use std::fmt;

use crate::Result;

/// A source of named entries, typically one unpacked game archive.
///
/// Entry names are matched case-insensitively, the way the game itself looks
/// them up.
pub trait ArchiveProvider {
    /// Display name of the archive, used in logs and source origins.
    fn name(&self) -> &str;

    /// Return the bytes of `entry`, or `None` if the archive does not hold it.
    fn try_open(&self, entry: &str) -> Result<Option<Vec<u8>>>;
}

/// An archive whose entries are held in memory.
///
/// # Example
///
/// ```
/// use tsedit_fs::{ArchiveProvider, MemoryArchive};
///
/// let mut archive = MemoryArchive::new("local.mix");
/// archive.insert("RULES.INI", b"[General]\n".to_vec());
/// assert!(archive.try_open("rules.ini").unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    name: String,
    /// Keyed by upper-cased entry name
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryArchive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, entry: &str, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(entry.to_ascii_uppercase(), bytes.into());
    }

    /// Builder form of [`MemoryArchive::insert`].
    pub fn with_entry(mut self, entry: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(entry, bytes);
        self
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains_key(&entry.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ArchiveProvider for MemoryArchive {
    fn name(&self) -> &str {
        &self.name
    }

    fn try_open(&self, entry: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(&entry.to_ascii_uppercase()).cloned())
    }
}

/// Ordered stack of archive providers.
///
/// Providers are queried in the order they were pushed; the first one that
/// holds an entry wins.
#[derive(Default)]
pub struct ArchiveSet {
    providers: Vec<Box<dyn ArchiveProvider>>,
}

impl ArchiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider at the lowest priority.
    pub fn push(&mut self, provider: impl ArchiveProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Builder form of [`ArchiveSet::push`].
    pub fn with(mut self, provider: impl ArchiveProvider + 'static) -> Self {
        self.push(provider);
        self
    }

    /// Look up `entry` across all providers.
    ///
    /// Returns the name of the providing archive together with the bytes.
    pub fn find(&self, entry: &str) -> Result<Option<(String, Vec<u8>)>> {
        for provider in &self.providers {
            if let Some(bytes) = provider.try_open(entry)? {
                return Ok(Some((provider.name().to_string(), bytes)));
            }
        }
        Ok(None)
    }

    /// Names of the registered archives, highest priority first.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for ArchiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchiveSet")
            .field("providers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_archive_lookup_ignores_case() {
        let archive = MemoryArchive::new("cache.mix").with_entry("Art.ini", "[X]");
        assert!(archive.contains("ART.INI"));
        assert_eq!(archive.try_open("art.ini").unwrap(), Some(b"[X]".to_vec()));
        assert_eq!(archive.try_open("missing.ini").unwrap(), None);
    }

    #[test]
    fn archive_set_first_provider_wins() {
        let set = ArchiveSet::new()
            .with(MemoryArchive::new("patch.mix").with_entry("rules.ini", "patched"))
            .with(MemoryArchive::new("local.mix").with_entry("rules.ini", "original"));

        let (archive, bytes) = set.find("RULES.INI").unwrap().unwrap();
        assert_eq!(archive, "patch.mix");
        assert_eq!(bytes, b"patched".to_vec());
    }

    #[test]
    fn archive_set_falls_through_to_later_providers() {
        let set = ArchiveSet::new()
            .with(MemoryArchive::new("patch.mix"))
            .with(MemoryArchive::new("local.mix").with_entry("ai.ini", "ai"));

        let (archive, _) = set.find("ai.ini").unwrap().unwrap();
        assert_eq!(archive, "local.mix");
        assert!(set.find("aifs.ini").unwrap().is_none());
        assert_eq!(set.names(), vec!["patch.mix", "local.mix"]);
    }

    struct CorruptArchive;

    impl ArchiveProvider for CorruptArchive {
        fn name(&self) -> &str {
            "corrupt.mix"
        }

        fn try_open(&self, entry: &str) -> Result<Option<Vec<u8>>> {
            Err(crate::Error::archive(self.name(), entry, "bad index"))
        }
    }

    #[test]
    fn archive_set_propagates_provider_errors() {
        let set = ArchiveSet::new()
            .with(CorruptArchive)
            .with(MemoryArchive::new("local.mix").with_entry("art.ini", "[X]"));

        let err = set.find("art.ini").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Archive { ref archive, ref entry, .. }
                if archive == "corrupt.mix" && entry == "art.ini"
        ));
        assert_eq!(
            err.to_string(),
            "Failed to read entry art.ini from archive corrupt.mix: bad index"
        );
    }
}
