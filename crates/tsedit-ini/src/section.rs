//! A named, ordered group of key/value entries

use crate::Result;
use crate::value::{self, Foundation};

/// One `[Name]` block of a configuration file.
///
/// Entries keep their insertion order. Key lookups ignore ASCII case, matching
/// the game's reader; the casing of the first occurrence of a key is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this section answers to `name`, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Raw value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert a key, or overwrite its value in place if it already exists.
    ///
    /// Overwriting keeps the key at its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of `key` read as a boolean. `None` if the key is absent.
    pub fn get_bool(&self, key: &str) -> Option<Result<bool>> {
        self.get(key).map(|v| value::parse_bool(key, v))
    }

    /// Value of `key` read as an integer. `None` if the key is absent.
    pub fn get_int(&self, key: &str) -> Option<Result<i32>> {
        self.get(key).map(|v| value::parse_int(key, v))
    }

    /// Value of `key` read as a foundation size. `None` if the key is absent.
    pub fn get_foundation(&self, key: &str) -> Option<Result<Foundation>> {
        self.get(key).map(|v| Foundation::parse(key, v))
    }

    /// Value of `key` split as a comma separated list, empty entries dropped.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).map(value::parse_list)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }
}
