//! Ordered collection of sections parsed from one configuration source

use std::fmt;
use std::path::Path;

use crate::parser::{self, ParseOptions};
use crate::section::Section;
use crate::Result;

/// A parsed configuration file.
///
/// Sections are kept in the order they first appeared. Section names are
/// unique ignoring ASCII case; a name that appears twice in the source text
/// refers to the same section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    sections: Vec<Section>,
}

impl ParsedConfig {
    /// Create a configuration with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse text with strict options, see [`parser::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text)
    }

    /// Parse text with explicit options, see [`parser::parse_with`].
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<Self> {
        parser::parse_with(text, options)
    }

    /// Look up a section by name, ignoring case.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.is_named(name))
    }

    /// Mutable variant of [`ParsedConfig::section`].
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.is_named(name))
    }

    /// Return the named section, appending an empty one if it does not exist.
    pub fn get_or_insert_section(&mut self, name: &str) -> &mut Section {
        let index = self.index_or_insert(name);
        &mut self.sections[index]
    }

    /// Raw value of `key` in section `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Set a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.get_or_insert_section(section).set(key, value);
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Sections in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Merge `other` into this configuration, see [`crate::consolidate`].
    pub fn consolidate(&mut self, other: &ParsedConfig) {
        crate::consolidate(self, other);
    }

    /// Write the configuration to `path` in its canonical text form.
    pub fn save(&self, path: &Path) -> Result<()> {
        tsedit_fs::io::write_atomic(path, self.to_string().as_bytes())?;
        Ok(())
    }

    pub(crate) fn index_or_insert(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.is_named(name)) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }

    pub(crate) fn section_at_mut(&mut self, index: usize) -> &mut Section {
        &mut self.sections[index]
    }
}

impl<'a> IntoIterator for &'a ParsedConfig {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Canonical text form: sections and keys in stored order, one blank line
/// between sections. Parsing the output yields an equal configuration.
impl fmt::Display for ParsedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", section.name())?;
            for (key, value) in section.iter() {
                writeln!(f, "{}={}", key, value)?;
            }
        }
        Ok(())
    }
}
