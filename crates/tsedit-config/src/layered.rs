//! Typed objects populated from configuration sections
//!
//! A typed object is read from one section at a time. Reading the same object
//! from several sources in turn (base rules, then Firestorm rules) layers the
//! sources: a key present in a later source overrides the field, a missing key
//! leaves whatever an earlier source set.
//!
//! Conversion failures abort the whole read of that section. Implementations
//! compute every field first and assign `*self` only once all conversions
//! succeeded, so a failed read leaves the object exactly as it was.

use tsedit_ini::value::{parse_list, Foundation};
use tsedit_ini::{ParsedConfig, Section};

use crate::{Error, Result};

/// An object that can read its fields from a [`Section`].
pub trait ReadFromSection {
    /// Apply the keys present in `section` on top of the current field values.
    fn read_from(&mut self, section: &Section) -> Result<()>;
}

/// Resolve one field: the override if the source provided one, else the
/// current value.
pub fn apply_override<T>(current: T, override_value: Option<T>) -> T {
    override_value.unwrap_or(current)
}

/// Read `target` from the section named `id` in each layer, in order.
///
/// Returns whether any layer contained the section.
pub fn read_layered<T: ReadFromSection>(
    target: &mut T,
    layers: &[&ParsedConfig],
    id: &str,
) -> Result<bool> {
    let mut found = false;
    for layer in layers {
        if let Some(section) = layer.section(id) {
            target.read_from(section)?;
            found = true;
        }
    }
    Ok(found)
}

/// Field accessor over one section with default-preserving semantics.
///
/// Each method takes the field's current value and returns the value after
/// applying the section's override, if any.
///
/// ```
/// use tsedit_config::layered::FieldReader;
/// use tsedit_ini::ParsedConfig;
///
/// let config = ParsedConfig::parse("[E1]\nCost=120\n").unwrap();
/// let reader = FieldReader::new(config.section("E1").unwrap());
/// assert_eq!(reader.int("Cost", 0).unwrap(), 120);
/// assert_eq!(reader.int("Strength", 125).unwrap(), 125);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    section: &'a Section,
}

impl<'a> FieldReader<'a> {
    pub fn new(section: &'a Section) -> Self {
        Self { section }
    }

    pub fn section(&self) -> &'a Section {
        self.section
    }

    pub fn string(&self, key: &str, current: &str) -> String {
        apply_override(current, self.section.get(key)).to_string()
    }

    /// Like [`FieldReader::string`] for optional fields; an empty value counts
    /// as an override to `None`.
    pub fn optional_string(&self, key: &str, current: Option<&str>) -> Option<String> {
        match self.section.get(key) {
            Some("") => None,
            Some(value) => Some(value.to_string()),
            None => current.map(str::to_string),
        }
    }

    pub fn bool(&self, key: &str, current: bool) -> Result<bool> {
        let value = self.section.get_bool(key).transpose().map_err(|e| self.error(e))?;
        Ok(apply_override(current, value))
    }

    pub fn int(&self, key: &str, current: i32) -> Result<i32> {
        let value = self.section.get_int(key).transpose().map_err(|e| self.error(e))?;
        Ok(apply_override(current, value))
    }

    pub fn foundation(&self, key: &str, current: Foundation) -> Result<Foundation> {
        let value = self
            .section
            .get_foundation(key)
            .transpose()
            .map_err(|e| self.error(e))?;
        Ok(apply_override(current, value))
    }

    pub fn list(&self, key: &str, current: &[String]) -> Vec<String> {
        match self.section.get(key) {
            Some(value) => parse_list(value),
            None => current.to_vec(),
        }
    }

    fn error(&self, source: tsedit_ini::Error) -> Error {
        Error::field(self.section.name(), source)
    }
}
