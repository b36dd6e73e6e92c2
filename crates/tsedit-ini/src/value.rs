//! Conversion of raw values into typed ones
//!
//! The literal rules follow the conventions the game's own reader uses, so
//! existing configuration files keep their meaning.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Parse a boolean literal.
///
/// Only the first character is significant: `y`, `t` and `1` are true,
/// `n`, `f` and `0` are false, in either case. `Yes`, `true` and `1` therefore
/// all read as true.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y' | 't' | '1') => Ok(true),
        Some('n' | 'f' | '0') => Ok(false),
        _ => Err(Error::conversion(key, value, "a boolean (yes/no, true/false, 1/0)")),
    }
}

/// Parse a signed 32-bit decimal integer. A leading `+` is accepted.
pub fn parse_int(key: &str, value: &str) -> Result<i32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    digits
        .parse::<i32>()
        .map_err(|_| Error::conversion(key, value, "an integer"))
}

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Footprint of a building in cells, written as `WxH` (e.g. `2x3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Foundation {
    pub width: u32,
    pub height: u32,
}

impl Foundation {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn parse(key: &str, value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| Error::conversion(key, value, "a foundation size such as 2x2"))
    }
}

impl Default for Foundation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl FromStr for Foundation {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or(())?;
        let width = w.trim().parse().map_err(|_| ())?;
        let height = h.trim().parse().map_err(|_| ())?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for Foundation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
