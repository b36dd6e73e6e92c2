//! Sectioned configuration text for tsedit
//!
//! Parses the game's line-oriented `[Section]` / `Key=Value` format into an
//! ordered [`ParsedConfig`], converts raw values into typed ones, and merges
//! configurations through [`consolidate`].
//!
//! # Example
//!
//! ```
//! use tsedit_ini::ParsedConfig;
//!
//! let mut rules = ParsedConfig::parse("[E1]\nStrength=125\nCost=120\n").unwrap();
//! let firestorm = ParsedConfig::parse("[E1]\nCost=100\n").unwrap();
//!
//! rules.consolidate(&firestorm);
//! assert_eq!(rules.get("e1", "cost"), Some("100"));
//! assert_eq!(rules.get("E1", "Strength"), Some("125"));
//! ```

pub mod consolidate;
pub mod document;
pub mod error;
pub mod parser;
pub mod section;
pub mod value;

pub use consolidate::consolidate;
pub use document::ParsedConfig;
pub use error::{Error, Result};
pub use parser::{ParseOptions, parse, parse_with};
pub use section::Section;
pub use value::Foundation;
