//! Line-oriented parser for `[Section]` / `Key=Value` text
//!
//! Grammar, one construct per line:
//!
//! ```text
//! ; comment                  ignored, also valid after any content
//! [SectionName]              opens (or re-opens) a section
//! Key=Value                  split at the first '=', both sides trimmed
//! ```
//!
//! A repeated key overwrites the earlier value but keeps its position. A
//! repeated section header re-opens the section it names, so its keys are
//! merged with the same last-write-wins rule.

use crate::document::ParsedConfig;
use crate::{Error, Result};

/// Knobs for [`parse_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Skip lines inside a section that have no `=` instead of failing.
    ///
    /// Some hand-edited game files contain stray words; the strict default
    /// surfaces them, tolerant loading can opt out.
    pub allow_bare_lines: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            allow_bare_lines: true,
        }
    }
}

/// Parse text with the strict default options.
pub fn parse(text: &str) -> Result<ParsedConfig> {
    parse_with(text, ParseOptions::default())
}

/// Parse text into an ordered [`ParsedConfig`].
///
/// # Errors
///
/// Returns [`Error::Structural`] with the 1-based line number for:
/// - a key/value line before any section header
/// - an unterminated or empty section header, or trailing text after `]`
/// - an empty key
/// - a line without `=` (unless [`ParseOptions::allow_bare_lines`] is set)
pub fn parse_with(text: &str, options: ParseOptions) -> Result<ParsedConfig> {
    let mut config = ParsedConfig::new();
    let mut current: Option<usize> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let Some((name, rest)) = header.split_once(']') else {
                return Err(Error::structural(line_no, "unterminated section header"));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::structural(line_no, "empty section name"));
            }
            if !rest.trim().is_empty() {
                return Err(Error::structural(
                    line_no,
                    format!("unexpected text after section header [{}]", name),
                ));
            }
            current = Some(config.index_or_insert(name));
            continue;
        }

        let Some(section) = current else {
            return Err(Error::structural(
                line_no,
                "key/value line before any section header",
            ));
        };

        match line.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                if key.is_empty() {
                    return Err(Error::structural(line_no, "empty key"));
                }
                config.section_at_mut(section).set(key, value.trim());
            }
            None if options.allow_bare_lines => {
                tracing::trace!(line = line_no, content = line, "Skipping line without '='");
            }
            None => {
                return Err(Error::structural(
                    line_no,
                    format!("expected Key=Value, found {:?}", line),
                ));
            }
        }
    }

    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(i) => &line[..i],
        None => line,
    }
}
