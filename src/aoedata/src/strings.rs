//! Key-value localization string table.
//!
//! The game ships localized text as a flat text resource, one entry per
//! line: an integer key, whitespace, then the quote-delimited text.
//! Lines not starting with a digit (comments, headers, blanks) carry no
//! entry and are skipped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed string table line: {0:?}")]
    MalformedLine(String),

    #[error("invalid string table key {key:?}: {source}")]
    InvalidKey {
        key: String,
        source: std::num::ParseIntError,
    },
}

/// Integer key to display text mapping, built once per run.
///
/// Duplicate keys overwrite earlier entries (last writer wins); lookup
/// misses resolve to the empty string, never an error.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<i64, String>,
}

impl StringTable {
    /// Load and parse a string table resource from disk.
    pub fn load(path: &Path) -> Result<Self, StringTableError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse string table text.
    ///
    /// A line is a candidate entry iff its first character is an ASCII
    /// decimal digit. Candidate lines split at the first whitespace run:
    /// the leading token is the integer key, the remainder is the stored
    /// text with exactly one delimiter character stripped from each end.
    /// A candidate line with no second token is a fatal format error.
    pub fn parse(text: &str) -> Result<Self, StringTableError> {
        let mut entries = HashMap::new();
        for line in text.lines() {
            if !line.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            let line = line.trim();
            let (token, rest) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| StringTableError::MalformedLine(line.to_string()))?;
            let key = token.parse().map_err(|source| StringTableError::InvalidKey {
                key: token.to_string(),
                source,
            })?;
            entries.insert(key, strip_delimiters(rest.trim_start()).to_string());
        }
        Ok(StringTable { entries })
    }

    /// Look up the text for a key. Missing keys yield `""`.
    pub fn get(&self, key: i64) -> &str {
        self.entries.get(&key).map_or("", String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip exactly one character from each end of the stored text.
///
/// The source format wraps values in a single quote character on each
/// side; anything shorter than two characters strips to empty.
fn strip_delimiters(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
