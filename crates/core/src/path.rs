//! Navigation paths
//!
//! A [`TrunkPath`] is a sequence of [`Key`]s, walked one `get` at a time.
//!
//! # Path Syntax
//!
//! | Syntax | Meaning | Example |
//! |--------|---------|---------|
//! | `key` / `.key` | Named key | `.user` |
//! | `[n]` | Positional key | `[0]` |
//! | `.key1.key2` | Nested names | `user.name` |
//! | `.key[n]` | Name then position | `items[0]` |
//! | (empty) | Root | `` |
//!
//! Names are made of alphanumerics, `_` and `-`.

use crate::config::{LimitError, TrunkConfig};
use crate::value::Key;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for path parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Empty key in path
    #[error("empty key in path at position {0}")]
    EmptyKey(usize),
    /// Unclosed bracket
    #[error("unclosed bracket starting at position {0}")]
    UnclosedBracket(usize),
    /// Invalid index
    #[error("invalid index at position {0}: {1}")]
    InvalidIndex(usize, String),
    /// Unexpected character
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
}

/// A path into nested data
///
/// # Examples
///
/// ```
/// use trunk_core::TrunkPath;
///
/// let built = TrunkPath::root().key("items").index(0).key("name");
/// let parsed: TrunkPath = "items[0].name".parse().unwrap();
/// assert_eq!(built, parsed);
/// assert_eq!(parsed.to_string(), "items[0].name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TrunkPath {
    segments: Vec<Key>,
}

impl TrunkPath {
    /// Create the root path (empty path)
    pub fn root() -> Self {
        TrunkPath {
            segments: Vec::new(),
        }
    }

    /// Create a path from a vector of keys
    pub fn from_segments(segments: Vec<Key>) -> Self {
        TrunkPath { segments }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root path (empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a named segment (builder pattern)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(Key::Name(key.into()));
        self
    }

    /// Append a positional segment (builder pattern)
    pub fn index(mut self, idx: usize) -> Self {
        self.segments.push(Key::Index(idx));
        self
    }

    /// Check the segment count against the configured maximum
    pub fn validate(&self, config: &TrunkConfig) -> Result<(), LimitError> {
        let length = self.segments.len();
        if length > config.max_path_length {
            Err(LimitError::PathTooLong {
                length,
                max: config.max_path_length,
            })
        } else {
            Ok(())
        }
    }

    /// Convert to a string representation
    pub fn to_path_string(&self) -> String {
        let mut result = String::new();
        for seg in &self.segments {
            match seg {
                Key::Name(k) => {
                    if !result.is_empty() {
                        result.push('.');
                    }
                    result.push_str(k);
                }
                Key::Index(i) => {
                    result.push('[');
                    result.push_str(&i.to_string());
                    result.push(']');
                }
            }
        }
        result
    }
}

impl FromStr for TrunkPath {
    type Err = PathParseError;

    /// Parse a path from a string
    ///
    /// Supported syntax:
    /// - `foo` or `.foo` - named key
    /// - `[0]` - positional key
    /// - `foo.bar` - nested names
    /// - `foo[0].bar` - mixed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(TrunkPath::root());
        }

        let mut segments = Vec::new();
        let chars: Vec<char> = s.chars().collect();
        let mut i = 0;

        // Skip leading dot if present
        if chars[i] == '.' {
            i += 1;
            if i >= chars.len() {
                return Err(PathParseError::EmptyKey(i));
            }
        }

        while i < chars.len() {
            if chars[i] == '.' {
                i += 1;
                if i >= chars.len() || chars[i] == '.' || chars[i] == '[' {
                    return Err(PathParseError::EmptyKey(i));
                }
            }

            if chars[i] == '[' {
                let start = i;
                i += 1;
                let idx_start = i;

                while i < chars.len() && chars[i] != ']' {
                    i += 1;
                }

                if i >= chars.len() {
                    return Err(PathParseError::UnclosedBracket(start));
                }

                let idx_str: String = chars[idx_start..i].iter().collect();
                let idx = idx_str
                    .parse::<usize>()
                    .map_err(|_| PathParseError::InvalidIndex(idx_start, idx_str))?;

                segments.push(Key::Index(idx));
                i += 1; // Skip closing bracket
            } else if is_name_char(chars[i]) {
                let key_start = i;
                while i < chars.len() && is_name_char(chars[i]) {
                    i += 1;
                }
                let key: String = chars[key_start..i].iter().collect();
                segments.push(Key::Name(key));
            } else {
                return Err(PathParseError::UnexpectedChar(chars[i], i));
            }
        }

        Ok(TrunkPath { segments })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

impl fmt::Display for TrunkPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}

impl From<Vec<Key>> for TrunkPath {
    fn from(segments: Vec<Key>) -> Self {
        TrunkPath::from_segments(segments)
    }
}
