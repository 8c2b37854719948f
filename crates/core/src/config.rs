//! Navigation limits and their configuration file
//!
//! Limits bound the two operations whose cost grows with caller input:
//! walking a [`crate::TrunkPath`] and importing a decoded JSON tree.
//!
//! ```toml
//! # Maximum number of segments accepted in a navigation path
//! max_path_length = 256
//!
//! # Maximum nesting depth accepted when importing decoded JSON
//! max_nesting_depth = 128
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default maximum path length in segments
pub const DEFAULT_MAX_PATH_LENGTH: usize = 256;

/// Default maximum nesting depth for imported JSON
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Limit validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Path has too many segments
    #[error("path too long: {length} segments exceeds maximum {max}")]
    PathTooLong {
        /// Actual segment count
        length: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Imported value nests too deeply
    #[error("nesting too deep: {actual} levels exceeds maximum {max}")]
    NestingTooDeep {
        /// Depth reached
        actual: usize,
        /// Maximum allowed depth
        max: usize,
    },
}

/// Errors while loading or validating a [`TrunkConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Offending file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Contents are not valid TOML for this config
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid config value '{field}': {reason}")]
    Invalid {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Navigation limits
///
/// # Example
///
/// ```
/// use trunk_core::TrunkConfig;
///
/// let config = TrunkConfig::from_toml_str("max_path_length = 8").unwrap();
/// assert_eq!(config.max_path_length, 8);
/// assert_eq!(config.max_nesting_depth, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrunkConfig {
    /// Maximum number of segments in a navigation path
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,
    /// Maximum nesting depth when importing decoded JSON
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

fn default_max_path_length() -> usize {
    DEFAULT_MAX_PATH_LENGTH
}

fn default_max_nesting_depth() -> usize {
    DEFAULT_MAX_NESTING_DEPTH
}

impl Default for TrunkConfig {
    fn default() -> Self {
        Self {
            max_path_length: default_max_path_length(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

impl TrunkConfig {
    /// Small limits for tests that exercise limit enforcement
    pub fn with_small_limits() -> Self {
        Self {
            max_path_length: 4,
            max_nesting_depth: 4,
        }
    }

    /// Reject zero limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_path_length == 0 {
            return Err(ConfigError::Invalid {
                field: "max_path_length",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_nesting_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TrunkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Trunk navigation limits
#
# Maximum number of segments accepted in a navigation path
max_path_length = 256

# Maximum nesting depth accepted when importing decoded JSON
max_nesting_depth = 128
"#
    }
}
