//! Presentation configuration.
//!
//! This module defines the settings front ends use when showing SEF values.
//! It provides:
//! 1. **Defaults:** Baseline display and REPL settings.
//! 2. **Structures:** Display and interactive-loop sections.
//! 3. **Loading:** JSON text or files, where every missing field takes its default.
//!
//! The format parameters themselves are fixed in
//! [`crate::common::constants`] and are not configurable.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration values.
mod defaults {
    /// Emit JSON instead of text reports.
    pub const JSON: bool = false;

    /// Show the sign/exponent/fraction lines under each report.
    pub const SHOW_FIELDS: bool = true;

    /// Show accrued exception flags after an addition.
    pub const SHOW_FLAGS: bool = true;

    /// Interactive prompt.
    pub const PROMPT: &str = ">>> ";

    /// Print the command summary when the loop starts.
    pub const BANNER: bool = true;
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Report rendering.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Interactive loop.
    #[serde(default)]
    pub repl: ReplConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            repl: ReplConfig::default(),
        }
    }
}

/// Report rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Emit reports as JSON objects.
    #[serde(default = "DisplayConfig::default_json")]
    pub json: bool,

    /// Include the field breakdown in text reports.
    #[serde(default = "DisplayConfig::default_show_fields")]
    pub show_fields: bool,

    /// Print exception flags after an addition.
    #[serde(default = "DisplayConfig::default_show_flags")]
    pub show_flags: bool,
}

impl DisplayConfig {
    fn default_json() -> bool {
        defaults::JSON
    }

    fn default_show_fields() -> bool {
        defaults::SHOW_FIELDS
    }

    fn default_show_flags() -> bool {
        defaults::SHOW_FLAGS
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            json: defaults::JSON,
            show_fields: defaults::SHOW_FIELDS,
            show_flags: defaults::SHOW_FLAGS,
        }
    }
}

/// Interactive loop options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplConfig {
    /// Prompt printed before each line.
    #[serde(default = "ReplConfig::default_prompt")]
    pub prompt: String,

    /// Print the command summary at start.
    #[serde(default = "ReplConfig::default_banner")]
    pub banner: bool,
}

impl ReplConfig {
    fn default_prompt() -> String {
        defaults::PROMPT.to_owned()
    }

    fn default_banner() -> bool {
        defaults::BANNER
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: Self::default_prompt(),
            banner: defaults::BANNER,
        }
    }
}
