//! Session configuration loaded from JSON
//!
//! Options are parsed and validated before any session is built; a bad
//! value is a load-time error, never a mid-edit surprise. Missing fields
//! fall back to the engine's defaults.

use std::fs;
use std::path::Path;

use indent_core::{IndentOptions, OptionsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value: {0}")]
    Invalid(#[from] OptionsError),
}

/// On-disk session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Spaces per indentation level
    #[serde(default = "default_indent_unit")]
    pub indent_unit: usize,
    /// Leading keywords that open an indented block
    #[serde(default = "default_keywords")]
    pub indenter_keywords: Vec<String>,
    /// Trailing characters that open an indented block
    #[serde(default = "default_trailing_chars")]
    pub indenter_trailing_chars: Vec<char>,
}

fn default_indent_unit() -> usize {
    IndentOptions::default().unit
}

fn default_keywords() -> Vec<String> {
    IndentOptions::default().keywords.into_iter().collect()
}

fn default_trailing_chars() -> Vec<char> {
    IndentOptions::default()
        .trailing_openers
        .into_iter()
        .collect()
}

impl SessionConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Convert into validated engine options
    pub fn into_options(self) -> Result<IndentOptions, ConfigError> {
        let options = IndentOptions {
            unit: self.indent_unit,
            keywords: self.indenter_keywords.into_iter().collect(),
            trailing_openers: self.indenter_trailing_chars.into_iter().collect(),
        };
        options.validate()?;
        Ok(options)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            indent_unit: default_indent_unit(),
            indenter_keywords: default_keywords(),
            indenter_trailing_chars: default_trailing_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());

        let options = config.into_options().unwrap();
        assert_eq!(options, IndentOptions::default());
    }

    #[test]
    fn test_full_json_overrides() {
        let json = r#"{
            "indent_unit": 4,
            "indenter_keywords": ["if", "while"],
            "indenter_trailing_chars": [">"]
        }"#;
        let config = SessionConfig::from_json(json).unwrap();
        assert_eq!(config.indent_unit, 4);
        assert_eq!(config.indenter_keywords, vec!["if", "while"]);
        assert_eq!(config.indenter_trailing_chars, vec!['>']);

        let options = config.into_options().unwrap();
        assert_eq!(options.unit, 4);
        assert!(options.keywords.contains("while"));
        assert!(!options.keywords.contains("class"));
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = SessionConfig::from_json(r#"{"indent_unit": 8}"#).unwrap();
        assert_eq!(config.indent_unit, 8);
        assert_eq!(config.indenter_keywords, default_keywords());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = SessionConfig::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_unit_rejected_at_load_time() {
        let config = SessionConfig::from_json(r#"{"indent_unit": 0}"#).unwrap();
        let result = config.into_options();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"indent_unit": 3}}"#).unwrap();

        let config = SessionConfig::load(file.path()).unwrap();
        assert_eq!(config.indent_unit, 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SessionConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
