//! Engine configuration

use alloc::collections::BTreeSet;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Columns per indentation level unless the host configures otherwise
pub const DEFAULT_INDENT_UNIT: usize = 2;

/// Invalid configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    ZeroUnit,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::ZeroUnit => write!(f, "indent unit must be at least 1"),
        }
    }
}

impl core::error::Error for OptionsError {}

/// Indentation options
///
/// Frozen at engine construction. `keywords` lists the leading tokens that
/// make the following line want one more level; `trailing_openers` lists the
/// final characters with the same effect (`>` covers the `->`/`=>` arrows).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct IndentOptions {
    pub unit: usize,
    pub keywords: BTreeSet<String>,
    pub trailing_openers: BTreeSet<char>,
}

impl IndentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default keyword and opener sets with a different unit
    pub fn with_unit(unit: usize) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.unit == 0 {
            return Err(OptionsError::ZeroUnit);
        }
        Ok(())
    }
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            unit: DEFAULT_INDENT_UNIT,
            keywords: ["class", "for", "if", "try", "while", "else", "unless"]
                .into_iter()
                .map(String::from)
                .collect(),
            trailing_openers: ['>', '{', '['].into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_default_options() {
        let options = IndentOptions::default();
        assert_eq!(options.unit, 2);
        assert_eq!(options.keywords.len(), 7);
        assert!(options.keywords.contains("class"));
        assert!(options.keywords.contains("unless"));
        assert!(options.trailing_openers.contains(&'>'));
        assert!(options.trailing_openers.contains(&'{'));
        assert!(options.trailing_openers.contains(&'['));
    }

    #[test]
    fn test_with_unit() {
        let options = IndentOptions::with_unit(4);
        assert_eq!(options.unit, 4);
        assert_eq!(options.keywords, IndentOptions::default().keywords);
    }

    #[test]
    fn test_validate_rejects_zero_unit() {
        let options = IndentOptions::with_unit(0);
        assert_eq!(options.validate(), Err(OptionsError::ZeroUnit));
        assert!(IndentOptions::with_unit(1).validate().is_ok());
    }

    #[test]
    fn test_options_error_display() {
        assert_eq!(
            OptionsError::ZeroUnit.to_string(),
            "indent unit must be at least 1"
        );
    }
}
