//! Engine configuration

use crate::FormatOptions;
use serde::{Deserialize, Serialize};

/// Largest input magnitude accepted before precision suffers
pub const DEFAULT_MAX_MAGNITUDE: f64 = 1e15;

/// Limits and formatting used by validation and conversion.
///
/// The default reproduces the reference behaviour; every field may be
/// omitted from a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Inputs with a larger absolute value are rejected
    pub max_magnitude: f64,
    pub format: FormatOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
            format: FormatOptions::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_max_magnitude(mut self, max_magnitude: f64) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = EngineConfig::from_json(r#"{"format": {"decimals": 2}}"#).unwrap();
        assert_eq!(config.max_magnitude, DEFAULT_MAX_MAGNITUDE);
        assert_eq!(config.format.decimals, 2);
        assert_eq!(config.format.large_threshold, 1e10);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(EngineConfig::from_json(r#"{"max_magnitude": "big"}"#).is_err());
    }
}
