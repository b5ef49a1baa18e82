//! Runtime configuration for the script-facing registry.

use std::{env, fs};

use log::Level;
use serde::{Deserialize, Serialize};

use crate::error::{ArrayMathError, Result};

pub const CONFIG_PATH_ENV: &str = "ARRAY_MATH_CONFIG_PATH";

/// How the externally registered `Max` / `MaxScalar` behave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxMode {
    /// Shipped scripts were written against a `Max` that returns the
    /// element-wise minimum. Kept as the default until existing data is
    /// re-validated against a true maximum.
    #[default]
    Legacy,
    /// `Max` returns the element-wise maximum.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayMathConfig {
    pub max_mode: MaxMode,
    /// Level of the diagnostic line logged when `CalculateModifiers` is entered.
    /// Accepts level names in any case ("info", "TRACE").
    pub calculate_log_level: Level,
}

impl Default for ArrayMathConfig {
    fn default() -> Self {
        Self {
            max_mode: MaxMode::Legacy,
            calculate_log_level: Level::Info,
        }
    }
}

impl ArrayMathConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ArrayMathError::Config(e.to_string()))
    }

    /// Load from the file named by [`CONFIG_PATH_ENV`]; defaults when unset or empty.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_path(path)
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ArrayMathError::Config(format!("Failed to read config file '{path}': {e}"))
        })?;

        Self::from_json(&content).map_err(|e| {
            ArrayMathError::Config(format!("Invalid config from '{path}': {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ArrayMathConfig::default();
        assert_eq!(config.max_mode, MaxMode::Legacy);
        assert_eq!(config.calculate_log_level, Level::Info);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ArrayMathConfig::from_json(r#"{"max_mode": "strict"}"#).unwrap();
        assert_eq!(config.max_mode, MaxMode::Strict);
        assert_eq!(config.calculate_log_level, Level::Info);
    }

    #[test]
    fn test_from_json_rejects_bad_level() {
        let err = ArrayMathConfig::from_json(r#"{"calculate_log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ArrayMathError::Config(_)));
    }

    #[test]
    fn test_from_json_level_is_case_insensitive() {
        let config = ArrayMathConfig::from_json(r#"{"calculate_log_level": "TRACE"}"#).unwrap();
        assert_eq!(config.calculate_log_level, Level::Trace);
    }

    #[test]
    fn test_from_json_rejects_unknown_mode() {
        assert!(ArrayMathConfig::from_json(r#"{"max_mode": "maybe"}"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_mode": "strict", "calculate_log_level": "debug"}}"#).unwrap();

        let config = ArrayMathConfig::from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.max_mode, MaxMode::Strict);
        assert_eq!(config.calculate_log_level, Level::Debug);
    }

    #[test]
    fn test_from_missing_path() {
        let err = ArrayMathConfig::from_path("/nonexistent/array_math.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
