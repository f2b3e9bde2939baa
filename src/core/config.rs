//! Engine configuration
//!
//! Configuration can be built in code, deserialized from JSON, or overlaid
//! from `PRETTY_LOGGER_*` environment variables.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    sink::DEFAULT_SUBSYSTEM,
    timestamp::TimestampFormat,
};
use serde::{Deserialize, Serialize};

pub const ENV_LEVEL: &str = "PRETTY_LOGGER_LEVEL";
pub const ENV_SEPARATOR: &str = "PRETTY_LOGGER_SEPARATOR";
pub const ENV_TERMINATOR: &str = "PRETTY_LOGGER_TERMINATOR";
pub const ENV_SUBSYSTEM: &str = "PRETTY_LOGGER_SUBSYSTEM";

/// Initial engine settings
///
/// # Example
///
/// ```
/// use pretty_logger::{EngineConfig, LogLevel};
///
/// let config = EngineConfig::from_json_str(r#"{ "threshold": "WARN", "separator": ", " }"#)
///     .unwrap();
/// assert_eq!(config.threshold, LogLevel::Warn);
/// assert_eq!(config.terminator, "\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub threshold: LogLevel,
    pub separator: String,
    pub terminator: String,
    pub subsystem: String,
    pub timestamp_format: TimestampFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: LogLevel::All,
            separator: " ".to_string(),
            terminator: "\n".to_string(),
            subsystem: DEFAULT_SUBSYSTEM.to_string(),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Overlay values produced by `lookup` for the `PRETTY_LOGGER_*` keys.
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL) {
            self.threshold = level
                .parse()
                .map_err(|_| LoggerError::config(ENV_LEVEL, format!("unknown level '{}'", level)))?;
        }
        if let Some(separator) = lookup(ENV_SEPARATOR) {
            self.separator = separator;
        }
        if let Some(terminator) = lookup(ENV_TERMINATOR) {
            self.terminator = terminator;
        }
        if let Some(subsystem) = lookup(ENV_SUBSYSTEM) {
            self.subsystem = subsystem;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.subsystem.trim().is_empty() {
            return Err(LoggerError::config("EngineConfig", "subsystem must not be empty"));
        }
        if let TimestampFormat::Custom(pattern) = &self.timestamp_format {
            if pattern.is_empty() {
                return Err(LoggerError::config(
                    "EngineConfig",
                    "custom timestamp pattern must not be empty",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.threshold, LogLevel::All);
        assert_eq!(config.separator, " ");
        assert_eq!(config.terminator, "\n");
        assert_eq!(config.subsystem, DEFAULT_SUBSYSTEM);
    }

    #[test]
    fn test_json_partial() {
        let config = EngineConfig::from_json_str(r#"{"threshold":"ERROR","terminator":""}"#).unwrap();
        assert_eq!(config.threshold, LogLevel::Error);
        assert_eq!(config.terminator, "");
        assert_eq!(config.separator, " ");
    }

    #[test]
    fn test_json_custom_timestamp() {
        let config =
            EngineConfig::from_json_str(r#"{"timestamp_format":{"Custom":"%H:%M"}}"#).unwrap();
        assert_eq!(config.timestamp_format, TimestampFormat::Custom("%H:%M".to_string()));
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let err = EngineConfig::from_json_str(r#"{"levle":"INFO"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_json_rejects_empty_subsystem() {
        let err = EngineConfig::from_json_str(r#"{"subsystem":"  "}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_env_overlay() {
        let config = EngineConfig::default()
            .apply_vars(vars(&[(ENV_LEVEL, "debug"), (ENV_SEPARATOR, "|"), (ENV_SUBSYSTEM, "svc")]))
            .unwrap();
        assert_eq!(config.threshold, LogLevel::Debug);
        assert_eq!(config.separator, "|");
        assert_eq!(config.terminator, "\n");
        assert_eq!(config.subsystem, "svc");
    }

    #[test]
    fn test_env_invalid_level() {
        let err = EngineConfig::default()
            .apply_vars(vars(&[(ENV_LEVEL, "loud")]))
            .unwrap_err();
        assert!(err.to_string().contains("PRETTY_LOGGER_LEVEL"));
    }
}
