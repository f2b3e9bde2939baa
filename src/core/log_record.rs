//! Broadcast record structure

use super::formatter::basename;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Source location of a legacy log call.
///
/// Normally filled in by the `*_legacy!` macros from `file!()`, `line!()`
/// and `column!()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

/// Normalized representation of one accepted log call.
///
/// Structured calls produce records without call-site metadata or a
/// formatted line; legacy calls populate both. `file` holds the basename
/// of the source path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl LogRecord {
    /// Record for the structured surface.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            file: None,
            line: None,
            column: None,
            formatted: None,
        }
    }

    /// Record for the legacy surface.
    pub fn with_location(
        level: LogLevel,
        message: impl Into<String>,
        call_site: CallSite,
        formatted: impl Into<String>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            file: Some(basename(call_site.file).to_string()),
            line: Some(call_site.line),
            column: Some(call_site.column),
            formatted: Some(formatted.into()),
        }
    }

    pub fn has_call_site(&self) -> bool {
        self.file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_record_has_no_location() {
        let record = LogRecord::new(LogLevel::Info, "ready");
        assert!(!record.has_call_site());
        assert_eq!(record.line, None);
        assert_eq!(record.formatted, None);
    }

    #[test]
    fn test_legacy_record_strips_directories() {
        let site = CallSite::new("src/net/client.rs", 42, 7);
        let record = LogRecord::with_location(LogLevel::Warn, "slow", site, "line");
        assert_eq!(record.file.as_deref(), Some("client.rs"));
        assert_eq!(record.line, Some(42));
        assert_eq!(record.column, Some(7));
        assert_eq!(record.formatted.as_deref(), Some("line"));
    }

    #[test]
    fn test_structured_record_serializes_without_location() {
        let record = LogRecord::new(LogLevel::Error, "boom");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"level":"ERROR","message":"boom"}"#);
    }
}
