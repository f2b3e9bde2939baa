//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, also used as the engine threshold.
///
/// Ranks run from most to least restrictive. A call at level `s` is accepted
/// by threshold `t` iff `s <= t`. `Disable` and `All` are boundary values:
/// they only ever appear as thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Disable = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
    #[default]
    All = 7,
}

impl LogLevel {
    /// The six severities a log call can carry, in rank order.
    pub const LOGGABLE: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Every level, boundaries included, in rank order.
    pub const ALL_LEVELS: [LogLevel; 8] = [
        LogLevel::Disable,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::All,
    ];

    /// Short label printed in the legacy display line.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FTL",
            LogLevel::Error => "ERR",
            LogLevel::Warn => "WRN",
            LogLevel::Info => "I",
            LogLevel::Debug => "D",
            LogLevel::Trace => "T",
            LogLevel::Disable | LogLevel::All => "",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Disable => "DISABLE",
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::All => "ALL",
        }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// `false` for the two boundary members.
    #[inline]
    pub fn is_loggable(&self) -> bool {
        !matches!(self, LogLevel::Disable | LogLevel::All)
    }

    /// Severity handed to the platform sink for this level.
    pub fn platform_level(&self) -> PlatformLevel {
        match self {
            LogLevel::Fatal => PlatformLevel::Fault,
            LogLevel::Error => PlatformLevel::Error,
            LogLevel::Info => PlatformLevel::Info,
            LogLevel::Debug => PlatformLevel::Debug,
            LogLevel::Warn | LogLevel::Trace | LogLevel::Disable | LogLevel::All => {
                PlatformLevel::Default
            }
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DISABLE" | "OFF" | "NONE" => Ok(LogLevel::Disable),
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "ALL" => Ok(LogLevel::All),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

/// Severity domain of the platform log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformLevel {
    Debug,
    Info,
    /// The platform's unqualified "notice" level.
    Default,
    Error,
    Fault,
}

impl PlatformLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            PlatformLevel::Debug => "debug",
            PlatformLevel::Info => "info",
            PlatformLevel::Default => "default",
            PlatformLevel::Error => "error",
            PlatformLevel::Fault => "fault",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            PlatformLevel::Debug => Blue,
            PlatformLevel::Info => Green,
            PlatformLevel::Default => Yellow,
            PlatformLevel::Error => Red,
            PlatformLevel::Fault => BrightRed,
        }
    }
}

impl fmt::Display for PlatformLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_enclose_every_level() {
        for level in LogLevel::ALL_LEVELS {
            assert!(level >= LogLevel::Disable);
            assert!(level <= LogLevel::All);
        }
    }

    #[test]
    fn test_ordering_most_to_least_restrictive() {
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Info <= LogLevel::Info);
        assert!(LogLevel::Info >= LogLevel::Info);
        assert!(LogLevel::Info > LogLevel::Warn);
        assert!(LogLevel::Fatal < LogLevel::Error);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_label_lengths() {
        for level in LogLevel::ALL_LEVELS {
            let expected = match level {
                LogLevel::Fatal | LogLevel::Error | LogLevel::Warn => 3,
                LogLevel::Info | LogLevel::Debug | LogLevel::Trace => 1,
                LogLevel::Disable | LogLevel::All => 0,
            };
            assert_eq!(level.label().chars().count(), expected, "{:?}", level);
        }
    }

    #[test]
    fn test_loggable_excludes_boundaries() {
        assert!(!LogLevel::Disable.is_loggable());
        assert!(!LogLevel::All.is_loggable());
        assert!(LogLevel::LOGGABLE.iter().all(LogLevel::is_loggable));
    }

    #[test]
    fn test_platform_mapping() {
        assert_eq!(LogLevel::Fatal.platform_level(), PlatformLevel::Fault);
        assert_eq!(LogLevel::Error.platform_level(), PlatformLevel::Error);
        assert_eq!(LogLevel::Warn.platform_level(), PlatformLevel::Default);
        assert_eq!(LogLevel::Info.platform_level(), PlatformLevel::Info);
        assert_eq!(LogLevel::Debug.platform_level(), PlatformLevel::Debug);
        assert_eq!(LogLevel::Trace.platform_level(), PlatformLevel::Default);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" off ".parse::<LogLevel>().unwrap(), LogLevel::Disable);
        assert_eq!("All".parse::<LogLevel>().unwrap(), LogLevel::All);
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_default_accepts_everything() {
        assert_eq!(LogLevel::default(), LogLevel::All);
    }
}
