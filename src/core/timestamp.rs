//! Clock string formatting and time sources
//!
//! The legacy display line starts with a fixed-width wall-clock string
//! (`HH:MM:SS.mmm`). Time is always local; no time-zone conversion happens.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const CLOCK_PATTERN: &str = "%H:%M:%S%.3f";

/// Timestamp pattern for the legacy display line
///
/// # Examples
///
/// ```
/// use pretty_logger::core::TimestampFormat;
/// use chrono::Local;
///
/// let stamp = TimestampFormat::Clock.format(&Local::now());
/// assert_eq!(stamp.len(), "12:00:00.000".len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Wall clock with milliseconds: `10:30:45.123`
    #[default]
    Clock,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`. An unparsable custom pattern falls back to `Clock`.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Clock => datetime.format(CLOCK_PATTERN).to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut stamp = String::new();
                if write!(stamp, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format(CLOCK_PATTERN).to_string();
                }
                stamp
            }
        }
    }
}

/// Source of "now" for the legacy path.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
