//! Terminal platform sink
//!
//! Default platform sink: one line per structured call on stderr, colored
//! by platform level when the `console` feature is enabled.

use crate::core::{PlatformLevel, PlatformSink, Privacy, Result, SinkTarget};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Placeholder written instead of a redacted message.
pub const REDACTED: &str = "<private>";

pub struct TerminalSink {
    use_colors: bool,
    redact_auto: bool,
    show_subsystem: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            redact_auto: false,
            show_subsystem: true,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Whether `Privacy::Auto` messages are redacted (default `false`).
    #[must_use]
    pub fn with_auto_redaction(mut self, redact: bool) -> Self {
        self.redact_auto = redact;
        self
    }

    #[must_use]
    pub fn with_subsystem(mut self, show: bool) -> Self {
        self.show_subsystem = show;
        self
    }

    fn format_level(&self, level: PlatformLevel) -> String {
        let padded = format!("{:7}", level.to_str());
        #[cfg(feature = "console")]
        if self.use_colors {
            return padded.color(level.color_code()).to_string();
        }
        padded
    }

    pub(crate) fn format_line(
        &self,
        target: &SinkTarget<'_>,
        level: PlatformLevel,
        message: &str,
        privacy: Privacy,
    ) -> String {
        let text = if privacy.redacts(self.redact_auto) {
            REDACTED
        } else {
            message
        };

        if self.show_subsystem {
            format!(
                "[{}:{}] {} {}",
                target.subsystem,
                target.category,
                self.format_level(level),
                text
            )
        } else {
            format!("[{}] {} {}", target.category, self.format_level(level), text)
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformSink for TerminalSink {
    fn write(
        &mut self,
        target: &SinkTarget<'_>,
        level: PlatformLevel,
        message: &str,
        privacy: Privacy,
    ) -> Result<()> {
        let line = self.format_line(target, level, message, privacy);
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "terminal"
    }
}
