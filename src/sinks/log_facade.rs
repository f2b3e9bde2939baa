//! Platform sink forwarding to the `log` facade
//!
//! Lets applications that already install a `log` backend receive the
//! structured surface. The record target is the call's category.

use super::terminal::REDACTED;
use crate::core::{PlatformLevel, PlatformSink, Privacy, Result, SinkTarget};

pub struct LogFacadeSink {
    redact_auto: bool,
}

impl LogFacadeSink {
    pub fn new() -> Self {
        Self { redact_auto: false }
    }

    /// Whether `Privacy::Auto` messages are redacted (default `false`).
    #[must_use]
    pub fn with_auto_redaction(mut self, redact: bool) -> Self {
        self.redact_auto = redact;
        self
    }

    /// `Default` is the platform's notice level and lands on `Info`.
    pub fn facade_level(level: PlatformLevel) -> log::Level {
        match level {
            PlatformLevel::Fault | PlatformLevel::Error => log::Level::Error,
            PlatformLevel::Default | PlatformLevel::Info => log::Level::Info,
            PlatformLevel::Debug => log::Level::Debug,
        }
    }
}

impl Default for LogFacadeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformSink for LogFacadeSink {
    fn write(
        &mut self,
        target: &SinkTarget<'_>,
        level: PlatformLevel,
        message: &str,
        privacy: Privacy,
    ) -> Result<()> {
        let level = Self::facade_level(level);
        if level > log::max_level() {
            return Ok(());
        }

        let text = if privacy.redacts(self.redact_auto) {
            REDACTED
        } else {
            message
        };

        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", text))
                .level(level)
                .target(target.category)
                .module_path_static(Some(module_path!()))
                .build(),
        );
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        log::logger().flush();
        Ok(())
    }

    fn name(&self) -> &str {
        "log-facade"
    }
}
