//! Sink traits for the two external log destinations

use super::{error::Result, log_level::PlatformLevel, privacy::Privacy};

/// Category used when a structured call passes none.
pub const DEFAULT_CATEGORY: &str = "default";

/// Subsystem used when the engine is not given one.
pub const DEFAULT_SUBSYSTEM: &str = "com.prettylogger.default";

/// Handle a platform sink write is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkTarget<'a> {
    pub subsystem: &'a str,
    pub category: &'a str,
}

impl<'a> SinkTarget<'a> {
    pub fn new(subsystem: &'a str, category: Option<&'a str>) -> Self {
        Self {
            subsystem,
            category: category.unwrap_or(DEFAULT_CATEGORY),
        }
    }
}

/// Destination of the structured surface.
///
/// The sink owns redaction: `Public` and `Private` are explicit overrides,
/// `Auto` means the sink's own default applies.
pub trait PlatformSink: Send + Sync {
    fn write(
        &mut self,
        target: &SinkTarget<'_>,
        level: PlatformLevel,
        message: &str,
        privacy: Privacy,
    ) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Destination of the legacy surface.
pub trait ConsoleSink: Send + Sync {
    /// Write `text` followed by `terminator`.
    fn print(&mut self, text: &str, terminator: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_defaults_category() {
        let target = SinkTarget::new(DEFAULT_SUBSYSTEM, None);
        assert_eq!(target.category, "default");
        assert_eq!(target.subsystem, "com.prettylogger.default");
    }

    #[test]
    fn test_target_keeps_empty_category() {
        let target = SinkTarget::new("app", Some(""));
        assert_eq!(target.category, "");
    }
}
