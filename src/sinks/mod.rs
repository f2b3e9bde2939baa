//! Sink implementations

pub mod console;
pub mod log_facade;
pub mod terminal;

pub use console::{StdoutConsole, WriterConsole};
pub use log_facade::LogFacadeSink;
pub use terminal::{TerminalSink, REDACTED};

use crate::core::{ConsoleSink, PlatformLevel, PlatformSink, Privacy, Result, SinkTarget};

/// Discards everything. Usable as either sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PlatformSink for NullSink {
    fn write(&mut self, _: &SinkTarget<'_>, _: PlatformLevel, _: &str, _: Privacy) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

impl ConsoleSink for NullSink {
    fn print(&mut self, _: &str, _: &str) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
