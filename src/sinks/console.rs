//! Console sinks for the legacy surface

use crate::core::{ConsoleSink, Result};
use std::io::Write;

/// Writes legacy lines to stdout.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutConsole {
    fn print(&mut self, text: &str, terminator: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(terminator.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Writes legacy lines to any `Write` implementation.
///
/// # Example
///
/// ```
/// use pretty_logger::sinks::WriterConsole;
/// use pretty_logger::ConsoleSink;
///
/// let mut console = WriterConsole::new(Vec::new());
/// console.print("hello", "\n").unwrap();
/// assert_eq!(console.into_inner(), b"hello\n");
/// ```
#[derive(Debug)]
pub struct WriterConsole<W: Write + Send + Sync> {
    writer: W,
}

impl<W: Write + Send + Sync> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> ConsoleSink for WriterConsole<W> {
    fn print(&mut self, text: &str, terminator: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(terminator.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
