//! Dispatch engine shared by the structured and legacy surfaces

use super::{
    broadcaster::{panic_message, OutputBroadcaster, SubscriptionHandle},
    config::EngineConfig,
    error::{LoggerError, Result},
    formatter::{join_items, render_line},
    log_level::{LogLevel, PlatformLevel},
    log_record::{CallSite, LogRecord},
    metrics::EngineMetrics,
    overflow_policy::OverflowPolicy,
    privacy::Privacy,
    sink::{ConsoleSink, PlatformSink, SinkTarget},
    timestamp::{Clock, SystemClock, TimestampFormat},
};
use crate::sinks::{StdoutConsole, TerminalSink};
use crossbeam_channel::Receiver;
use parking_lot::{Mutex, RwLock};
use std::fmt::{self, Display};
use std::sync::Arc;

/// Mutable settings read on every call.
#[derive(Debug, Clone)]
struct EngineState {
    threshold: LogLevel,
    separator: String,
    terminator: String,
}

/// The logging core.
///
/// A call at level `s` is accepted iff `s <= threshold`. Rejected calls
/// have no side effect besides the `suppressed` counter. Accepted calls reach
/// their sink and are then published on [`LogEngine::output`].
///
/// `LogEngine` is `Send + Sync`; share it by reference or `Arc`. Sinks must
/// not log through the engine that owns them.
pub struct LogEngine {
    state: RwLock<EngineState>,
    subsystem: String,
    timestamp_format: TimestampFormat,
    platform: Mutex<Box<dyn PlatformSink>>,
    console: Mutex<Box<dyn ConsoleSink>>,
    clock: Box<dyn Clock>,
    output: OutputBroadcaster,
    metrics: Arc<EngineMetrics>,
}

impl LogEngine {
    /// Engine with a terminal platform sink, stdout console and system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for LogEngine
    ///
    /// # Example
    /// ```
    /// use pretty_logger::prelude::*;
    ///
    /// let engine = LogEngine::builder()
    ///     .threshold(LogLevel::Warn)
    ///     .separator(", ")
    ///     .platform_sink(NullSink)
    ///     .build();
    /// assert!(!engine.is_enabled(LogLevel::Info));
    /// ```
    #[must_use]
    pub fn builder() -> LogEngineBuilder {
        LogEngineBuilder::new()
    }

    pub fn threshold(&self) -> LogLevel {
        self.state.read().threshold
    }

    pub fn set_threshold(&self, level: LogLevel) {
        self.state.write().threshold = level;
    }

    pub fn separator(&self) -> String {
        self.state.read().separator.clone()
    }

    pub fn set_separator(&self, separator: impl Into<String>) {
        self.state.write().separator = separator.into();
    }

    pub fn terminator(&self) -> String {
        self.state.read().terminator.clone()
    }

    pub fn set_terminator(&self, terminator: impl Into<String>) {
        self.state.write().terminator = terminator.into();
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    /// Whether a call at `level` would currently be accepted.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_loggable() && level <= self.state.read().threshold
    }

    /// The single threshold gate behind both surfaces.
    fn should_emit(&self, level: LogLevel) -> bool {
        if self.is_enabled(level) {
            self.metrics.record_accepted();
            true
        } else {
            self.metrics.record_suppressed();
            false
        }
    }

    pub fn output(&self) -> &OutputBroadcaster {
        &self.output
    }

    pub fn subscribe<F>(&self, handler: F) -> SubscriptionHandle
    where
        F: Fn(&LogRecord) + Send + Sync + 'static,
    {
        self.output.subscribe(handler)
    }

    pub fn subscribe_queue(
        &self,
        capacity: usize,
        policy: OverflowPolicy,
    ) -> (SubscriptionHandle, Receiver<LogRecord>) {
        self.output.subscribe_queue(capacity, policy)
    }

    /// See [`OutputBroadcaster::unsubscribe`].
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        self.output.unsubscribe(handle)
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Flush both sinks.
    ///
    /// Each sink is flushed even if the other fails or panics. Failures are
    /// reported and counted like write failures; the first one is returned.
    pub fn flush(&self) -> Result<()> {
        let platform = {
            let mut sink = self.platform.lock();
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.flush()));
            self.report_sink_result(sink.name(), result)
        };
        let console = {
            let mut sink = self.console.lock();
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.flush()));
            self.report_sink_result(sink.name(), result)
        };
        platform.and(console)
    }

    // ------------------------------------------------------------------
    // Structured surface
    // ------------------------------------------------------------------

    /// Structured call: hand `message` to the platform sink, then publish.
    ///
    /// `category` defaults to `"default"`. The published record carries no
    /// call-site metadata.
    pub fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        category: Option<&str>,
        privacy: Privacy,
    ) {
        if !self.should_emit(level) {
            return;
        }

        let message = message.into();
        self.dispatch(level, message, category, privacy);
    }

    /// Like [`LogEngine::log`], rendering `args` only once the call is accepted.
    pub fn log_fmt(
        &self,
        level: LogLevel,
        args: fmt::Arguments<'_>,
        category: Option<&str>,
        privacy: Privacy,
    ) {
        if !self.should_emit(level) {
            return;
        }

        self.dispatch(level, fmt::format(args), category, privacy);
    }

    fn dispatch(&self, level: LogLevel, message: String, category: Option<&str>, privacy: Privacy) {
        let target = SinkTarget::new(&self.subsystem, category);
        self.write_platform(&target, level.platform_level(), &message, privacy);
        self.output.publish(&LogRecord::new(level, message));
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
        self.log(LogLevel::Fatal, message, category, privacy);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
        self.log(LogLevel::Error, message, category, privacy);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
        self.log(LogLevel::Warn, message, category, privacy);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
        self.log(LogLevel::Info, message, category, privacy);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
        self.log(LogLevel::Debug, message, category, privacy);
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
        self.log(LogLevel::Trace, message, category, privacy);
    }

    // ------------------------------------------------------------------
    // Legacy surface
    // ------------------------------------------------------------------

    /// Legacy call: format, print to the console sink, publish, and return
    /// the display line.
    ///
    /// Returns `None` when the threshold rejects `level`; nothing is
    /// formatted or written in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use pretty_logger::prelude::*;
    ///
    /// let engine = LogEngine::builder().console_sink(WriterConsole::new(Vec::new())).build();
    /// let line = engine
    ///     .log_legacy(LogLevel::Info, &[&"a", &"b"], Some(","), None, CallSite::new("src/main.rs", 3, 5))
    ///     .unwrap();
    /// assert!(line.contains("a,b"));
    /// assert!(line.ends_with("[main.rs:L3]"));
    /// ```
    pub fn log_legacy(
        &self,
        level: LogLevel,
        items: &[&dyn Display],
        separator: Option<&str>,
        terminator: Option<&str>,
        call_site: CallSite,
    ) -> Option<String> {
        if !self.should_emit(level) {
            return None;
        }

        let (separator, terminator) = {
            let state = self.state.read();
            (
                separator.map_or_else(|| state.separator.clone(), str::to_string),
                terminator.map_or_else(|| state.terminator.clone(), str::to_string),
            )
        };

        let message = join_items(items, &separator);
        let timestamp = self.timestamp_format.format(&self.clock.now());
        let line = render_line(level, &message, &timestamp, call_site.file, call_site.line);

        self.write_console(&line, &terminator);
        self.output
            .publish(&LogRecord::with_location(level, message, call_site, line.clone()));

        Some(line)
    }

    #[inline]
    pub fn fatal_legacy(
        &self,
        items: &[&dyn Display],
        separator: Option<&str>,
        terminator: Option<&str>,
        call_site: CallSite,
    ) -> Option<String> {
        self.log_legacy(LogLevel::Fatal, items, separator, terminator, call_site)
    }

    #[inline]
    pub fn error_legacy(
        &self,
        items: &[&dyn Display],
        separator: Option<&str>,
        terminator: Option<&str>,
        call_site: CallSite,
    ) -> Option<String> {
        self.log_legacy(LogLevel::Error, items, separator, terminator, call_site)
    }

    #[inline]
    pub fn warn_legacy(
        &self,
        items: &[&dyn Display],
        separator: Option<&str>,
        terminator: Option<&str>,
        call_site: CallSite,
    ) -> Option<String> {
        self.log_legacy(LogLevel::Warn, items, separator, terminator, call_site)
    }

    #[inline]
    pub fn info_legacy(
        &self,
        items: &[&dyn Display],
        separator: Option<&str>,
        terminator: Option<&str>,
        call_site: CallSite,
    ) -> Option<String> {
        self.log_legacy(LogLevel::Info, items, separator, terminator, call_site)
    }

    #[inline]
    pub fn debug_legacy(
        &self,
        items: &[&dyn Display],
        separator: Option<&str>,
        terminator: Option<&str>,
        call_site: CallSite,
    ) -> Option<String> {
        self.log_legacy(LogLevel::Debug, items, separator, terminator, call_site)
    }

    #[inline]
    pub fn trace_legacy(
        &self,
        items: &[&dyn Display],
        separator: Option<&str>,
        terminator: Option<&str>,
        call_site: CallSite,
    ) -> Option<String> {
        self.log_legacy(LogLevel::Trace, items, separator, terminator, call_site)
    }

    // ------------------------------------------------------------------
    // Sink delegation with failure isolation
    // ------------------------------------------------------------------

    fn write_platform(
        &self,
        target: &SinkTarget<'_>,
        level: PlatformLevel,
        message: &str,
        privacy: Privacy,
    ) {
        let mut sink = self.platform.lock();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sink.write(target, level, message, privacy)
        }));
        let _ = self.report_sink_result(sink.name(), result);
    }

    fn write_console(&self, text: &str, terminator: &str) {
        let mut sink = self.console.lock();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sink.print(text, terminator)
        }));
        let _ = self.report_sink_result(sink.name(), result);
    }

    /// Report and count a failed sink call, turning a panic into an error.
    fn report_sink_result(&self, name: &str, result: std::thread::Result<Result<()>>) -> Result<()> {
        match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                self.metrics.record_sink_failure();
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", name, e);
                Err(e)
            }
            Err(panic_info) => {
                self.metrics.record_sink_failure();
                let message = panic_message(&*panic_info);
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                     Other sinks continue to function.",
                    name, message
                );
                Err(LoggerError::sink(name, format!("panicked: {}", message)))
            }
        }
    }
}

impl Default for LogEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("LogEngine")
            .field("threshold", &state.threshold)
            .field("separator", &state.separator)
            .field("terminator", &state.terminator)
            .field("subsystem", &self.subsystem)
            .field("subscribers", &self.output.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl Drop for LogEngine {
    fn drop(&mut self) {
        // Failures were already reported by flush
        let _ = self.flush();
    }
}

/// Builder for constructing a LogEngine with a fluent API
///
/// # Example
/// ```
/// use pretty_logger::prelude::*;
///
/// let engine = LogEngine::builder()
///     .config(EngineConfig::default())
///     .threshold(LogLevel::Debug)
///     .subsystem("com.example.app")
///     .platform_sink(TerminalSink::new().with_colors(false))
///     .console_sink(StdoutConsole::new())
///     .build();
/// assert_eq!(engine.subsystem(), "com.example.app");
/// ```
pub struct LogEngineBuilder {
    config: EngineConfig,
    platform_sink: Option<Box<dyn PlatformSink>>,
    console_sink: Option<Box<dyn ConsoleSink>>,
    clock: Option<Box<dyn Clock>>,
}

impl LogEngineBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            platform_sink: None,
            console_sink: None,
            clock: None,
        }
    }

    /// Replace every configurable value with `config`
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.config.threshold = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn terminator(mut self, terminator: impl Into<String>) -> Self {
        self.config.terminator = terminator.into();
        self
    }

    /// Subsystem every platform sink target is scoped to
    #[must_use = "builder methods return a new value"]
    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.config.subsystem = subsystem.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn platform_sink<S: PlatformSink + 'static>(mut self, sink: S) -> Self {
        self.platform_sink = Some(Box::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_sink<C: ConsoleSink + 'static>(mut self, sink: C) -> Self {
        self.console_sink = Some(Box::new(sink));
        self
    }

    /// Time source for the legacy display line
    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Build the LogEngine
    pub fn build(self) -> LogEngine {
        let metrics = Arc::new(EngineMetrics::new());
        let EngineConfig {
            threshold,
            separator,
            terminator,
            subsystem,
            timestamp_format,
        } = self.config;

        LogEngine {
            state: RwLock::new(EngineState {
                threshold,
                separator,
                terminator,
            }),
            subsystem,
            timestamp_format,
            platform: Mutex::new(
                self.platform_sink
                    .unwrap_or_else(|| Box::new(TerminalSink::new())),
            ),
            console: Mutex::new(
                self.console_sink
                    .unwrap_or_else(|| Box::new(StdoutConsole::new())),
            ),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            output: OutputBroadcaster::with_metrics(Arc::clone(&metrics)),
            metrics,
        }
    }
}

impl Default for LogEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::FixedClock;
    use crate::sinks::NullSink;
    use chrono::{Local, NaiveDate, TimeZone};

    #[derive(Debug, Clone, PartialEq)]
    struct PlatformCall {
        subsystem: String,
        category: String,
        level: PlatformLevel,
        message: String,
        privacy: Privacy,
    }

    #[derive(Clone, Default)]
    struct RecordingPlatform {
        calls: Arc<Mutex<Vec<PlatformCall>>>,
    }

    impl PlatformSink for RecordingPlatform {
        fn write(
            &mut self,
            target: &SinkTarget<'_>,
            level: PlatformLevel,
            message: &str,
            privacy: Privacy,
        ) -> Result<()> {
            self.calls.lock().push(PlatformCall {
                subsystem: target.subsystem.to_string(),
                category: target.category.to_string(),
                level,
                message: message.to_string(),
                privacy,
            });
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[derive(Clone, Default)]
    struct RecordingConsole {
        output: Arc<Mutex<String>>,
    }

    impl ConsoleSink for RecordingConsole {
        fn print(&mut self, text: &str, terminator: &str) -> Result<()> {
            let mut out = self.output.lock();
            out.push_str(text);
            out.push_str(terminator);
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct FailingPlatform;

    impl PlatformSink for FailingPlatform {
        fn write(&mut self, _: &SinkTarget<'_>, _: PlatformLevel, _: &str, _: Privacy) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingConsole;

    impl ConsoleSink for PanickingConsole {
        fn print(&mut self, _: &str, _: &str) -> Result<()> {
            panic!("console gone");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    struct FailingFlushPlatform;

    impl PlatformSink for FailingFlushPlatform {
        fn write(&mut self, _: &SinkTarget<'_>, _: PlatformLevel, _: &str, _: Privacy) -> Result<()> {
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Err(LoggerError::sink("failing-flush", "device gone"))
        }

        fn name(&self) -> &str {
            "failing-flush"
        }
    }

    #[derive(Clone, Default)]
    struct CountingFlushConsole {
        flushes: Arc<Mutex<usize>>,
        panic_on_flush: bool,
    }

    impl ConsoleSink for CountingFlushConsole {
        fn print(&mut self, _: &str, _: &str) -> Result<()> {
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            *self.flushes.lock() += 1;
            if self.panic_on_flush {
                panic!("flush exploded");
            }
            Ok(())
        }

        fn name(&self) -> &str {
            "counting-flush"
        }
    }

    fn fixed_clock() -> FixedClock {
        let naive = NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_milli_opt(10, 30, 45, 123))
            .unwrap();
        FixedClock(Local.from_local_datetime(&naive).single().unwrap())
    }

    fn test_engine() -> (LogEngine, RecordingPlatform, RecordingConsole) {
        let platform = RecordingPlatform::default();
        let console = RecordingConsole::default();
        let engine = LogEngine::builder()
            .platform_sink(platform.clone())
            .console_sink(console.clone())
            .clock(fixed_clock())
            .build();
        (engine, platform, console)
    }

    fn collect(engine: &LogEngine) -> Arc<Mutex<Vec<LogRecord>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        engine.subscribe(move |record| sink.lock().push(record.clone()));
        seen
    }

    const SITE: CallSite = CallSite::new("src/app/main.rs", 27, 9);

    #[test]
    fn test_defaults() {
        let engine = LogEngine::builder().platform_sink(NullSink).build();
        assert_eq!(engine.threshold(), LogLevel::All);
        assert_eq!(engine.separator(), " ");
        assert_eq!(engine.terminator(), "\n");
        assert_eq!(engine.subsystem(), "com.prettylogger.default");
    }

    #[test]
    fn test_structured_call_reaches_platform_sink() {
        let (engine, platform, console) = test_engine();
        engine.error("disk failure", Some("Storage"), Privacy::Private);

        let calls = platform.calls.lock();
        assert_eq!(
            calls[0],
            PlatformCall {
                subsystem: "com.prettylogger.default".to_string(),
                category: "Storage".to_string(),
                level: PlatformLevel::Error,
                message: "disk failure".to_string(),
                privacy: Privacy::Private,
            }
        );
        assert!(console.output.lock().is_empty());
    }

    #[test]
    fn test_structured_default_category() {
        let (engine, platform, _) = test_engine();
        engine.info("hello", None, Privacy::Auto);
        assert_eq!(platform.calls.lock()[0].category, "default");
    }

    #[test]
    fn test_structured_record_has_no_call_site() {
        let (engine, _, _) = test_engine();
        let seen = collect(&engine);
        engine.warn("careful", None, Privacy::Public);

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], LogRecord::new(LogLevel::Warn, "careful"));
    }

    #[test]
    fn test_rejected_structured_call_has_no_effect() {
        let (engine, platform, _) = test_engine();
        let seen = collect(&engine);
        engine.set_threshold(LogLevel::Error);

        engine.warn("hidden", None, Privacy::Auto);
        engine.trace("hidden", Some("x"), Privacy::Auto);

        assert!(platform.calls.lock().is_empty());
        assert!(seen.lock().is_empty());
        assert_eq!(engine.metrics().suppressed(), 2);
        assert_eq!(engine.metrics().accepted(), 0);
    }

    #[test]
    fn test_legacy_call_formats_prints_and_returns() {
        let (engine, platform, console) = test_engine();
        let seen = collect(&engine);

        let line = engine
            .info_legacy(&[&"a", &"b"], Some(","), None, SITE)
            .expect("accepted");

        assert_eq!(line, "10:30:45.123 ◉ I a,b [main.rs:L27]");
        assert_eq!(*console.output.lock(), format!("{}\n", line));
        assert!(platform.calls.lock().is_empty());

        let seen = seen.lock();
        assert_eq!(seen[0].message, "a,b");
        assert_eq!(seen[0].file.as_deref(), Some("main.rs"));
        assert_eq!(seen[0].line, Some(27));
        assert_eq!(seen[0].column, Some(9));
        assert_eq!(seen[0].formatted.as_deref(), Some(line.as_str()));
    }

    #[test]
    fn test_legacy_uses_engine_defaults() {
        let (engine, _, console) = test_engine();
        engine.set_separator(" ❎ ");
        engine.set_terminator("\r\n");

        let line = engine.debug_legacy(&[&2, &3], None, None, SITE).unwrap();
        assert!(line.contains("2 ❎ 3"));
        assert!(console.output.lock().ends_with("[main.rs:L27]\r\n"));
    }

    #[test]
    fn test_legacy_overrides_win() {
        let (engine, _, console) = test_engine();
        engine.set_separator("-");
        engine.fatal_legacy(&[&"x", &"y"], Some("+"), Some(""), SITE);
        assert_eq!(*console.output.lock(), "10:30:45.123 ◉ FTL x+y [main.rs:L27]");
    }

    #[test]
    fn test_rejected_legacy_call_returns_none() {
        let (engine, _, console) = test_engine();
        let seen = collect(&engine);
        engine.set_threshold(LogLevel::Disable);

        assert_eq!(engine.fatal_legacy(&[&"x"], None, None, SITE), None);
        assert!(console.output.lock().is_empty());
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_boundary_levels_are_never_emitted() {
        let (engine, platform, _) = test_engine();
        engine.log(LogLevel::All, "x", None, Privacy::Auto);
        engine.log(LogLevel::Disable, "x", None, Privacy::Auto);
        assert_eq!(engine.log_legacy(LogLevel::All, &[&"x"], None, None, SITE), None);
        assert!(platform.calls.lock().is_empty());
    }

    #[test]
    fn test_log_fmt_formats_after_gate() {
        struct Explodes;
        impl Display for Explodes {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a rejected call");
            }
        }

        let (engine, platform, _) = test_engine();
        engine.set_threshold(LogLevel::Fatal);
        engine.log_fmt(LogLevel::Debug, format_args!("{}", Explodes), None, Privacy::Auto);
        engine.log_fmt(LogLevel::Fatal, format_args!("n={}", 5), None, Privacy::Auto);

        assert_eq!(platform.calls.lock().len(), 1);
        assert_eq!(platform.calls.lock()[0].message, "n=5");
    }

    #[test]
    fn test_sink_failure_is_isolated() {
        let engine = LogEngine::builder()
            .platform_sink(FailingPlatform)
            .console_sink(PanickingConsole)
            .build();
        let seen = collect(&engine);

        engine.info("still broadcast", None, Privacy::Auto);
        let line = engine.info_legacy(&[&"still returned"], None, None, SITE);

        assert!(line.is_some());
        assert_eq!(seen.lock().len(), 2);
        assert_eq!(engine.metrics().sink_failures(), 2);
    }

    #[test]
    fn test_flush_failure_does_not_skip_other_sink() {
        let console = CountingFlushConsole::default();
        let engine = LogEngine::builder()
            .platform_sink(FailingFlushPlatform)
            .console_sink(console.clone())
            .build();

        let result = engine.flush();

        assert!(matches!(result, Err(LoggerError::SinkError { .. })));
        assert_eq!(*console.flushes.lock(), 1);
        assert_eq!(engine.metrics().sink_failures(), 1);
    }

    #[test]
    fn test_flush_panic_is_isolated() {
        let console = CountingFlushConsole {
            panic_on_flush: true,
            ..CountingFlushConsole::default()
        };
        let engine = LogEngine::builder()
            .platform_sink(NullSink)
            .console_sink(console.clone())
            .build();

        let result = engine.flush();

        assert!(result.unwrap_err().to_string().contains("flush exploded"));
        assert_eq!(engine.metrics().sink_failures(), 1);
    }

    #[test]
    fn test_drop_survives_panicking_flush() {
        let console = CountingFlushConsole {
            panic_on_flush: true,
            ..CountingFlushConsole::default()
        };
        let engine = LogEngine::builder()
            .platform_sink(FailingFlushPlatform)
            .console_sink(console.clone())
            .build();

        let dropped = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| drop(engine)));

        assert!(dropped.is_ok());
        assert_eq!(*console.flushes.lock(), 1);
    }

    #[test]
    fn test_subscriber_may_log_reentrantly() {
        let (engine, platform, _) = test_engine();
        let engine = Arc::new(engine);
        let inner = Arc::downgrade(&engine);
        engine.subscribe(move |record| {
            if record.level == LogLevel::Error {
                if let Some(engine) = inner.upgrade() {
                    engine.info("mirrored", None, Privacy::Auto);
                }
            }
        });

        engine.error("original", None, Privacy::Auto);

        let calls = platform.calls.lock();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].message, "mirrored");
    }

    #[test]
    fn test_subsystem_from_config() {
        let platform = RecordingPlatform::default();
        let config = EngineConfig {
            subsystem: "com.example.svc".to_string(),
            threshold: LogLevel::Info,
            ..EngineConfig::default()
        };
        let engine = LogEngine::builder().config(config).platform_sink(platform.clone()).build();

        engine.debug("hidden", None, Privacy::Auto);
        engine.info("shown", Some("net"), Privacy::Auto);

        let calls = platform.calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].subsystem, "com.example.svc");
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogEngine>();
    }
}
