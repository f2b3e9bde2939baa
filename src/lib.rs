//! # Pretty Logger
//!
//! Leveled logging with two call surfaces over one dispatch core.
//!
//! ## Features
//!
//! - **Structured surface**: `info(message, category, privacy)` hands the
//!   message to a platform sink, which owns formatting and redaction
//! - **Legacy surface**: `info_legacy(items, separator, terminator, call_site)`
//!   formats a display line, prints it and returns it
//! - **One threshold**: both surfaces share a single run-time severity filter
//! - **Observable output**: every accepted call is republished as a
//!   [`LogRecord`] to synchronous subscribers
//!
//! ## Example
//!
//! ```
//! use pretty_logger::prelude::*;
//! use pretty_logger::{info, info_legacy};
//!
//! let engine = LogEngine::builder()
//!     .platform_sink(NullSink)
//!     .console_sink(NullSink)
//!     .build();
//!
//! let handle = engine.subscribe(|record| assert_eq!(record.level, LogLevel::Info));
//!
//! info!(engine, category = "Network", "connected to {}", "db-1");
//! let line = info_legacy!(engine, ["a", "b"], separator = ",");
//! assert!(line.unwrap().contains("a,b"));
//!
//! engine.unsubscribe(handle);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, Clock, ConsoleSink, EngineConfig, EngineMetrics, FixedClock, LogEngine,
        LogEngineBuilder, LogLevel, LogRecord, LoggerError, OutputBroadcaster, OverflowPolicy,
        PlatformLevel, PlatformSink, Privacy, Result, SinkTarget, SubscriptionHandle, SystemClock,
        TimestampFormat,
    };
    pub use crate::global::{
        global, init_global, log_debug, log_debug_legacy, log_error, log_error_legacy, log_fatal,
        log_fatal_legacy, log_info, log_info_legacy, log_trace, log_trace_legacy, log_warn,
        log_warn_legacy,
    };
    pub use crate::sinks::{LogFacadeSink, NullSink, StdoutConsole, TerminalSink, WriterConsole};
}

pub use core::{
    CallSite, Clock, ConsoleSink, EngineConfig, EngineMetrics, FixedClock, LogEngine,
    LogEngineBuilder, LogLevel, LogRecord, LoggerError, OutputBroadcaster, OverflowPolicy,
    PlatformLevel, PlatformSink, Privacy, Result, SinkTarget, SubscriptionHandle, SystemClock,
    TimestampFormat,
};
pub use global::{
    global, init_global, log_debug, log_debug_legacy, log_error, log_error_legacy, log_fatal,
    log_fatal_legacy, log_info, log_info_legacy, log_trace, log_trace_legacy, log_warn,
    log_warn_legacy,
};
pub use sinks::{LogFacadeSink, NullSink, StdoutConsole, TerminalSink, WriterConsole};
