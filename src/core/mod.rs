//! Core engine types and traits

pub mod broadcaster;
pub mod config;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod metrics;
pub mod overflow_policy;
pub mod privacy;
pub mod sink;
pub mod timestamp;

pub use broadcaster::{OutputBroadcaster, RecordHandler, SubscriptionHandle};
pub use config::EngineConfig;
pub use engine::{LogEngine, LogEngineBuilder};
pub use error::{LoggerError, Result};
pub use formatter::{basename, join_items, render_line, MARKER};
pub use log_level::{LogLevel, PlatformLevel};
pub use log_record::{CallSite, LogRecord};
pub use metrics::EngineMetrics;
pub use overflow_policy::OverflowPolicy;
pub use privacy::Privacy;
pub use sink::{ConsoleSink, PlatformSink, SinkTarget, DEFAULT_CATEGORY, DEFAULT_SUBSYSTEM};
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampFormat};
