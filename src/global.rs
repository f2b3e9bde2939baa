//! Process-wide default engine
//!
//! Applications that do not want to pass an engine around can use
//! [`global()`], the `log_*` free functions, or the level macros without an
//! engine argument (`info!("x")`, `info_legacy!(["a", 1])`). The default
//! instance is built
//! on first use from [`EngineConfig::from_env`], unless [`init_global`] ran
//! first.

use crate::core::{CallSite, EngineConfig, LogEngine, LoggerError, Privacy, Result};
use std::fmt::Display;
use std::sync::OnceLock;

static GLOBAL: OnceLock<LogEngine> = OnceLock::new();

/// The default engine, created on first access.
pub fn global() -> &'static LogEngine {
    GLOBAL.get_or_init(|| {
        let config = EngineConfig::from_env().unwrap_or_else(|e| {
            eprintln!("[LOGGER WARNING] Ignoring environment configuration: {}", e);
            EngineConfig::default()
        });
        LogEngine::builder().config(config).build()
    })
}

/// Install `engine` as the default instance.
///
/// Fails if the default engine was already created or installed.
pub fn init_global(engine: LogEngine) -> Result<()> {
    GLOBAL
        .set(engine)
        .map_err(|_| LoggerError::config("global", "default engine already initialized"))
}

pub fn log_fatal(message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
    global().fatal(message, category, privacy);
}

pub fn log_error(message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
    global().error(message, category, privacy);
}

pub fn log_warn(message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
    global().warn(message, category, privacy);
}

pub fn log_info(message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
    global().info(message, category, privacy);
}

pub fn log_debug(message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
    global().debug(message, category, privacy);
}

pub fn log_trace(message: impl Into<String>, category: Option<&str>, privacy: Privacy) {
    global().trace(message, category, privacy);
}

pub fn log_fatal_legacy(
    items: &[&dyn Display],
    separator: Option<&str>,
    terminator: Option<&str>,
    call_site: CallSite,
) -> Option<String> {
    global().fatal_legacy(items, separator, terminator, call_site)
}

pub fn log_error_legacy(
    items: &[&dyn Display],
    separator: Option<&str>,
    terminator: Option<&str>,
    call_site: CallSite,
) -> Option<String> {
    global().error_legacy(items, separator, terminator, call_site)
}

pub fn log_warn_legacy(
    items: &[&dyn Display],
    separator: Option<&str>,
    terminator: Option<&str>,
    call_site: CallSite,
) -> Option<String> {
    global().warn_legacy(items, separator, terminator, call_site)
}

pub fn log_info_legacy(
    items: &[&dyn Display],
    separator: Option<&str>,
    terminator: Option<&str>,
    call_site: CallSite,
) -> Option<String> {
    global().info_legacy(items, separator, terminator, call_site)
}

pub fn log_debug_legacy(
    items: &[&dyn Display],
    separator: Option<&str>,
    terminator: Option<&str>,
    call_site: CallSite,
) -> Option<String> {
    global().debug_legacy(items, separator, terminator, call_site)
}

pub fn log_trace_legacy(
    items: &[&dyn Display],
    separator: Option<&str>,
    terminator: Option<&str>,
    call_site: CallSite,
) -> Option<String> {
    global().trace_legacy(items, separator, terminator, call_site)
}
