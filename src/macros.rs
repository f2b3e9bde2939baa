//! Logging macros for ergonomic calls on either surface.
//!
//! Structured macros take a format string like `format!` and only render it
//! when the threshold accepts the call. Legacy macros take a bracketed item
//! list and capture the call site with `file!()`, `line!()` and `column!()`.
//!
//! # Examples
//!
//! ```
//! use pretty_logger::prelude::*;
//! use pretty_logger::{info, warn_legacy};
//!
//! let engine = LogEngine::builder()
//!     .platform_sink(NullSink)
//!     .console_sink(NullSink)
//!     .build();
//!
//! // Structured, with optional category and privacy
//! info!(engine, "Server started");
//! info!(engine, category = "Network", "Listening on port {}", 8080);
//! info!(engine, category = "Auth", privacy = Privacy::Private, "token {}", "abc");
//!
//! // Legacy, returning the display line
//! let line = warn_legacy!(engine, ["retry", 3, "of", 5]);
//! assert!(line.unwrap().contains("retry 3 of 5"));
//! ```
//!
//! Without an engine argument the level macros log through [`global()`].
//!
//! ```no_run
//! use pretty_logger::{info, info_legacy};
//!
//! info!("connected to {}", "db-1");
//! info!(category = "Network", "retrying");
//! let line = info_legacy!(["a", 1], separator = ",");
//! ```
//!
//! [`global()`]: crate::global()

/// Structured call at an explicit level.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let engine = LogEngine::builder().platform_sink(NullSink).build();
/// use pretty_logger::log;
/// log!(engine, LogLevel::Info, "Simple message");
/// log!(engine, LogLevel::Error, privacy = Privacy::Public, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($engine:expr, $level:expr, category = $category:expr, privacy = $privacy:expr, $($arg:tt)+) => {
        $engine.log_fmt($level, format_args!($($arg)+), Some($category), $privacy)
    };
    ($engine:expr, $level:expr, category = $category:expr, $($arg:tt)+) => {
        $engine.log_fmt($level, format_args!($($arg)+), Some($category), $crate::Privacy::Auto)
    };
    ($engine:expr, $level:expr, privacy = $privacy:expr, $($arg:tt)+) => {
        $engine.log_fmt($level, format_args!($($arg)+), None, $privacy)
    };
    ($engine:expr, $level:expr, $($arg:tt)+) => {
        $engine.log_fmt($level, format_args!($($arg)+), None, $crate::Privacy::Auto)
    };
}

/// Structured fatal call.
#[macro_export]
macro_rules! fatal {
    (category = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Fatal, category = $($arg)+)
    };
    (privacy = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Fatal, privacy = $($arg)+)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global(), $crate::LogLevel::Fatal, $fmt $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Structured error call.
#[macro_export]
macro_rules! error {
    (category = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Error, category = $($arg)+)
    };
    (privacy = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Error, privacy = $($arg)+)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global(), $crate::LogLevel::Error, $fmt $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Structured warning call.
#[macro_export]
macro_rules! warn {
    (category = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Warn, category = $($arg)+)
    };
    (privacy = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Warn, privacy = $($arg)+)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global(), $crate::LogLevel::Warn, $fmt $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Structured info call.
#[macro_export]
macro_rules! info {
    (category = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Info, category = $($arg)+)
    };
    (privacy = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Info, privacy = $($arg)+)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global(), $crate::LogLevel::Info, $fmt $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Structured debug call.
#[macro_export]
macro_rules! debug {
    (category = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Debug, category = $($arg)+)
    };
    (privacy = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Debug, privacy = $($arg)+)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global(), $crate::LogLevel::Debug, $fmt $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Structured trace call.
#[macro_export]
macro_rules! trace {
    (category = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Trace, category = $($arg)+)
    };
    (privacy = $($arg:tt)+) => {
        $crate::log!($crate::global(), $crate::LogLevel::Trace, privacy = $($arg)+)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global(), $crate::LogLevel::Trace, $fmt $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Legacy call at an explicit level, capturing the call site.
///
/// Evaluates to `Option<String>`: the display line, or `None` when the
/// threshold rejects the level.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let engine = LogEngine::builder().console_sink(NullSink).build();
/// use pretty_logger::log_legacy;
/// let line = log_legacy!(engine, LogLevel::Debug, ["a", 1, true], separator = "|", terminator = "");
/// assert!(line.unwrap().contains("a|1|true"));
/// ```
#[macro_export]
macro_rules! log_legacy {
    ($engine:expr, $level:expr, [$($item:expr),* $(,)?] $(, separator = $sep:expr)? $(, terminator = $term:expr)? $(,)?) => {
        $engine.log_legacy(
            $level,
            &[$(&$item as &dyn ::std::fmt::Display),*],
            None $(.or(Some(::std::convert::AsRef::<str>::as_ref(&$sep))))?,
            None $(.or(Some(::std::convert::AsRef::<str>::as_ref(&$term))))?,
            $crate::CallSite::new(file!(), line!(), column!()),
        )
    };
}

/// Legacy fatal call.
#[macro_export]
macro_rules! fatal_legacy {
    ([$($item:tt)*] $($arg:tt)*) => {
        $crate::log_legacy!($crate::global(), $crate::LogLevel::Fatal, [$($item)*] $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log_legacy!($engine, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Legacy error call.
#[macro_export]
macro_rules! error_legacy {
    ([$($item:tt)*] $($arg:tt)*) => {
        $crate::log_legacy!($crate::global(), $crate::LogLevel::Error, [$($item)*] $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log_legacy!($engine, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Legacy warning call.
#[macro_export]
macro_rules! warn_legacy {
    ([$($item:tt)*] $($arg:tt)*) => {
        $crate::log_legacy!($crate::global(), $crate::LogLevel::Warn, [$($item)*] $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log_legacy!($engine, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Legacy info call.
#[macro_export]
macro_rules! info_legacy {
    ([$($item:tt)*] $($arg:tt)*) => {
        $crate::log_legacy!($crate::global(), $crate::LogLevel::Info, [$($item)*] $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log_legacy!($engine, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Legacy debug call.
#[macro_export]
macro_rules! debug_legacy {
    ([$($item:tt)*] $($arg:tt)*) => {
        $crate::log_legacy!($crate::global(), $crate::LogLevel::Debug, [$($item)*] $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log_legacy!($engine, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Legacy trace call.
#[macro_export]
macro_rules! trace_legacy {
    ([$($item:tt)*] $($arg:tt)*) => {
        $crate::log_legacy!($crate::global(), $crate::LogLevel::Trace, [$($item)*] $($arg)*)
    };
    ($engine:expr, $($arg:tt)+) => {
        $crate::log_legacy!($engine, $crate::LogLevel::Trace, $($arg)+)
    };
}
