//! Basic engine usage example
//!
//! Demonstrates both call surfaces, the threshold and runtime configuration.
//!
//! Run with: cargo run --example basic_usage

use pretty_logger::prelude::*;
use pretty_logger::{debug_legacy, info, info_legacy, warn};

fn main() -> Result<()> {
    println!("=== Pretty Logger - Basic Usage Example ===\n");

    let engine = LogEngine::builder()
        .subsystem("com.example.basic")
        .platform_sink(TerminalSink::new())
        .build();

    println!("1. Structured calls at every level (stderr):");
    engine.fatal("This is a fatal message", None, Privacy::Auto);
    engine.error("This is an error message", Some("Storage"), Privacy::Public);
    engine.warn("This is a warning message", None, Privacy::Auto);
    engine.info("This is an info message", Some("Network"), Privacy::Auto);
    engine.debug("Session token abc123", Some("Auth"), Privacy::Private);
    engine.trace("This is a trace message", None, Privacy::Auto);

    println!("\n2. Formatted structured calls:");
    info!(engine, category = "Network", "Listening on port {}", 8080);
    warn!(engine, "Disk usage at {}%", 91);

    println!("\n3. Legacy calls (stdout):");
    info_legacy!(engine, ["Server", "started", "in", 42, "ms"]);
    debug_legacy!(engine, ["a", "b", "c"], separator = ",");

    println!("\n4. Changing the threshold to WARN:");
    engine.set_threshold(LogLevel::Warn);
    engine.info("Info message (hidden)", None, Privacy::Auto);
    engine.warn("Warning message (visible)", None, Privacy::Auto);
    let hidden = info_legacy!(engine, ["hidden"]);
    println!("   legacy call returned {:?}", hidden);

    println!("\n5. Changing the separator:");
    engine.set_threshold(LogLevel::All);
    engine.set_separator(" ❎ ");
    info_legacy!(engine, [2, 3]);

    engine.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
