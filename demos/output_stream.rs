//! Output stream example
//!
//! Demonstrates synchronous subscribers, a bounded queue subscriber and
//! engine metrics.
//!
//! Run with: cargo run --example output_stream

use pretty_logger::prelude::*;
use pretty_logger::{error_legacy, info};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Pretty Logger - Output Stream Example ===\n");

    let engine = LogEngine::builder()
        .platform_sink(NullSink)
        .console_sink(NullSink)
        .build();

    // Synchronous subscriber, runs on the logging thread
    let handle = engine.subscribe(|record| {
        let location = match (&record.file, record.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };
        println!("[subscriber] {:<5} {}{}", record.level.name(), record.message, location);
    });

    // Queue subscriber, drained on its own thread
    let (_queue, receiver) = engine.subscribe_queue(
        32,
        OverflowPolicy::BlockWithTimeout(Duration::from_millis(10)),
    );
    let consumer = thread::spawn(move || {
        let mut records = Vec::new();
        while let Ok(record) = receiver.recv() {
            records.push(record);
        }
        records
    });

    info!(engine, category = "Jobs", "processed {} items", 128);
    error_legacy!(engine, ["job", 7, "failed"]);
    engine.set_threshold(LogLevel::Error);
    engine.debug("suppressed", None, Privacy::Auto);

    engine.unsubscribe(handle);
    engine.fatal("only the queue sees this", None, Privacy::Auto);

    let metrics = engine.metrics().clone();
    drop(engine);

    let records = consumer
        .join()
        .map_err(|_| LoggerError::other("consumer thread panicked"))?;
    println!("\nQueue received {} records:", records.len());
    for record in &records {
        println!("  {}", serde_json::to_string(record)?);
    }

    println!(
        "\nMetrics: accepted={} suppressed={} rate={:.1}%",
        metrics.accepted(),
        metrics.suppressed(),
        metrics.suppression_rate()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
