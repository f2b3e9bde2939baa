//! Engine metrics for observability
//!
//! Counters for accepted and suppressed calls, collaborator failures and
//! queue-subscriber drops.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for engine observability
///
/// # Example
///
/// ```
/// use pretty_logger::EngineMetrics;
///
/// let metrics = EngineMetrics::new();
///
/// metrics.record_accepted();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.accepted(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug)]
pub struct EngineMetrics {
    /// Calls that passed the threshold gate
    accepted: AtomicU64,

    /// Calls rejected by the threshold gate
    suppressed: AtomicU64,

    /// Platform or console sink writes that returned an error or panicked
    sink_failures: AtomicU64,

    /// Subscriber handlers that panicked during delivery
    subscriber_panics: AtomicU64,

    /// Records a queue subscriber could not accept
    queue_dropped: AtomicU64,
}

impl EngineMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            subscriber_panics: AtomicU64::new(0),
            queue_dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn subscriber_panics(&self) -> u64 {
        self.subscriber_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queue_dropped(&self) -> u64 {
        self.queue_dropped.load(Ordering::Relaxed)
    }

    /// Record an accepted call, returning the previous count
    #[inline]
    pub fn record_accepted(&self) -> u64 {
        self.accepted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_subscriber_panic(&self) -> u64 {
        self.subscriber_panics.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queue_dropped(&self) -> u64 {
        self.queue_dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Suppression rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no calls have been made.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed() as f64;
        let total = self.accepted() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.accepted.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
        self.subscriber_panics.store(0, Ordering::Relaxed);
        self.queue_dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EngineMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            accepted: AtomicU64::new(self.accepted()),
            suppressed: AtomicU64::new(self.suppressed()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            subscriber_panics: AtomicU64::new(self.subscriber_panics()),
            queue_dropped: AtomicU64::new(self.queue_dropped()),
        }
    }
}
