//! Synchronous multicast of accepted log records
//!
//! Every accepted call is republished as a [`LogRecord`] to all current
//! subscribers before the log call returns. There is no history: a
//! subscriber only sees records published after it subscribed.
//!
//! The subscriber list is copy-on-write. `publish` takes a snapshot of the
//! list and delivers outside the lock, so each publish reaches exactly the
//! subscribers registered when it started, and handlers may log, subscribe
//! or unsubscribe from inside a delivery.

use super::{log_record::LogRecord, metrics::EngineMetrics, overflow_policy::OverflowPolicy};
use crossbeam_channel::{bounded, Receiver, SendTimeoutError, Sender, TrySendError};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback invoked synchronously for each published record.
pub type RecordHandler = Arc<dyn Fn(&LogRecord) + Send + Sync>;

/// Identifies one subscription; pass it back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

enum Delivery {
    Handler(RecordHandler),
    Queue {
        sender: Sender<LogRecord>,
        policy: OverflowPolicy,
    },
}

struct Subscriber {
    id: u64,
    delivery: Delivery,
}

pub struct OutputBroadcaster {
    subscribers: RwLock<Arc<Vec<Arc<Subscriber>>>>,
    next_id: AtomicU64,
    metrics: Arc<EngineMetrics>,
}

impl OutputBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        Self::with_metrics(Arc::new(EngineMetrics::new()))
    }

    /// Create a broadcaster reporting panics and drops into `metrics`.
    #[must_use]
    pub fn with_metrics(metrics: Arc<EngineMetrics>) -> Self {
        Self {
            subscribers: RwLock::new(Arc::new(Vec::new())),
            next_id: AtomicU64::new(1),
            metrics,
        }
    }

    /// Register a handler called for every subsequent record.
    ///
    /// # Example
    ///
    /// ```
    /// use pretty_logger::core::{LogLevel, LogRecord, OutputBroadcaster};
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let output = OutputBroadcaster::new();
    /// let seen = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&seen);
    /// let handle = output.subscribe(move |_record| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    ///
    /// output.publish(&LogRecord::new(LogLevel::Info, "hello"));
    /// assert!(output.unsubscribe(handle));
    /// output.publish(&LogRecord::new(LogLevel::Info, "unseen"));
    ///
    /// assert_eq!(seen.load(Ordering::SeqCst), 1);
    /// ```
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionHandle
    where
        F: Fn(&LogRecord) + Send + Sync + 'static,
    {
        self.insert(Delivery::Handler(Arc::new(handler)))
    }

    /// Register a bounded queue that receives a clone of every record.
    ///
    /// This is the only asynchronous delivery mode. When the queue is full
    /// `policy` applies and dropped records are counted in
    /// [`EngineMetrics::queue_dropped`]. Dropping the receiver ends the
    /// subscription on the next publish. A `capacity` of 0 is raised to 1,
    /// since a rendezvous channel would drop nearly every record.
    pub fn subscribe_queue(
        &self,
        capacity: usize,
        policy: OverflowPolicy,
    ) -> (SubscriptionHandle, Receiver<LogRecord>) {
        let (sender, receiver) = bounded(capacity.max(1));
        let handle = self.insert(Delivery::Queue { sender, policy });
        (handle, receiver)
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    ///
    /// A publish already in progress still delivers its record to the
    /// removed subscriber; later publishes do not.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        self.remove_ids(&[handle.0]) > 0
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Deliver `record` to every current subscriber, in subscription order.
    pub fn publish(&self, record: &LogRecord) {
        let snapshot = Arc::clone(&*self.subscribers.read());
        if snapshot.is_empty() {
            return;
        }

        let mut disconnected = Vec::new();
        for subscriber in snapshot.iter() {
            match &subscriber.delivery {
                Delivery::Handler(handler) => self.call_handler(subscriber.id, handler, record),
                Delivery::Queue { sender, policy } => {
                    if !self.enqueue(sender, *policy, record) {
                        disconnected.push(subscriber.id);
                    }
                }
            }
        }

        if !disconnected.is_empty() {
            self.remove_ids(&disconnected);
        }
    }

    fn insert(&self, delivery: Delivery) -> SubscriptionHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut guard = self.subscribers.write();
        Arc::make_mut(&mut *guard).push(Arc::new(Subscriber { id, delivery }));
        SubscriptionHandle(id)
    }

    fn remove_ids(&self, ids: &[u64]) -> usize {
        let mut guard = self.subscribers.write();
        let before = guard.len();
        if guard.iter().any(|s| ids.contains(&s.id)) {
            Arc::make_mut(&mut *guard).retain(|s| !ids.contains(&s.id));
        }
        before - guard.len()
    }

    fn call_handler(&self, id: u64, handler: &RecordHandler, record: &LogRecord) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler(record)));
        if let Err(panic_info) = result {
            self.metrics.record_subscriber_panic();
            eprintln!(
                "[LOGGER CRITICAL] Subscriber #{} panicked: {}. \
                 Other subscribers continue to receive records.",
                id,
                panic_message(&*panic_info)
            );
        }
    }

    /// Returns `false` once the receiving side is gone.
    fn enqueue(&self, sender: &Sender<LogRecord>, policy: OverflowPolicy, record: &LogRecord) -> bool {
        match policy {
            OverflowPolicy::DropNewest => match sender.try_send(record.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => self.record_drop(policy),
                Err(TrySendError::Disconnected(_)) => return false,
            },
            OverflowPolicy::BlockWithTimeout(timeout) => {
                match sender.send_timeout(record.clone(), timeout) {
                    Ok(()) => {}
                    Err(SendTimeoutError::Timeout(_)) => self.record_drop(policy),
                    Err(SendTimeoutError::Disconnected(_)) => return false,
                }
            }
        }
        true
    }

    fn record_drop(&self, policy: OverflowPolicy) {
        let dropped = self.metrics.record_queue_dropped();
        // Alert on first drop and periodically thereafter
        if dropped == 0 || (dropped + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER WARNING] Queue subscriber full ({}), {} records dropped.",
                policy,
                dropped + 1
            );
        }
    }
}

impl Default for OutputBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
