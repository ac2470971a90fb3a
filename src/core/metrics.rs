//! Logger metrics for observability
//!
//! Logging is best-effort: sink and handler failures never reach the caller.
//! These counters are where such failures remain visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what a logger did with the messages it was given
///
/// # Example
///
/// ```
/// use rust_logfmt_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.dispatched_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages that passed the level threshold and were rendered
    dispatched: AtomicU64,

    /// Messages below the minimum level
    suppressed: AtomicU64,

    /// Failed writes to the sink
    sink_failures: AtomicU64,

    /// Handler calls that returned an error or panicked
    handler_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            handler_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failure_count(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handler_failure_count(&self) -> u64 {
        self.handler_failures.load(Ordering::Relaxed)
    }

    /// Record a dispatched message, returning the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
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
    pub fn record_handler_failure(&self) -> u64 {
        self.handler_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
        self.handler_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched_count()),
            suppressed: AtomicU64::new(self.suppressed_count()),
            sink_failures: AtomicU64::new(self.sink_failure_count()),
            handler_failures: AtomicU64::new(self.handler_failure_count()),
        }
    }
}
