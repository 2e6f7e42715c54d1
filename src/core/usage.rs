//! Process-wide usage counters.
//!
//! A single [`UsageMetrics`] instance is created when the server starts and is
//! shared by reference with every handler. Each field is an independent atomic
//! cell: the request count and the active connection count are never updated
//! together, so no lock is needed.
use std::{
    ops::Range,
    sync::{
        Arc,
        atomic::{AtomicI64, AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use rand::Rng;

/// Bounds of the synthetic memory figure reported by `/api/v1/stats`.
///
/// The upper bound is exclusive; see [`UsageMetrics::synthetic_memory_usage_mb`].
pub const SYNTHETIC_MEMORY_MB: Range<f32> = 10.0..15.0;

/// Shared usage counters.
#[derive(Debug)]
pub struct UsageMetrics {
    started_at: Instant,
    total_requests: AtomicU64,
    active_connections: AtomicI64,
}

impl UsageMetrics {
    /// Capture the monotonic start instant. Call once, at process start.
    pub fn record_start() -> Self {
        Self {
            started_at: Instant::now(),
            total_requests: AtomicU64::new(0),
            active_connections: AtomicI64::new(0),
        }
    }

    /// Atomically bump the request counter and return the new total.
    pub fn increment_requests(&self) -> u64 {
        self.total_requests.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::SeqCst)
    }

    /// Whole seconds elapsed since [`UsageMetrics::record_start`].
    pub fn current_uptime_seconds(&self) -> u64 {
        self.uptime().as_secs()
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn active_connections(&self) -> i64 {
        self.active_connections.load(Ordering::SeqCst)
    }

    /// Register an opened connection. The returned guard decrements the
    /// counter again when dropped.
    pub fn connection_opened(self: &Arc<Self>) -> ConnectionGuard {
        let active = self.active_connections.fetch_add(1, Ordering::SeqCst) + 1;
        crate::metrics::set_active_connections(active);
        ConnectionGuard {
            usage: Arc::clone(self),
        }
    }

    fn connection_closed(&self) {
        let active = self.active_connections.fetch_sub(1, Ordering::SeqCst) - 1;
        crate::metrics::set_active_connections(active);
    }

    /// Pseudo-random figure in `[10.0, 15.0)`. This is a stand-in, not a
    /// measurement of the process.
    pub fn synthetic_memory_usage_mb(&self) -> f32 {
        rand::rng().random_range(SYNTHETIC_MEMORY_MB)
    }
}

impl Default for UsageMetrics {
    fn default() -> Self {
        Self::record_start()
    }
}

/// RAII handle for one open connection.
#[derive(Debug)]
pub struct ConnectionGuard {
    usage: Arc<UsageMetrics>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.usage.connection_closed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_returns_new_total() {
        let usage = UsageMetrics::record_start();
        assert_eq!(usage.total_requests(), 0);
        assert_eq!(usage.increment_requests(), 1);
        assert_eq!(usage.increment_requests(), 2);
        assert_eq!(usage.total_requests(), 2);
    }

    #[test]
    fn test_uptime_starts_near_zero() {
        let usage = UsageMetrics::record_start();
        assert!(usage.current_uptime_seconds() < 5);
    }

    #[test]
    fn test_connection_guard_balances_counter() {
        let usage = Arc::new(UsageMetrics::record_start());

        let first = usage.connection_opened();
        let second = usage.connection_opened();
        assert_eq!(usage.active_connections(), 2);

        drop(first);
        assert_eq!(usage.active_connections(), 1);

        drop(second);
        assert_eq!(usage.active_connections(), 0);
    }

    #[test]
    fn test_synthetic_memory_stays_in_range() {
        let usage = UsageMetrics::record_start();
        for _ in 0..1_000 {
            let value = usage.synthetic_memory_usage_mb();
            assert!(SYNTHETIC_MEMORY_MB.contains(&value), "out of range: {value}");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_increments_lose_nothing() {
        let usage = Arc::new(UsageMetrics::record_start());
        let tasks = 64;
        let per_task = 1_000;

        let handles: Vec<_> = (0..tasks)
            .map(|_| {
                let usage = usage.clone();
                tokio::spawn(async move {
                    for _ in 0..per_task {
                        usage.increment_requests();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(usage.total_requests(), tasks * per_task);
    }
}
