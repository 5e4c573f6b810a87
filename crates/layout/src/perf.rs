use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Trait for measuring layout performance.
///
/// This allows us to swap implementations. In production/release builds
/// without the "profiling" feature, these methods can be optimized to no-ops.
pub trait Profiler: Send + Sync {
    fn record(&self, key: &str, duration: Duration);
    fn count_restart(&self);
    fn reset(&self);
}

/// A no-op profiler for production use.
/// The compiler will inline these and eliminate the overhead.
pub struct NoOpProfiler;

impl Profiler for NoOpProfiler {
    #[inline(always)]
    fn record(&self, _key: &str, _duration: Duration) {}
    #[inline(always)]
    fn count_restart(&self) {}
    #[inline(always)]
    fn reset(&self) {}
}

/// Real profiler implementation.
/// Only compiled/used when explicitly enabled or for debugging.
#[derive(Default)]
pub struct DebugProfiler {
    stats: Mutex<HashMap<String, Duration>>,
    restarts: AtomicUsize,
    paragraphs: AtomicUsize,
}

impl DebugProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restarts(&self) -> usize {
        self.restarts.load(Ordering::Acquire)
    }

    pub fn log_summary(&self) {
        let paragraphs = self.paragraphs.load(Ordering::Acquire);
        if paragraphs == 0 {
            return;
        }
        let restarts = self.restarts.load(Ordering::Acquire);
        log::info!("=== Layout Profile Summary ===");
        log::info!("Paragraphs: {}", paragraphs);
        log::info!(
            "Half-width restarts: {} ({:.2} per paragraph)",
            restarts,
            restarts as f64 / paragraphs as f64
        );
        if let Ok(stats) = self.stats.lock() {
            let mut keys: Vec<_> = stats.keys().collect();
            keys.sort();
            for key in keys {
                log::info!("{}: {:?}", key, stats[key]);
            }
        }
    }
}

impl Profiler for DebugProfiler {
    fn record(&self, key: &str, duration: Duration) {
        if key == "paragraph" {
            self.paragraphs.fetch_add(1, Ordering::AcqRel);
        }
        if let Ok(mut stats) = self.stats.lock() {
            *stats.entry(key.to_string()).or_default() += duration;
        }
    }

    fn count_restart(&self) {
        self.restarts.fetch_add(1, Ordering::AcqRel);
    }

    fn reset(&self) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.clear();
        }
        self.restarts.store(0, Ordering::Release);
        self.paragraphs.store(0, Ordering::Release);
    }
}
