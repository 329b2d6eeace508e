//! Lookup metrics.
//!
//! Counts which step of the fallback chain resolved each `translate` call.
//! Counters are atomics so lookups can record through a shared reference.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Which step of the fallback chain produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Found in the current locale's table
    Current,
    /// Found in the default locale's table
    Default,
    /// Caller-supplied fallback text
    Fallback,
    /// The key itself
    Key,
}

/// Per-localizer lookup counters.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    current_hits: AtomicUsize,
    default_hits: AtomicUsize,
    fallback_hits: AtomicUsize,
    key_hits: AtomicUsize,
}

impl LookupMetrics {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how a lookup was resolved.
    pub fn record(&self, resolution: Resolution) {
        let counter = match resolution {
            Resolution::Current => &self.current_hits,
            Resolution::Default => &self.default_hits,
            Resolution::Fallback => &self.fallback_hits,
            Resolution::Key => &self.key_hits,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Lookups served by the current locale.
    pub fn current_hits(&self) -> usize {
        self.current_hits.load(Ordering::Relaxed)
    }

    /// Lookups served by the default locale.
    pub fn default_hits(&self) -> usize {
        self.default_hits.load(Ordering::Relaxed)
    }

    /// Lookups served by the caller's fallback text.
    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    /// Lookups that returned the key verbatim.
    pub fn key_hits(&self) -> usize {
        self.key_hits.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let current = self.current_hits();
        let default = self.default_hits();
        let fallback = self.fallback_hits();
        let key = self.key_hits();
        let total = current + default + fallback + key;

        let translated_rate = if total > 0 {
            ((current + default) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: total,
            current_hits: current,
            default_hits: default,
            fallback_hits: fallback,
            key_hits: key,
            translated_rate,
        }
    }

    /// Reset all counters to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.current_hits.store(0, Ordering::Relaxed);
        self.default_hits.store(0, Ordering::Relaxed);
        self.fallback_hits.store(0, Ordering::Relaxed);
        self.key_hits.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total number of lookups
    pub lookups: usize,

    /// Lookups served by the current locale
    pub current_hits: usize,

    /// Lookups served by the default locale
    pub default_hits: usize,

    /// Lookups served by caller fallback text
    pub fallback_hits: usize,

    /// Lookups that returned the key itself
    pub key_hits: usize,

    /// Share of lookups served from a translation table, as a percentage (0-100)
    pub translated_rate: f64,
}
