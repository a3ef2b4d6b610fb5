//! Search statistics for diagnostics and tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counters collected during one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited (every call to the value recursion).
    pub nodes: u64,

    /// Terminal states scored with their utility.
    pub terminal_nodes: u64,

    /// Values answered from the transposition table.
    pub cache_hits: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add another set of node counters into this one.
    ///
    /// Used to combine per-branch counters after a parallel root search.
    /// Timing is left alone; it is measured once around the whole call.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.terminal_nodes += other.terminal_nodes;
        self.cache_hits += other.cache_hits;
    }

    /// Store the wall-clock time of a call, saturating at `u64::MAX` µs.
    pub fn record_elapsed(&mut self, elapsed: Duration) {
        self.time_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cache_hits, 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 1_000_000; // 1 second

        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats {
            nodes: 10,
            terminal_nodes: 4,
            cache_hits: 1,
            time_us: 50,
        };
        let branch = SearchStats {
            nodes: 5,
            terminal_nodes: 2,
            cache_hits: 3,
            time_us: 999,
        };

        total.merge(&branch);

        assert_eq!(total.nodes, 15);
        assert_eq!(total.terminal_nodes, 6);
        assert_eq!(total.cache_hits, 4);
        assert_eq!(total.time_us, 50);
    }

    #[test]
    fn test_record_elapsed() {
        let mut stats = SearchStats::new();

        stats.record_elapsed(Duration::from_millis(3));
        assert_eq!(stats.time_us, 3_000);

        stats.record_elapsed(Duration::MAX);
        assert_eq!(stats.time_us, u64::MAX);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.terminal_nodes = 50;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
