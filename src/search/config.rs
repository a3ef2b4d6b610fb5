//! Minimax search configuration.
//!
//! `transposition_table` and `parallel_root` are pure optimizations: the
//! recommended action and its value are the same whichever combination is
//! enabled. `prefer_quick_wins` changes only which of several equally
//! valued actions is picked.

use serde::{Deserialize, Serialize};

/// Minimax search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Memoize board values in a transposition table.
    /// Game value is path-independent, so identical boards reached by
    /// different move orders share one entry.
    pub transposition_table: bool,

    /// Evaluate root actions on the rayon thread pool, one task per action.
    pub parallel_root: bool,

    /// Score wins by distance: a win in fewer plies beats a later one, and
    /// a loss is put off as long as possible. Off by default, in which case
    /// all wins tie and the first in enumeration order is chosen.
    pub prefer_quick_wins: bool,
}

impl SearchConfig {
    /// Create the default configuration (plain sequential minimax).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the transposition table.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.transposition_table = enabled;
        self
    }

    /// Enable or disable root-level parallelism.
    pub fn with_parallel_root(mut self, enabled: bool) -> Self {
        self.parallel_root = enabled;
        self
    }

    /// Enable or disable distance-to-win scoring.
    pub fn with_prefer_quick_wins(mut self, enabled: bool) -> Self {
        self.prefer_quick_wins = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(!config.transposition_table);
        assert!(!config.parallel_root);
        assert!(!config.prefer_quick_wins);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::new()
            .with_transposition_table(true)
            .with_parallel_root(true)
            .with_prefer_quick_wins(true);

        assert!(config.transposition_table);
        assert!(config.parallel_root);
        assert!(config.prefer_quick_wins);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::new().with_transposition_table(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
