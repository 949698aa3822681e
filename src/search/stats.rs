//! Index build statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected while building a `SearchIndex`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Cards tokenized (one slot each).
    pub cards_indexed: usize,

    /// Sum of per-card token set sizes.
    pub total_tokens: usize,

    /// Distinct tokens across the whole corpus.
    pub distinct_tokens: usize,

    /// Cards whose text produced no tokens.
    pub empty_slots: usize,

    /// Build time (microseconds).
    pub time_us: u64,
}

impl IndexStats {
    /// Average token set size.
    #[must_use]
    pub fn avg_tokens_per_card(&self) -> f64 {
        if self.cards_indexed == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.cards_indexed as f64
        }
    }

    /// Cards tokenized per second.
    #[must_use]
    pub fn cards_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.cards_indexed as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = IndexStats::default();
        assert_eq!(stats.cards_indexed, 0);
        assert_eq!(stats.avg_tokens_per_card(), 0.0);
        assert_eq!(stats.cards_per_second(), 0.0);
    }

    #[test]
    fn test_rates() {
        let stats = IndexStats {
            cards_indexed: 1000,
            total_tokens: 5000,
            time_us: 500_000,
            ..IndexStats::default()
        };
        assert!((stats.avg_tokens_per_card() - 5.0).abs() < 1e-9);
        assert!((stats.cards_per_second() - 2000.0).abs() < 1e-9);
    }
}
