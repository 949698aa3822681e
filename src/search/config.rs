//! Similarity scoring configuration.

use serde::{Deserialize, Serialize};

/// Weights and switches for similarity ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Add the color-overlap distance to the total score (default: false).
    /// The color distance is always computed and reported either way.
    pub include_color_distance: bool,

    /// Weight of a shared token that is a keyword ability or action.
    pub keyword_weight: f64,

    /// Weight of any other shared token.
    pub plain_token_weight: f64,

    /// Text distance numerator, and the distance when no token is shared.
    pub text_scale: f64,

    /// Distance added when exactly one side of a power/toughness is `*`.
    pub variable_feature_penalty: f64,

    /// Distance added when exactly one side has a half point.
    pub half_feature_penalty: f64,

    /// Tokenize cards on the rayon pool while building the index.
    pub parallel_indexing: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            include_color_distance: false,
            keyword_weight: 2.0,
            plain_token_weight: 1.0,
            text_scale: 100.0,
            variable_feature_penalty: 50.0,
            half_feature_penalty: 0.5,
            parallel_indexing: true,
        }
    }
}

impl SearchConfig {
    /// Sum the color distance into the score.
    #[must_use]
    pub fn with_color_distance(mut self, include: bool) -> Self {
        self.include_color_distance = include;
        self
    }

    /// Set the keyword token weight.
    #[must_use]
    pub fn with_keyword_weight(mut self, weight: f64) -> Self {
        self.keyword_weight = weight;
        self
    }

    /// Set the text distance scale.
    #[must_use]
    pub fn with_text_scale(mut self, scale: f64) -> Self {
        self.text_scale = scale;
        self
    }

    /// Build the index on the current thread only.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel_indexing = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(!config.include_color_distance);
        assert_eq!(config.keyword_weight, 2.0);
        assert_eq!(config.plain_token_weight, 1.0);
        assert_eq!(config.text_scale, 100.0);
        assert_eq!(config.variable_feature_penalty, 50.0);
        assert_eq!(config.half_feature_penalty, 0.5);
        assert!(config.parallel_indexing);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_color_distance(true)
            .with_keyword_weight(3.0)
            .sequential();

        assert!(config.include_color_distance);
        assert_eq!(config.keyword_weight, 3.0);
        assert!(!config.parallel_indexing);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_text_scale(10.0);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
