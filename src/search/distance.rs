//! Per-field distances between two cards.
//!
//! The similarity score of a candidate is the sum of squares of the field
//! distances in its `ScoreBreakdown`. Lower is more similar.

use serde::Serialize;

use super::config::SearchConfig;
use super::index::TokenSet;
use crate::cards::{CardRecord, Feature};
use crate::catalog::{AttributeCatalog, Canonical};

/// Color distance buckets.
pub const COLORS_IDENTICAL: f64 = 0.0;
pub const COLORS_SUBSET: f64 = 10.0;
pub const COLORS_OVERLAP: f64 = 40.0;
pub const COLORS_DISJOINT: f64 = 50.0;

/// Distances of every scored field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub layout: f64,
    pub power: f64,
    pub toughness: f64,
    pub loyalty: f64,
    pub hand: f64,
    pub life: f64,
    pub text: f64,
    /// Reported always, summed only with `include_color_distance`.
    pub colors: f64,
}

impl ScoreBreakdown {
    /// Compare a candidate against the base card.
    #[must_use]
    pub fn between(
        base: (&CardRecord, &TokenSet),
        candidate: (&CardRecord, &TokenSet),
        catalog: &AttributeCatalog,
        config: &SearchConfig,
    ) -> Self {
        let (base, base_tokens) = base;
        let (other, other_tokens) = candidate;
        Self {
            layout: layout_distance(base.layout(), other.layout()),
            power: feature_distance(base.power(), other.power(), config),
            toughness: feature_distance(base.toughness(), other.toughness(), config),
            loyalty: integer_distance(base.loyalty(), other.loyalty()),
            hand: integer_distance(base.hand(), other.hand()),
            life: integer_distance(base.life(), other.life()),
            text: text_distance(base_tokens, other_tokens, catalog, config),
            colors: color_distance(base.colors(), other.colors()),
        }
    }

    /// Sum of squared distances.
    #[must_use]
    pub fn total(&self, config: &SearchConfig) -> f64 {
        let fields = [
            self.layout,
            self.power,
            self.toughness,
            self.loyalty,
            self.hand,
            self.life,
            self.text,
        ];
        let colors = if config.include_color_distance { self.colors } else { 0.0 };
        fields.iter().map(|d| d * d).sum::<f64>() + colors * colors
    }
}

/// 0 for equal layouts (two missing layouts are equal), 1 otherwise.
#[must_use]
pub fn layout_distance(a: Option<Canonical>, b: Option<Canonical>) -> f64 {
    if a == b {
        0.0
    } else {
        1.0
    }
}

/// Whole-part difference plus penalties for half and `*` mismatches.
///
/// A missing whole part counts as 0.
#[must_use]
pub fn feature_distance(a: Feature, b: Feature, config: &SearchConfig) -> f64 {
    let whole = (i64::from(a.whole_part.unwrap_or(0)) - i64::from(b.whole_part.unwrap_or(0))).abs();
    let half = if a.half != b.half { config.half_feature_penalty } else { 0.0 };
    let variable = if a.variable != b.variable {
        config.variable_feature_penalty
    } else {
        0.0
    };
    whole as f64 + half + variable
}

/// Absolute difference of the stored values.
///
/// Absent values are stored as `ABSENT_INTEGER` and are compared as-is, so
/// one missing side yields a very large distance.
#[must_use]
pub fn integer_distance(a: i32, b: i32) -> f64 {
    (i64::from(a) - i64::from(b)).abs() as f64
}

/// Bucketed overlap of two color sets.
#[must_use]
pub fn color_distance(a: &[Canonical], b: &[Canonical]) -> f64 {
    let a_in_b = a.iter().all(|c| b.contains(c));
    let b_in_a = b.iter().all(|c| a.contains(c));
    match (a_in_b, b_in_a) {
        (true, true) => COLORS_IDENTICAL,
        (true, false) | (false, true) => COLORS_SUBSET,
        _ if a.iter().any(|c| b.contains(c)) => COLORS_OVERLAP,
        _ => COLORS_DISJOINT,
    }
}

/// Reciprocal of the weighted token overlap.
///
/// Shared keyword abilities and actions weigh more than plain words. With
/// no shared token the distance is `text_scale`.
#[must_use]
pub fn text_distance(
    a: &TokenSet,
    b: &TokenSet,
    catalog: &AttributeCatalog,
    config: &SearchConfig,
) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let overlap: f64 = small
        .iter()
        .filter(|token| large.contains(*token))
        .map(|token| {
            if catalog.is_keyword(token) {
                config.keyword_weight
            } else {
                config.plain_token_weight
            }
        })
        .sum();

    if overlap > 0.0 {
        config.text_scale / overlap
    } else {
        config.text_scale
    }
}
