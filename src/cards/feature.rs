//! Power and toughness values.
//!
//! Printed power/toughness is mostly a small integer, but cards also print
//! `*`, `1+*`, `7-*`, `2.5` and `½`. A `Feature` keeps the three parts
//! separately so distances can weigh them differently.

use serde::{Deserialize, Serialize};

/// A power or toughness value.
///
/// The default value (no whole part, no half, not variable) means the card
/// has no such attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    /// Integer part, if printed.
    pub whole_part: Option<i32>,
    /// A half point is printed (`.5` or `½`).
    pub half: bool,
    /// The value depends on the game state (`*`).
    pub variable: bool,
}

impl Feature {
    /// No value printed.
    pub const ABSENT: Feature = Feature {
        whole_part: None,
        half: false,
        variable: false,
    };

    /// A plain integer value.
    #[must_use]
    pub const fn fixed(value: i32) -> Self {
        Self {
            whole_part: Some(value),
            half: false,
            variable: false,
        }
    }

    /// A bare `*`.
    #[must_use]
    pub const fn variable() -> Self {
        Self {
            whole_part: None,
            half: false,
            variable: true,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        *self == Self::ABSENT
    }

    /// Parse printed notation. Returns `None` if the text is not a value.
    ///
    /// ```
    /// use ccg_search::cards::Feature;
    ///
    /// let f = Feature::parse("1+*").unwrap();
    /// assert_eq!(f.whole_part, Some(1));
    /// assert!(f.variable);
    /// assert!(Feature::parse("?").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut rest = text.trim();
        if rest.is_empty() {
            return None;
        }

        let mut feature = Feature::default();

        if let Some(stripped) = rest.strip_suffix('*') {
            feature.variable = true;
            rest = stripped
                .strip_suffix('+')
                .or_else(|| stripped.strip_suffix('-'))
                .unwrap_or(stripped);
        }

        if let Some(stripped) = rest.strip_suffix(".5").or_else(|| rest.strip_suffix('½')) {
            feature.half = true;
            rest = stripped;
        }

        if !rest.is_empty() {
            feature.whole_part = Some(rest.parse().ok()?);
        }
        Some(feature)
    }

    /// Read any printed value, never failing.
    ///
    /// Text `parse` understands is read as such. Other text containing `*`
    /// (`*²`, `2+*²`) is variable, keeping a leading integer as the whole
    /// part. Anything else (`∞`, `?`) reads as `ABSENT`.
    ///
    /// ```
    /// use ccg_search::cards::Feature;
    ///
    /// assert_eq!(Feature::read("3"), Feature::fixed(3));
    /// assert_eq!(Feature::read("*²"), Feature::variable());
    /// assert!(Feature::read("∞").is_absent());
    /// ```
    #[must_use]
    pub fn read(text: &str) -> Self {
        if let Some(feature) = Self::parse(text) {
            return feature;
        }
        let text = text.trim();
        if !text.contains('*') {
            return Self::ABSENT;
        }
        let digits = text
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && matches!(c, '-' | '+'))))
            .map_or(text.len(), |(i, _)| i);
        Self {
            whole_part: text[..digits].parse().ok(),
            half: false,
            variable: true,
        }
    }

    /// Read a JSON number. Values other than whole or half numbers read as
    /// `ABSENT`.
    #[must_use]
    pub fn read_number(value: f64) -> Self {
        Self::from_number(value).unwrap_or(Self::ABSENT)
    }

    /// Interpret a JSON number. Only whole and half values are accepted.
    #[must_use]
    pub fn from_number(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > f64::from(i32::MAX) {
            return None;
        }
        let whole = value.trunc();
        let fraction = (value - whole).abs();
        let half = if fraction == 0.0 {
            false
        } else if fraction == 0.5 {
            true
        } else {
            return None;
        };
        Some(Self {
            whole_part: Some(whole as i32),
            half,
            variable: false,
        })
    }
}
