//! Mana cost parsing.
//!
//! Costs are written as concatenated bracketed symbols, e.g. `{3}{U}{U}`.
//! Parsing extracts each `{...}` body, resolves it as a mana symbol and
//! run-length compresses the result: a symbol equal to the one before it
//! bumps that pair's count, anything else starts a new pair.
//!
//! Same-colored symbols are assumed to be adjacent in printed costs and this
//! is not re-checked, so `{U}{B}{U}` yields two separate blue pairs.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{AttributeCatalog, Canonical, Category};

/// One run of identical symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaCount {
    pub color: Canonical,
    pub count: u16,
}

/// Why a cost string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManaCostError {
    #[error("unclosed `{{` at byte {offset}")]
    Unclosed { offset: usize },

    #[error("unknown mana symbol {0:?}")]
    UnknownSymbol(String),
}

/// Run-length compressed mana cost, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaCost(SmallVec<[ManaCount; 4]>);

impl ManaCost {
    /// Empty cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bracketed cost string against the catalog's mana symbols.
    ///
    /// ```
    /// use ccg_search::catalog::{AttributeCatalog, Category, Vocabulary};
    /// use ccg_search::cards::ManaCost;
    ///
    /// let catalog = AttributeCatalog::from_vocabulary(Vocabulary::standard()).unwrap();
    /// let cost = ManaCost::parse("{U}{U}{B}{U}", &catalog).unwrap();
    ///
    /// let blue = catalog.lookup(Category::ManaSymbol, "U").unwrap();
    /// let black = catalog.lookup(Category::ManaSymbol, "B").unwrap();
    /// let runs: Vec<_> = cost.iter().map(|m| (m.color, m.count)).collect();
    /// assert_eq!(runs, vec![(blue, 2), (black, 1), (blue, 1)]);
    /// ```
    pub fn parse(cost: &str, catalog: &AttributeCatalog) -> Result<Self, ManaCostError> {
        let mut mana = Self::new();
        for symbol in symbols(cost) {
            let symbol = symbol?;
            let canonical = catalog
                .get(Category::ManaSymbol, symbol)
                .ok_or_else(|| ManaCostError::UnknownSymbol(symbol.to_string()))?;
            mana.push(canonical);
        }
        Ok(mana)
    }

    /// Compress an already-resolved symbol sequence.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Canonical>) -> Self {
        let mut mana = Self::new();
        for symbol in symbols {
            mana.push(symbol);
        }
        mana
    }

    /// Append one symbol, merging it into the last run when equal.
    pub fn push(&mut self, symbol: Canonical) {
        match self.0.last_mut() {
            Some(last) if last.color == symbol => last.count = last.count.saturating_add(1),
            _ => self.0.push(ManaCount {
                color: symbol,
                count: 1,
            }),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ManaCount] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManaCount> {
        self.0.iter()
    }

    /// Number of runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of symbols across all runs.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.0.iter().map(|m| usize::from(m.count)).sum()
    }
}

/// Iterate over the bodies of the `{...}` groups in `cost`.
///
/// Text between groups is skipped. A `{` without a later `}` yields one
/// `Unclosed` error and ends the iteration.
pub fn symbols(cost: &str) -> ManaSymbols<'_> {
    ManaSymbols {
        rest: cost,
        offset: 0,
        done: false,
    }
}

/// Iterator returned by [`symbols`].
#[derive(Clone, Debug)]
pub struct ManaSymbols<'a> {
    rest: &'a str,
    offset: usize,
    done: bool,
}

impl<'a> Iterator for ManaSymbols<'a> {
    type Item = Result<&'a str, ManaCostError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(open) = self.rest.find('{') else {
            self.done = true;
            return None;
        };

        let body = &self.rest[open + 1..];
        match body.find('}') {
            Some(close) => {
                let symbol = &body[..close];
                let consumed = open + 1 + close + 1;
                self.rest = &self.rest[consumed..];
                self.offset += consumed;
                Some(Ok(symbol))
            }
            None => {
                self.done = true;
                Some(Err(ManaCostError::Unclosed {
                    offset: self.offset + open,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::Vocabulary;

    fn catalog() -> AttributeCatalog {
        AttributeCatalog::from_vocabulary(Vocabulary::standard()).unwrap()
    }

    fn mana(catalog: &AttributeCatalog, raw: &str) -> Canonical {
        catalog.lookup(Category::ManaSymbol, raw).unwrap()
    }

    #[test]
    fn test_symbols_extracts_bodies() {
        let found: Vec<_> = symbols("{3}{U}{U}").collect::<Result<_, _>>().unwrap();
        assert_eq!(found, vec!["3", "U", "U"]);
    }

    #[test]
    fn test_symbols_skip_text_between_groups() {
        let found: Vec<_> = symbols("{2}{R} // {W/U}").collect::<Result<_, _>>().unwrap();
        assert_eq!(found, vec!["2", "R", "W/U"]);
    }

    #[test]
    fn test_unclosed_brace_reports_offset() {
        let mut it = symbols("{U}{B");
        assert_eq!(it.next(), Some(Ok("U")));
        assert_eq!(it.next(), Some(Err(ManaCostError::Unclosed { offset: 3 })));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_parse_run_length() {
        let catalog = catalog();
        let cost = ManaCost::parse("{3}{U}{U}", &catalog).unwrap();
        assert_eq!(
            cost.as_slice(),
            &[
                ManaCount { color: mana(&catalog, "3"), count: 1 },
                ManaCount { color: mana(&catalog, "U"), count: 2 },
            ]
        );
        assert_eq!(cost.symbol_count(), 3);
    }

    #[test]
    fn test_parse_does_not_merge_non_adjacent() {
        let catalog = catalog();
        let cost = ManaCost::parse("{U}{U}{B}{U}", &catalog).unwrap();
        let blue = mana(&catalog, "U");
        let black = mana(&catalog, "B");
        let runs: Vec<_> = cost.iter().map(|m| (m.color, m.count)).collect();
        assert_eq!(runs, vec![(blue, 2), (black, 1), (blue, 1)]);
    }

    #[test]
    fn test_parse_empty_and_braceless() {
        let catalog = catalog();
        assert!(ManaCost::parse("", &catalog).unwrap().is_empty());
        assert!(ManaCost::parse("no symbols here", &catalog).unwrap().is_empty());
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let catalog = catalog();
        assert_eq!(
            ManaCost::parse("{U}{Q}", &catalog),
            Err(ManaCostError::UnknownSymbol("Q".to_string()))
        );
    }

    #[test]
    fn test_parse_unclosed() {
        let catalog = catalog();
        assert!(matches!(
            ManaCost::parse("{2}{G", &catalog),
            Err(ManaCostError::Unclosed { offset: 3 })
        ));
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_symbols(picks in prop::collection::vec(0usize..5, 0..24)) {
            let catalog = catalog();
            let letters = ["W", "U", "B", "R", "G"];
            let cost: String = picks.iter().map(|&i| format!("{{{}}}", letters[i])).collect();

            let parsed = ManaCost::parse(&cost, &catalog).unwrap();
            prop_assert_eq!(parsed.symbol_count(), picks.len());
            for pair in parsed.as_slice().windows(2) {
                prop_assert_ne!(pair[0].color, pair[1].color);
            }
        }
    }
}
