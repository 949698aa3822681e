//! Lexical index: one token set per card, aligned with corpus order.
//!
//! Rules text is split on whitespace, lowercased and stripped of
//! punctuation. Empty tokens and stop words are dropped and the rest is
//! deduplicated. There is no stemming and no term weighting here; keyword
//! weighting happens at scoring time.

use std::sync::OnceLock;
use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{info, warn};

use super::stats::IndexStats;
use crate::cards::CardRecord;
use crate::catalog::AttributeCatalog;
use crate::error::{Error, Result};

/// Deduplicated tokens of one card's rules text.
pub type TokenSet = FxHashSet<String>;

pub use crate::catalog::normalize;

/// Token set of a piece of rules text.
#[must_use]
pub fn tokenize(text: &str, catalog: &AttributeCatalog) -> TokenSet {
    text.split_whitespace()
        .map(normalize)
        .filter(|token| !token.is_empty() && !catalog.is_stop_word(token))
        .collect()
}

#[derive(Debug)]
struct BuiltIndex {
    slots: Vec<TokenSet>,
    stats: IndexStats,
}

/// Write-once index over a loaded corpus.
#[derive(Debug, Default)]
pub struct SearchIndex {
    built: OnceLock<BuiltIndex>,
}

impl SearchIndex {
    /// Create an unbuilt index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize every card, slot `i` holding card `i`.
    ///
    /// One-shot: a second build fails with `IndexAlreadyBuilt` and leaves
    /// the first build in place.
    pub fn build(
        &self,
        cards: &[CardRecord],
        catalog: &AttributeCatalog,
        parallel: bool,
    ) -> Result<IndexStats> {
        if self.is_built() {
            warn!("index build rejected: already built");
            return Err(Error::IndexAlreadyBuilt);
        }

        let start = Instant::now();
        let slots: Vec<TokenSet> = if parallel {
            cards
                .par_iter()
                .map(|card| tokenize(card.text(), catalog))
                .collect()
        } else {
            cards.iter().map(|card| tokenize(card.text(), catalog)).collect()
        };

        let distinct: FxHashSet<&str> = slots
            .iter()
            .flat_map(|slot| slot.iter().map(String::as_str))
            .collect();
        let stats = IndexStats {
            cards_indexed: slots.len(),
            total_tokens: slots.iter().map(FxHashSet::len).sum(),
            distinct_tokens: distinct.len(),
            empty_slots: slots.iter().filter(|slot| slot.is_empty()).count(),
            time_us: start.elapsed().as_micros() as u64,
        };

        self.built
            .set(BuiltIndex {
                slots,
                stats: stats.clone(),
            })
            .map_err(|_| Error::IndexAlreadyBuilt)?;

        info!(
            cards = stats.cards_indexed,
            distinct_tokens = stats.distinct_tokens,
            time_us = stats.time_us,
            "search index built"
        );
        Ok(stats)
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    fn built(&self) -> Result<&BuiltIndex> {
        self.built.get().ok_or(Error::IndexNotBuilt)
    }

    /// Token set of the card at `position`.
    pub fn tokens(&self, position: usize) -> Result<Option<&TokenSet>> {
        Ok(self.built()?.slots.get(position))
    }

    /// All slots, in corpus order.
    pub fn slots(&self) -> Result<&[TokenSet]> {
        Ok(&self.built()?.slots)
    }

    /// Statistics of the build.
    pub fn stats(&self) -> Result<&IndexStats> {
        Ok(&self.built()?.stats)
    }
}
