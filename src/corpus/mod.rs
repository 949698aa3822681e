//! Corpus: the catalog plus every card, in source order.
//!
//! A corpus starts unloaded and becomes loaded exactly once. Loading builds
//! the `AttributeCatalog`, then turns each raw record into a `CardRecord`;
//! the first failure aborts the load and nothing is published. The loaded
//! state is published in one step, so a reader that sees the corpus ready
//! sees all of it.
//!
//! `CardDatabase` is the capability the search side depends on. `Corpus` is
//! the only implementation today.

pub mod source;

use std::sync::OnceLock;
use std::time::Instant;

use serde_json::Value;
use tracing::{info, warn};

use crate::cards::CardRecord;
use crate::catalog::{AttributeCatalog, Category, CategoryTable, Vocabulary};
use crate::error::{Error, Result};

pub use source::{records_from_tree, CardSource, JsonCardSource};

/// Read access to a loaded card collection.
pub trait CardDatabase: Send + Sync {
    /// Load raw records. One-shot: a second call fails.
    fn load(&self, records: &[Value]) -> Result<()>;

    /// Non-blocking check of the load state.
    fn is_ready(&self) -> bool;

    /// All cards, in source order.
    fn get_cards(&self) -> Result<&[CardRecord]>;

    /// The catalog the cards were validated against.
    fn get_catalog(&self) -> Result<&AttributeCatalog>;
}

#[derive(Debug)]
struct LoadedCorpus {
    catalog: AttributeCatalog,
    cards: Vec<CardRecord>,
}

/// In-memory corpus built from decoded raw records.
#[derive(Debug)]
pub struct Corpus {
    vocabulary: &'static Vocabulary,
    loaded: OnceLock<LoadedCorpus>,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus {
    /// Create an unloaded corpus using the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard())
    }

    /// Create an unloaded corpus using alternate vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: &'static Vocabulary) -> Self {
        Self {
            vocabulary,
            loaded: OnceLock::new(),
        }
    }

    fn loaded(&self) -> Result<&LoadedCorpus> {
        self.loaded.get().ok_or(Error::CorpusNotLoaded)
    }

    /// Number of loaded cards.
    pub fn len(&self) -> Result<usize> {
        Ok(self.loaded()?.cards.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.loaded()?.cards.is_empty())
    }

    /// Catalog table for one category.
    pub fn get_category(&self, category: Category) -> Result<&CategoryTable> {
        Ok(self.loaded()?.catalog.table(category))
    }

    pub fn get_types(&self) -> Result<&CategoryTable> {
        self.get_category(Category::Type)
    }

    pub fn get_subtypes(&self) -> Result<&CategoryTable> {
        self.get_category(Category::Subtype)
    }

    pub fn get_supertypes(&self) -> Result<&CategoryTable> {
        self.get_category(Category::Supertype)
    }

    pub fn get_layouts(&self) -> Result<&CategoryTable> {
        self.get_category(Category::Layout)
    }

    pub fn get_colors(&self) -> Result<&CategoryTable> {
        self.get_category(Category::Color)
    }

    pub fn get_mana_symbols(&self) -> Result<&CategoryTable> {
        self.get_category(Category::ManaSymbol)
    }
}

impl CardDatabase for Corpus {
    fn load(&self, records: &[Value]) -> Result<()> {
        if self.is_ready() {
            warn!("corpus load rejected: already loaded");
            return Err(Error::CorpusAlreadyLoaded);
        }

        let start = Instant::now();
        info!(records = records.len(), "loading corpus");

        let catalog = AttributeCatalog::from_vocabulary(self.vocabulary)?;
        let cards = records
            .iter()
            .enumerate()
            .map(|(position, raw)| CardRecord::from_value(raw, position, &catalog))
            .collect::<Result<Vec<_>>>()?;

        let card_count = cards.len();
        self.loaded
            .set(LoadedCorpus { catalog, cards })
            .map_err(|_| Error::CorpusAlreadyLoaded)?;

        info!(
            cards = card_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "corpus loaded"
        );
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.loaded.get().is_some()
    }

    fn get_cards(&self) -> Result<&[CardRecord]> {
        Ok(&self.loaded()?.cards)
    }

    fn get_catalog(&self) -> Result<&AttributeCatalog> {
        Ok(&self.loaded()?.catalog)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accessors_fail_before_load() {
        let corpus = Corpus::new();
        assert!(!corpus.is_ready());
        assert!(matches!(corpus.get_cards(), Err(Error::CorpusNotLoaded)));
        assert!(matches!(corpus.get_catalog(), Err(Error::CorpusNotLoaded)));
        assert!(matches!(corpus.get_types(), Err(Error::CorpusNotLoaded)));
        assert!(matches!(corpus.len(), Err(Error::CorpusNotLoaded)));
    }

    #[test]
    fn test_load_keeps_source_order() {
        let corpus = Corpus::new();
        corpus
            .load(&[json!({ "name": "B" }), json!({ "name": "A" }), json!({ "name": "C" })])
            .unwrap();

        assert!(corpus.is_ready());
        let names: Vec<_> = corpus.get_cards().unwrap().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_failed_load_publishes_nothing() {
        let corpus = Corpus::new();
        let err = corpus
            .load(&[json!({ "name": "Fine" }), json!({ "name": "Bad", "types": ["Nope"] })])
            .unwrap_err();

        assert!(err.is_construction_error());
        assert!(!corpus.is_ready());
        assert!(matches!(corpus.get_cards(), Err(Error::CorpusNotLoaded)));
    }

    #[test]
    fn test_failed_load_can_be_retried() {
        let corpus = Corpus::new();
        assert!(corpus.load(&[json!("not an object")]).is_err());
        corpus.load(&[json!({ "name": "Fixed" })]).unwrap();
        assert_eq!(corpus.len().unwrap(), 1);
    }

    #[test]
    fn test_second_load_rejected() {
        let corpus = Corpus::new();
        corpus.load(&[json!({ "name": "First" })]).unwrap();
        assert!(matches!(
            corpus.load(&[json!({ "name": "Second" })]),
            Err(Error::CorpusAlreadyLoaded)
        ));
        assert_eq!(corpus.get_cards().unwrap()[0].name(), "First");
    }

    #[test]
    fn test_category_tables_after_load() {
        let corpus = Corpus::new();
        corpus.load(&[]).unwrap();
        assert!(corpus.is_empty().unwrap());
        assert!(corpus.get_types().unwrap().get("Creature").is_some());
        assert!(corpus.get_mana_symbols().unwrap().get("U").is_some());
        assert!(corpus.get_layouts().unwrap().get("split").is_some());
    }
}
