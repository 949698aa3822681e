//! Query surface: exact lookup and similarity ranking.
//!
//! `SearchEngine` owns a card database and the index built over it. Both are
//! write-once, so every query takes `&self` and an engine can be shared
//! behind an `Arc` while a background task loads it.
//!
//! # Similarity
//!
//! `find_similar` ranks only cards that carry every type of the base card.
//! Each candidate gets a `ScoreBreakdown`; the score is the sum of squared
//! field distances and ties keep corpus order.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::SearchConfig;
use super::distance::ScoreBreakdown;
use super::index::{SearchIndex, TokenSet};
use super::stats::IndexStats;
use crate::cards::CardRecord;
use crate::catalog::Category;
use crate::corpus::{CardDatabase, CardSource, Corpus};
use crate::error::{Error, Result};

/// A ranked candidate.
#[derive(Clone, Debug, Serialize)]
pub struct ScoredCard<'a> {
    pub card: &'a CardRecord,
    /// Position in corpus order.
    pub position: usize,
    /// Sum of squared distances. Lower is more similar.
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Card database plus its search index.
#[derive(Debug)]
pub struct SearchEngine<D: CardDatabase = Corpus> {
    database: D,
    index: SearchIndex,
    config: SearchConfig,
}

impl Default for SearchEngine<Corpus> {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine<Corpus> {
    /// Engine over an unloaded standard corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self::with_database(Corpus::new(), config)
    }
}

impl<D: CardDatabase> SearchEngine<D> {
    pub fn with_database(database: D, config: SearchConfig) -> Self {
        Self {
            database,
            index: SearchIndex::new(),
            config,
        }
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Load raw records into the database.
    pub fn load(&self, records: &[Value]) -> Result<()> {
        self.database.load(records)
    }

    /// Drain a source and load its records.
    pub fn load_from<S: CardSource>(&self, source: S) -> Result<()> {
        let records = source.into_records()?;
        self.load(&records)
    }

    /// True once the corpus is loaded and the index is built.
    pub fn is_ready(&self) -> bool {
        self.database.is_ready() && self.index.is_built()
    }

    /// Build the search index over the loaded corpus.
    ///
    /// Fails with `CorpusNotLoaded` before a load and `IndexAlreadyBuilt` on
    /// a second call.
    pub fn create_index(&self) -> Result<IndexStats> {
        let cards = self.database.get_cards()?;
        let catalog = self.database.get_catalog()?;
        self.index.build(cards, catalog, self.config.parallel_indexing)
    }

    /// First card, in corpus order, whose name matches exactly.
    ///
    /// A missing card is `Ok(None)`; only an unloaded corpus is an error.
    pub fn search_for(&self, name: &str) -> Result<Option<&CardRecord>> {
        Ok(self.position_of(name)?.map(|(_, card)| card))
    }

    fn position_of(&self, name: &str) -> Result<Option<(usize, &CardRecord)>> {
        Ok(self
            .database
            .get_cards()?
            .iter()
            .enumerate()
            .find(|(_, card)| card.name() == name))
    }

    /// Every card carrying the type spelled `raw_type` (e.g. `"Creature"`),
    /// in corpus order.
    pub fn cards_of_type(&self, raw_type: &str) -> Result<Vec<&CardRecord>> {
        let card_type = self.database.get_catalog()?.lookup(Category::Type, raw_type)?;
        Ok(self
            .database
            .get_cards()?
            .iter()
            .filter(|card| card.has_type(card_type))
            .collect())
    }

    /// Up to `k` cards most similar to `name`, most similar first.
    pub fn find_similar(&self, name: &str, k: usize) -> Result<Vec<&CardRecord>> {
        Ok(self
            .find_similar_scored(name, k)?
            .into_iter()
            .map(|scored| scored.card)
            .collect())
    }

    /// Like `find_similar`, keeping each candidate's score and breakdown.
    pub fn find_similar_scored(&self, name: &str, k: usize) -> Result<Vec<ScoredCard<'_>>> {
        let slots = self.index.slots()?;
        let cards = self.database.get_cards()?;
        let catalog = self.database.get_catalog()?;

        let Some((base_position, base)) = self.position_of(name)? else {
            debug!(name, "similarity base not found");
            return Ok(Vec::new());
        };
        if k == 0 {
            return Ok(Vec::new());
        }

        let candidates = candidate_positions(cards, base, base_position);
        debug!(name, pool = candidates.len(), k, "ranking similarity candidates");

        let base_tokens = token_slot(slots, base_position)?;
        let mut scored = candidates
            .into_iter()
            .map(|position| {
                let card = &cards[position];
                let breakdown = ScoreBreakdown::between(
                    (base, base_tokens),
                    (card, token_slot(slots, position)?),
                    catalog,
                    &self.config,
                );
                Ok(ScoredCard {
                    card,
                    position,
                    score: breakdown.total(&self.config),
                    breakdown,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Stable: equal scores stay in corpus order.
        scored.sort_by(|a, b| a.score.total_cmp(&b.score));
        scored.truncate(k);
        Ok(scored)
    }
}

fn token_slot(slots: &[TokenSet], position: usize) -> Result<&TokenSet> {
    slots.get(position).ok_or_else(|| {
        warn!(position, slots = slots.len(), "index is not aligned with the corpus");
        Error::IndexNotBuilt
    })
}

/// Positions of cards carrying every type of `base`, ascending, without the
/// base itself. A base with no types has no candidates.
fn candidate_positions(cards: &[CardRecord], base: &CardRecord, base_position: usize) -> Vec<usize> {
    let mut types = base.types().iter().copied();
    let Some(first) = types.next() else {
        return Vec::new();
    };

    let mut pool: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.has_type(first))
        .map(|(position, _)| position)
        .collect();
    for card_type in types {
        pool.retain(|&position| cards[position].has_type(card_type));
    }
    pool.retain(|&position| position != base_position);
    pool
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn engine(records: &[Value]) -> SearchEngine {
        let engine = SearchEngine::with_config(SearchConfig::default().sequential());
        engine.load(records).unwrap();
        engine.create_index().unwrap();
        engine
    }

    fn names<'a>(cards: &[&'a CardRecord]) -> Vec<&'a str> {
        cards.iter().map(|card| card.name()).collect()
    }

    #[test]
    fn test_readiness_lifecycle() {
        let engine = SearchEngine::new();
        assert!(!engine.is_ready());
        assert!(matches!(engine.create_index(), Err(Error::CorpusNotLoaded)));

        engine.load(&[json!({ "name": "A" })]).unwrap();
        assert!(!engine.is_ready());

        engine.create_index().unwrap();
        assert!(engine.is_ready());
    }

    #[test]
    fn test_search_for_is_exact_and_first() {
        let engine = engine(&[
            json!({ "name": "Shock", "text": "first" }),
            json!({ "name": "shock" }),
            json!({ "name": "Shock", "text": "second" }),
        ]);
        assert_eq!(engine.search_for("Shock").unwrap().unwrap().text(), "first");
        assert_eq!(engine.search_for("shock").unwrap().unwrap().text(), "");
        assert!(engine.search_for("Shoc").unwrap().is_none());
    }

    #[test]
    fn test_search_for_before_load() {
        let engine = SearchEngine::new();
        assert!(matches!(engine.search_for("A"), Err(Error::CorpusNotLoaded)));
    }

    #[test]
    fn test_cards_of_type() {
        let engine = engine(&[
            json!({ "name": "A", "types": ["Creature"] }),
            json!({ "name": "B", "types": ["Instant"] }),
            json!({ "name": "C", "types": ["Artifact", "Creature"] }),
        ]);
        assert_eq!(names(&engine.cards_of_type("Creature").unwrap()), vec!["A", "C"]);
        assert!(engine.cards_of_type("Plane").unwrap().is_empty());
        assert!(matches!(
            engine.cards_of_type("Wizard"),
            Err(Error::UnknownCategoryValue { .. })
        ));
    }

    #[test]
    fn test_candidates_need_every_base_type() {
        let engine = engine(&[
            json!({ "name": "Base", "types": ["Artifact", "Creature"] }),
            json!({ "name": "Creature only", "types": ["Creature"] }),
            json!({ "name": "Both", "types": ["Creature", "Artifact"] }),
            json!({ "name": "Artifact only", "types": ["Artifact"] }),
            json!({ "name": "All three", "types": ["Artifact", "Creature", "Land"] }),
        ]);
        let similar = engine.find_similar("Base", 10).unwrap();
        let mut found = names(&similar);
        found.sort_unstable();
        assert_eq!(found, vec!["All three", "Both"]);
    }

    #[test]
    fn test_base_without_types_has_no_candidates() {
        let engine = engine(&[json!({ "name": "Token" }), json!({ "name": "Other" })]);
        assert!(engine.find_similar("Token", 5).unwrap().is_empty());
    }

    #[test]
    fn test_base_is_excluded() {
        let engine = engine(&[
            json!({ "name": "A", "types": ["Sorcery"] }),
            json!({ "name": "B", "types": ["Sorcery"] }),
        ]);
        assert_eq!(names(&engine.find_similar("A", 5).unwrap()), vec!["B"]);
    }

    #[test]
    fn test_scored_results_are_sorted() {
        let engine = engine(&[
            json!({ "name": "Base", "types": ["Creature"], "power": "2", "toughness": "2", "text": "flying" }),
            json!({ "name": "Far", "types": ["Creature"], "power": "9", "toughness": "9", "text": "flying" }),
            json!({ "name": "Near", "types": ["Creature"], "power": "2", "toughness": "3", "text": "flying" }),
        ]);
        let scored = engine.find_similar_scored("Base", 5).unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].card.name(), "Near");
        assert_eq!(scored[0].position, 2);
        assert_eq!(scored[0].breakdown.toughness, 1.0);
        assert!(scored[0].score < scored[1].score);
    }

    #[test]
    fn test_candidate_positions_ascending() {
        let catalog = crate::catalog::AttributeCatalog::from_vocabulary(
            crate::catalog::Vocabulary::standard(),
        )
        .unwrap();
        let cards: Vec<CardRecord> = (0..6)
            .map(|i| {
                let types = if i % 2 == 0 { json!(["Creature"]) } else { json!(["Land"]) };
                CardRecord::from_value(&json!({ "name": format!("{i}"), "types": types }), i, &catalog)
                    .unwrap()
            })
            .collect();
        assert_eq!(candidate_positions(&cards, &cards[2], 2), vec![0, 4]);
    }
}
