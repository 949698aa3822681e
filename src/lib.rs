//! # ccg-search
//!
//! An offline search engine over a trading-card corpus: exact lookup by name
//! and "more cards like this one" ranking.
//!
//! ## Design Principles
//!
//! 1. **Validated Once**: Raw records are checked against the
//!    `AttributeCatalog` at load time. A loaded `CardRecord` only holds
//!    canonical handles, so queries never re-validate.
//!
//! 2. **Write Once, Read Many**: The corpus and the index each make one
//!    transition (unloaded to loaded, unbuilt to built). After that all
//!    queries are lock-free `&self` reads.
//!
//! 3. **Configuration Over Convention**: Vocabulary is supplied as static
//!    tables (`Vocabulary`) and scoring weights as `SearchConfig`.
//!
//! ## Modules
//!
//! - `catalog`: Closed vocabularies and the stop-word set
//! - `cards`: Card records, mana costs, power/toughness features
//! - `corpus`: The loaded card collection and raw-record sources
//! - `search`: Token index, field distances, `SearchEngine`
//! - `loader`: Background bulk load
//!
//! ## Example
//!
//! ```
//! use ccg_search::SearchEngine;
//! use serde_json::json;
//!
//! let engine = SearchEngine::new();
//! engine.load(&[
//!     json!({ "name": "A", "types": ["Creature"], "text": "Flying, haste", "power": "2", "toughness": "2" }),
//!     json!({ "name": "B", "types": ["Creature"], "text": "Flying", "power": "2", "toughness": "2" }),
//!     json!({ "name": "C", "types": ["Instant"], "text": "Flying" }),
//! ]).unwrap();
//! engine.create_index().unwrap();
//!
//! let similar = engine.find_similar("A", 2).unwrap();
//! assert_eq!(similar.len(), 1);
//! assert_eq!(similar[0].name(), "B");
//! ```

pub mod cards;
pub mod catalog;
pub mod corpus;
pub mod error;
pub mod loader;
pub mod search;

// Re-export commonly used types
pub use crate::catalog::{AttributeCatalog, Canonical, Category, CategoryTable, Vocabulary};

pub use crate::cards::{CardRecord, Feature, ManaCost, ManaCount, ABSENT_INTEGER};

pub use crate::corpus::{CardDatabase, CardSource, Corpus, JsonCardSource};

pub use crate::search::{
    IndexStats, ScoreBreakdown, ScoredCard, SearchConfig, SearchEngine, SearchIndex,
};

pub use crate::loader::{spawn_load, LoadTask};

pub use crate::error::{Error, Result};
