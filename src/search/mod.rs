//! Search: the lexical index and similarity ranking over a loaded corpus.
//!
//! - `index`: per-card token sets and the tokenizer
//! - `distance`: field distances and the `ScoreBreakdown`
//! - `engine`: `SearchEngine`, the query surface

pub mod config;
pub mod distance;
pub mod engine;
pub mod index;
pub mod stats;

pub use config::SearchConfig;
pub use distance::ScoreBreakdown;
pub use engine::{ScoredCard, SearchEngine};
pub use index::{normalize, tokenize, SearchIndex, TokenSet};
pub use stats::IndexStats;
