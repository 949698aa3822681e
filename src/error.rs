//! Crate-wide error type.
//!
//! Construction-time failures (`UnknownCategoryValue`, `InvalidCategoryReference`,
//! `MalformedManaCost`, `InvalidFieldValue`, `InvalidRecord`) abort a corpus load.
//! `CorpusNotLoaded` and `IndexNotBuilt` mean the caller sequenced calls wrongly.
//! A query that matches nothing is not an error: it yields `None` or an empty list.

use thiserror::Error;

use crate::catalog::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown {category} value: {raw:?}")]
    UnknownCategoryValue { category: Category, raw: String },

    #[error("{category} {raw:?} is already registered as {existing:?}")]
    ConflictingCategoryValue {
        category: Category,
        raw: String,
        existing: String,
    },

    #[error("{category} table is full")]
    CategoryTableFull { category: Category },

    #[error("card {card:?}: field `{field}` refers to unknown value {value:?}")]
    InvalidCategoryReference {
        card: String,
        field: &'static str,
        value: String,
    },

    #[error("card {card:?}: malformed mana cost {cost:?}")]
    MalformedManaCost { card: String, cost: String },

    #[error("card {card:?}: field `{field}` has unusable value {value}")]
    InvalidFieldValue {
        card: String,
        field: &'static str,
        value: String,
    },

    #[error("raw record #{position} is not a key/value map")]
    InvalidRecord { position: usize },

    #[error("corpus accessed before it was loaded")]
    CorpusNotLoaded,

    #[error("corpus is already loaded")]
    CorpusAlreadyLoaded,

    #[error("search index used before it was built")]
    IndexNotBuilt,

    #[error("search index is already built")]
    IndexAlreadyBuilt,

    #[error("card source could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    #[error("background load task panicked")]
    LoadTaskPanicked,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures raised while turning raw records into cards.
    #[must_use]
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownCategoryValue { .. }
                | Error::InvalidCategoryReference { .. }
                | Error::MalformedManaCost { .. }
                | Error::InvalidFieldValue { .. }
                | Error::InvalidRecord { .. }
        )
    }
}
