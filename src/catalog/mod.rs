//! Attribute catalog: the validation gate for card vocabulary.
//!
//! Every categorical value on a card (type, subtype, supertype, layout,
//! color, mana symbol) is resolved through the catalog when the card is
//! built. Cards then carry `Canonical` handles, so comparisons are by
//! canonical identity instead of string equality.
//!
//! ## Key Types
//!
//! - `Category`: The closed set of vocabulary categories
//! - `Canonical`: Small copyable handle to one canonical member
//! - `CategoryTable`: Raw → canonical mapping for one category
//! - `AttributeCatalog`: All tables plus the stop-word set
//! - `Vocabulary`: The static data a catalog is built from

pub mod stop_words;
pub mod vocabulary;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use vocabulary::Vocabulary;

/// Vocabulary category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Type,
    Subtype,
    Supertype,
    Layout,
    Color,
    ManaSymbol,
    KeywordAbility,
    KeywordAction,
}

impl Category {
    /// All categories, in table order.
    pub const ALL: [Category; 8] = [
        Category::Type,
        Category::Subtype,
        Category::Supertype,
        Category::Layout,
        Category::Color,
        Category::ManaSymbol,
        Category::KeywordAbility,
        Category::KeywordAction,
    ];

    /// Human-readable category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Type => "type",
            Category::Subtype => "subtype",
            Category::Supertype => "supertype",
            Category::Layout => "layout",
            Category::Color => "color",
            Category::ManaSymbol => "mana symbol",
            Category::KeywordAbility => "keyword ability",
            Category::KeywordAction => "keyword action",
        }
    }

    /// Keyword abilities and keyword actions.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Category::KeywordAbility | Category::KeywordAction)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c, '—' | '–' | '−' | '‘' | '’' | '“' | '”' | '•' | '…')
}

/// Lowercase a word and drop its punctuation characters.
///
/// This is the token form used by the search index.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(|&c| !is_punctuation(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Token form of a keyword, or `None` for multi-word keywords.
///
/// Rules text is tokenized word by word, so `first strike` can never be
/// seen as one token and is not scored as a keyword.
fn keyword_token(raw: &str) -> Option<String> {
    if raw.split_whitespace().nth(1).is_some() {
        return None;
    }
    Some(normalize(raw)).filter(|token| !token.is_empty())
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to one canonical member of a category.
///
/// Handles are only meaningful for the catalog that issued them. Two raw
/// spellings of the same member (`"Blue"` and `"U"`) share one handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Canonical {
    category: Category,
    id: u16,
}

impl Canonical {
    /// Category this member belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        self.category
    }

    /// Position of the member inside its category table.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.id
    }
}

/// Raw → canonical mapping for a single category.
#[derive(Clone, Debug)]
pub struct CategoryTable {
    category: Category,
    names: Vec<String>,
    by_name: FxHashMap<String, u16>,
    by_raw: FxHashMap<String, Canonical>,
    raw_order: Vec<String>,
}

impl CategoryTable {
    fn new(category: Category) -> Self {
        Self {
            category,
            names: Vec::new(),
            by_name: FxHashMap::default(),
            by_raw: FxHashMap::default(),
            raw_order: Vec::new(),
        }
    }

    /// Register a raw spelling for a canonical member, creating the member
    /// on first sight.
    ///
    /// Re-registering the same pair is a no-op. Raw keys are unique per
    /// category, so mapping `raw` to a second member fails with
    /// `ConflictingCategoryValue`.
    pub fn register(&mut self, raw: &str, canonical: &str) -> Result<Canonical> {
        if let Some(&existing) = self.by_raw.get(raw) {
            let existing_name = &self.names[usize::from(existing.id)];
            if existing_name.as_str() == canonical {
                return Ok(existing);
            }
            return Err(Error::ConflictingCategoryValue {
                category: self.category,
                raw: raw.to_string(),
                existing: existing_name.clone(),
            });
        }

        let id = match self.by_name.get(canonical) {
            Some(&id) => id,
            None => {
                let id = u16::try_from(self.names.len()).map_err(|_| Error::CategoryTableFull {
                    category: self.category,
                })?;
                self.names.push(canonical.to_string());
                self.by_name.insert(canonical.to_string(), id);
                id
            }
        };
        let handle = Canonical { category: self.category, id };
        self.by_raw.insert(raw.to_string(), handle);
        self.raw_order.push(raw.to_string());
        Ok(handle)
    }

    /// Resolve a raw spelling.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<Canonical> {
        self.by_raw.get(raw).copied()
    }

    /// Canonical name of a member issued by this table.
    #[must_use]
    pub fn name(&self, canonical: Canonical) -> Option<&str> {
        if canonical.category != self.category {
            return None;
        }
        self.names.get(canonical.id as usize).map(String::as_str)
    }

    /// Number of registered raw spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw_order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_order.is_empty()
    }

    /// Iterate over `(raw, canonical)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Canonical)> {
        self.raw_order
            .iter()
            .map(move |raw| (raw.as_str(), self.by_raw[raw.as_str()]))
    }

    /// Iterate over the distinct canonical names.
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Closed registry of every vocabulary category.
///
/// Built once, then only read. A lookup miss is always an error.
///
/// ## Example
///
/// ```
/// use ccg_search::catalog::{AttributeCatalog, Category, Vocabulary};
///
/// let catalog = AttributeCatalog::from_vocabulary(Vocabulary::standard()).unwrap();
///
/// let blue = catalog.lookup(Category::ManaSymbol, "U").unwrap();
/// assert_eq!(catalog.name(blue), Some("blue"));
/// assert!(catalog.lookup(Category::Type, "Creatur").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct AttributeCatalog {
    tables: [CategoryTable; 8],
    stop_words: FxHashSet<String>,
    /// Keywords in token form, see `keyword_token`.
    keyword_tokens: FxHashSet<String>,
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeCatalog {
    /// Create a catalog with empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Category::ALL.map(CategoryTable::new),
            stop_words: FxHashSet::default(),
            keyword_tokens: FxHashSet::default(),
        }
    }

    /// Build a catalog from static vocabulary.
    ///
    /// Fails if the vocabulary maps one raw spelling to two members.
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Result<Self> {
        let mut catalog = Self::new();

        let lowercase_tables = [
            (Category::Type, vocabulary.types),
            (Category::Subtype, vocabulary.subtypes),
            (Category::Supertype, vocabulary.supertypes),
            (Category::Layout, vocabulary.layouts),
            (Category::KeywordAbility, vocabulary.keyword_abilities),
            (Category::KeywordAction, vocabulary.keyword_actions),
        ];
        for (category, entries) in lowercase_tables {
            for raw in entries {
                catalog.register(category, raw, &raw.to_lowercase())?;
            }
        }

        for (category, pairs) in [
            (Category::Color, vocabulary.colors),
            (Category::ManaSymbol, vocabulary.mana_symbols),
        ] {
            for (raw, canonical) in pairs {
                catalog.register(category, raw, canonical)?;
            }
        }

        catalog
            .stop_words
            .extend(vocabulary.stop_words.iter().map(|w| w.to_string()));
        Ok(catalog)
    }

    /// Register a raw spelling (see `CategoryTable::register`).
    ///
    /// Keyword abilities and actions are also recorded in token form so
    /// `is_keyword` matches what the tokenizer produces.
    pub fn register(&mut self, category: Category, raw: &str, canonical: &str) -> Result<Canonical> {
        let handle = self.tables[category.slot()].register(raw, canonical)?;
        if category.is_keyword() {
            if let Some(token) = keyword_token(raw) {
                self.keyword_tokens.insert(token);
            }
        }
        Ok(handle)
    }

    /// Add a word to the stop-word set.
    pub fn add_stop_word(&mut self, word: impl Into<String>) {
        self.stop_words.insert(word.into());
    }

    /// Resolve a raw value, failing with `UnknownCategoryValue` on a miss.
    pub fn lookup(&self, category: Category, raw: &str) -> Result<Canonical> {
        self.get(category, raw).ok_or_else(|| Error::UnknownCategoryValue {
            category,
            raw: raw.to_string(),
        })
    }

    /// Resolve a raw value, `None` on a miss.
    #[must_use]
    pub fn get(&self, category: Category, raw: &str) -> Option<Canonical> {
        self.tables[category.slot()].get(raw)
    }

    /// Check if a raw value is registered.
    #[must_use]
    pub fn contains(&self, category: Category, raw: &str) -> bool {
        self.get(category, raw).is_some()
    }

    /// Canonical name of a handle.
    #[must_use]
    pub fn name(&self, canonical: Canonical) -> Option<&str> {
        self.tables[canonical.category.slot()].name(canonical)
    }

    /// Table for one category.
    #[must_use]
    pub fn table(&self, category: Category) -> &CategoryTable {
        &self.tables[category.slot()]
    }

    /// True if `token` is a keyword ability or keyword action in token
    /// form (`"jumpstart"` for `jump-start`).
    #[must_use]
    pub fn is_keyword(&self, token: &str) -> bool {
        self.keyword_tokens.contains(token)
    }

    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Number of stop words.
    #[must_use]
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> AttributeCatalog {
        AttributeCatalog::from_vocabulary(Vocabulary::standard()).unwrap()
    }

    #[test]
    fn test_lookup_resolves_to_lowercase_canonical() {
        let catalog = standard();
        let creature = catalog.lookup(Category::Type, "Creature").unwrap();
        assert_eq!(catalog.name(creature), Some("creature"));
        assert_eq!(creature.category(), Category::Type);
    }

    #[test]
    fn test_lookup_miss_is_error() {
        let catalog = standard();
        for category in Category::ALL {
            match catalog.lookup(category, "definitely not registered") {
                Err(Error::UnknownCategoryValue { category: c, raw }) => {
                    assert_eq!(c, category);
                    assert_eq!(raw, "definitely not registered");
                }
                other => panic!("expected UnknownCategoryValue, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = standard();
        assert!(catalog.contains(Category::Type, "Creature"));
        assert!(!catalog.contains(Category::Type, "creature"));
    }

    #[test]
    fn test_aliases_share_a_handle() {
        let catalog = standard();
        let blue = catalog.lookup(Category::Color, "Blue").unwrap();
        let u = catalog.lookup(Category::Color, "U").unwrap();
        assert_eq!(blue, u);
    }

    #[test]
    fn test_numerals_are_generic() {
        let catalog = standard();
        let three = catalog.lookup(Category::ManaSymbol, "3").unwrap();
        let ten = catalog.lookup(Category::ManaSymbol, "10").unwrap();
        assert_eq!(three, ten);
        assert_eq!(catalog.name(three), Some("generic"));
    }

    #[test]
    fn test_same_name_in_different_categories_differs() {
        let catalog = standard();
        let color = catalog.lookup(Category::Color, "U").unwrap();
        let mana = catalog.lookup(Category::ManaSymbol, "U").unwrap();
        assert_ne!(color, mana);
        assert_eq!(catalog.name(color), catalog.name(mana));
    }

    #[test]
    fn test_keywords_and_stop_words() {
        let catalog = standard();
        assert!(catalog.is_keyword("flying"));
        assert!(catalog.is_keyword("sacrifice"));
        assert!(!catalog.is_keyword("creature"));
        assert!(catalog.is_stop_word("the"));
        assert!(!catalog.is_stop_word("flying"));
    }

    #[test]
    fn test_register_same_pair_twice_is_noop() {
        let mut catalog = AttributeCatalog::new();
        let a = catalog.register(Category::Layout, "normal", "normal").unwrap();
        let b = catalog.register(Category::Layout, "normal", "normal").unwrap();
        assert_eq!(a, b);
        assert_eq!(catalog.table(Category::Layout).len(), 1);
    }

    #[test]
    fn test_conflicting_registration_is_error() {
        let mut catalog = AttributeCatalog::new();
        let blue = catalog.register(Category::Color, "U", "blue").unwrap();

        match catalog.register(Category::Color, "U", "black") {
            Err(Error::ConflictingCategoryValue { category, raw, existing }) => {
                assert_eq!(category, Category::Color);
                assert_eq!(raw, "U");
                assert_eq!(existing, "blue");
            }
            other => panic!("expected ConflictingCategoryValue, got {other:?}"),
        }
        assert_eq!(catalog.get(Category::Color, "U"), Some(blue));
        assert_eq!(catalog.table(Category::Color).canonical_names().count(), 1);
    }

    #[test]
    fn test_conflicting_vocabulary_is_error() {
        static BROKEN: Vocabulary = Vocabulary {
            colors: &[("U", "blue"), ("U", "black")],
            ..Vocabulary::EMPTY
        };
        assert!(matches!(
            AttributeCatalog::from_vocabulary(&BROKEN),
            Err(Error::ConflictingCategoryValue { .. })
        ));
    }

    #[test]
    fn test_keyword_token_forms() {
        let catalog = standard();
        assert!(catalog.contains(Category::KeywordAbility, "jump-start"));
        assert!(catalog.is_keyword("jumpstart"));
        assert!(!catalog.is_keyword("jump-start"));
        assert!(!catalog.is_keyword("first strike"));
        assert!(!catalog.is_keyword("strike"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Flying,"), "flying");
        assert_eq!(normalize("(This"), "this");
        assert_eq!(normalize("Jump-start"), "jumpstart");
        assert_eq!(normalize("+1/+1"), "11");
        assert_eq!(normalize("—"), "");
    }

    #[test]
    fn test_table_iteration_order() {
        let mut catalog = AttributeCatalog::new();
        catalog.register(Category::Supertype, "Snow", "snow").unwrap();
        catalog.register(Category::Supertype, "Basic", "basic").unwrap();

        let raws: Vec<_> = catalog.table(Category::Supertype).iter().map(|(r, _)| r).collect();
        assert_eq!(raws, vec!["Snow", "Basic"]);
        let names: Vec<_> = catalog.table(Category::Supertype).canonical_names().collect();
        assert_eq!(names, vec!["snow", "basic"]);
    }

    #[test]
    fn test_foreign_handle_has_no_name_in_other_table() {
        let catalog = standard();
        let creature = catalog.lookup(Category::Type, "Creature").unwrap();
        assert_eq!(catalog.table(Category::Subtype).name(creature), None);
    }
}
