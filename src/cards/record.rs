//! Card records - one fully typed, validated card.
//!
//! A `CardRecord` is built from a raw key/value record. Every key is
//! optional; a missing key (or an explicit `null`) yields the documented
//! default. Categorical fields are resolved through the `AttributeCatalog`
//! and a single unresolved value fails the whole construction, so a record
//! that exists is always fully valid.

use serde::Serialize;
use serde_json::{Map, Value};
use smallvec::SmallVec;

use super::feature::Feature;
use super::mana::{ManaCost, ManaCostError};
use crate::catalog::{AttributeCatalog, Canonical, Category};
use crate::error::{Error, Result};

/// A raw card record as decoded from the source.
pub type RawCard = Map<String, Value>;

/// Ordered list of canonical references.
pub type Categorical = SmallVec<[Canonical; 2]>;

/// Stored for `loyalty`, `hand` and `life` when the card has no such value,
/// or when the printed value is not an integer (`"X"`).
pub const ABSENT_INTEGER: i32 = i32::MIN;

/// Raw record keys.
pub mod keys {
    pub const NAME: &str = "name";
    pub const NAMES: &str = "names";
    pub const LAYOUT: &str = "layout";
    pub const MANA_COST: &str = "manaCost";
    pub const COLORS: &str = "colors";
    pub const SUPERTYPES: &str = "supertypes";
    pub const TYPES: &str = "types";
    pub const SUBTYPES: &str = "subtypes";
    pub const TEXT: &str = "text";
    pub const POWER: &str = "power";
    pub const TOUGHNESS: &str = "toughness";
    pub const LOYALTY: &str = "loyalty";
    pub const HAND: &str = "hand";
    pub const LIFE: &str = "life";
}

/// Immutable, normalized card.
///
/// ## Example
///
/// ```
/// use ccg_search::catalog::{AttributeCatalog, Vocabulary};
/// use ccg_search::cards::CardRecord;
/// use serde_json::json;
///
/// let catalog = AttributeCatalog::from_vocabulary(Vocabulary::standard()).unwrap();
/// let raw = json!({ "name": "Grizzly Bears", "types": ["Creature"], "power": "2" });
///
/// let card = CardRecord::from_raw(raw.as_object().unwrap(), &catalog).unwrap();
/// assert_eq!(card.name(), "Grizzly Bears");
/// assert_eq!(card.power().whole_part, Some(2));
/// assert!(card.toughness().is_absent());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardRecord {
    name: String,
    names: Vec<String>,
    layout: Option<Canonical>,
    mana_cost: ManaCost,
    colors: Categorical,
    supertypes: Categorical,
    types: Categorical,
    subtypes: Categorical,
    text: String,
    power: Feature,
    toughness: Feature,
    loyalty: i32,
    hand: i32,
    life: i32,
}

impl CardRecord {
    /// Build a card from a raw record, validating against the catalog.
    pub fn from_raw(raw: &RawCard, catalog: &AttributeCatalog) -> Result<Self> {
        // The name comes first so every later error can say which card failed.
        let name = string_field(raw, keys::NAME, "")?;
        let fields = RawFields { raw, card: &name };

        Ok(Self {
            names: fields.string_list(keys::NAMES)?,
            layout: fields.layout(catalog)?,
            mana_cost: fields.mana_cost(catalog)?,
            colors: fields.categorical(keys::COLORS, Category::Color, catalog)?,
            supertypes: fields.categorical(keys::SUPERTYPES, Category::Supertype, catalog)?,
            types: fields.categorical(keys::TYPES, Category::Type, catalog)?,
            subtypes: fields.categorical(keys::SUBTYPES, Category::Subtype, catalog)?,
            text: string_field(raw, keys::TEXT, &name)?,
            power: fields.feature(keys::POWER)?,
            toughness: fields.feature(keys::TOUGHNESS)?,
            loyalty: fields.integer(keys::LOYALTY)?,
            hand: fields.integer(keys::HAND)?,
            life: fields.integer(keys::LIFE)?,
            name,
        })
    }

    /// Build from any JSON value; non-objects are rejected.
    pub fn from_value(value: &Value, position: usize, catalog: &AttributeCatalog) -> Result<Self> {
        let raw = value.as_object().ok_or(Error::InvalidRecord { position })?;
        Self::from_raw(raw, catalog)
    }

    /// Card name; empty when the record had none.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of all faces for multi-faced cards.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Layout; `None` when the record had none.
    #[must_use]
    pub fn layout(&self) -> Option<Canonical> {
        self.layout
    }

    #[must_use]
    pub fn mana_cost(&self) -> &ManaCost {
        &self.mana_cost
    }

    #[must_use]
    pub fn colors(&self) -> &[Canonical] {
        &self.colors
    }

    #[must_use]
    pub fn supertypes(&self) -> &[Canonical] {
        &self.supertypes
    }

    #[must_use]
    pub fn types(&self) -> &[Canonical] {
        &self.types
    }

    #[must_use]
    pub fn subtypes(&self) -> &[Canonical] {
        &self.subtypes
    }

    /// Rules text; empty when the record had none.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn power(&self) -> Feature {
        self.power
    }

    #[must_use]
    pub fn toughness(&self) -> Feature {
        self.toughness
    }

    /// Stored loyalty, `ABSENT_INTEGER` when missing.
    #[must_use]
    pub fn loyalty(&self) -> i32 {
        self.loyalty
    }

    /// Stored hand modifier, `ABSENT_INTEGER` when missing.
    #[must_use]
    pub fn hand(&self) -> i32 {
        self.hand
    }

    /// Stored life modifier, `ABSENT_INTEGER` when missing.
    #[must_use]
    pub fn life(&self) -> i32 {
        self.life
    }

    /// Check if the card carries a type.
    #[must_use]
    pub fn has_type(&self, card_type: Canonical) -> bool {
        self.types.contains(&card_type)
    }
}

/// Read a string field; a missing key or `null` reads as empty.
fn string_field(raw: &RawCard, key: &'static str, card: &str) -> Result<String> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(invalid(card, key, other)),
    }
}

fn invalid(card: &str, field: &'static str, value: &Value) -> Error {
    Error::InvalidFieldValue {
        card: card.to_string(),
        field,
        value: value.to_string(),
    }
}

struct RawFields<'a> {
    raw: &'a RawCard,
    card: &'a str,
}

impl RawFields<'_> {
    fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key).filter(|v| !v.is_null())
    }

    fn string_list(&self, key: &'static str) -> Result<Vec<String>> {
        let Some(value) = self.get(key) else {
            return Ok(Vec::new());
        };
        let items = value.as_array().ok_or_else(|| invalid(self.card, key, value))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(self.card, key, item))
            })
            .collect()
    }

    fn resolve(
        &self,
        key: &'static str,
        category: Category,
        raw: &str,
        catalog: &AttributeCatalog,
    ) -> Result<Canonical> {
        catalog
            .lookup(category, raw)
            .map_err(|_| Error::InvalidCategoryReference {
                card: self.card.to_string(),
                field: key,
                value: raw.to_string(),
            })
    }

    fn layout(&self, catalog: &AttributeCatalog) -> Result<Option<Canonical>> {
        let Some(value) = self.get(keys::LAYOUT) else {
            return Ok(None);
        };
        let raw = value
            .as_str()
            .ok_or_else(|| invalid(self.card, keys::LAYOUT, value))?;
        self.resolve(keys::LAYOUT, Category::Layout, raw, catalog)
            .map(Some)
    }

    fn categorical(
        &self,
        key: &'static str,
        category: Category,
        catalog: &AttributeCatalog,
    ) -> Result<Categorical> {
        self.string_list(key)?
            .iter()
            .map(|raw| self.resolve(key, category, raw, catalog))
            .collect()
    }

    fn mana_cost(&self, catalog: &AttributeCatalog) -> Result<ManaCost> {
        let Some(value) = self.get(keys::MANA_COST) else {
            return Ok(ManaCost::new());
        };
        let cost = value
            .as_str()
            .ok_or_else(|| invalid(self.card, keys::MANA_COST, value))?;

        ManaCost::parse(cost, catalog).map_err(|err| match err {
            ManaCostError::Unclosed { .. } => Error::MalformedManaCost {
                card: self.card.to_string(),
                cost: cost.to_string(),
            },
            ManaCostError::UnknownSymbol(symbol) => Error::InvalidCategoryReference {
                card: self.card.to_string(),
                field: keys::MANA_COST,
                value: symbol,
            },
        })
    }

    /// Printed values never fail (see `Feature::read`); only a value that
    /// is neither a string nor a number does.
    fn feature(&self, key: &'static str) -> Result<Feature> {
        match self.get(key) {
            None => Ok(Feature::ABSENT),
            Some(Value::String(s)) => Ok(Feature::read(s)),
            Some(Value::Number(n)) => Ok(n.as_f64().map_or(Feature::ABSENT, Feature::read_number)),
            Some(other) => Err(invalid(self.card, key, other)),
        }
    }

    /// Non-integer printed values (`"X"`, `"*"`) read as `ABSENT_INTEGER`.
    fn integer(&self, key: &'static str) -> Result<i32> {
        let parsed = match self.get(key) {
            None => None,
            Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
            Some(other) => return Err(invalid(self.card, key, other)),
        };
        Ok(parsed.unwrap_or(ABSENT_INTEGER))
    }
}
