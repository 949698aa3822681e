//! Card records: the typed, validated model of one card.
//!
//! ## Key Types
//!
//! - `CardRecord`: Immutable card built from a raw key/value record
//! - `ManaCost`: Run-length compressed mana symbols
//! - `Feature`: Power/toughness with half and `*` markers
//!
//! ## Defaults
//!
//! Every raw key is optional. Missing strings are empty, missing lists are
//! empty, a missing layout is `None`, missing power/toughness is
//! `Feature::ABSENT` and missing loyalty/hand/life is `ABSENT_INTEGER`.

pub mod feature;
pub mod mana;
pub mod record;

pub use feature::Feature;
pub use mana::{ManaCost, ManaCostError, ManaCount};
pub use record::{keys, CardRecord, Categorical, RawCard, ABSENT_INTEGER};
