//! Card catalog - the queryable card and set collections.
//!
//! The `CardCatalog` stores all card and set records and provides lookup.
//! It is the read-only data source the filter layer narrows; nothing in
//! this crate mutates a record after registration.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Card, CardId};
use super::set::{CardSet, SetCode};

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two card records share an ID.
    #[error("duplicate card id {0}")]
    DuplicateCard(CardId),

    /// Two set records share a code.
    #[error("duplicate set code {0}")]
    DuplicateSet(SetCode),

    /// The input was not valid catalog JSON.
    #[error("malformed catalog data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized shape of a catalog: plain record lists.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogData {
    #[serde(default)]
    cards: Vec<Card>,
    #[serde(default)]
    sets: Vec<CardSet>,
}

/// Catalog of card and set records.
///
/// ## Example
///
/// ```
/// use card_catalog::cards::{Card, CardCatalog, CardId, CardSet};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register_set(CardSet::new("LOB", "Legend of Blue Eyes White Dragon"));
/// catalog.register(
///     Card::new(CardId::new(1), "Blue-Eyes White Dragon", "Normal").in_set("LOB"),
/// );
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Blue-Eyes White Dragon");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    sets: FxHashMap<SetCode, CardSet>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from JSON bytes: `{"cards": [...], "sets": [...]}`.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_slice(bytes)?;

        let mut catalog = Self::new();
        for set in data.sets {
            if catalog.sets.contains_key(&set.code) {
                return Err(CatalogError::DuplicateSet(set.code));
            }
            catalog.sets.insert(set.code.clone(), set);
        }
        for card in data.cards {
            if catalog.cards.contains_key(&card.id) {
                return Err(CatalogError::DuplicateCard(card.id));
            }
            catalog.cards.insert(card.id, card);
        }
        Ok(catalog)
    }

    /// Register a card record.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Register a set record.
    ///
    /// Panics if a set with the same code already exists.
    pub fn register_set(&mut self, set: CardSet) {
        if self.sets.contains_key(&set.code) {
            panic!("Set with code {:?} already registered", set.code);
        }
        self.sets.insert(set.code.clone(), set);
    }

    /// Get a card record by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a set record by code.
    #[must_use]
    pub fn set_by_code(&self, code: &SetCode) -> Option<&CardSet> {
        self.sets.get(code)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of card records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the number of set records.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Iterate over all card records.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Iterate over all set records.
    pub fn sets(&self) -> impl Iterator<Item = &CardSet> {
        self.sets.values()
    }

    /// Selectable `(code, name)` pairs, sorted by code.
    ///
    /// Computed from live set data on every call, never cached, so a set
    /// registered after startup shows up in the next call.
    #[must_use]
    pub fn set_choices(&self) -> Vec<(SetCode, String)> {
        let mut choices: Vec<_> = self
            .sets
            .values()
            .map(|set| (set.code.clone(), set.name.clone()))
            .collect();
        choices.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Test Card", "Normal"));

        let found = catalog.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_card_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardId::new(1), "Card A", "Normal"));
        catalog.register(Card::new(CardId::new(1), "Card B", "Normal")); // Should panic
    }

    #[test]
    fn test_set_lookup() {
        let mut catalog = CardCatalog::new();
        catalog.register_set(CardSet::new("LOB", "Legend of Blue Eyes White Dragon"));

        let set = catalog.set_by_code(&"LOB".into());
        assert!(set.is_some());
        assert_eq!(set.unwrap().name, "Legend of Blue Eyes White Dragon");
        assert!(catalog.set_by_code(&"XYZ".into()).is_none());
    }

    #[test]
    fn test_set_choices_reflect_live_data() {
        let mut catalog = CardCatalog::new();
        catalog.register_set(CardSet::new("MRD", "Metal Raiders"));
        assert_eq!(catalog.set_choices().len(), 1);

        catalog.register_set(CardSet::new("LOB", "Legend of Blue Eyes White Dragon"));
        let choices = catalog.set_choices();
        assert_eq!(choices.len(), 2);
        // Sorted by code
        assert_eq!(choices[0].0.as_str(), "LOB");
        assert_eq!(choices[1].0.as_str(), "MRD");
    }

    #[test]
    fn test_from_json_slice() {
        let json = br#"{
            "sets": [{"code": "LOB", "name": "Legend of Blue Eyes White Dragon"}],
            "cards": [{
                "id": 1,
                "name": "Blue-Eyes White Dragon",
                "frame_type": "Normal",
                "attack": 3000,
                "defense": 2500,
                "level_rank": 8,
                "set_codes": ["LOB"]
            }]
        }"#;

        let catalog = CardCatalog::from_json_slice(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.set_count(), 1);

        let card = catalog.get(CardId::new(1)).unwrap();
        assert_eq!(card.attack, Some(3000));
        assert!(card.is_in_set(&"LOB".into()));
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = br#"{
            "cards": [
                {"id": 1, "name": "A", "frame_type": "Normal"},
                {"id": 1, "name": "B", "frame_type": "Normal"}
            ]
        }"#;

        let err = CardCatalog::from_json_slice(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCard(id) if id == CardId::new(1)));
    }
}
