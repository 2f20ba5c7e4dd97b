//! Card records - the rows of the catalog's card table.
//!
//! `Card` holds the immutable properties of a printed card. Monster stats
//! (`attack`, `defense`, `level_rank`) and the spell/trap sub-category are
//! optional because they only exist for the matching card kind; absent
//! stats never match a range criterion.
//!
//! Category fields (`frame_type`, `monster_type`, races, attribute) store
//! the raw vocabulary strings. User-facing keywords expand to those stored
//! values through `KeywordTables` at filter time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::set::SetCode;

/// Unique identifier for a card record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card record.
///
/// ## Example
///
/// ```
/// use card_catalog::cards::{Card, CardId};
///
/// let dragon = Card::new(CardId::new(1), "Blue-Eyes White Dragon", "Normal")
///     .with_monster_type("Normal Monster")
///     .with_stats(3000, 2500)
///     .with_level_rank(8)
///     .with_monster_race("Dragon")
///     .with_attribute("LIGHT")
///     .in_set("LOB");
///
/// assert_eq!(dragon.attack, Some(3000));
/// assert!(dragon.is_in_set(&"LOB".into()));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Visual/rules category ("Normal", "Effect", "Fusion", "Spell", ...).
    pub frame_type: String,

    /// Raw monster type string ("Effect Monster", "Tuner Monster", ...).
    /// `None` for non-monster cards.
    #[serde(default)]
    pub monster_type: Option<String>,

    /// Attack points. `None` for non-monster cards.
    #[serde(default)]
    pub attack: Option<u32>,

    /// Defense points. `None` for non-monster cards.
    #[serde(default)]
    pub defense: Option<u32>,

    /// Level or rank, 1-13. `None` for non-monster cards.
    #[serde(default)]
    pub level_rank: Option<u8>,

    /// Spell/trap sub-category ("Equip", "Continuous", ...).
    /// `None` for monster cards.
    #[serde(default)]
    pub spell_trap_race: Option<String>,

    /// Creature-type category ("Dragon", "Warrior", ...).
    #[serde(default)]
    pub monster_race: Option<String>,

    /// Monster attribute ("DARK", "LIGHT", ...).
    #[serde(default)]
    pub attribute: Option<String>,

    /// Codes of the sets this card appears in. May be empty.
    #[serde(default)]
    pub set_codes: SmallVec<[SetCode; 2]>,
}

impl Card {
    /// Create a new card record.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, frame_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            frame_type: frame_type.into(),
            monster_type: None,
            attack: None,
            defense: None,
            level_rank: None,
            spell_trap_race: None,
            monster_race: None,
            attribute: None,
            set_codes: SmallVec::new(),
        }
    }

    /// Set the raw monster type (builder pattern).
    #[must_use]
    pub fn with_monster_type(mut self, monster_type: impl Into<String>) -> Self {
        self.monster_type = Some(monster_type.into());
        self
    }

    /// Set attack and defense (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32) -> Self {
        self.attack = Some(attack);
        self.defense = Some(defense);
        self
    }

    /// Set level/rank (builder pattern).
    #[must_use]
    pub fn with_level_rank(mut self, level_rank: u8) -> Self {
        self.level_rank = Some(level_rank);
        self
    }

    /// Set the spell/trap sub-category (builder pattern).
    #[must_use]
    pub fn with_spell_trap_race(mut self, race: impl Into<String>) -> Self {
        self.spell_trap_race = Some(race.into());
        self
    }

    /// Set the monster race (builder pattern).
    #[must_use]
    pub fn with_monster_race(mut self, race: impl Into<String>) -> Self {
        self.monster_race = Some(race.into());
        self
    }

    /// Set the monster attribute (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Add membership in a set (builder pattern).
    ///
    /// Adding the same code twice keeps a single membership.
    #[must_use]
    pub fn in_set(mut self, code: impl Into<SetCode>) -> Self {
        let code = code.into();
        if !self.set_codes.contains(&code) {
            self.set_codes.push(code);
        }
        self
    }

    /// Check membership in a set.
    #[must_use]
    pub fn is_in_set(&self, code: &SetCode) -> bool {
        self.set_codes.contains(code)
    }
}
