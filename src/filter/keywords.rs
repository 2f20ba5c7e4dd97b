//! Keyword mapping tables.
//!
//! Users pick a keyword ("Effect", "Quick-Play", "DARK"); the card table
//! stores raw vocabulary strings ("Flip Effect Monster", ...). A
//! `KeywordTable` maps each keyword to the set of stored values it expands
//! to. Tables are built once at startup and never mutated by filter logic.

use rustc_hash::FxHashMap;

/// Immutable keyword-to-stored-values mapping for one categorical field.
///
/// Every registered keyword expands to at least one stored value; an
/// unknown keyword expands to nothing.
#[derive(Clone, Debug, Default)]
pub struct KeywordTable {
    entries: FxHashMap<String, Vec<String>>,
}

impl KeywordTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a keyword to its stored values (builder pattern).
    ///
    /// Panics if `values` is empty: a keyword that expands to nothing
    /// would silently turn its filter into a no-op.
    #[must_use]
    pub fn map(mut self, keyword: impl Into<String>, values: &[&str]) -> Self {
        assert!(
            !values.is_empty(),
            "keyword must expand to at least one stored value"
        );
        self.entries.insert(
            keyword.into(),
            values.iter().map(|v| (*v).to_string()).collect(),
        );
        self
    }

    /// Expand a keyword to its stored values. Unknown keyword → `None`.
    #[must_use]
    pub fn expand(&self, keyword: &str) -> Option<&[String]> {
        self.entries.get(keyword).map(Vec::as_slice)
    }

    /// Iterate over the registered keywords (for populating choice lists).
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Get the number of registered keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The five keyword tables, one per categorical criterion.
#[derive(Clone, Debug, Default)]
pub struct KeywordTables {
    /// Raw monster type strings ("Effect Monster", "Tuner Monster", ...).
    pub monster_type: KeywordTable,
    /// Frame types ("Normal", "Fusion", "Spell", ...).
    pub frame_type: KeywordTable,
    /// Spell/trap sub-categories ("Equip", "Continuous", ...).
    pub spell_trap_race: KeywordTable,
    /// Monster races ("Dragon", "Warrior", ...).
    pub monster_race: KeywordTable,
    /// Monster attributes ("DARK", "LIGHT", ...).
    pub attribute: KeywordTable,
}

impl KeywordTables {
    /// Build the standard vocabulary.
    ///
    /// Keywords that group several stored values ("Effect" covers every
    /// raw type string containing "Effect") expand to the full group;
    /// one-to-one categories map each keyword to itself.
    #[must_use]
    pub fn standard() -> Self {
        let monster_type = KeywordTable::new()
            .map(
                "Normal",
                &["Normal Monster", "Normal Tuner Monster", "Pendulum Normal Monster"],
            )
            .map(
                "Effect",
                &[
                    "Effect Monster",
                    "Flip Effect Monster",
                    "Flip Tuner Effect Monster",
                    "Gemini Monster",
                    "Pendulum Effect Monster",
                    "Pendulum Flip Effect Monster",
                    "Pendulum Tuner Effect Monster",
                    "Spirit Monster",
                    "Toon Monster",
                    "Tuner Effect Monster",
                    "Union Effect Monster",
                ],
            )
            .map(
                "Tuner",
                &[
                    "Tuner Monster",
                    "Normal Tuner Monster",
                    "Tuner Effect Monster",
                    "Flip Tuner Effect Monster",
                    "Pendulum Tuner Effect Monster",
                ],
            )
            .map("Flip", &["Flip Effect Monster", "Flip Tuner Effect Monster"])
            .map("Gemini", &["Gemini Monster"])
            .map("Spirit", &["Spirit Monster"])
            .map("Toon", &["Toon Monster"])
            .map("Union", &["Union Effect Monster"])
            .map("Ritual", &["Ritual Monster", "Ritual Effect Monster"]);

        let frame_type = KeywordTable::new()
            .map("Normal", &["Normal"])
            .map("Effect", &["Effect"])
            .map("Ritual", &["Ritual"])
            .map("Fusion", &["Fusion"])
            .map("Synchro", &["Synchro"])
            .map("Xyz", &["Xyz"])
            .map("Link", &["Link"])
            .map(
                "Pendulum",
                &[
                    "Normal Pendulum",
                    "Effect Pendulum",
                    "Ritual Pendulum",
                    "Fusion Pendulum",
                    "Synchro Pendulum",
                    "Xyz Pendulum",
                ],
            )
            .map("Spell", &["Spell"])
            .map("Trap", &["Trap"]);

        let spell_trap_race = KeywordTable::new()
            .map("Normal", &["Normal"])
            .map("Continuous", &["Continuous"])
            .map("Equip", &["Equip"])
            .map("Quick-Play", &["Quick-Play"])
            .map("Field", &["Field"])
            .map("Ritual", &["Ritual"])
            .map("Counter", &["Counter"]);

        let monster_race = one_to_one(&[
            "Aqua",
            "Beast",
            "Beast-Warrior",
            "Cyberse",
            "Dinosaur",
            "Divine-Beast",
            "Dragon",
            "Fairy",
            "Fiend",
            "Fish",
            "Insect",
            "Machine",
            "Plant",
            "Psychic",
            "Pyro",
            "Reptile",
            "Rock",
            "Sea Serpent",
            "Spellcaster",
            "Thunder",
            "Warrior",
            "Winged Beast",
            "Wyrm",
            "Zombie",
        ]);

        let attribute = one_to_one(&["DARK", "DIVINE", "EARTH", "FIRE", "LIGHT", "WATER", "WIND"]);

        Self {
            monster_type,
            frame_type,
            spell_trap_race,
            monster_race,
            attribute,
        }
    }
}

/// Table where each keyword maps to itself as the single stored value.
fn one_to_one(keywords: &[&str]) -> KeywordTable {
    let mut table = KeywordTable::new();
    for &keyword in keywords {
        table = table.map(keyword, &[keyword]);
    }
    table
}
