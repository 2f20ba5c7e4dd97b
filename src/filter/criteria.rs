//! Search criteria and their compiled predicate form.
//!
//! `SearchCriteria` mirrors the search form: one optional slot per
//! criterion, range bounds as raw text. `compile` validates the input,
//! applies the clamping defaults, expands keywords, and produces a list of
//! `CardFilter` predicates. Validation happens entirely in `compile`, so
//! a bad bound is rejected before any predicate runs.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, SetCode};

use super::keywords::{KeywordTable, KeywordTables};
use super::FilterError;

/// Default lower bound for attack/defense ranges.
pub const STAT_MIN: u32 = 0;
/// Default upper bound for attack/defense ranges.
pub const STAT_MAX: u32 = 5000;
/// Default lower bound for level/rank ranges.
pub const LEVEL_RANK_MIN: u32 = 1;
/// Default upper bound for level/rank ranges.
pub const LEVEL_RANK_MAX: u32 = 13;

/// The card column a criterion applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    /// Card name.
    Name,
    /// Raw monster type string.
    MonsterType,
    /// Visual/rules category.
    FrameType,
    /// Attack points.
    Attack,
    /// Defense points.
    Defense,
    /// Level or rank.
    LevelRank,
    /// Spell/trap sub-category.
    SpellTrapRace,
    /// Creature-type category.
    MonsterRace,
    /// Monster attribute.
    Attribute,
    /// Set membership.
    SetCode,
}

impl FilterField {
    /// The form field name for this criterion.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::MonsterType => "type",
            FilterField::FrameType => "frame_type",
            FilterField::Attack => "attack",
            FilterField::Defense => "defense",
            FilterField::LevelRank => "level_rank",
            FilterField::SpellTrapRace => "spell_trap_race",
            FilterField::MonsterRace => "monster_race",
            FilterField::Attribute => "attribute",
            FilterField::SetCode => "set_code",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form-like (min, max) pair; each side is optional raw text.
///
/// A blank or whitespace-only bound counts as absent and gets the field's
/// default. Anything else must parse as a non-negative integer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeInput {
    /// Raw lower bound, if supplied.
    pub min: Option<String>,
    /// Raw upper bound, if supplied.
    pub max: Option<String>,
}

impl RangeInput {
    /// Range with both bounds supplied.
    #[must_use]
    pub fn between(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    /// Range with only a lower bound.
    #[must_use]
    pub fn at_least(min: impl Into<String>) -> Self {
        Self {
            min: Some(min.into()),
            max: None,
        }
    }

    /// Range with only an upper bound.
    #[must_use]
    pub fn at_most(max: impl Into<String>) -> Self {
        Self {
            min: None,
            max: Some(max.into()),
        }
    }

    /// True when neither bound was supplied (blank input counts).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        fn blank(bound: &Option<String>) -> bool {
            bound.as_deref().map_or(true, |s| s.trim().is_empty())
        }
        blank(&self.min) && blank(&self.max)
    }

    /// Resolve to concrete `(min, max)` bounds, or `None` when the whole
    /// range was left empty. Absent bounds get the supplied defaults; a
    /// non-numeric bound is a validation error.
    pub(crate) fn resolve(
        &self,
        field: FilterField,
        default_min: u32,
        default_max: u32,
    ) -> Result<Option<(u32, u32)>, FilterError> {
        if self.is_empty() {
            return Ok(None);
        }
        let min = parse_bound(field, self.min.as_deref())?.unwrap_or(default_min);
        let max = parse_bound(field, self.max.as_deref())?.unwrap_or(default_max);
        Ok(Some((min, max)))
    }
}

/// Parse one bound. Blank input is absence; garbage is an error.
fn parse_bound(field: FilterField, raw: Option<&str>) -> Result<Option<u32>, FilterError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| FilterError::InvalidRangeBound {
            field,
            value: raw.to_string(),
        })
}

/// A compiled filter predicate.
///
/// One tagged variant per criterion kind, so dispatch is an explicit
/// `match` rather than a string-keyed handler lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFilter {
    /// Card name must contain this (already lowercased) substring.
    NameContains(String),

    /// The field's stored value must be one of `values`.
    ///
    /// An unknown keyword compiles to an empty `values` list, which
    /// matches no card.
    KeywordIn {
        /// Which categorical column to test.
        field: FilterField,
        /// Stored values the keyword expanded to.
        values: Vec<String>,
    },

    /// The numeric stat must lie within `[min, max]`.
    ///
    /// Cards without the stat (spells, traps) never match.
    StatInRange {
        /// Which numeric column to test.
        field: FilterField,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// Card must belong to the set with this code.
    InSet(SetCode),
}

impl CardFilter {
    /// Does this card pass the predicate?
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CardFilter::NameContains(needle) => card.name.to_lowercase().contains(needle),

            CardFilter::KeywordIn { field, values } => {
                let stored = match field {
                    FilterField::MonsterType => card.monster_type.as_deref(),
                    FilterField::FrameType => Some(card.frame_type.as_str()),
                    FilterField::SpellTrapRace => card.spell_trap_race.as_deref(),
                    FilterField::MonsterRace => card.monster_race.as_deref(),
                    FilterField::Attribute => card.attribute.as_deref(),
                    _ => None,
                };
                match stored {
                    Some(value) => values.iter().any(|v| v == value),
                    None => false,
                }
            }

            CardFilter::StatInRange { field, min, max } => {
                let stat = match field {
                    FilterField::Attack => card.attack,
                    FilterField::Defense => card.defense,
                    FilterField::LevelRank => card.level_rank.map(u32::from),
                    _ => None,
                };
                matches!(stat, Some(value) if (*min..=*max).contains(&value))
            }

            CardFilter::InSet(code) => card.is_in_set(code),
        }
    }
}

/// Search criteria as received from the caller.
///
/// Every slot is optional; an absent slot imposes no constraint.
///
/// ## Example
///
/// ```
/// use card_catalog::filter::{RangeInput, SearchCriteria};
///
/// let criteria = SearchCriteria::new()
///     .name("Dragon")
///     .attack(RangeInput::at_least("2500"))
///     .monster_race("Dragon");
/// assert!(!criteria.is_unconstrained());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Case-insensitive name substring.
    #[serde(default)]
    pub name: Option<String>,
    /// Monster type keyword.
    #[serde(default)]
    pub monster_type: Option<String>,
    /// Frame type keyword.
    #[serde(default)]
    pub frame_type: Option<String>,
    /// Attack range.
    #[serde(default)]
    pub attack: Option<RangeInput>,
    /// Defense range.
    #[serde(default)]
    pub defense: Option<RangeInput>,
    /// Level/rank range.
    #[serde(default)]
    pub level_rank: Option<RangeInput>,
    /// Spell/trap race keyword.
    #[serde(default)]
    pub spell_trap_race: Option<String>,
    /// Monster race keyword.
    #[serde(default)]
    pub monster_race: Option<String>,
    /// Monster attribute keyword.
    #[serde(default)]
    pub attribute: Option<String>,
    /// Set code.
    #[serde(default)]
    pub set_code: Option<SetCode>,
}

impl SearchCriteria {
    /// Create empty criteria (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name substring (builder pattern).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the monster type keyword (builder pattern).
    #[must_use]
    pub fn monster_type(mut self, keyword: impl Into<String>) -> Self {
        self.monster_type = Some(keyword.into());
        self
    }

    /// Set the frame type keyword (builder pattern).
    #[must_use]
    pub fn frame_type(mut self, keyword: impl Into<String>) -> Self {
        self.frame_type = Some(keyword.into());
        self
    }

    /// Set the attack range (builder pattern).
    #[must_use]
    pub fn attack(mut self, range: RangeInput) -> Self {
        self.attack = Some(range);
        self
    }

    /// Set the defense range (builder pattern).
    #[must_use]
    pub fn defense(mut self, range: RangeInput) -> Self {
        self.defense = Some(range);
        self
    }

    /// Set the level/rank range (builder pattern).
    #[must_use]
    pub fn level_rank(mut self, range: RangeInput) -> Self {
        self.level_rank = Some(range);
        self
    }

    /// Set the spell/trap race keyword (builder pattern).
    #[must_use]
    pub fn spell_trap_race(mut self, keyword: impl Into<String>) -> Self {
        self.spell_trap_race = Some(keyword.into());
        self
    }

    /// Set the monster race keyword (builder pattern).
    #[must_use]
    pub fn monster_race(mut self, keyword: impl Into<String>) -> Self {
        self.monster_race = Some(keyword.into());
        self
    }

    /// Set the monster attribute keyword (builder pattern).
    #[must_use]
    pub fn attribute(mut self, keyword: impl Into<String>) -> Self {
        self.attribute = Some(keyword.into());
        self
    }

    /// Set the set code (builder pattern).
    #[must_use]
    pub fn set_code(mut self, code: impl Into<SetCode>) -> Self {
        self.set_code = Some(code.into());
        self
    }

    /// True when no slot is supplied at all.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Compile into predicates, validating all input up front.
    ///
    /// - Blank text slots compile to no predicate.
    /// - Keywords expand through `tables`; an unknown keyword compiles to
    ///   an empty value set (matches nothing).
    /// - Range bounds are validated here. Absent bounds clamp to the
    ///   field defaults: 0/5000 for attack and defense, 1/13 for
    ///   level/rank.
    pub fn compile(&self, tables: &KeywordTables) -> Result<Vec<CardFilter>, FilterError> {
        let mut filters = Vec::new();

        if let Some(name) = &self.name {
            let needle = name.trim().to_lowercase();
            if !needle.is_empty() {
                filters.push(CardFilter::NameContains(needle));
            }
        }

        push_keyword(
            &mut filters,
            FilterField::MonsterType,
            &tables.monster_type,
            self.monster_type.as_deref(),
        );
        push_keyword(
            &mut filters,
            FilterField::FrameType,
            &tables.frame_type,
            self.frame_type.as_deref(),
        );
        push_keyword(
            &mut filters,
            FilterField::SpellTrapRace,
            &tables.spell_trap_race,
            self.spell_trap_race.as_deref(),
        );
        push_keyword(
            &mut filters,
            FilterField::MonsterRace,
            &tables.monster_race,
            self.monster_race.as_deref(),
        );
        push_keyword(
            &mut filters,
            FilterField::Attribute,
            &tables.attribute,
            self.attribute.as_deref(),
        );

        push_range(
            &mut filters,
            FilterField::Attack,
            self.attack.as_ref(),
            STAT_MIN,
            STAT_MAX,
        )?;
        push_range(
            &mut filters,
            FilterField::Defense,
            self.defense.as_ref(),
            STAT_MIN,
            STAT_MAX,
        )?;
        push_range(
            &mut filters,
            FilterField::LevelRank,
            self.level_rank.as_ref(),
            LEVEL_RANK_MIN,
            LEVEL_RANK_MAX,
        )?;

        if let Some(code) = &self.set_code {
            filters.push(CardFilter::InSet(code.clone()));
        }

        Ok(filters)
    }
}

fn push_keyword(
    filters: &mut Vec<CardFilter>,
    field: FilterField,
    table: &KeywordTable,
    keyword: Option<&str>,
) {
    let Some(keyword) = keyword else { return };
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return;
    }
    // Unknown keyword: empty value set, matches nothing.
    let values = table.expand(keyword).map(<[String]>::to_vec).unwrap_or_default();
    filters.push(CardFilter::KeywordIn { field, values });
}

fn push_range(
    filters: &mut Vec<CardFilter>,
    field: FilterField,
    range: Option<&RangeInput>,
    default_min: u32,
    default_max: u32,
) -> Result<(), FilterError> {
    let Some(range) = range else { return Ok(()) };
    if let Some((min, max)) = range.resolve(field, default_min, default_max)? {
        filters.push(CardFilter::StatInRange { field, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn dragon() -> Card {
        Card::new(CardId::new(1), "Blue-Eyes White Dragon", "Normal")
            .with_monster_type("Normal Monster")
            .with_stats(3000, 2500)
            .with_level_rank(8)
            .with_monster_race("Dragon")
            .with_attribute("LIGHT")
            .in_set("LOB")
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let filter = CardFilter::NameContains("blue-eyes".to_string());
        assert!(filter.matches(&dragon()));

        let filter = CardFilter::NameContains("red-eyes".to_string());
        assert!(!filter.matches(&dragon()));
    }

    #[test]
    fn test_keyword_in() {
        let filter = CardFilter::KeywordIn {
            field: FilterField::MonsterRace,
            values: vec!["Dragon".to_string(), "Wyrm".to_string()],
        };
        assert!(filter.matches(&dragon()));

        let empty = CardFilter::KeywordIn {
            field: FilterField::MonsterRace,
            values: Vec::new(),
        };
        assert!(!empty.matches(&dragon()));
    }

    #[test]
    fn test_keyword_on_absent_field_never_matches() {
        let spell = Card::new(CardId::new(2), "Monster Reborn", "Spell");
        let filter = CardFilter::KeywordIn {
            field: FilterField::MonsterRace,
            values: vec!["Dragon".to_string()],
        };
        assert!(!filter.matches(&spell));
    }

    #[test]
    fn test_stat_in_range() {
        let filter = CardFilter::StatInRange {
            field: FilterField::Attack,
            min: 2500,
            max: 5000,
        };
        assert!(filter.matches(&dragon()));

        let filter = CardFilter::StatInRange {
            field: FilterField::Attack,
            min: 0,
            max: 2999,
        };
        assert!(!filter.matches(&dragon()));
    }

    #[test]
    fn test_stat_range_skips_statless_cards() {
        let trap = Card::new(CardId::new(3), "Trap Hole", "Trap");
        let filter = CardFilter::StatInRange {
            field: FilterField::Attack,
            min: 0,
            max: 5000,
        };
        assert!(!filter.matches(&trap));
    }

    #[test]
    fn test_range_input_defaults() {
        let range = RangeInput::at_least("2500");
        let resolved = range.resolve(FilterField::Attack, STAT_MIN, STAT_MAX).unwrap();
        assert_eq!(resolved, Some((2500, 5000)));

        let range = RangeInput::at_most("4");
        let resolved = range
            .resolve(FilterField::LevelRank, LEVEL_RANK_MIN, LEVEL_RANK_MAX)
            .unwrap();
        assert_eq!(resolved, Some((1, 4)));
    }

    #[test]
    fn test_empty_range_resolves_to_none() {
        assert_eq!(
            RangeInput::default()
                .resolve(FilterField::Attack, STAT_MIN, STAT_MAX)
                .unwrap(),
            None
        );

        // Blank strings count as absent too.
        let range = RangeInput::between("  ", "");
        assert_eq!(
            range.resolve(FilterField::Attack, STAT_MIN, STAT_MAX).unwrap(),
            None
        );
    }

    #[test]
    fn test_garbage_bound_is_an_error() {
        let range = RangeInput::at_least("lots");
        let err = range
            .resolve(FilterField::Attack, STAT_MIN, STAT_MAX)
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidRangeBound {
                field: FilterField::Attack,
                value: "lots".to_string(),
            }
        );

        // Negative numbers are garbage for a non-negative stat.
        let range = RangeInput::at_most("-5");
        assert!(range.resolve(FilterField::Attack, STAT_MIN, STAT_MAX).is_err());
    }

    #[test]
    fn test_compile_empty_criteria() {
        let tables = KeywordTables::standard();
        let filters = SearchCriteria::new().compile(&tables).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_compile_blank_slots_drop_out() {
        let tables = KeywordTables::standard();
        let criteria = SearchCriteria::new()
            .name("   ")
            .monster_race("")
            .attack(RangeInput::default());
        let filters = criteria.compile(&tables).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_compile_unknown_keyword_to_empty_set() {
        let tables = KeywordTables::standard();
        let criteria = SearchCriteria::new().monster_race("Blorbo");
        let filters = criteria.compile(&tables).unwrap();

        assert_eq!(
            filters,
            vec![CardFilter::KeywordIn {
                field: FilterField::MonsterRace,
                values: Vec::new(),
            }]
        );
    }

    #[test]
    fn test_compile_rejects_bad_bound_before_anything_else() {
        let tables = KeywordTables::standard();
        let criteria = SearchCriteria::new()
            .name("Dragon")
            .attack(RangeInput::at_least("not-a-number"));

        let err = criteria.compile(&tables).unwrap_err();
        assert!(matches!(
            err,
            FilterError::InvalidRangeBound {
                field: FilterField::Attack,
                ..
            }
        ));
    }

    #[test]
    fn test_compile_full_form() {
        let tables = KeywordTables::standard();
        let criteria = SearchCriteria::new()
            .name("Dragon")
            .frame_type("Normal")
            .attack(RangeInput::between("2500", "3000"))
            .level_rank(RangeInput::at_least("7"))
            .monster_race("Dragon")
            .attribute("LIGHT")
            .set_code("LOB");

        let filters = criteria.compile(&tables).unwrap();
        assert_eq!(filters.len(), 7);
        assert!(filters.iter().all(|f| f.matches(&dragon())));
    }
}
