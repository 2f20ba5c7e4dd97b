//! Filter evaluation - applying compiled criteria to a catalog.

use tracing::debug;

use crate::cards::{Card, CardCatalog};

use super::criteria::SearchCriteria;
use super::keywords::KeywordTables;
use super::FilterError;

/// Evaluates search criteria against a card catalog.
///
/// Holds the immutable keyword tables, loaded once at startup. Evaluation
/// is a pure read over the catalog; the evaluator carries no mutable
/// state, so one instance can serve any number of concurrent searches.
///
/// ## Example
///
/// ```
/// use card_catalog::cards::{Card, CardCatalog, CardId};
/// use card_catalog::filter::{FilterEvaluator, RangeInput, SearchCriteria};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     Card::new(CardId::new(1), "Blue-Eyes White Dragon", "Normal")
///         .with_stats(3000, 2500),
/// );
/// catalog.register(Card::new(CardId::new(2), "Kuriboh", "Effect").with_stats(300, 200));
///
/// let evaluator = FilterEvaluator::standard();
/// let criteria = SearchCriteria::new().attack(RangeInput::at_least("2500"));
///
/// let matched = evaluator.evaluate(&catalog, &criteria).unwrap();
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].name, "Blue-Eyes White Dragon");
/// ```
#[derive(Clone, Debug)]
pub struct FilterEvaluator {
    tables: KeywordTables,
}

impl FilterEvaluator {
    /// Create an evaluator with the given keyword tables.
    #[must_use]
    pub fn new(tables: KeywordTables) -> Self {
        Self { tables }
    }

    /// Evaluator with the standard vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(KeywordTables::standard())
    }

    /// The keyword tables this evaluator expands with.
    #[must_use]
    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Apply all supplied criteria to the catalog.
    ///
    /// Criteria AND together; omitted slots impose no constraint, so
    /// empty criteria return the whole collection. Each matching card
    /// appears exactly once, ordered by card ID. Range validation
    /// failures surface before any predicate runs.
    pub fn evaluate<'a>(
        &self,
        catalog: &'a CardCatalog,
        criteria: &SearchCriteria,
    ) -> Result<Vec<&'a Card>, FilterError> {
        let filters = criteria.compile(&self.tables)?;

        let mut matched: Vec<&Card> = catalog
            .iter()
            .filter(|card| filters.iter().all(|f| f.matches(card)))
            .collect();
        matched.sort_by_key(|card| card.id);

        debug!(
            filters = filters.len(),
            matched = matched.len(),
            total = catalog.len(),
            "evaluated card search"
        );
        Ok(matched)
    }
}

impl Default for FilterEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::filter::RangeInput;

    fn small_catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.register(
            Card::new(CardId::new(1), "Blue-Eyes White Dragon", "Normal")
                .with_monster_type("Normal Monster")
                .with_stats(3000, 2500)
                .with_level_rank(8)
                .with_monster_race("Dragon")
                .with_attribute("LIGHT"),
        );
        catalog.register(
            Card::new(CardId::new(2), "Dark Magician", "Normal")
                .with_monster_type("Normal Monster")
                .with_stats(2500, 2100)
                .with_level_rank(7)
                .with_monster_race("Spellcaster")
                .with_attribute("DARK"),
        );
        catalog.register(Card::new(CardId::new(3), "Monster Reborn", "Spell").with_spell_trap_race("Normal"));
        catalog
    }

    #[test]
    fn test_empty_criteria_return_everything() {
        let catalog = small_catalog();
        let evaluator = FilterEvaluator::standard();

        let matched = evaluator.evaluate(&catalog, &SearchCriteria::new()).unwrap();
        assert_eq!(matched.len(), catalog.len());
    }

    #[test]
    fn test_results_ordered_by_id() {
        let catalog = small_catalog();
        let evaluator = FilterEvaluator::standard();

        let matched = evaluator.evaluate(&catalog, &SearchCriteria::new()).unwrap();
        let ids: Vec<_> = matched.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId::new(1), CardId::new(2), CardId::new(3)]);
    }

    #[test]
    fn test_criteria_and_together() {
        let catalog = small_catalog();
        let evaluator = FilterEvaluator::standard();

        let criteria = SearchCriteria::new()
            .frame_type("Normal")
            .attack(RangeInput::at_least("2600"));
        let matched = evaluator.evaluate(&catalog, &criteria).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Blue-Eyes White Dragon");
    }

    #[test]
    fn test_validation_error_propagates() {
        let catalog = small_catalog();
        let evaluator = FilterEvaluator::standard();

        let criteria = SearchCriteria::new().defense(RangeInput::at_most("NaN"));
        assert!(evaluator.evaluate(&catalog, &criteria).is_err());
    }
}
