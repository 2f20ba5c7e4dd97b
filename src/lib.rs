//! # card-catalog
//!
//! Declarative query filters for a trading-card catalog.
//!
//! User-supplied search criteria (name substring, categorical keywords,
//! stat ranges, set membership) are compiled into explicit predicates and
//! evaluated against an in-memory view of the card table and its related
//! set table.
//!
//! ## Design Principles
//!
//! 1. **Pure reads**: filtering narrows a read-only view. Cards and sets
//!    are never mutated by evaluation, so concurrent evaluations need no
//!    coordination.
//!
//! 2. **Explicit dispatch**: every criterion compiles to a tagged
//!    `CardFilter` variant. No string-keyed handler lookup.
//!
//! 3. **Fail fast on bad input**: a non-numeric range bound is a
//!    validation error surfaced before any predicate runs. Only the
//!    *absence* of a bound gets a default, never an invalid value.
//!
//! ## Modules
//!
//! - `cards`: Card and set records, the catalog they live in
//! - `filter`: Keyword tables, search criteria, and the evaluator

pub mod cards;
pub mod filter;

// Re-export commonly used types
pub use crate::cards::{Card, CardCatalog, CardId, CardSet, CatalogError, SetCode};

pub use crate::filter::{
    CardFilter, FilterError, FilterEvaluator, FilterField, KeywordTable, KeywordTables,
    RangeInput, SearchCriteria,
};
