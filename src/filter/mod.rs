//! Query filter system: keyword tables, criteria, and evaluation.
//!
//! ## Key Types
//!
//! - `KeywordTables`: Static keyword-to-stored-value mappings
//! - `SearchCriteria`: Form-like input, one optional slot per criterion
//! - `CardFilter`: Compiled predicate, one tagged variant per criterion kind
//! - `FilterEvaluator`: Applies compiled criteria to a catalog
//!
//! ## Evaluation Contract
//!
//! All supplied criteria combine with logical AND; omitted criteria impose
//! no constraint. Criteria are commutative and associative, so the order
//! they are applied in never changes the result. Evaluation is a pure
//! read.

pub mod criteria;
pub mod evaluate;
pub mod keywords;

pub use criteria::{
    CardFilter, FilterField, RangeInput, SearchCriteria, LEVEL_RANK_MAX, LEVEL_RANK_MIN,
    STAT_MAX, STAT_MIN,
};
pub use evaluate::FilterEvaluator;
pub use keywords::{KeywordTable, KeywordTables};

use thiserror::Error;

/// Errors surfaced while validating search criteria.
///
/// An unknown categorical keyword is deliberately *not* an error: it
/// compiles to an empty value set and matches nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A range bound was supplied but is not a non-negative number.
    ///
    /// Only the absence of a bound gets a default; garbage input must
    /// surface to the caller instead of being coerced.
    #[error("invalid {field} bound: {value:?} is not a number")]
    InvalidRangeBound {
        /// The criterion the bad bound was supplied for.
        field: FilterField,
        /// The raw input as received.
        value: String,
    },
}
