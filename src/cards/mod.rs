//! Card system: records, sets, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card records
//! - `Card`: A single card row with its stats and categories
//! - `SetCode`: Unique code of a themed card release
//! - `CardSet`: A set record (code + display name)
//! - `CardCatalog`: Card and set lookup, the queryable collection
//!
//! ## Set Membership
//!
//! A card belongs to zero or more sets. Membership lives on the card as a
//! small inline list of set codes, so "is this card in set X" is a scan of
//! that list rather than a join through an association table.

pub mod card;
pub mod catalog;
pub mod set;

pub use card::{Card, CardId};
pub use catalog::{CardCatalog, CatalogError};
pub use set::{CardSet, SetCode};
