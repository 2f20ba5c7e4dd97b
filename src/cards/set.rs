//! Set records - themed card releases.
//!
//! A `CardSet` is identified by its unique `SetCode` (e.g. "LOB") and
//! carries a display name. Cards reference sets by code; the set table is
//! only consulted for lookup and for populating selector choices.

use serde::{Deserialize, Serialize};

/// Unique code of a card set.
///
/// Codes are short opaque strings assigned by the release ("LOB", "MRD").
/// The filter logic never interprets them beyond equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetCode(pub String);

impl SetCode {
    /// Create a new set code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the raw code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SetCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SetCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SetCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set record: unique code plus display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    /// Unique identifier for this set.
    pub code: SetCode,

    /// Human-readable name (for display).
    pub name: String,
}

impl CardSet {
    /// Create a new set record.
    #[must_use]
    pub fn new(code: impl Into<SetCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
