//! Error types for the classify crate.
//!
//! Classification and naming never fail. Errors only arise when external
//! data (a category key, a grouping configuration) is checked against the
//! fixed rule set.

use thiserror::Error;

/// Errors raised while validating externally supplied data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// A category key that is not part of the fixed category set.
    #[error("unknown category '{category}' in group '{group}'")]
    UnknownCategory { group: String, category: String },

    /// A category listed under more than one top-level group.
    #[error("category '{category}' is listed under both '{first}' and '{second}'")]
    DuplicateCategory {
        category: String,
        first: String,
        second: String,
    },

    /// The same top-level group name declared twice.
    #[error("top-level group '{0}' is declared more than once")]
    DuplicateGroup(String),
}

/// A string that does not name any known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);
