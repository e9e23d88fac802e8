//! # Errors
//!
//! Every rejected bar operation leaves all state untouched. The host decides
//! whether to log or ignore; the core only guarantees "no partial mutation".

use std::fmt;

/// Errors that can occur while constructing or driving a navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The id is not in the item list, or names an item of the wrong variant
    /// for the operation (e.g. toggling a non-isolated item).
    UnknownItem(String),
    /// A search operation was invoked while search mode is collapsed.
    NotExpanded,
    /// Item list, badge or bar options failed validation at construction.
    InvalidConfig(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownItem(id) => write!(f, "unknown item: {id}"),
            NavError::NotExpanded => write!(f, "search mode is not expanded"),
            NavError::InvalidConfig(msg) => write!(f, "invalid bar config: {msg}"),
        }
    }
}

impl std::error::Error for NavError {}
