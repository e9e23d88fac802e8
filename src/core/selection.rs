//! # Selection
//!
//! Owns the selected item id. The host router is authoritative: `select`
//! is a request the router is expected to fulfil and echo back through
//! `reconcile`, which mirrors whatever route the router reports.
//!
//! ```text
//! router route ──reconcile──▶ selected_id ──snapshot──▶ renderer
//!        ▲                                                 │
//!        └──────────── navigate ◀── select ◀── user tap ◀──┘
//! ```

use log::debug;

use crate::core::error::NavError;
use crate::core::item::{ItemList, ItemVariant};

/// Result of a successful `select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Selection moved from one destination to another.
    Changed { from: String, to: String },
    /// The already selected destination was tapped again.
    Reselected { id: String },
    /// The search item was tapped. Search is a mode, so the selection is kept.
    EnterSearchMode { item_id: String },
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    selected_id: String,
    default_id: String,
}

impl SelectionController {
    /// Start with the default item selected.
    ///
    /// `default_id` falls back to the first item when `None`.
    pub fn new(items: &ItemList, default_id: Option<&str>) -> Result<Self, NavError> {
        let default_id = match default_id {
            Some(id) if items.contains(id) => id.to_string(),
            Some(id) => {
                return Err(NavError::InvalidConfig(format!(
                    "default item '{id}' is not in the item list"
                )));
            }
            None => items.first_id().to_string(),
        };
        Ok(Self {
            selected_id: default_id.clone(),
            default_id,
        })
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Request a selection change. Nothing is mutated on error.
    pub fn select(&mut self, items: &ItemList, id: &str) -> Result<SelectionOutcome, NavError> {
        let item = items
            .get(id)
            .ok_or_else(|| NavError::UnknownItem(id.to_string()))?;

        match item.variant {
            ItemVariant::Search => Ok(SelectionOutcome::EnterSearchMode {
                item_id: item.id.clone(),
            }),
            ItemVariant::Isolated => Err(NavError::UnknownItem(id.to_string())),
            ItemVariant::Standard if item.id == self.selected_id => {
                Ok(SelectionOutcome::Reselected { id: item.id.clone() })
            }
            ItemVariant::Standard => {
                let from = std::mem::replace(&mut self.selected_id, item.id.clone());
                debug!("Selection {} -> {}", from, self.selected_id);
                Ok(SelectionOutcome::Changed {
                    from,
                    to: self.selected_id.clone(),
                })
            }
        }
    }

    /// Mirror the router's current route. Unknown or missing routes fall
    /// back to the default id, never to the previous selection.
    pub fn reconcile(&mut self, items: &ItemList, route: Option<&str>) -> &str {
        let next = match route {
            Some(id) if items.contains(id) => id,
            Some(id) => {
                debug!("Route '{}' matches no item, using default '{}'", id, self.default_id);
                self.default_id.as_str()
            }
            None => self.default_id.as_str(),
        };
        if next != self.selected_id {
            debug!("Reconciled selection {} -> {}", self.selected_id, next);
            self.selected_id = next.to_string();
        }
        &self.selected_id
    }
}
