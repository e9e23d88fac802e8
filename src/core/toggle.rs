//! # Isolated Toggles
//!
//! Each isolated item flips between `Rest` (0°) and `Active` (45°) when it
//! is activated. Selecting a real destination sends every active toggle back
//! to rest; the bar applies that in the same call as the selection change.
//!
//! ```text
//!          activate(id)
//!   Rest ───────────────▶ Active
//!    ▲  ◀───────────────    │
//!    │     activate(id)     │
//!    └──── reset_all() ◀────┘   (another item was selected)
//! ```

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::error::NavError;
use crate::core::item::{ItemList, ItemVariant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TogglePosition {
    #[default]
    Rest,
    Active,
}

impl TogglePosition {
    /// Rotation in degrees the renderer animates towards.
    pub fn angle(self) -> f32 {
        match self {
            TogglePosition::Rest => 0.0,
            TogglePosition::Active => 45.0,
        }
    }

    #[must_use]
    pub fn flipped(self) -> TogglePosition {
        match self {
            TogglePosition::Rest => TogglePosition::Active,
            TogglePosition::Active => TogglePosition::Rest,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IsolatedToggleController {
    positions: BTreeMap<String, TogglePosition>,
}

impl IsolatedToggleController {
    /// One `Rest` entry per isolated item.
    pub fn new(items: &ItemList) -> Self {
        let positions = items
            .iter()
            .filter(|item| item.variant == ItemVariant::Isolated)
            .map(|item| (item.id.clone(), TogglePosition::Rest))
            .collect();
        Self { positions }
    }

    /// Flip the toggle of an isolated item. Selection is not touched.
    pub fn activate(&mut self, id: &str) -> Result<TogglePosition, NavError> {
        let position = self
            .positions
            .get_mut(id)
            .ok_or_else(|| NavError::UnknownItem(id.to_string()))?;
        *position = position.flipped();
        debug!("Toggle {} -> {:?}", id, position);
        Ok(*position)
    }

    /// Return every active toggle to rest. Yields the ids that moved.
    pub fn reset_all(&mut self) -> Vec<String> {
        let mut reset = Vec::new();
        for (id, position) in &mut self.positions {
            if *position == TogglePosition::Active {
                *position = TogglePosition::Rest;
                reset.push(id.clone());
            }
        }
        if !reset.is_empty() {
            debug!("Reset toggles: {:?}", reset);
        }
        reset
    }

    pub fn position(&self, id: &str) -> Option<TogglePosition> {
        self.positions.get(id).copied()
    }

    pub fn angle(&self, id: &str) -> Option<f32> {
        self.position(id).map(TogglePosition::angle)
    }

    pub fn any_active(&self) -> bool {
        self.positions.values().any(|p| *p == TogglePosition::Active)
    }

    /// Angles keyed by item id, in id order.
    pub fn angles(&self) -> BTreeMap<String, f32> {
        self.positions
            .iter()
            .map(|(id, position)| (id.clone(), position.angle()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::action_items;

    #[test]
    fn test_only_isolated_items_tracked() {
        let toggles = IsolatedToggleController::new(&action_items());
        assert_eq!(toggles.angle("add"), Some(0.0));
        assert_eq!(toggles.angle("home"), None);
    }

    #[test]
    fn test_activate_flips() {
        let mut toggles = IsolatedToggleController::new(&action_items());
        assert_eq!(toggles.activate("add").unwrap(), TogglePosition::Active);
        assert_eq!(toggles.angle("add"), Some(45.0));
        assert_eq!(toggles.activate("add").unwrap(), TogglePosition::Rest);
        assert_eq!(toggles.angle("add"), Some(0.0));
    }

    #[test]
    fn test_activate_non_isolated_rejected() {
        let mut toggles = IsolatedToggleController::new(&action_items());
        assert_eq!(
            toggles.activate("home").unwrap_err(),
            NavError::UnknownItem("home".to_string())
        );
        assert!(!toggles.any_active());
    }

    #[test]
    fn test_reset_all_reports_moved_ids() {
        let mut toggles = IsolatedToggleController::new(&action_items());
        assert!(toggles.reset_all().is_empty());
        toggles.activate("add").unwrap();
        assert_eq!(toggles.reset_all(), vec!["add".to_string()]);
        assert_eq!(toggles.position("add"), Some(TogglePosition::Rest));
    }
}
