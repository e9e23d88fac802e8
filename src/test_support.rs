//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::bar::{BarOptions, NavigationBar};
use crate::core::demo::DemoItems;
use crate::core::item::ItemList;
use crate::core::theme::StylePreset;

/// home, search (search field), favorites (5), profile (dot).
pub fn search_items() -> ItemList {
    DemoItems::WithSearch.build().unwrap()
}

/// home, favorites (5), profile (dot), add (isolated).
pub fn action_items() -> ItemList {
    DemoItems::WithAction.build().unwrap()
}

/// A bar with default options and the given preset's theme.
pub fn test_bar(items: ItemList, style: StylePreset) -> NavigationBar {
    NavigationBar::new(items, style.config(), BarOptions::default()).unwrap()
}
