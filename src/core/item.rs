//! # Items
//!
//! One addressable entry in the bar and the validated list a bar is built from.
//!
//! ```text
//! ItemList
//! └── Vec<NavItem>
//!     ├── id: String             // unique within the list
//!     ├── label: String
//!     ├── icon / selected_icon   // opaque glyphs, resolved by the host
//!     ├── variant: ItemVariant   // Standard | Search | Isolated
//!     └── badge: Option<Badge>
//! ```
//!
//! An isolated item's rotation is runtime state and lives in
//! [`crate::core::toggle`], not here.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::badge::Badge;
use crate::core::error::NavError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemVariant {
    /// A regular destination tab.
    #[default]
    Standard,
    /// The embedded search field. Activating it enters search mode.
    Search,
    /// A local toggle action (e.g. a rotating add button), never a destination.
    Isolated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub selected_icon: Option<String>,
    pub variant: ItemVariant,
    pub badge: Option<Badge>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            selected_icon: None,
            variant: ItemVariant::Standard,
            badge: None,
        }
    }

    #[must_use]
    pub fn with_selected_icon(mut self, icon: impl Into<String>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: ItemVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: Option<Badge>) -> Self {
        self.badge = badge;
        self
    }

    /// Glyph to draw for the given selection state.
    pub fn icon_for(&self, selected: bool) -> &str {
        match (&self.selected_icon, selected) {
            (Some(icon), true) => icon,
            _ => &self.icon,
        }
    }
}

/// The immutable item list of one bar instance.
///
/// Guarantees: non-empty, ids unique, at most one `Search` item. Count
/// badges are within [`crate::core::badge::MAX_BADGE_COUNT`] and never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList {
    items: Vec<NavItem>,
}

impl ItemList {
    pub fn new(mut items: Vec<NavItem>) -> Result<Self, NavError> {
        if items.is_empty() {
            return Err(NavError::InvalidConfig("item list is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(NavError::InvalidConfig(format!(
                    "duplicate item id: {}",
                    item.id
                )));
            }
        }

        // Badges can be built directly, so re-check them here.
        for item in &mut items {
            if let Some(Badge::Count(n)) = item.badge {
                item.badge = Badge::count(n)?;
            }
        }

        let search_count = items
            .iter()
            .filter(|item| item.variant == ItemVariant::Search)
            .count();
        if search_count > 1 {
            return Err(NavError::InvalidConfig(format!(
                "{search_count} search items, at most one allowed"
            )));
        }

        Ok(Self { items })
    }

    pub fn get(&self, id: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Id of the first item. The list is never empty.
    pub fn first_id(&self) -> &str {
        &self.items[0].id
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NavItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[NavItem] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> NavItem {
        NavItem::new("home", "Home", "⌂").with_selected_icon("⌂")
    }

    fn search() -> NavItem {
        NavItem::new("search", "Search", "⌕").with_variant(ItemVariant::Search)
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(ItemList::new(vec![]), Err(NavError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ItemList::new(vec![home(), home()]).unwrap_err();
        assert_eq!(err, NavError::InvalidConfig("duplicate item id: home".to_string()));
    }

    #[test]
    fn test_two_search_items_rejected() {
        let second = NavItem::new("find", "Find", "?").with_variant(ItemVariant::Search);
        assert!(ItemList::new(vec![home(), search(), second]).is_err());
    }

    #[test]
    fn test_direct_count_badges_checked() {
        let oversized = home().with_badge(Some(Badge::Count(500)));
        assert!(matches!(ItemList::new(vec![oversized]), Err(NavError::InvalidConfig(_))));

        let inbox = NavItem::new("inbox", "Inbox", "✉").with_badge(Some(Badge::Count(0)));
        let list = ItemList::new(vec![home(), inbox]).unwrap();
        assert_eq!(list.get("inbox").unwrap().badge, None);
    }

    #[test]
    fn test_lookup() {
        let list = ItemList::new(vec![home(), search()]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.first_id(), "home");
        assert_eq!(list.position("search"), Some(1));
        assert!(list.contains("home"));
        assert!(!list.contains("profile"));
        assert_eq!(list.get("search").unwrap().variant, ItemVariant::Search);
    }

    #[test]
    fn test_icon_for_falls_back_to_icon() {
        let item = NavItem::new("fav", "Favorites", "♡").with_selected_icon("♥");
        assert_eq!(item.icon_for(true), "♥");
        assert_eq!(item.icon_for(false), "♡");
        assert_eq!(search().icon_for(true), "⌕");
    }
}
