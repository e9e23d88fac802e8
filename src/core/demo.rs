//! Built-in item sets used by the terminal host when the config file does
//! not list its own items.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::badge::Badge;
use crate::core::error::NavError;
use crate::core::item::{ItemList, ItemVariant, NavItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoItems {
    /// home, search (search field), favorites, profile
    #[default]
    WithSearch,
    /// home, search (plain tab), favorites, profile
    Plain,
    /// home, favorites, profile, add (isolated action)
    WithAction,
}

impl DemoItems {
    pub fn build(self) -> Result<ItemList, NavError> {
        let home = NavItem::new("home", "Home", "⌂").with_selected_icon("⌂");
        let favorites = NavItem::new("favorites", "Favorites", "♡")
            .with_selected_icon("♥")
            .with_badge(Badge::count(5)?);
        let profile = NavItem::new("profile", "Profile", "○")
            .with_selected_icon("●")
            .with_badge(Some(Badge::Dot));

        let items = match self {
            DemoItems::WithSearch => vec![
                home,
                NavItem::new("search", "Search", "⌕").with_variant(ItemVariant::Search),
                favorites,
                profile,
            ],
            DemoItems::Plain => vec![
                home,
                NavItem::new("search", "Search", "⌕").with_selected_icon("⌕"),
                favorites,
                profile,
            ],
            DemoItems::WithAction => vec![
                home,
                favorites,
                profile,
                NavItem::new("add", "Add", "+").with_variant(ItemVariant::Isolated),
            ],
        };
        ItemList::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sets_build() {
        for set in [DemoItems::WithSearch, DemoItems::Plain, DemoItems::WithAction] {
            let items = set.build().unwrap();
            assert_eq!(items.len(), 4);
            assert_eq!(items.first_id(), "home");
        }
    }

    #[test]
    fn test_with_search_badges() {
        let items = DemoItems::WithSearch.build().unwrap();
        assert_eq!(items.get("search").unwrap().variant, ItemVariant::Search);
        assert_eq!(items.get("favorites").unwrap().badge, Some(Badge::Count(5)));
        assert_eq!(items.get("profile").unwrap().badge, Some(Badge::Dot));
    }

    #[test]
    fn test_plain_search_is_a_tab() {
        let items = DemoItems::Plain.build().unwrap();
        assert_eq!(items.get("search").unwrap().variant, ItemVariant::Standard);
    }
}
