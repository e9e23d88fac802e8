//! # Navigation Bar
//!
//! Composition root. Wires selection, isolated toggles and search mode
//! together behind a single entry point for user interaction.
//!
//! ```text
//! NavigationBar
//! ├── items: ItemList                  // immutable
//! ├── theme: ThemeConfig               // immutable
//! ├── selection: SelectionController   // selected_id
//! ├── toggles: IsolatedToggleController
//! └── search: SearchModeController     // expanded + query
//! ```
//!
//! The renderer never mutates anything. It reads `current_visual_state()`
//! every frame and reports taps through `on_item_activated`.

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::error::NavError;
use crate::core::item::{ItemList, ItemVariant, NavItem};
use crate::core::search::{SearchEvent, SearchModeController};
use crate::core::selection::{SelectionController, SelectionOutcome};
use crate::core::theme::ThemeConfig;
use crate::core::toggle::{IsolatedToggleController, TogglePosition};

/// Construction-time behavior switches that are not part of the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarOptions {
    /// Item selected at startup and whenever the router reports an unknown
    /// route. `None` means the first item.
    pub default_id: Option<String>,
    /// Clear the query buffer when search collapses. Off by default, so the
    /// query survives a collapse/expand cycle.
    pub clear_query_on_exit: bool,
}

/// Notifications produced by bar operations, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarEvent {
    SelectionChanged { from: String, to: String },
    Reselected { id: String },
    EnterSearchMode { item_id: String },
    SearchExited,
    ToggleChanged { item_id: String, position: TogglePosition },
    QueryChanged(String),
    QuerySubmitted(String),
}

impl From<SelectionOutcome> for BarEvent {
    fn from(outcome: SelectionOutcome) -> Self {
        match outcome {
            SelectionOutcome::Changed { from, to } => BarEvent::SelectionChanged { from, to },
            SelectionOutcome::Reselected { id } => BarEvent::Reselected { id },
            SelectionOutcome::EnterSearchMode { item_id } => BarEvent::EnterSearchMode { item_id },
        }
    }
}

impl From<SearchEvent> for BarEvent {
    fn from(event: SearchEvent) -> Self {
        match event {
            SearchEvent::QueryChanged(text) => BarEvent::QueryChanged(text),
            SearchEvent::QuerySubmitted(text) => BarEvent::QuerySubmitted(text),
        }
    }
}

/// Read-only snapshot the renderer draws from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualState {
    pub selected_id: String,
    pub toggle_angles: BTreeMap<String, f32>,
    pub search_expanded: bool,
    pub query: String,
    pub labels_suppressed: bool,
}

impl VisualState {
    pub fn angle_of(&self, id: &str) -> Option<f32> {
        self.toggle_angles.get(id).copied()
    }
}

#[derive(Debug, Clone)]
pub struct NavigationBar {
    items: ItemList,
    theme: ThemeConfig,
    selection: SelectionController,
    toggles: IsolatedToggleController,
    search: SearchModeController,
}

impl NavigationBar {
    pub fn new(items: ItemList, theme: ThemeConfig, options: BarOptions) -> Result<Self, NavError> {
        let selection = SelectionController::new(&items, options.default_id.as_deref())?;
        let toggles = IsolatedToggleController::new(&items);
        let search = SearchModeController::new(
            options.clear_query_on_exit,
            theme.hide_labels_on_search_expand,
        );
        debug!(
            "NavigationBar created: {} items, default '{}'",
            items.len(),
            selection.default_id()
        );
        Ok(Self {
            items,
            theme,
            selection,
            toggles,
            search,
        })
    }

    /// The single entry point for user interaction.
    ///
    /// Unknown ids are rejected before anything changes. For destinations,
    /// toggle resets and the search collapse happen in this same call, so no
    /// snapshot can show an active toggle next to the new selection.
    pub fn on_item_activated(&mut self, id: &str) -> Result<Vec<BarEvent>, NavError> {
        let variant = self
            .items
            .get(id)
            .map(|item| item.variant)
            .ok_or_else(|| NavError::UnknownItem(id.to_string()))?;

        match variant {
            ItemVariant::Search => {
                let outcome = self.selection.select(&self.items, id)?;
                if !self.search.enter() {
                    debug!("Search already expanded, ignoring '{}'", id);
                    return Ok(Vec::new());
                }
                Ok(vec![outcome.into()])
            }
            ItemVariant::Isolated => {
                let position = self.toggles.activate(id)?;
                Ok(vec![BarEvent::ToggleChanged {
                    item_id: id.to_string(),
                    position,
                }])
            }
            ItemVariant::Standard => {
                let outcome = self.selection.select(&self.items, id)?;
                let mut events: Vec<BarEvent> = self
                    .toggles
                    .reset_all()
                    .into_iter()
                    .map(|item_id| BarEvent::ToggleChanged {
                        item_id,
                        position: TogglePosition::Rest,
                    })
                    .collect();
                if self.search.exit() {
                    events.push(BarEvent::SearchExited);
                }
                events.push(outcome.into());
                Ok(events)
            }
        }
    }

    /// Mirror the router's current route into the selection.
    pub fn on_route_changed(&mut self, route: Option<&str>) -> &str {
        self.selection.reconcile(&self.items, route)
    }

    pub fn update_query(&mut self, text: impl Into<String>) -> Result<BarEvent, NavError> {
        self.search.update_query(text).map(BarEvent::from)
    }

    pub fn submit_query(&self) -> Result<BarEvent, NavError> {
        self.search.submit().map(BarEvent::from)
    }

    /// Collapse search. Returns `None` if it was already collapsed.
    pub fn exit_search(&mut self) -> Option<BarEvent> {
        self.search.exit().then_some(BarEvent::SearchExited)
    }

    pub fn current_visual_state(&self) -> VisualState {
        VisualState {
            selected_id: self.selection.selected_id().to_string(),
            toggle_angles: self.toggles.angles(),
            search_expanded: self.search.is_expanded(),
            query: self.search.query().to_string(),
            labels_suppressed: self.search.labels_suppressed(),
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn selected_id(&self) -> &str {
        self.selection.selected_id()
    }

    pub fn selected_item(&self) -> Option<&NavItem> {
        self.items.get(self.selection.selected_id())
    }

    pub fn search_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.variant == ItemVariant::Search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::StylePreset;
    use crate::test_support::{action_items, search_items, test_bar};

    #[test]
    fn test_search_activation_keeps_selection() {
        let mut bar = test_bar(search_items(), StylePreset::ModernPill);
        let events = bar.on_item_activated("search").unwrap();
        assert_eq!(
            events,
            vec![BarEvent::EnterSearchMode { item_id: "search".to_string() }]
        );
        let state = bar.current_visual_state();
        assert!(state.search_expanded);
        assert!(state.labels_suppressed);
        assert_eq!(state.selected_id, "home");
    }

    #[test]
    fn test_search_activation_while_expanded_is_silent() {
        let mut bar = test_bar(search_items(), StylePreset::ModernPill);
        bar.on_item_activated("search").unwrap();
        bar.update_query("cat").unwrap();
        assert_eq!(bar.on_item_activated("search").unwrap(), Vec::new());
        let state = bar.current_visual_state();
        assert!(state.search_expanded);
        assert_eq!(state.query, "cat");
    }

    #[test]
    fn test_isolated_then_destination_resets_toggle() {
        let mut bar = test_bar(action_items(), StylePreset::ModernPillCompact);
        bar.on_item_activated("add").unwrap();
        assert_eq!(bar.current_visual_state().angle_of("add"), Some(45.0));

        let events = bar.on_item_activated("profile").unwrap();
        assert_eq!(
            events,
            vec![
                BarEvent::ToggleChanged {
                    item_id: "add".to_string(),
                    position: TogglePosition::Rest,
                },
                BarEvent::SelectionChanged {
                    from: "home".to_string(),
                    to: "profile".to_string(),
                },
            ]
        );
        let state = bar.current_visual_state();
        assert_eq!(state.selected_id, "profile");
        assert_eq!(state.angle_of("add"), Some(0.0));
    }

    #[test]
    fn test_isolated_does_not_change_selection() {
        let mut bar = test_bar(action_items(), StylePreset::ModernPill);
        bar.on_item_activated("favorites").unwrap();
        bar.on_item_activated("add").unwrap();
        assert_eq!(bar.selected_id(), "favorites");
    }

    #[test]
    fn test_destination_collapses_search() {
        let mut bar = test_bar(search_items(), StylePreset::ModernPill);
        bar.on_item_activated("search").unwrap();
        bar.update_query("cat").unwrap();
        let events = bar.on_item_activated("favorites").unwrap();
        assert!(events.contains(&BarEvent::SearchExited));
        let state = bar.current_visual_state();
        assert!(!state.search_expanded);
        assert!(!state.labels_suppressed);
        assert_eq!(state.query, "cat");
    }

    #[test]
    fn test_unknown_activation_mutates_nothing() {
        let mut bar = test_bar(action_items(), StylePreset::ModernPill);
        bar.on_item_activated("add").unwrap();
        let before = bar.current_visual_state();
        assert_eq!(
            bar.on_item_activated("cart").unwrap_err(),
            NavError::UnknownItem("cart".to_string())
        );
        assert_eq!(bar.current_visual_state(), before);
    }

    #[test]
    fn test_query_ops_when_collapsed() {
        let mut bar = test_bar(search_items(), StylePreset::ModernPill);
        assert_eq!(bar.update_query("cat"), Err(NavError::NotExpanded));
        assert_eq!(bar.submit_query(), Err(NavError::NotExpanded));
        assert_eq!(bar.exit_search(), None);
        assert_eq!(bar.current_visual_state().query, "");
    }

    #[test]
    fn test_route_changes_mirror_router() {
        let mut bar = test_bar(search_items(), StylePreset::Instagram);
        assert_eq!(bar.on_route_changed(Some("profile")), "profile");
        assert_eq!(bar.on_route_changed(None), "home");
        assert_eq!(bar.selected_item().map(|i| i.label.as_str()), Some("Home"));
    }

    #[test]
    fn test_clear_query_option() {
        let options = BarOptions {
            default_id: None,
            clear_query_on_exit: true,
        };
        let mut bar =
            NavigationBar::new(search_items(), StylePreset::ModernPill.config(), options).unwrap();
        bar.on_item_activated("search").unwrap();
        bar.update_query("cat").unwrap();
        assert_eq!(bar.exit_search(), Some(BarEvent::SearchExited));
        assert_eq!(bar.current_visual_state().query, "");
    }

    #[test]
    fn test_search_item_lookup() {
        let bar = test_bar(search_items(), StylePreset::ModernPill);
        assert_eq!(bar.search_item().map(|i| i.id.as_str()), Some("search"));
        let bar = test_bar(action_items(), StylePreset::ModernPill);
        assert!(bar.search_item().is_none());
    }
}
