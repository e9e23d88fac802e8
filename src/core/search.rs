//! # Search Mode
//!
//! Expand/collapse state of the embedded search field and its query buffer.
//! Query notifications are passed straight through; no debouncing or
//! validation happens here.

use log::debug;

use crate::core::error::NavError;

/// Notifications for the host's search backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    QueryChanged(String),
    QuerySubmitted(String),
}

#[derive(Debug, Clone, Default)]
pub struct SearchModeController {
    expanded: bool,
    query: String,
    clear_query_on_exit: bool,
    hide_labels_on_expand: bool,
}

impl SearchModeController {
    pub fn new(clear_query_on_exit: bool, hide_labels_on_expand: bool) -> Self {
        Self {
            expanded: false,
            query: String::new(),
            clear_query_on_exit,
            hide_labels_on_expand,
        }
    }

    /// Expand. Returns `true` if the state changed.
    pub fn enter(&mut self) -> bool {
        let changed = !self.expanded;
        self.expanded = true;
        if changed {
            debug!("Search expanded (query: {:?})", self.query);
        }
        changed
    }

    /// Collapse. Returns `true` if the state changed.
    pub fn exit(&mut self) -> bool {
        let changed = self.expanded;
        self.expanded = false;
        if self.clear_query_on_exit {
            self.query.clear();
        }
        if changed {
            debug!("Search collapsed");
        }
        changed
    }

    pub fn update_query(&mut self, text: impl Into<String>) -> Result<SearchEvent, NavError> {
        if !self.expanded {
            return Err(NavError::NotExpanded);
        }
        self.query = text.into();
        Ok(SearchEvent::QueryChanged(self.query.clone()))
    }

    pub fn submit(&self) -> Result<SearchEvent, NavError> {
        if !self.expanded {
            return Err(NavError::NotExpanded);
        }
        Ok(SearchEvent::QuerySubmitted(self.query.clone()))
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Bar-wide label suppression the renderer must honor.
    pub fn labels_suppressed(&self) -> bool {
        self.expanded && self.hide_labels_on_expand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_is_idempotent() {
        let mut search = SearchModeController::new(false, false);
        assert!(search.enter());
        assert!(!search.enter());
        assert!(search.is_expanded());
    }

    #[test]
    fn test_update_query_requires_expanded() {
        let mut search = SearchModeController::new(false, false);
        assert_eq!(search.update_query("cat"), Err(NavError::NotExpanded));
        assert_eq!(search.query(), "");

        search.enter();
        assert_eq!(
            search.update_query("cat"),
            Ok(SearchEvent::QueryChanged("cat".to_string()))
        );
        assert_eq!(search.query(), "cat");
    }

    #[test]
    fn test_submit_requires_expanded() {
        let mut search = SearchModeController::new(false, false);
        assert_eq!(search.submit(), Err(NavError::NotExpanded));
        search.enter();
        search.update_query("dog").unwrap();
        assert_eq!(search.submit(), Ok(SearchEvent::QuerySubmitted("dog".to_string())));
    }

    #[test]
    fn test_rejected_update_after_exit_keeps_query() {
        let mut search = SearchModeController::new(false, false);
        search.enter();
        search.update_query("cat").unwrap();
        search.exit();
        assert!(search.update_query("dog").is_err());
        assert_eq!(search.query(), "cat");
    }

    #[test]
    fn test_exit_preserves_query_by_default() {
        let mut search = SearchModeController::new(false, false);
        search.enter();
        search.update_query("cat").unwrap();
        assert!(search.exit());
        search.enter();
        assert_eq!(search.query(), "cat");
    }

    #[test]
    fn test_exit_clears_query_when_configured() {
        let mut search = SearchModeController::new(true, false);
        search.enter();
        search.update_query("cat").unwrap();
        search.exit();
        assert_eq!(search.query(), "");
    }

    #[test]
    fn test_labels_suppressed_truth_table() {
        for (expanded, hide) in [(true, true), (true, false), (false, true), (false, false)] {
            let mut search = SearchModeController::new(false, hide);
            if expanded {
                search.enter();
            }
            assert_eq!(search.labels_suppressed(), expanded && hide);
        }
    }
}
