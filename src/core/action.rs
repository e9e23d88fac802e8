//! # Actions
//!
//! Everything the host can tell the bar becomes an `Action`.
//! User taps the profile tab? That's `Action::ItemActivated("profile")`.
//! Router lands on a new route? That's `Action::RouteChanged(Some(..))`.
//!
//! `update()` applies the action to the bar and folds the resulting
//! `BarEvent`s into the one `Effect` the host has to carry out. No I/O here.
//!
//! ```text
//! NavigationBar + Action  →  update()  →  Effect
//! ```

use log::{debug, warn};

use crate::core::bar::{BarEvent, NavigationBar};
use crate::core::error::NavError;
use crate::core::router::NavigateRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ItemActivated(String),
    RouteChanged(Option<String>),
    QueryEdited(String),
    SubmitQuery,
    ExitSearch,
}

/// Side effect the host performs after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(NavigateRequest),
    QueryChanged(String),
    QuerySubmitted(String),
}

pub fn update(bar: &mut NavigationBar, action: Action) -> Result<Effect, NavError> {
    debug!("update: {:?}", action);
    let events = match action {
        Action::ItemActivated(id) => bar.on_item_activated(&id),
        Action::RouteChanged(route) => {
            bar.on_route_changed(route.as_deref());
            Ok(Vec::new())
        }
        Action::QueryEdited(text) => bar.update_query(text).map(|e| vec![e]),
        Action::SubmitQuery => bar.submit_query().map(|e| vec![e]),
        Action::ExitSearch => Ok(bar.exit_search().into_iter().collect()),
    }
    .inspect_err(|e| warn!("Bar rejected action: {e}"))?;

    Ok(effect_for(bar, events))
}

/// The last host-relevant event wins; toggle and collapse events only
/// change the snapshot.
fn effect_for(bar: &NavigationBar, events: Vec<BarEvent>) -> Effect {
    events
        .into_iter()
        .filter_map(|event| match event {
            BarEvent::SelectionChanged { to: id, .. } | BarEvent::EnterSearchMode { item_id: id } => {
                NavigateRequest::for_item(bar.items(), &id).map(Effect::Navigate)
            }
            BarEvent::QueryChanged(text) => Some(Effect::QueryChanged(text)),
            BarEvent::QuerySubmitted(text) => Some(Effect::QuerySubmitted(text)),
            BarEvent::Reselected { .. }
            | BarEvent::SearchExited
            | BarEvent::ToggleChanged { .. } => None,
        })
        .last()
        .unwrap_or(Effect::None)
}
