//! # Host
//!
//! Plays the parts the bar treats as external: the router that owns the
//! back stack, the search backend that consumes query notifications, and the
//! renderer's input handling. Everything here is terminal-agnostic so the
//! flows can be tested without a real terminal.
//!
//! Every bar change goes through `core::action::update`; navigation effects
//! are carried out on the router, whose new route is then echoed back to the
//! bar with `Action::RouteChanged`.

use log::{info, warn};
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::bar::{BarOptions, NavigationBar};
use crate::core::config::ResolvedConfig;
use crate::core::error::NavError;
use crate::core::item::{ItemList, ItemVariant};
use crate::core::router::{BackStackRouter, Router};
use crate::core::theme::StylePreset;
use crate::tui::components::nav_bar;
use crate::tui::event::TuiEvent;

/// Entries the demo search backend filters.
const SEARCH_CORPUS: &[&str] = &[
    "cat", "caterpillar", "catalog", "category", "dog", "dolphin", "duck", "eagle", "elephant",
    "falcon", "ferret", "fox", "giraffe", "hamster", "heron", "koala", "lemur", "lynx", "otter",
    "owl", "panda", "parrot", "rabbit", "raccoon", "tiger", "turtle", "walrus", "zebra",
];

/// Case-insensitive substring filter over the demo corpus.
pub fn search_backend(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    SEARCH_CORPUS
        .iter()
        .copied()
        .filter(|entry| entry.contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Continue,
    Quit,
}

pub struct Host {
    pub bar: NavigationBar,
    pub router: BackStackRouter,
    pub style: StylePreset,
    items: ItemList,
    options: BarOptions,
    /// Keyboard focus, as an item index.
    pub focused: usize,
    pub status_message: String,
    /// Results for the current query.
    pub results: Vec<&'static str>,
    pub last_submitted: Option<String>,
}

impl Host {
    pub fn new(config: &ResolvedConfig) -> Result<Self, NavError> {
        let bar = NavigationBar::new(
            config.items.clone(),
            config.style.config(),
            config.options.clone(),
        )?;
        let router = BackStackRouter::new(bar.selected_id());
        let focused = bar.items().position(bar.selected_id()).unwrap_or(0);
        Ok(Self {
            router,
            style: config.style,
            items: config.items.clone(),
            options: config.options.clone(),
            focused,
            status_message: format!("Style: {}", config.style.display_name()),
            results: Vec::new(),
            last_submitted: None,
            bar,
        })
    }

    /// Apply an action and carry out its effect.
    pub fn dispatch(&mut self, action: Action) {
        match update(&mut self.bar, action) {
            Ok(Effect::Navigate(request)) => {
                self.router.navigate(&request);
                self.sync_route();
            }
            Ok(Effect::QueryChanged(query)) => {
                self.results = search_backend(&query);
            }
            Ok(Effect::QuerySubmitted(query)) => {
                info!("Search submitted: {:?}", query);
                self.status_message = format!("Searched \"{query}\": {} results", self.results.len());
                self.last_submitted = Some(query);
            }
            Ok(Effect::None) => {}
            Err(e) => {
                warn!("Action rejected: {}", e);
                self.status_message = format!("Rejected: {e}");
            }
        }
    }

    /// Echo the router's current route back into the bar.
    fn sync_route(&mut self) {
        let route = self.router.current_route().map(str::to_string);
        self.dispatch(Action::RouteChanged(route));
    }

    pub fn activate_index(&mut self, index: usize) {
        let Some(id) = self.bar.items().as_slice().get(index).map(|item| item.id.clone()) else {
            return;
        };
        self.focused = index;
        self.dispatch(Action::ItemActivated(id));
    }

    /// Router back navigation. Leaving the search route collapses search.
    pub fn back(&mut self) {
        let on_search = self
            .router
            .current_route()
            .and_then(|route| self.bar.items().get(route))
            .is_some_and(|item| item.variant == ItemVariant::Search);
        if self.bar.current_visual_state().search_expanded {
            self.dispatch(Action::ExitSearch);
            self.results.clear();
            if !on_search {
                return;
            }
        }
        if self.router.pop().is_some() {
            self.sync_route();
        }
    }

    /// Restyling builds a fresh bar; the router keeps its history.
    pub fn cycle_style(&mut self) {
        let next = self.style.next();
        match NavigationBar::new(self.items.clone(), next.config(), self.options.clone()) {
            Ok(bar) => {
                info!("Restyled bar: {}", next.display_name());
                self.bar = bar;
                self.style = next;
                self.results.clear();
                self.status_message = format!("Style: {}", next.display_name());
                self.sync_route();
            }
            Err(e) => warn!("Failed to restyle bar: {}", e),
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.bar.items().len();
        self.focused = if forward {
            (self.focused + 1) % len
        } else {
            (self.focused + len - 1) % len
        };
    }

    fn focused_is_search(&self) -> bool {
        self.bar
            .items()
            .as_slice()
            .get(self.focused)
            .is_some_and(|item| item.variant == ItemVariant::Search)
    }

    /// Route one terminal event. `bar_area` is where the nav bar is drawn.
    pub fn handle_event(&mut self, event: TuiEvent, bar_area: Rect) -> HostSignal {
        match event {
            TuiEvent::ForceQuit => return HostSignal::Quit,
            TuiEvent::Resize => {}
            TuiEvent::CycleStyle => self.cycle_style(),
            TuiEvent::Back => self.back(),
            TuiEvent::FocusLeft => self.move_focus(false),
            TuiEvent::FocusRight => self.move_focus(true),
            TuiEvent::ActivateIndex(index) => self.activate_index(index),
            TuiEvent::MouseClick(col, row) => {
                let state = self.bar.current_visual_state();
                if let Some(index) =
                    nav_bar::hit_test(col, row, bar_area, self.bar.items(), self.bar.theme(), &state)
                {
                    self.activate_index(index);
                }
            }
            other if self.bar.current_visual_state().search_expanded => {
                self.handle_search_input(other);
            }
            TuiEvent::Escape | TuiEvent::InputChar('q') => return HostSignal::Quit,
            TuiEvent::Submit | TuiEvent::InputChar(' ') => self.activate_index(self.focused),
            TuiEvent::InputChar(c @ '1'..='9') => {
                self.activate_index(c as usize - '1' as usize);
            }
            TuiEvent::Backspace => self.back(),
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {}
        }
        HostSignal::Continue
    }

    fn handle_search_input(&mut self, event: TuiEvent) {
        let mut query = self.bar.current_visual_state().query;
        match event {
            TuiEvent::InputChar(c) => {
                query.push(c);
                self.dispatch(Action::QueryEdited(query));
            }
            TuiEvent::Paste(text) => {
                query.push_str(&text.replace(['\n', '\r'], " "));
                self.dispatch(Action::QueryEdited(query));
            }
            TuiEvent::Backspace => {
                query.pop();
                self.dispatch(Action::QueryEdited(query));
            }
            TuiEvent::Submit if self.focused_is_search() => self.dispatch(Action::SubmitQuery),
            TuiEvent::Submit => self.activate_index(self.focused),
            TuiEvent::Escape => self.back(),
            _ => {}
        }
    }
}
