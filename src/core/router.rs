//! # Router
//!
//! The host owns navigation history; the bar only asks for navigation and
//! then mirrors whatever route the router reports back.
//!
//! Two policies:
//!
//! - **Tab**: pop back to the start destination (saving state of what is
//!   popped), skip the push if the target is already on top, restore the
//!   target's saved state.
//! - **Fresh**: always push a new entry. Used for the search destination.
//!
//! `BackStackRouter` is a small in-memory router with those semantics. The
//! terminal host and the tests drive the bar through it.

use log::debug;
use std::collections::HashSet;

use crate::core::item::{ItemList, ItemVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPolicy {
    Tab,
    Fresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateRequest {
    pub item_id: String,
    pub policy: NavPolicy,
}

impl NavigateRequest {
    /// Request for an item, with the policy its variant calls for.
    ///
    /// Returns `None` for isolated items, which are never destinations.
    pub fn for_item(items: &ItemList, id: &str) -> Option<Self> {
        let policy = match items.get(id)?.variant {
            ItemVariant::Standard => NavPolicy::Tab,
            ItemVariant::Search => NavPolicy::Fresh,
            ItemVariant::Isolated => return None,
        };
        Some(Self {
            item_id: id.to_string(),
            policy,
        })
    }
}

/// Host-side navigation capability.
pub trait Router {
    fn navigate(&mut self, request: &NavigateRequest);

    /// The route on top of the back stack, if any.
    fn current_route(&self) -> Option<&str>;
}

#[derive(Debug, Clone)]
pub struct BackStackRouter {
    start: String,
    stack: Vec<String>,
    saved: HashSet<String>,
}

impl BackStackRouter {
    pub fn new(start: impl Into<String>) -> Self {
        let start = start.into();
        Self {
            stack: vec![start.clone()],
            start,
            saved: HashSet::new(),
        }
    }

    /// Back navigation. The start destination is never popped.
    pub fn pop(&mut self) -> Option<String> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        debug!("Router popped {:?}, now at {:?}", popped, self.current_route());
        popped
    }

    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    /// Whether the destination's state was saved when it was popped.
    pub fn has_saved_state(&self, id: &str) -> bool {
        self.saved.contains(id)
    }
}

impl Router for BackStackRouter {
    fn navigate(&mut self, request: &NavigateRequest) {
        match request.policy {
            NavPolicy::Tab => {
                if self.current_route() == Some(request.item_id.as_str()) {
                    debug!("Router: '{}' already on top", request.item_id);
                    return;
                }
                while self.stack.len() > 1 {
                    if let Some(popped) = self.stack.pop() {
                        self.saved.insert(popped);
                    }
                }
                if request.item_id != self.start {
                    if self.saved.remove(&request.item_id) {
                        debug!("Router: restoring state of '{}'", request.item_id);
                    }
                    self.stack.push(request.item_id.clone());
                }
            }
            NavPolicy::Fresh => self.stack.push(request.item_id.clone()),
        }
        debug!("Router stack: {:?}", self.stack);
    }

    fn current_route(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }
}
