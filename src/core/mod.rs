//! # Core Navigation-Bar Logic
//!
//! This module owns the state of a bottom navigation bar.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavigationBar        │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • VisualState snapshot │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Router   │      │   Search   │
//!     │  Renderer  │      │   (host)   │      │  backend   │
//!     │ (ratatui)  │      │            │      │   (host)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`], [`badge`], [`theme`]: immutable configuration data
//! - [`selection`], [`toggle`], [`search`]: the three state controllers
//! - [`bar`]: `NavigationBar`, the composition root
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`router`]: navigation policies and an in-memory back stack
//! - [`config`]: TOML config file and override resolution

pub mod action;
pub mod badge;
pub mod bar;
pub mod config;
pub mod demo;
pub mod error;
pub mod item;
pub mod router;
pub mod search;
pub mod selection;
pub mod theme;
pub mod toggle;

pub use bar::{BarEvent, BarOptions, NavigationBar, VisualState};
pub use error::NavError;
