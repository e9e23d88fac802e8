//! # TUI Components
//!
//! All components are stateless: they receive everything they draw as props
//! and own nothing between frames.
//!
//! - `NavBar`: the bottom navigation bar, drawn from a `VisualState`
//! - `Screen`: placeholder content for the current destination
//! - `TitleBar`: top status line
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as struct fields, not by reaching into
//! host state. The nav bar in particular only ever sees the bar's snapshot,
//! its item list and its theme, never the controllers behind them.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── nav_bar.rs    (bottom bar + hit testing)
//! ├── screen.rs     (destination placeholder)
//! └── title_bar.rs  (top status line)
//! ```

pub mod nav_bar;
pub mod screen;
mod title_bar;

pub use nav_bar::NavBar;
pub use screen::Screen;
pub use title_bar::TitleBar;
