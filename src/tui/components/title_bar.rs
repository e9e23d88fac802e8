//! # TitleBar Component
//!
//! Top status line: active style preset and the latest host status.
//!
//! Purely presentational. It receives all data as props and has no internal
//! state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Modern Pill".to_string(), "Searched \"cat\"".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! The title reads `"FlowTab (style: Modern Pill) | <status>"`, or just the
//! style part when the status is empty.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Display name of the active style preset
    pub style_name: String,
    /// Transient status (e.g. "Style: Instagram", "Rejected: unknown item: x")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(style_name: String, status_message: String) -> Self {
        Self {
            style_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("FlowTab (style: {})", self.style_name)
        } else {
            format!("FlowTab (style: {}) | {}", self.style_name, self.status_message)
        };

        frame.render_widget(
            Span::styled(title_text, Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}
