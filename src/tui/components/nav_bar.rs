//! # NavBar Component
//!
//! Draws the bottom navigation bar from a `VisualState` snapshot.
//!
//! ## Responsibilities
//!
//! - One slot per item; the search slot widens into a text field while
//!   search is expanded
//! - Indicator for the selected item (`Ripple`, `Line` or `Dot`)
//! - Badges, labels (bar-wide suppression honored) and isolated-item rotation
//! - Item rects for mouse hit testing
//!
//! ## Terminal Mapping
//!
//! Theme dimensions are density-independent units. One terminal column is
//! `DP_PER_COL` units wide. Rounded corners become a rounded border, and a
//! non-zero elevation lifts the bar one row off the bottom edge. Blur has no
//! terminal equivalent and is ignored.
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │   ⌂        ⌕       ♡ 5      ○ •              │  icon row
//! │  Home    Search  Favorites  Profile          │  label row (optional)
//! │  ────                                        │  indicator row (Line/Dot)
//! ╰──────────────────────────────────────────────╯
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::badge::Badge;
use crate::core::bar::VisualState;
use crate::core::item::{ItemList, ItemVariant, NavItem};
use crate::core::theme::{Argb, IndicatorStyle, ThemeConfig};
use crate::tui::component::Component;

/// Density-independent units per terminal column.
pub const DP_PER_COL: f32 = 8.0;

/// Width share of the search slot while it is expanded.
const EXPANDED_SEARCH_SHARE: u16 = 3;

/// Badge foreground.
const BADGE_COLOR: Color = Color::Rgb(0xE5, 0x39, 0x35);

pub fn to_color(c: Argb) -> Color {
    if c.alpha() == 0 {
        return Color::Reset;
    }
    let (r, g, b) = c.rgb();
    Color::Rgb(r, g, b)
}

/// Composite `fg` over an opaque `bg` using `fg`'s alpha.
pub fn blend(fg: Argb, bg: Argb) -> Color {
    let a = f32::from(fg.alpha()) / 255.0;
    let (fr, fg_, fb) = fg.rgb();
    let (br, bg_, bb) = bg.rgb();
    let mix = |f: u8, b: u8| (f32::from(f) * a + f32::from(b) * (1.0 - a)).round() as u8;
    Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
}

fn dp_to_cols(dp: f32) -> u16 {
    (dp / DP_PER_COL).round().max(0.0) as u16
}

/// Labels are drawn only if the theme shows them and search mode is not
/// suppressing them bar-wide.
pub fn labels_visible(theme: &ThemeConfig, state: &VisualState) -> bool {
    theme.show_labels && !state.labels_suppressed
}

/// Total rows the bar needs, borders and elevation included.
pub fn bar_height(theme: &ThemeConfig, state: &VisualState) -> u16 {
    let mut rows = 1;
    if labels_visible(theme, state) {
        rows += 1;
    }
    if !matches!(theme.indicator, IndicatorStyle::Ripple { .. }) {
        rows += 1;
    }
    if theme.show_border {
        rows += 2;
    }
    if theme.elevation > 0.0 {
        rows += 1;
    }
    rows
}

/// Horizontally centered bar rect at the bottom of `area`, capped at the
/// theme's max width. Elevation rows are excluded.
pub fn bar_rect(area: Rect, theme: &ThemeConfig, state: &VisualState) -> Rect {
    let height = bar_height(theme, state).min(area.height);
    let lift = u16::from(theme.elevation > 0.0).min(height);
    let width = dp_to_cols(theme.max_width).clamp(1, area.width.max(1)).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - height,
        width,
        height: height - lift,
    }
}

/// One rect per item inside the bar's inner area, in item order.
pub fn item_slots(bar: Rect, items: &ItemList, theme: &ThemeConfig, state: &VisualState) -> Vec<Rect> {
    let inner = if theme.show_border {
        Block::default().borders(Borders::ALL).inner(bar)
    } else {
        bar
    };
    let constraints = items.iter().map(|item| {
        if item.variant == ItemVariant::Search && state.search_expanded {
            Constraint::Fill(EXPANDED_SEARCH_SHARE)
        } else {
            Constraint::Fill(1)
        }
    });
    Layout::horizontal(constraints).split(inner).to_vec()
}

/// Index of the item under a terminal cell, if any.
pub fn hit_test(
    col: u16,
    row: u16,
    area: Rect,
    items: &ItemList,
    theme: &ThemeConfig,
    state: &VisualState,
) -> Option<usize> {
    let bar = bar_rect(area, theme, state);
    item_slots(bar, items, theme, state)
        .iter()
        .position(|slot| slot.contains(ratatui::layout::Position::new(col, row)))
}

/// Terminal stand-in for rotating an icon: a `+` turned past half of 45°
/// reads as `×`.
fn rotated_glyph(icon: &str, angle: f32) -> &str {
    if angle >= 22.5 && icon == "+" {
        "×"
    } else {
        icon
    }
}

/// Stateless renderer; all data arrives as props.
pub struct NavBar<'a> {
    pub items: &'a ItemList,
    pub theme: &'a ThemeConfig,
    pub state: &'a VisualState,
    /// Keyboard focus, drawn underlined.
    pub focused: Option<usize>,
}

impl<'a> NavBar<'a> {
    pub fn new(items: &'a ItemList, theme: &'a ThemeConfig, state: &'a VisualState) -> Self {
        Self {
            items,
            theme,
            state,
            focused: None,
        }
    }

    #[must_use]
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    fn is_selected(&self, item: &NavItem) -> bool {
        match item.variant {
            ItemVariant::Isolated => self.state.angle_of(&item.id).is_some_and(|a| a > 0.0),
            ItemVariant::Search => self.state.search_expanded || self.state.selected_id == item.id,
            ItemVariant::Standard => self.state.selected_id == item.id,
        }
    }

    fn icon_line(&self, item: &NavItem, selected: bool, focused: bool, width: u16) -> Line<'a> {
        let colors = &self.theme.colors;
        let fg = if selected { colors.selected_icon } else { colors.unselected_icon };
        let mut style = Style::default().fg(to_color(fg));
        if focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        if item.variant == ItemVariant::Search && self.state.search_expanded {
            return self.search_field_line(item, style, width);
        }

        let icon = match self.state.angle_of(&item.id) {
            Some(angle) => rotated_glyph(item.icon_for(selected), angle),
            None => item.icon_for(selected),
        };
        let mut spans = vec![Span::styled(icon.to_string(), style)];
        if let Some(badge) = item.badge {
            let badge_style = Style::default().fg(BADGE_COLOR).add_modifier(Modifier::BOLD);
            let text = match badge {
                Badge::Count(_) => format!(" {}", badge.label()),
                Badge::Dot => badge.label(),
            };
            spans.push(Span::styled(text, badge_style));
        }
        Line::from(spans).alignment(Alignment::Center)
    }

    /// Expanded search slot: icon, then the tail of the query that fits.
    fn search_field_line(&self, item: &NavItem, style: Style, width: u16) -> Line<'a> {
        let prefix = format!("{} ", item.icon);
        let budget = usize::from(width).saturating_sub(prefix.width() + 2);
        let mut visible = String::new();
        for c in self.state.query.chars().rev() {
            let candidate = format!("{c}{visible}");
            if candidate.width() > budget {
                break;
            }
            visible = candidate;
        }
        let query_style = Style::default().fg(to_color(self.theme.colors.selected_text));
        Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(visible, query_style),
            Span::styled("▏", query_style.add_modifier(Modifier::SLOW_BLINK)),
        ])
        .alignment(Alignment::Left)
    }

    fn label_line(&self, item: &NavItem, selected: bool) -> Line<'a> {
        let colors = &self.theme.colors;
        let fg = if selected { colors.selected_text } else { colors.unselected_text };
        Line::styled(item.label.clone(), Style::default().fg(to_color(fg))).alignment(Alignment::Center)
    }

    fn indicator_line(&self, selected: bool) -> Line<'a> {
        let color = to_color(self.theme.colors.selected_icon);
        let text = match (self.theme.indicator, selected) {
            (_, false) | (IndicatorStyle::Ripple { .. }, true) => String::new(),
            (IndicatorStyle::Line { thickness, length }, true) => {
                let glyph = if thickness >= 2.0 { "━" } else { "─" };
                glyph.repeat(usize::from(dp_to_cols(length).max(1)))
            }
            (IndicatorStyle::Dot { size, .. }, true) => {
                let glyph = if size >= 8.0 { "●" } else { "•" };
                glyph.to_string()
            }
        };
        Line::styled(text, Style::default().fg(color)).alignment(Alignment::Center)
    }

    fn render_slot(&self, frame: &mut Frame, slot: Rect, index: usize, item: &NavItem) {
        let selected = self.is_selected(item);
        let focused = self.focused == Some(index);

        let mut lines = vec![self.icon_line(item, selected, focused, slot.width)];
        if labels_visible(self.theme, self.state) {
            lines.push(self.label_line(item, selected));
        }
        let mut highlight = slot;
        match self.theme.indicator {
            IndicatorStyle::Ripple { padding } => {
                let inset = dp_to_cols(padding).min(slot.width.saturating_sub(1) / 2);
                highlight.x += inset;
                highlight.width -= inset * 2;
            }
            IndicatorStyle::Line { .. } | IndicatorStyle::Dot { .. } => {
                lines.push(self.indicator_line(selected));
            }
        }

        if selected && matches!(self.theme.indicator, IndicatorStyle::Ripple { .. }) {
            let ripple = blend(self.theme.colors.selected_ripple, self.theme.colors.background);
            frame.render_widget(Block::default().style(Style::default().bg(ripple)), highlight);
        }
        frame.render_widget(Paragraph::new(lines), slot);
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar = bar_rect(area, self.theme, self.state);
        let colors = &self.theme.colors;

        let mut block = Block::default().style(Style::default().bg(to_color(colors.background)));
        if self.theme.show_border {
            let border_type = if self.theme.corner_radius > 0.0 {
                BorderType::Rounded
            } else {
                BorderType::Plain
            };
            block = block
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(to_color(colors.border)));
        }
        frame.render_widget(block, bar);

        let slots = item_slots(bar, self.items, self.theme, self.state);
        for (index, (item, slot)) in self.items.iter().zip(slots.iter()).enumerate() {
            self.render_slot(frame, *slot, index, item);
        }
    }
}
