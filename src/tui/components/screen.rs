//! # Screen Component
//!
//! Placeholder content for the current destination: a heading, the router's
//! back stack, and search results while the search field is open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

const HELP_TEXT: &str =
    " ←/→ Focus  Enter Open  1-9 Jump  Ctrl+B Back  Ctrl+S Style  Esc Quit ";
const SEARCH_HELP_TEXT: &str = " Type to search  Enter Submit  Alt+1-9 Jump  Esc Close ";

pub struct Screen<'a> {
    /// Label of the selected destination
    pub title: &'a str,
    pub route_stack: &'a [String],
    /// `Some` while the search field is expanded
    pub query: Option<&'a str>,
    pub results: &'a [&'static str],
    pub last_submitted: Option<&'a str>,
}

impl Screen<'_> {
    fn search_lines(&self, query: &str) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("Query: ", Style::default().fg(Color::DarkGray)),
            Span::raw(query.to_string()),
        ])];
        if let Some(submitted) = self.last_submitted {
            lines.push(Line::styled(
                format!("Last search: {submitted}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::default());
        if self.results.is_empty() && !query.is_empty() {
            lines.push(Line::styled("No matches", Style::default().fg(Color::DarkGray)));
        }
        lines.extend(self.results.iter().map(|r| Line::raw(format!("  {r}"))));
        lines
    }
}

impl Component for Screen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help = if self.query.is_some() { SEARCH_HELP_TEXT } else { HELP_TEXT };
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_bottom(Line::from(help).centered())
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::styled(
                format!("{} screen", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("Back stack: {}", self.route_stack.join(" › ")),
                Style::default().fg(Color::DarkGray),
            ),
            Line::default(),
        ];
        if let Some(query) = self.query {
            lines.extend(self.search_lines(query));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(screen: &mut Screen) -> String {
        let backend = TestBackend::new(90, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_destination_screen() {
        let stack = vec!["home".to_string(), "profile".to_string()];
        let mut screen = Screen {
            title: "Profile",
            route_stack: &stack,
            query: None,
            results: &[],
            last_submitted: None,
        };
        let text = render(&mut screen);
        assert!(text.contains("Profile screen"));
        assert!(text.contains("home › profile"));
        assert!(text.contains("Ctrl+S Style"));
    }

    #[test]
    fn test_search_screen_lists_results() {
        let stack = vec!["home".to_string(), "search".to_string()];
        let mut screen = Screen {
            title: "Search",
            route_stack: &stack,
            query: Some("ot"),
            results: &["otter"],
            last_submitted: Some("o"),
        };
        let text = render(&mut screen);
        assert!(text.contains("Query: ot"));
        assert!(text.contains("otter"));
        assert!(text.contains("Last search: o"));
        assert!(text.contains("Esc Close"));
    }

    #[test]
    fn test_search_screen_no_matches() {
        let stack = vec!["home".to_string()];
        let mut screen = Screen {
            title: "Search",
            route_stack: &stack,
            query: Some("zzz"),
            results: &[],
            last_submitted: None,
        };
        assert!(render(&mut screen).contains("No matches"));
    }
}
