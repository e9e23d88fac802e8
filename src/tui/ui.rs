use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::bar::VisualState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, Screen, TitleBar, nav_bar};
use crate::tui::host::Host;

/// Split the frame into title, screen and nav-bar areas.
pub fn layout(area: Rect, host: &Host, state: &VisualState) -> [Rect; 3] {
    use Constraint::{Length, Min};
    let bar_height = nav_bar::bar_height(host.bar.theme(), state);
    Layout::vertical([Length(1), Min(0), Length(bar_height)]).areas(area)
}

/// Area the nav bar is drawn into, for mouse hit testing.
pub fn bar_area(area: Rect, host: &Host) -> Rect {
    let state = host.bar.current_visual_state();
    layout(area, host, &state)[2]
}

pub fn draw_ui(frame: &mut Frame, host: &Host) {
    let state = host.bar.current_visual_state();
    let [title_area, main_area, bar_area] = layout(frame.area(), host, &state);

    TitleBar::new(
        host.style.display_name().to_string(),
        host.status_message.clone(),
    )
    .render(frame, title_area);

    let title = host
        .bar
        .selected_item()
        .map_or(state.selected_id.as_str(), |item| item.label.as_str());
    Screen {
        title,
        route_stack: host.router.stack(),
        query: state.search_expanded.then_some(state.query.as_str()),
        results: &host.results,
        last_submitted: host.last_submitted.as_deref(),
    }
    .render(frame, main_area);

    NavBar::new(host.bar.items(), host.bar.theme(), &state)
        .focused(Some(host.focused))
        .render(frame, bar_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, FlowtabConfig, resolve_with};
    use crate::core::demo::DemoItems;
    use crate::core::theme::StylePreset;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_full_frame() {
        let cli = CliOverrides {
            style: Some(StylePreset::ModernPill),
            items: Some(DemoItems::WithSearch),
            ..Default::default()
        };
        let config = resolve_with(&FlowtabConfig::default(), &cli, |_| None).unwrap();
        let host = Host::new(&config).unwrap();

        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &host)).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("FlowTab (style: Modern Pill)"));
        assert!(text.contains("Home screen"));
        assert!(text.contains("Favorites"));

        let bar = bar_area(Rect::new(0, 0, 80, 20), &host);
        assert_eq!(bar.y + bar.height, 20);
        assert_eq!(bar.height, 4);
    }
}
