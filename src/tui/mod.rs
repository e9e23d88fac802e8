//! # TUI Host
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the bar's
//! snapshot every frame, and translates keyboard and mouse events into
//! `core::action::Action` values through the [`host::Host`].
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms between polls and only
//! redraws after an event. All pending events are drained before the next
//! draw.

mod component;
pub mod components;
pub mod event;
pub mod host;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::host::{Host, HostSignal};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut host = Host::new(&config).map_err(std::io::Error::other)?;

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &host))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let bar_area = ui::bar_area(terminal.get_frame().area(), &host);
            if host.handle_event(event, bar_area) == HostSignal::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("FlowTab shutting down");
    ratatui::restore();
    Ok(())
}
