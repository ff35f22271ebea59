//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates submitted command lines into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an event (key, paste or
//! resize) and otherwise sleeps in `poll_event`. All pending events are
//! drained before the next draw so a large paste costs one frame.
//!
//! Before each command is applied, `App::viewport_fits` is refreshed from
//! the current frame size so `makeVisible` can refuse a tower that would
//! not fit.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::command;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(mut app: App) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app),
        Err(e) => Err(e),
    };
    ratatui::restore();
    info!("TUI closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, &mut tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain all pending events before next draw
        let mut pending = vec![first_event];
        while let Some(event) = poll_event(Duration::ZERO)? {
            pending.push(event);
        }

        for event in pending {
            match event {
                TuiEvent::Quit => {
                    info!("Quit requested from keyboard");
                    return Ok(());
                }
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,
                _ => {}
            }

            let Some(InputEvent::Submit(line)) = tui.input_box.handle_event(&event) else {
                continue;
            };

            let frame_area = terminal.get_frame().area();
            app.viewport_fits =
                ui::viewport_fits(frame_area, app.tower.width(), app.tower.max_height());

            match command::parse(&line) {
                Ok(action) => {
                    debug!("Dispatching {:?}", action);
                    if update(app, action) == Effect::Quit {
                        return Ok(());
                    }
                }
                Err(e) => {
                    warn!("Bad command {:?}: {}", line, e);
                    app.status_message = format!("Error: {e}");
                }
            }
        }
    }
}
