//! # TitleBar Component
//!
//! Top status bar showing the tower dimensions and the latest outcome.
//!
//! ## Responsibilities
//!
//! - Display the tower's width and maximum height
//! - Display the status message left by the last command
//! - Color the status by whether the last operation succeeded
//!
//! TitleBar is purely presentational. It receives all data as props and
//! has no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(10, 50, "Pushed cup 1, height 1".to_string(), true);
//! title_bar.render(frame, area);
//! ```
//!
//! Rendered as `"Cup Tower (10 x 50) | Pushed cup 1, height 1"`, or just
//! `"Cup Tower (10 x 50)"` when the status message is empty.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `width`, `max_height`: Tower dimensions
/// - `status_message`: Outcome of the last command
/// - `last_ok`: Whether that outcome was a success
pub struct TitleBar {
    pub width: i64,
    pub max_height: i64,
    pub status_message: String,
    pub last_ok: bool,
}

impl TitleBar {
    pub fn new(width: i64, max_height: i64, status_message: String, last_ok: bool) -> Self {
        Self {
            width,
            max_height,
            status_message,
            last_ok,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(format!(
            "Cup Tower ({} x {})",
            self.width, self.max_height
        ))];

        if !self.status_message.is_empty() {
            let color = if self.last_ok { Color::Green } else { Color::Red };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(color),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
