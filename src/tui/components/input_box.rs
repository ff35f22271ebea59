//! # InputBox Component
//!
//! Single-line command prompt.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Recall earlier commands (Up/Down)
//!
//! ## State Management
//!
//! The buffer, cursor and history are internal state. Nothing here knows
//! what a valid command is; the parent parses whatever is submitted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Oldest commands are forgotten past this many.
const HISTORY_LIMIT: usize = 100;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

/// Text input component.
///
/// # State
///
/// - `buffer`: Current text being typed
/// - `cursor`: Byte offset of the cursor within `buffer`
/// - `history`: Submitted commands, oldest first
pub struct InputBox {
    pub buffer: String,
    cursor: usize,
    history: Vec<String>,
    /// Index into `history` while browsing, `None` when editing fresh text.
    history_index: Option<usize>,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    fn set_buffer(&mut self, text: String) {
        self.cursor = text.len();
        self.buffer = text;
    }

    fn recall_prev(&mut self) -> Option<InputEvent> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.history_index {
            Some(0) => return None,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.history_index = Some(index);
        self.set_buffer(self.history[index].clone());
        Some(InputEvent::ContentChanged)
    }

    fn recall_next(&mut self) -> Option<InputEvent> {
        let index = self.history_index?;
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.set_buffer(self.history[index + 1].clone());
        } else {
            self.history_index = None;
            self.set_buffer(String::new());
        }
        Some(InputEvent::ContentChanged)
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Command (Enter to run, Esc to quit)");

        // Scroll horizontally so the cursor stays inside the box.
        let inner_width = area.width.saturating_sub(2) as usize;
        let cursor_col = self.buffer[..self.cursor].chars().count();
        let skip = (cursor_col + 1).saturating_sub(inner_width);
        let visible: String = self.buffer.chars().skip(skip).collect();

        let input = Paragraph::new(visible)
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, area);

        let x = area.x + 1 + (cursor_col - skip) as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // One command per line; a pasted newline would never submit.
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::HistoryPrev => self.recall_prev(),
            TuiEvent::HistoryNext => self.recall_next(),
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                self.history_index = None;
                if self.history.last() != Some(&text) {
                    self.history.push(text.clone());
                    if self.history.len() > HISTORY_LIMIT {
                        self.history.remove(0);
                    }
                }
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_cursor_editing_mid_buffer() {
        let mut input = InputBox::new();
        type_text(&mut input, "pushCup 3");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('1'));
        assert_eq!(input.buffer, "pushCup 13");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "ushCup 13");

        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.cursor, input.buffer.len());
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("pushLid\n 2\r\n".to_string()));
        assert_eq!(input.buffer, "pushLid 2");
        assert_eq!(input.cursor, 9);
    }

    #[test]
    fn test_submit() {
        let mut input = InputBox::new();
        type_text(&mut input, "height");

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("height".to_string())));
        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_submit_blank_is_ignored() {
        let mut input = InputBox::new();
        type_text(&mut input, "   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_history_recall() {
        let mut input = InputBox::new();
        type_text(&mut input, "pushCup 1");
        input.handle_event(&TuiEvent::Submit);
        type_text(&mut input, "pushLid 1");
        input.handle_event(&TuiEvent::Submit);

        input.handle_event(&TuiEvent::HistoryPrev);
        assert_eq!(input.buffer, "pushLid 1");
        input.handle_event(&TuiEvent::HistoryPrev);
        assert_eq!(input.buffer, "pushCup 1");
        assert_eq!(input.handle_event(&TuiEvent::HistoryPrev), None);

        input.handle_event(&TuiEvent::HistoryNext);
        assert_eq!(input.buffer, "pushLid 1");
        input.handle_event(&TuiEvent::HistoryNext);
        assert!(input.buffer.is_empty());
        assert_eq!(input.handle_event(&TuiEvent::HistoryNext), None);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut input = InputBox::new();
        for id in 0..HISTORY_LIMIT + 5 {
            type_text(&mut input, &format!("pushCup {id}"));
            input.handle_event(&TuiEvent::Submit);
        }
        assert_eq!(input.history.len(), HISTORY_LIMIT);
        assert_eq!(input.history[0], "pushCup 5");

        input.handle_event(&TuiEvent::HistoryPrev);
        assert_eq!(input.buffer, format!("pushCup {}", HISTORY_LIMIT + 4));
    }

    #[test]
    fn test_render_shows_buffer_and_title() {
        let backend = TestBackend::new(50, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        type_text(&mut input, "orderTower");

        terminal.draw(|f| {
            input.render(f, f.area());
        }).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("Command"));
        assert!(text.contains("orderTower"));
    }
}
