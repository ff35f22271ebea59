//! # InfoPanel Component
//!
//! Side panel with the tower's queries kept permanently on screen: height,
//! last outcome, lided cups with their combined heights, the stack listed
//! top first, and a short command reference.

use crate::core::action::format_ids;
use crate::core::command::HELP;
use crate::core::item::CoveredCup;
use crate::core::snapshot::TowerSnapshot;
use crate::tui::component::Component;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

/// # Props
///
/// - `snapshot`: Current tower
/// - `lided_cups`: Ids of covered cups, ascending
/// - `covered`: Cup/lid pairs in stack order, base first
/// - `last_ok`: Outcome of the last operation
/// - `visible`: Whether the tower is being drawn
pub struct InfoPanel<'a> {
    pub snapshot: &'a TowerSnapshot,
    pub lided_cups: &'a [i64],
    pub covered: &'a [CoveredCup<'a>],
    pub last_ok: bool,
    pub visible: bool,
}

impl InfoPanel<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let ok_style = Style::default().fg(if self.last_ok { Color::Green } else { Color::Red });

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Height: ", bold),
                Span::raw(format!("{} of {}", self.snapshot.height, self.snapshot.max_height)),
            ]),
            Line::from(vec![
                Span::styled("Width: ", bold),
                Span::raw(self.snapshot.width.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Ok: ", bold),
                Span::styled(self.last_ok.to_string(), ok_style),
            ]),
            Line::from(vec![
                Span::styled("Lided cups: ", bold),
                Span::raw(format_ids(self.lided_cups)),
            ]),
            Line::from(vec![
                Span::styled("Visible: ", bold),
                Span::raw(self.visible.to_string()),
            ]),
            Line::default(),
            Line::styled("Covered (top first):", bold),
        ];

        if self.covered.is_empty() {
            lines.push(Line::raw("  (none)"));
        }
        for pair in self.covered.iter().rev() {
            lines.push(Line::raw(format!(
                "  cup {} + lid {} = h{}",
                pair.cup().id(),
                pair.lid().id(),
                pair.height()
            )));
        }

        lines.push(Line::default());
        lines.push(Line::styled("Items (top first):", bold));

        if self.snapshot.is_empty() {
            lines.push(Line::raw("  (empty)"));
        }
        for item in self.snapshot.items.iter().rev() {
            lines.push(Line::raw(format!(
                "  {} {} h{} {}",
                item.kind, item.id, item.height, item.color
            )));
        }

        lines.push(Line::default());
        lines.push(Line::styled("Commands:", bold));
        lines.extend(
            HELP.lines()
                .map(|l| Line::styled(format!("  {l}"), Style::default().fg(Color::DarkGray))),
        );
        lines
    }
}

impl Component for InfoPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = Paragraph::new(self.lines())
            .block(Block::bordered().title(" Info "))
            .wrap(Wrap { trim: false });
        frame.render_widget(panel, area);
    }
}
