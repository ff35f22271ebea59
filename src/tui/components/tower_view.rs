//! # TowerView Component
//!
//! Draws a [`TowerSnapshot`]: walls, base, an optional height ruler, and
//! every item from the base up.
//!
//! ```text
//!  10┤│          │
//!    ┤│   ████   │   lid 2
//!    ┤│   │  │   │   cup 2 (height 3)
//!    ┤│   │  │   │
//!   5┤│   └2─┘   │
//!     └──────────┘
//! ```
//!
//! ## Geometry
//!
//! One tower unit is `scale` rows tall and `CELL_ASPECT * scale` columns
//! wide, so the drawing keeps its proportions on cells that are roughly
//! twice as tall as they are wide. The scale is the largest one at which
//! both dimensions fit, never below 1. If even scale 1 does not fit,
//! [`fits_on_screen`] is false and only a notice is drawn.
//!
//! The view holds no stacking rules. It draws whatever the snapshot says.

use crate::core::item::{ItemColor, ItemKind};
use crate::core::snapshot::TowerSnapshot;
use crate::tui::component::Component;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Columns per tower unit at scale 1.
pub const CELL_ASPECT: u16 = 2;
/// Ruler labels (2 columns) plus the tick column.
const RULER_WIDTH: u16 = 3;
const WALL: u16 = 1;
const BASE: u16 = 1;
const H_OVERHEAD: u16 = RULER_WIDTH + 2 * WALL;
/// Ruler labels every this many units.
const LABEL_EVERY: i64 = 5;

/// Cells per tower unit that fit `area`, at least 1.
pub fn scale_for(area: Rect, width: i64, max_height: i64) -> u16 {
    let avail_w = i64::from(area.width.saturating_sub(H_OVERHEAD));
    let avail_h = i64::from(area.height.saturating_sub(BASE));
    let scale_x = avail_w / width.max(1).saturating_mul(i64::from(CELL_ASPECT));
    let scale_y = avail_h / max_height.max(1);
    to_cells(scale_x.min(scale_y).max(1))
}

/// Whether a `width` × `max_height` tower can be drawn whole inside `area`.
pub fn fits_on_screen(area: Rect, width: i64, max_height: i64) -> bool {
    let scale = i64::from(scale_for(area, width, max_height));
    let needed_w = width
        .saturating_mul(i64::from(CELL_ASPECT))
        .saturating_mul(scale)
        .saturating_add(i64::from(H_OVERHEAD));
    let needed_h = max_height
        .saturating_mul(scale)
        .saturating_add(i64::from(BASE));
    needed_w <= i64::from(area.width) && needed_h <= i64::from(area.height)
}

fn to_cells(value: i64) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// Screen placement of a tower and its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowerLayout {
    pub scale: u16,
    /// The space between the walls and above the base.
    pub interior: Rect,
    /// One rect per snapshot item, base first.
    pub items: Vec<Rect>,
}

impl TowerLayout {
    /// Row of the base line, just below the interior.
    pub fn base_y(&self) -> u16 {
        self.interior.bottom()
    }
}

/// Place the tower at the bottom of `area`, centered horizontally.
/// `None` when it does not fit.
pub fn layout_items(snapshot: &TowerSnapshot, area: Rect) -> Option<TowerLayout> {
    if !fits_on_screen(area, snapshot.width, snapshot.max_height) {
        return None;
    }
    let scale = scale_for(area, snapshot.width, snapshot.max_height);
    let unit_w = i64::from(CELL_ASPECT) * i64::from(scale);
    let unit_h = i64::from(scale);

    let interior_w = to_cells(snapshot.width * unit_w);
    let interior_h = to_cells(snapshot.max_height * unit_h);
    let total_w = interior_w + H_OVERHEAD;
    let left = area.x + (area.width - total_w) / 2;
    let base_y = area.bottom() - BASE;
    let interior = Rect::new(left + RULER_WIDTH + WALL, base_y - interior_h, interior_w, interior_h);

    let mut y = base_y;
    let items = snapshot
        .items
        .iter()
        .map(|item| {
            let h = to_cells(item.height * unit_h);
            let w = to_cells(item.size * unit_w).min(interior_w);
            y = y.saturating_sub(h).max(interior.y);
            let x = interior.x + (interior_w - w) / 2;
            Rect::new(x, y, w, h.min(base_y - y))
        })
        .collect();

    Some(TowerLayout { scale, interior, items })
}

fn item_color(color: ItemColor) -> Color {
    match color {
        ItemColor::Red => Color::Red,
        ItemColor::Blue => Color::Blue,
        ItemColor::Green => Color::Green,
        ItemColor::Yellow => Color::Yellow,
        ItemColor::Magenta => Color::Magenta,
        // Plain black vanishes on dark terminals.
        ItemColor::Black => Color::DarkGray,
    }
}

/// Tower drawing component.
///
/// # Props
///
/// - `snapshot`: What to draw
/// - `show_ruler`: Whether to draw height ticks left of the tower
pub struct TowerView<'a> {
    pub snapshot: &'a TowerSnapshot,
    pub show_ruler: bool,
}

impl<'a> TowerView<'a> {
    pub fn new(snapshot: &'a TowerSnapshot, show_ruler: bool) -> Self {
        Self { snapshot, show_ruler }
    }

    fn draw_walls(&self, buf: &mut Buffer, layout: &TowerLayout) {
        let interior = layout.interior;
        let left = interior.x - WALL;
        let right = interior.right();
        let style = Style::default().fg(Color::Gray);

        for y in interior.y..interior.bottom() {
            buf.set_string(left, y, "│", style);
            buf.set_string(right, y, "│", style);
        }
        let base_y = layout.base_y();
        buf.set_string(left, base_y, "└", style);
        buf.set_string(interior.x, base_y, "─".repeat(usize::from(interior.width)), style);
        buf.set_string(right, base_y, "┘", style);
    }

    fn draw_ruler(&self, buf: &mut Buffer, layout: &TowerLayout) {
        let tick_x = layout.interior.x - WALL - 1;
        let style = Style::default().fg(Color::DarkGray);

        for unit in 1..=self.snapshot.max_height {
            let y = layout.base_y() - to_cells(unit * i64::from(layout.scale));
            buf.set_string(tick_x, y, "┤", style);
            if unit % LABEL_EVERY == 0 && unit < 100 {
                buf.set_string(tick_x - 2, y, format!("{unit:>2}"), style);
            }
        }
    }
}

impl Component for TowerView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Tower ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(layout) = layout_items(self.snapshot, inner) else {
            let notice = Paragraph::new(format!(
                "Terminal too small to show a {} x {} tower",
                self.snapshot.width, self.snapshot.max_height
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(notice, inner);
            return;
        };

        self.draw_walls(frame.buffer_mut(), &layout);
        if self.show_ruler {
            self.draw_ruler(frame.buffer_mut(), &layout);
        }

        for (item, rect) in self.snapshot.items.iter().zip(&layout.items) {
            let color = item_color(item.color);
            let label = Line::from(item.id.to_string()).centered();
            match item.kind {
                ItemKind::Cup => {
                    let cup = Block::new()
                        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                        .border_style(Style::default().fg(color))
                        .title_bottom(label);
                    frame.render_widget(cup, *rect);
                }
                ItemKind::Lid => {
                    let lid = Paragraph::new(label)
                        .style(Style::default().bg(color).fg(Color::White));
                    frame.render_widget(lid, *rect);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tower_with;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_scale_is_at_least_one() {
        assert_eq!(scale_for(Rect::new(0, 0, 3, 2), 10, 50), 1);
    }

    #[test]
    fn test_scale_takes_smaller_axis() {
        // 45 free columns / 20 = 2, 29 free rows / 10 = 2
        assert_eq!(scale_for(Rect::new(0, 0, 50, 30), 10, 10), 2);
        // Plenty of columns, rows only allow 1
        assert_eq!(scale_for(Rect::new(0, 0, 200, 15), 10, 10), 1);
    }

    #[test]
    fn test_fits_on_screen_exact_boundary() {
        assert!(fits_on_screen(Rect::new(0, 0, 25, 11), 10, 10));
        assert!(!fits_on_screen(Rect::new(0, 0, 24, 11), 10, 10));
        assert!(!fits_on_screen(Rect::new(0, 0, 25, 10), 10, 10));
    }

    #[test]
    fn test_layout_stacks_from_base_and_centers() {
        let snapshot = tower_with(10, 10, &["cup 2", "lid 2"]).snapshot();
        let layout = layout_items(&snapshot, Rect::new(0, 0, 25, 11)).unwrap();

        assert_eq!(layout.scale, 1);
        assert_eq!(layout.interior, Rect::new(4, 0, 20, 10));
        assert_eq!(layout.base_y(), 10);
        assert_eq!(layout.items, vec![Rect::new(12, 7, 4, 3), Rect::new(12, 6, 4, 1)]);
    }

    #[test]
    fn test_layout_none_when_too_small() {
        let snapshot = tower_with(10, 50, &[]).snapshot();
        assert!(layout_items(&snapshot, Rect::new(0, 0, 80, 20)).is_none());
    }

    #[test]
    fn test_render_draws_lid_in_its_color() {
        let snapshot = tower_with(10, 10, &["cup 2", "lid 2"]).snapshot();
        // Block borders take one cell on each side, leaving a 25 x 11 inner area
        let backend = TestBackend::new(27, 13);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                TowerView::new(&snapshot, true).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(13, 7)].bg, Color::Blue);
        assert_eq!(buffer[(13, 8)].symbol(), "│");
        assert_eq!(buffer[(4, 11)].symbol(), "└");
        assert_eq!(buffer[(25, 11)].symbol(), "┘");
    }

    #[test]
    fn test_render_ruler_labels() {
        let snapshot = tower_with(10, 10, &[]).snapshot();
        let backend = TestBackend::new(27, 13);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                TowerView::new(&snapshot, true).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("10┤"));
        assert!(text.contains(" 5┤"));
    }

    #[test]
    fn test_render_too_small_shows_notice() {
        let snapshot = tower_with(10, 50, &[]).snapshot();
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                TowerView::new(&snapshot, true).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Terminal too small"));
    }
}
