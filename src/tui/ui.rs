use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{InfoPanel, TitleBar, TowerView, tower_view};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};

/// Width of the info panel to the right of the tower.
const INFO_PANEL_WIDTH: u16 = 34;

struct Areas {
    title: Rect,
    tower: Rect,
    info: Rect,
    input: Rect,
}

fn split(frame_area: Rect) -> Areas {
    use Constraint::{Length, Min};
    let [title, main, input] = Layout::vertical([Length(1), Min(0), Length(3)]).areas(frame_area);
    let [tower, info] = Layout::horizontal([Min(0), Length(INFO_PANEL_WIDTH)]).areas(main);
    Areas { title, tower, info, input }
}

/// Whether a `width` × `max_height` tower fits the tower pane of a frame
/// this size.
pub fn viewport_fits(frame_area: Rect, width: i64, max_height: i64) -> bool {
    let pane = Block::bordered().inner(split(frame_area).tower);
    tower_view::fits_on_screen(pane, width, max_height)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let areas = split(frame.area());
    let snapshot = app.tower.snapshot();

    TitleBar::new(
        snapshot.width,
        snapshot.max_height,
        app.status_message.clone(),
        app.last_ok,
    )
    .render(frame, areas.title);

    if app.visible {
        TowerView::new(&snapshot, app.show_ruler).render(frame, areas.tower);
    } else {
        draw_hidden_view(frame, areas.tower);
    }

    let lided_cups = app.tower.lided_cups();
    let covered = app.tower.covered_cups();
    InfoPanel {
        snapshot: &snapshot,
        lided_cups: &lided_cups,
        covered: &covered,
        last_ok: app.last_ok,
        visible: app.visible,
    }
    .render(frame, areas.info);

    tui.input_box.render(frame, areas.input);
}

fn draw_hidden_view(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new("Tower hidden. Type makeVisible to show it.")
        .block(Block::bordered().title(" Tower "))
        .alignment(Alignment::Center);
    frame.render_widget(notice, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draw_ui_shows_all_panes() {
        let mut app = test_app();
        update(&mut app, Action::PushCup(2));
        let text = screen_text(&app, 100, 60);

        assert!(text.contains("Cup Tower (10 x 50)"));
        assert!(text.contains("Pushed cup 2, height 3"));
        assert!(text.contains(" Tower "));
        assert!(text.contains(" Info "));
        assert!(text.contains("Command"));
    }

    #[test]
    fn test_draw_ui_hidden_tower() {
        let mut app = test_app();
        update(&mut app, Action::MakeInvisible);
        let text = screen_text(&app, 100, 60);
        assert!(text.contains("Tower hidden"));
    }

    #[test]
    fn test_viewport_fits_tracks_frame_size() {
        // 60 rows: 1 title + 3 input + 2 border leaves 54 >= 50 + base
        assert!(viewport_fits(Rect::new(0, 0, 100, 60), 10, 50));
        assert!(!viewport_fits(Rect::new(0, 0, 100, 40), 10, 50));
        // 34 columns go to the info panel
        assert!(!viewport_fits(Rect::new(0, 0, 50, 60), 10, 50));
    }
}
