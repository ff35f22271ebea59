//! # Actions
//!
//! Everything a user can ask of the simulator becomes an `Action`.
//! Typing `pushCup 3`? That's `Action::PushCup(3)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the driver what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Mutating actions record their outcome in `App::last_ok`. Queries only
//! write the status message.

use log::debug;

use crate::core::item::Item;
use crate::core::state::App;
use crate::core::tower::TowerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PushCup(i64),
    PushLid(i64),
    PopCup,
    PopLid,
    RemoveCup(i64),
    RemoveLid(i64),
    OrderTower,
    ReverseTower,
    // Queries
    Height,
    LidedCups,
    StackingItems,
    LastOk,
    // Display
    MakeVisible,
    MakeInvisible,
    Exit,
}

/// What the driver should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Tower contents or visibility changed; hand a fresh snapshot to the renderer.
    Render,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::PushCup(id) => {
            let result = app.tower.push_cup(id).map(|()| {
                format!("Pushed cup {id}, height {}", app.tower.height())
            });
            apply_outcome(app, result)
        }
        Action::PushLid(id) => {
            let result = app.tower.push_lid(id).map(|()| {
                format!("Pushed lid {id}, height {}", app.tower.height())
            });
            apply_outcome(app, result)
        }
        Action::PopCup => {
            let result = app.tower.pop_cup().map(|item| format!("Popped {item}"));
            apply_outcome(app, result)
        }
        Action::PopLid => {
            let result = app.tower.pop_lid().map(|item| format!("Popped {item}"));
            apply_outcome(app, result)
        }
        Action::RemoveCup(id) => {
            let result = app.tower.remove_cup(id).map(|item| format!("Removed {item}"));
            apply_outcome(app, result)
        }
        Action::RemoveLid(id) => {
            let result = app.tower.remove_lid(id).map(|item| format!("Removed {item}"));
            apply_outcome(app, result)
        }
        Action::OrderTower => {
            let dropped = app.tower.order_tower();
            let message = reorder_message("Ordered tower, largest at base", &dropped);
            apply_outcome(app, Ok(message))
        }
        Action::ReverseTower => {
            let dropped = app.tower.reverse_tower();
            let message = reorder_message("Reversed tower, smallest at base", &dropped);
            apply_outcome(app, Ok(message))
        }
        Action::Height => {
            app.status_message =
                format!("Height: {} of {}", app.tower.height(), app.tower.max_height());
            Effect::None
        }
        Action::LidedCups => {
            app.status_message =
                format!("Lided cups: {}", format_ids(&app.tower.lided_cups()));
            Effect::None
        }
        Action::StackingItems => {
            app.status_message =
                format!("Stacking items: {}", format_items(app.tower.items()));
            Effect::None
        }
        Action::LastOk => {
            app.status_message = format!("Last operation ok: {}", app.last_ok);
            Effect::None
        }
        Action::MakeVisible => {
            if app.viewport_fits {
                app.visible = true;
                app.last_ok = true;
                app.status_message = String::from("Tower visible");
                Effect::Render
            } else {
                app.last_ok = false;
                app.status_message = String::from("The tower does not fit on screen");
                Effect::None
            }
        }
        Action::MakeInvisible => {
            app.visible = false;
            app.last_ok = true;
            app.status_message = String::from("Tower hidden");
            Effect::Render
        }
        Action::Exit => {
            app.visible = false;
            app.last_ok = true;
            app.status_message = String::from("Bye");
            Effect::Quit
        }
    }
}

fn apply_outcome(app: &mut App, result: Result<String, TowerError>) -> Effect {
    app.last_ok = app.tower.ok();
    match result {
        Ok(message) => {
            app.status_message = message;
            Effect::Render
        }
        Err(e) => {
            app.status_message = format!("Rejected: {e}");
            Effect::None
        }
    }
}

fn reorder_message(done: &str, dropped: &[Item]) -> String {
    if dropped.is_empty() {
        done.to_string()
    } else {
        format!("{done}; dropped {}", format_items(dropped))
    }
}

/// `[1, 3]` style list.
pub fn format_ids(ids: &[i64]) -> String {
    let joined = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

/// `cup 3, lid 3` style list, or `(empty)`.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return String::from("(empty)");
    }
    items.iter().map(Item::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_push_success_requests_render() {
        let mut app = test_app();
        let effect = update(&mut app, Action::PushCup(3));
        assert_eq!(effect, Effect::Render);
        assert!(app.last_ok);
        assert_eq!(app.status_message, "Pushed cup 3, height 5");
    }

    #[test]
    fn test_rejected_push_reports_and_keeps_state() {
        let mut app = test_app();
        update(&mut app, Action::PushCup(3));
        let effect = update(&mut app, Action::PushCup(3));
        assert_eq!(effect, Effect::None);
        assert!(!app.last_ok);
        assert!(app.status_message.starts_with("Rejected:"));
        assert_eq!(app.tower.height(), 5);
    }

    #[test]
    fn test_pop_and_remove_messages() {
        let mut app = test_app();
        update(&mut app, Action::PushCup(1));
        update(&mut app, Action::PushLid(1));
        update(&mut app, Action::PopLid);
        assert_eq!(app.status_message, "Popped lid 1");
        update(&mut app, Action::RemoveCup(1));
        assert_eq!(app.status_message, "Removed cup 1");
        assert!(app.tower.items().is_empty());

        update(&mut app, Action::RemoveLid(9));
        assert!(!app.last_ok);
    }

    #[test]
    fn test_order_then_lided_cups_query() {
        let mut app = test_app();
        for action in [
            Action::PushCup(1),
            Action::PushCup(3),
            Action::PushCup(2),
            Action::PushLid(1),
            Action::PushLid(3),
        ] {
            update(&mut app, action);
        }
        update(&mut app, Action::OrderTower);
        assert!(app.last_ok);
        assert_eq!(app.status_message, "Ordered tower, largest at base");

        update(&mut app, Action::LidedCups);
        assert_eq!(app.status_message, "Lided cups: [1, 3]");
        update(&mut app, Action::StackingItems);
        assert_eq!(
            app.status_message,
            "Stacking items: cup 3, lid 3, cup 2, cup 1, lid 1"
        );
    }

    #[test]
    fn test_queries_leave_last_ok_alone() {
        let mut app = test_app();
        update(&mut app, Action::PopCup);
        assert!(!app.last_ok);
        for query in [Action::Height, Action::LidedCups, Action::StackingItems, Action::LastOk] {
            assert_eq!(update(&mut app, query), Effect::None);
            assert!(!app.last_ok);
        }
        assert_eq!(app.status_message, "Last operation ok: false");
    }

    #[test]
    fn test_height_query() {
        let mut app = test_app();
        update(&mut app, Action::PushCup(2));
        update(&mut app, Action::Height);
        assert_eq!(app.status_message, "Height: 3 of 50");
    }

    #[test]
    fn test_make_visible_fails_when_viewport_too_small() {
        let mut app = test_app();
        app.visible = false;
        app.viewport_fits = false;
        assert_eq!(update(&mut app, Action::MakeVisible), Effect::None);
        assert!(!app.last_ok);
        assert!(!app.visible);

        app.viewport_fits = true;
        assert_eq!(update(&mut app, Action::MakeVisible), Effect::Render);
        assert!(app.last_ok);
        assert!(app.visible);
    }

    #[test]
    fn test_make_invisible_and_exit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::MakeInvisible), Effect::Render);
        assert!(!app.visible);
        assert_eq!(update(&mut app, Action::Exit), Effect::Quit);
        assert!(app.last_ok);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_ids(&[]), "[]");
        assert_eq!(format_ids(&[2, 5]), "[2, 5]");
        assert_eq!(format_items(&[]), "(empty)");
    }
}
