//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::item::{Cup, Item, ItemColor, Lid};
use crate::core::state::App;
use crate::core::tower::Tower;

/// Builds a tower by pushing each `"cup N"` / `"lid N"` step in order.
///
/// Panics if a step is malformed or the push is rejected.
pub fn tower_with(width: i64, max_height: i64, steps: &[&str]) -> Tower {
    let mut tower = Tower::new(width, max_height);
    for step in steps {
        let (kind, id) = step
            .split_once(' ')
            .unwrap_or_else(|| panic!("bad step {step:?}"));
        let id: i64 = id.parse().unwrap_or_else(|_| panic!("bad id in {step:?}"));
        let result = match kind {
            "cup" => tower.push_cup(id),
            "lid" => tower.push_lid(id),
            _ => panic!("bad kind in {step:?}"),
        };
        result.unwrap_or_else(|e| panic!("{step:?} rejected: {e}"));
    }
    tower
}

/// Renders the stack as `"cup 3, lid 3, cup 1"`, base first.
pub fn kinds_and_ids(tower: &Tower) -> String {
    tower
        .items()
        .iter()
        .map(Item::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn cup(id: i64) -> Item {
    Item::Cup(Cup::new(id, id, ItemColor::for_id(id)))
}

pub fn lid(id: i64) -> Item {
    Item::Lid(Lid::new(id, id, ItemColor::for_id(id)))
}

/// Creates a test App around an empty 10 x 50 tower.
pub fn test_app() -> App {
    App::new(Tower::new(10, 50))
}
