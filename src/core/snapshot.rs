//! # Tower Snapshot
//!
//! The read-only hand-off from the engine to whoever draws or reports it.
//! A snapshot is an owned copy: holding one never borrows the tower, and
//! nothing done to it can feed back into the engine.

use serde::Serialize;

use crate::core::item::{Item, ItemColor, ItemKind};

/// One stacked item as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub kind: ItemKind,
    pub id: i64,
    pub height: i64,
    pub size: i64,
    pub color: ItemColor,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            kind: item.kind(),
            id: item.id(),
            height: item.height(),
            size: item.size(),
            color: item.color(),
        }
    }
}

/// Fixed capacities plus the current stack, base first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TowerSnapshot {
    pub width: i64,
    pub max_height: i64,
    pub height: i64,
    pub items: Vec<ItemView>,
}

impl TowerSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
