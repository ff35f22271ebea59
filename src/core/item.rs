//! # Stack Items
//!
//! Cups and lids are the only things that go into a tower.
//!
//! ```text
//! Item
//! ├── Cup { id, size, color }   height = 2·id − 1
//! └── Lid { id, size, color }   height = 1
//! ```
//!
//! A cup and a lid that share an id are a *matching pair*, but they stay two
//! separate items. Whether a lid actually covers its cup depends only on where
//! both sit in the tower (see [`CoveredCup`]).
//!
//! Items are created by the tower itself. Constructors are crate-private so
//! that nothing outside the engine can build an item that skipped validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cosmetic color of an item. Never consulted for legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemColor {
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Black,
}

/// Cyclic palette used to color new items.
pub const PALETTE: [ItemColor; 6] = [
    ItemColor::Red,
    ItemColor::Blue,
    ItemColor::Green,
    ItemColor::Yellow,
    ItemColor::Magenta,
    ItemColor::Black,
];

impl ItemColor {
    /// Palette color for an id: `PALETTE[(id - 1) mod 6]`.
    pub fn for_id(id: i64) -> Self {
        let len = PALETTE.len() as i64;
        PALETTE[(id - 1).rem_euclid(len) as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemColor::Red => "red",
            ItemColor::Blue => "blue",
            ItemColor::Green => "green",
            ItemColor::Yellow => "yellow",
            ItemColor::Magenta => "magenta",
            ItemColor::Black => "black",
        }
    }
}

impl fmt::Display for ItemColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discriminates cups from lids without borrowing the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Cup,
    Lid,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Cup => f.write_str("cup"),
            ItemKind::Lid => f.write_str("lid"),
        }
    }
}

/// A cup. Its lateral size is its id and its height is `2·id − 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cup {
    id: i64,
    size: i64,
    color: ItemColor,
}

impl Cup {
    /// Panics on a non-positive id: that is a caller bug, not user input.
    pub(crate) fn new(id: i64, size: i64, color: ItemColor) -> Self {
        assert!(id > 0, "cup id must be positive, got {id}");
        Self { id, size, color }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn color(&self) -> ItemColor {
        self.color
    }

    pub fn height(&self) -> i64 {
        cup_height(self.id)
    }
}

/// A lid. Always one unit tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lid {
    id: i64,
    size: i64,
    color: ItemColor,
}

impl Lid {
    pub const HEIGHT: i64 = 1;

    pub(crate) fn new(id: i64, size: i64, color: ItemColor) -> Self {
        assert!(id > 0, "lid id must be positive, got {id}");
        Self { id, size, color }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn color(&self) -> ItemColor {
        self.color
    }

    pub fn height(&self) -> i64 {
        Self::HEIGHT
    }
}

/// Height of the cup with the given id.
///
/// Saturates instead of overflowing so that absurd ids are rejected by the
/// capacity check rather than wrapping around.
pub fn cup_height(id: i64) -> i64 {
    id.saturating_mul(2).saturating_sub(1)
}

/// One stacked item, base-to-top order is owned by the tower.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Cup(Cup),
    Lid(Lid),
}

impl Item {
    pub fn id(&self) -> i64 {
        match self {
            Item::Cup(cup) => cup.id(),
            Item::Lid(lid) => lid.id(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Cup(_) => ItemKind::Cup,
            Item::Lid(_) => ItemKind::Lid,
        }
    }

    pub fn height(&self) -> i64 {
        match self {
            Item::Cup(cup) => cup.height(),
            Item::Lid(lid) => lid.height(),
        }
    }

    pub fn size(&self) -> i64 {
        match self {
            Item::Cup(cup) => cup.size(),
            Item::Lid(lid) => lid.size(),
        }
    }

    pub fn color(&self) -> ItemColor {
        match self {
            Item::Cup(cup) => cup.color(),
            Item::Lid(lid) => lid.color(),
        }
    }

    pub fn is(&self, kind: ItemKind) -> bool {
        self.kind() == kind
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// A cup with its matching lid sitting directly on top of it.
///
/// This is a view over two adjacent tower items, not a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoveredCup<'a> {
    cup: &'a Cup,
    lid: &'a Lid,
}

impl<'a> CoveredCup<'a> {
    /// Pairs `below` and `above` if they form a covered cup.
    pub fn from_adjacent(below: &'a Item, above: &'a Item) -> Option<Self> {
        match (below, above) {
            (Item::Cup(cup), Item::Lid(lid)) if cup.id() == lid.id() => Some(Self { cup, lid }),
            _ => None,
        }
    }

    pub fn id(&self) -> i64 {
        self.cup.id()
    }

    pub fn cup(&self) -> &'a Cup {
        self.cup
    }

    pub fn lid(&self) -> &'a Lid {
        self.lid
    }

    /// Cup height plus the lid on top.
    pub fn height(&self) -> i64 {
        self.cup.height() + self.lid.height()
    }
}
