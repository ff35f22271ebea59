//! # Tower Engine
//!
//! The tower is the only authority on what may be stacked. Everything else
//! (the TUI, the script runner, the renderer) asks it and reports back.
//!
//! ```text
//! Tower
//! ├── width: i64            // max lateral size of any item
//! ├── max_height: i64       // max cumulative height
//! ├── items: Vec<Item>      // index 0 is the base
//! ├── current_height: i64   // always the sum of item heights
//! └── last_ok: bool         // outcome of the last mutating call
//! ```
//!
//! ## Two failure policies
//!
//! Push, pop and remove **reject** anything invalid: they return `Err`, set
//! `last_ok` to false and leave the tower untouched.
//!
//! Reordering is **best effort**: items that no longer fit are dropped and the
//! call still counts as a success.

use log::{debug, info};
use std::cmp::Reverse;
use std::fmt;

use crate::core::item::{CoveredCup, Cup, Item, ItemColor, ItemKind, Lid, cup_height};
use crate::core::snapshot::{ItemView, TowerSnapshot};

// ============================================================================
// Error Type
// ============================================================================

/// Why a push, pop or remove was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TowerError {
    /// Ids start at 1.
    NonPositiveId { kind: ItemKind, id: i64 },
    /// An item of the same kind already uses this id.
    DuplicateId { kind: ItemKind, id: i64 },
    /// The item is wider than the tower.
    TooWide { kind: ItemKind, id: i64, size: i64, width: i64 },
    /// The item would push the stack past `max_height`.
    TooTall { kind: ItemKind, id: i64, height: i64, available: i64 },
    /// Nothing of this kind (with this id, if given) is stacked.
    NotFound { kind: ItemKind, id: Option<i64> },
}

impl fmt::Display for TowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TowerError::NonPositiveId { kind, id } => {
                write!(f, "{kind} id must be positive (got {id})")
            }
            TowerError::DuplicateId { kind, id } => {
                write!(f, "a {kind} with id {id} is already stacked")
            }
            TowerError::TooWide { kind, id, size, width } => {
                write!(f, "{kind} {id} (size {size}) does not fit the tower width {width}")
            }
            TowerError::TooTall { kind, id, height, available } => write!(
                f,
                "{kind} {id} (height {height}) does not fit, only {available} left"
            ),
            TowerError::NotFound { kind, id: Some(id) } => {
                write!(f, "no {kind} with id {id} in the tower")
            }
            TowerError::NotFound { kind, id: None } => write!(f, "no {kind} in the tower"),
        }
    }
}

impl std::error::Error for TowerError {}

// ============================================================================
// Ordering
// ============================================================================

/// Direction of a full-stack reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOrder {
    /// Largest id at the base (`order_tower`).
    LargestAtBase,
    /// Smallest id at the base (`reverse_tower`).
    SmallestAtBase,
}

impl StackOrder {
    fn sort(self, items: &mut [Item]) {
        match self {
            StackOrder::LargestAtBase => items.sort_by_key(|item| Reverse(item.id())),
            StackOrder::SmallestAtBase => items.sort_by_key(Item::id),
        }
    }
}

fn fits(accumulated: i64, height: i64, max_height: i64) -> bool {
    accumulated
        .checked_add(height)
        .is_some_and(|total| total <= max_height)
}

// ============================================================================
// Tower
// ============================================================================

#[derive(Debug, Clone)]
pub struct Tower {
    width: i64,
    max_height: i64,
    items: Vec<Item>,
    current_height: i64,
    last_ok: bool,
}

impl Tower {
    /// Creates an empty tower.
    ///
    /// # Panics
    ///
    /// If either dimension is not positive. User-supplied dimensions are
    /// validated by the config layer before they get here.
    pub fn new(width: i64, max_height: i64) -> Self {
        assert!(width > 0, "tower width must be positive, got {width}");
        assert!(max_height > 0, "tower max height must be positive, got {max_height}");
        Self {
            width,
            max_height,
            items: Vec::new(),
            current_height: 0,
            last_ok: true,
        }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn max_height(&self) -> i64 {
        self.max_height
    }

    /// Stacked items, base first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    // ── Push ────────────────────────────────────────────────────────────────

    /// Stacks a new cup of height `2·id − 1` on top.
    pub fn push_cup(&mut self, id: i64) -> Result<(), TowerError> {
        let result = self.try_push_cup(id);
        self.record(result)
    }

    fn try_push_cup(&mut self, id: i64) -> Result<(), TowerError> {
        let kind = ItemKind::Cup;
        if id <= 0 {
            return Err(TowerError::NonPositiveId { kind, id });
        }
        if self.find(kind, id).is_some() {
            return Err(TowerError::DuplicateId { kind, id });
        }
        if id > self.width {
            return Err(TowerError::TooWide { kind, id, size: id, width: self.width });
        }
        let height = cup_height(id);
        self.ensure_room(kind, id, height)?;

        self.items.push(Item::Cup(Cup::new(id, id, ItemColor::for_id(id))));
        self.current_height += height;
        debug!("Pushed cup {} (height {}), tower now {}", id, height, self.current_height);
        Ok(())
    }

    /// Stacks a new lid on top.
    ///
    /// The lid takes its size and color from a stacked cup with the same id,
    /// if there is one right now. It does not have to land on that cup.
    pub fn push_lid(&mut self, id: i64) -> Result<(), TowerError> {
        let result = self.try_push_lid(id);
        self.record(result)
    }

    fn try_push_lid(&mut self, id: i64) -> Result<(), TowerError> {
        let kind = ItemKind::Lid;
        if id <= 0 {
            return Err(TowerError::NonPositiveId { kind, id });
        }
        if self.find(kind, id).is_some() {
            return Err(TowerError::DuplicateId { kind, id });
        }
        let (size, color) = match self.find(ItemKind::Cup, id) {
            Some(cup) => (cup.size(), cup.color()),
            None => (id, ItemColor::for_id(id)),
        };
        if size > self.width {
            return Err(TowerError::TooWide { kind, id, size, width: self.width });
        }
        self.ensure_room(kind, id, Lid::HEIGHT)?;

        self.items.push(Item::Lid(Lid::new(id, size, color)));
        self.current_height += Lid::HEIGHT;
        debug!("Pushed lid {}, tower now {}", id, self.current_height);
        Ok(())
    }

    fn ensure_room(&self, kind: ItemKind, id: i64, height: i64) -> Result<(), TowerError> {
        if fits(self.current_height, height, self.max_height) {
            Ok(())
        } else {
            Err(TowerError::TooTall {
                kind,
                id,
                height,
                available: self.max_height - self.current_height,
            })
        }
    }

    // ── Pop / Remove ────────────────────────────────────────────────────────

    /// Removes the topmost cup, wherever it sits.
    pub fn pop_cup(&mut self) -> Result<Item, TowerError> {
        let result = self.pop(ItemKind::Cup);
        self.record(result)
    }

    /// Removes the topmost lid, wherever it sits.
    pub fn pop_lid(&mut self) -> Result<Item, TowerError> {
        let result = self.pop(ItemKind::Lid);
        self.record(result)
    }

    /// Removes the cup with this id.
    pub fn remove_cup(&mut self, id: i64) -> Result<Item, TowerError> {
        let result = self.remove(ItemKind::Cup, id);
        self.record(result)
    }

    /// Removes the lid with this id.
    pub fn remove_lid(&mut self, id: i64) -> Result<Item, TowerError> {
        let result = self.remove(ItemKind::Lid, id);
        self.record(result)
    }

    // Top-down scan.
    fn pop(&mut self, kind: ItemKind) -> Result<Item, TowerError> {
        let index = self
            .items
            .iter()
            .rposition(|item| item.is(kind))
            .ok_or(TowerError::NotFound { kind, id: None })?;
        Ok(self.take(index))
    }

    // Base-up scan. With per-kind unique ids only one match can exist, but
    // the direction stays base-first.
    fn remove(&mut self, kind: ItemKind, id: i64) -> Result<Item, TowerError> {
        let index = self
            .items
            .iter()
            .position(|item| item.is(kind) && item.id() == id)
            .ok_or(TowerError::NotFound { kind, id: Some(id) })?;
        Ok(self.take(index))
    }

    fn take(&mut self, index: usize) -> Item {
        let item = self.items.remove(index);
        self.current_height -= item.height();
        debug!("Removed {} at index {}, tower now {}", item, index, self.current_height);
        item
    }

    // ── Reorder ─────────────────────────────────────────────────────────────

    /// Rebuilds the stack with the largest ids at the base.
    ///
    /// Returns the items that no longer fit. Always succeeds.
    pub fn order_tower(&mut self) -> Vec<Item> {
        self.rebuild(StackOrder::LargestAtBase)
    }

    /// Rebuilds the stack with the smallest ids at the base.
    ///
    /// Returns the items that no longer fit. Always succeeds.
    pub fn reverse_tower(&mut self) -> Vec<Item> {
        self.rebuild(StackOrder::SmallestAtBase)
    }

    /// Sorts cups and lids independently, then places each cup that fits
    /// followed by its matching lid (if that fits too). Leftover lids go on
    /// top in sorted order, each checked on its own.
    pub fn rebuild(&mut self, order: StackOrder) -> Vec<Item> {
        let (mut cups, mut lids): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.is(ItemKind::Cup));
        order.sort(&mut cups);
        order.sort(&mut lids);

        let mut rebuilt = Vec::with_capacity(cups.len() + lids.len());
        let mut dropped = Vec::new();
        let mut accumulated = 0;

        for cup in cups {
            if !fits(accumulated, cup.height(), self.max_height) {
                dropped.push(cup);
                continue;
            }
            accumulated += cup.height();
            let id = cup.id();
            rebuilt.push(cup);

            if let Some(index) = lids.iter().position(|lid| lid.id() == id)
                && fits(accumulated, lids[index].height(), self.max_height)
            {
                let lid = lids.remove(index);
                accumulated += lid.height();
                rebuilt.push(lid);
            }
        }

        for lid in lids {
            if fits(accumulated, lid.height(), self.max_height) {
                accumulated += lid.height();
                rebuilt.push(lid);
            } else {
                dropped.push(lid);
            }
        }

        self.items = rebuilt;
        self.current_height = self.items.iter().map(Item::height).sum();
        self.last_ok = true;
        self.check_invariants();

        info!(
            "Reordered tower ({:?}): {} items, height {}, {} dropped",
            order,
            self.items.len(),
            self.current_height,
            dropped.len()
        );
        dropped
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    pub fn height(&self) -> i64 {
        self.current_height
    }

    /// Ids of cups with their own lid directly on top, ascending.
    pub fn lided_cups(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.covered_cups().iter().map(CoveredCup::id).collect();
        ids.sort_unstable();
        ids
    }

    /// Covered cups in base-to-top order.
    pub fn covered_cups(&self) -> Vec<CoveredCup<'_>> {
        self.items
            .windows(2)
            .filter_map(|pair| CoveredCup::from_adjacent(&pair[0], &pair[1]))
            .collect()
    }

    /// `(kind, id)` for every item, base first.
    pub fn stacking_items(&self) -> Vec<(ItemKind, i64)> {
        self.items.iter().map(|item| (item.kind(), item.id())).collect()
    }

    /// Outcome of the most recent mutating call.
    pub fn ok(&self) -> bool {
        self.last_ok
    }

    pub fn find(&self, kind: ItemKind, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.is(kind) && item.id() == id)
    }

    pub fn snapshot(&self) -> TowerSnapshot {
        TowerSnapshot {
            width: self.width,
            max_height: self.max_height,
            height: self.current_height,
            items: self.items.iter().map(ItemView::from).collect(),
        }
    }

    /// Builds a tower without validating anything, to reach states that
    /// pushes alone cannot produce.
    #[cfg(test)]
    pub(crate) fn from_items_unchecked(width: i64, max_height: i64, items: Vec<Item>) -> Self {
        let current_height = items.iter().map(Item::height).sum();
        Self {
            width,
            max_height,
            items,
            current_height,
            last_ok: true,
        }
    }

    // ── Bookkeeping ─────────────────────────────────────────────────────────

    fn record<T>(&mut self, result: Result<T, TowerError>) -> Result<T, TowerError> {
        self.last_ok = result.is_ok();
        if let Err(ref e) = result {
            debug!("Rejected: {}", e);
        }
        self.check_invariants();
        result
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.current_height,
            self.items.iter().map(Item::height).sum::<i64>(),
            "cached height drifted from the stacked items"
        );
        debug_assert!(self.current_height <= self.max_height);
    }
}
