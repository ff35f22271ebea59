//! # Core Simulation Logic
//!
//! This module contains the tower rules and the state around them.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Tower (the engine)   │
//!                    │  • App (session state)  │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ TowerSnapshot
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Script   │
//!             │ (ratatui)  │          │   runner   │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item`, `Cup`, `Lid` and the color palette
//! - [`tower`]: `Tower`, the only authority on what may be stacked
//! - [`snapshot`]: the read-only copy handed to renderers
//! - [`state`]: the `App` struct holding the tower plus session flags
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`command`]: text commands → `Action`
//! - [`config`]: `~/.cuptower/config.toml` and override resolution
//!
//! Note: `config` reads files, which is the one exception to "no I/O".

pub mod action;
pub mod command;
pub mod config;
pub mod item;
pub mod snapshot;
pub mod state;
pub mod tower;

pub use item::{Item, ItemColor, ItemKind};
pub use snapshot::{ItemView, TowerSnapshot};
pub use tower::{StackOrder, Tower, TowerError};
