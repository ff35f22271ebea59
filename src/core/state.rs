//! # Application State
//!
//! Core state for a simulation session. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tower: Tower              // the engine, sole authority on legality
//! ├── visible: bool             // whether the tower is drawn
//! ├── viewport_fits: bool       // kept current by the driver
//! ├── show_ruler: bool          // draw height ticks next to the tower
//! ├── status_message: String    // status bar text
//! └── last_ok: bool             // outcome shown to the user
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::tower::Tower;

pub struct App {
    pub tower: Tower,
    pub visible: bool,
    /// Whether the current viewport can hold the whole tower. Drivers
    /// without a screen leave this `true`.
    pub viewport_fits: bool,
    pub show_ruler: bool,
    pub status_message: String,
    /// Outcome of the last operation the user issued. Tower operations copy
    /// `tower.ok()`; visibility operations set their own.
    pub last_ok: bool,
}

impl App {
    pub fn new(tower: Tower) -> Self {
        Self {
            tower,
            visible: true,
            viewport_fits: true,
            show_ruler: true,
            status_message: String::from("Ready"),
            last_ok: true,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(Tower::new(config.width, config.max_height));
        app.visible = config.start_visible;
        app.show_ruler = config.show_ruler;
        app
    }
}
