//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Top status bar with dimensions and the last outcome
//! - `TowerView`: The tower itself, drawn from a `TowerSnapshot`
//! - `InfoPanel`: Query results and the command reference
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Single-line command prompt with history
//!
//! Components receive external data as props, never by reaching into the
//! global `App`. This keeps dependencies explicit and components testable.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status bar)
//! ├── tower_view.rs   (Tower drawing and screen-fit geometry)
//! ├── info_panel.rs   (Side panel)
//! └── input_box.rs    (Command prompt)
//! ```

mod info_panel;
mod input_box;
mod title_bar;
pub mod tower_view;

pub use info_panel::InfoPanel;
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
pub use tower_view::TowerView;
