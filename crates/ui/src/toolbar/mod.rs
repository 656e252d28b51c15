//! Controls overlay.
//!
//! - `ui_system`: the `controls_ui` egui system that turns button presses into scene actions
//! - `widgets`: button and label helpers shared by the overlay

mod ui_system;
mod widgets;

pub use ui_system::controls_ui;
