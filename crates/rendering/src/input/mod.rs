//! Canvas input: pointer and keyboard events become queued scene actions.
//!
//! - `cursor`: pointer moves and canvas exit drive the preview
//! - `tool_handler`: left click commits the preview
//! - `keyboard`: rotation, tool and building-type shortcuts

mod cursor;
mod keyboard;
mod tool_handler;


pub use cursor::track_pointer;
pub use keyboard::handle_keyboard_shortcuts;
pub use tool_handler::handle_placement_click;
