//! Egui input guard: prevents click-through from the controls overlay to the
//! canvas.
//!
//! When egui is handling pointer or keyboard input, canvas input systems skip
//! processing so pressing an overlay button never commits a placement
//! underneath it, and typing into a widget never rotates the preview.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer, i.e. the cursor is over an
/// egui area or egui is handling a drag/click.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Returns `true` when an egui widget has keyboard focus.
#[inline]
pub fn egui_wants_keyboard(contexts: &mut EguiContexts) -> bool {
    contexts.ctx_mut().wants_keyboard_input()
}
