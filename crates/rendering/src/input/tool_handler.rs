use bevy::prelude::*;
use bevy_egui::EguiContexts;

use scene::scene_actions::{ActionQueue, ActionSource, SceneAction};

use crate::egui_input_guard::egui_wants_pointer;

/// Left click commits whatever the preview shows. Validity is checked by the
/// executor; a click on an occupied cell is a silent no-op.
pub fn handle_placement_click(
    buttons: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    queue.push(ActionSource::Pointer, SceneAction::Commit);
}
