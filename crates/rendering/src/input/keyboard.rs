use bevy::prelude::*;
use bevy_egui::EguiContexts;

use scene::keybindings::KeyBindings;
use scene::scene_actions::{ActionQueue, ActionSource};

use crate::egui_input_guard::egui_wants_keyboard;

pub fn handle_keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
) {
    if keys.get_just_pressed().next().is_none() {
        return;
    }
    if egui_wants_keyboard(&mut contexts) {
        return;
    }
    for action in bindings.just_pressed_actions(&keys) {
        queue.push(ActionSource::Keyboard, action.scene_action());
    }
}
