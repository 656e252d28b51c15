use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved};
use bevy_egui::EguiContexts;

use scene::preview::PreviewState;
use scene::scene_actions::{ActionQueue, ActionSource, SceneAction};

use crate::egui_input_guard::egui_wants_pointer;

/// Every pointer move over the canvas re-snaps the preview. Leaving the window,
/// or moving over the controls overlay, hides it.
pub fn track_pointer(
    mut moved: EventReader<CursorMoved>,
    mut left: EventReader<CursorLeft>,
    mut contexts: EguiContexts,
    preview: Res<PreviewState>,
    mut queue: ResMut<ActionQueue>,
) {
    let moves: Vec<Vec2> = moved.read().map(|event| event.position).collect();
    let left_window = left.read().count() > 0;
    if moves.is_empty() && !left_window {
        return;
    }

    let over_ui = egui_wants_pointer(&mut contexts);
    for action in pointer_actions(left_window, over_ui, &moves, preview.visible) {
        queue.push(ActionSource::Pointer, action);
    }
}

/// Actions for one frame of pointer events. Window cursor positions are
/// already canvas coordinates (logical pixels, origin top-left).
///
/// Leaving the window wins over moves read in the same frame, since the last
/// move before a leave still lands inside the window. Moves over the overlay
/// count as leaving.
pub(crate) fn pointer_actions(
    left_window: bool,
    over_ui: bool,
    moves: &[Vec2],
    visible: bool,
) -> Vec<SceneAction> {
    if left_window || (over_ui && !moves.is_empty()) {
        return if visible {
            vec![SceneAction::HidePreview]
        } else {
            Vec::new()
        };
    }
    moves
        .iter()
        .map(|position| SceneAction::MovePreview {
            x: position.x,
            y: position.y,
        })
        .collect()
}
