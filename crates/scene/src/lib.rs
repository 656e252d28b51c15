//! Headless state and rules for the town grid: snapping, occupancy, the
//! placement preview and its rotation easing, and the action executor that
//! owns every mutation.

use bevy::prelude::*;

pub mod config;
pub mod error;
pub mod grid;
pub mod keybindings;
pub mod objects;
pub mod preview;
pub mod scene_actions;
pub mod scene_state;
pub mod tools;

#[cfg(test)]
pub mod test_harness;

use keybindings::KeyBindings;
use preview::PreviewState;
use scene_state::SceneState;
use tools::ToolSelection;

/// Frame ordering shared with the rendering crate: input pushes actions, the
/// executor applies them, then the preview animates. Sprite sync runs after
/// `Animate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneSet {
    Input,
    Apply,
    Animate,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneState>()
            .init_resource::<PreviewState>()
            .init_resource::<ToolSelection>()
            .init_resource::<KeyBindings>()
            .configure_sets(
                Update,
                (SceneSet::Input, SceneSet::Apply, SceneSet::Animate).chain(),
            )
            .add_plugins(scene_actions::SceneActionsPlugin)
            .add_systems(
                Update,
                preview::animate_preview_rotation
                    .run_if(preview::preview_animating)
                    .in_set(SceneSet::Animate),
            );
    }
}
