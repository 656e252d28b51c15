//! Presentation for the town grid: the 2D camera, the background grid, sprite
//! mirrors of placed objects and the preview, and the input systems that turn
//! pointer and keyboard events into scene actions.

use bevy::prelude::*;

use scene::SceneSet;

pub mod camera;
pub mod coords;
pub mod cursor_preview;
pub mod egui_input_guard;
pub mod grid_render;
pub mod input;
pub mod sprites;

use sprites::SpriteSync;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(camera::BACKGROUND_COLOR))
            .init_resource::<SpriteSync>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    sprites::load_sprite_assets,
                    cursor_preview::spawn_cursor_preview,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    input::track_pointer,
                    input::handle_placement_click,
                    input::handle_keyboard_shortcuts,
                )
                    .chain()
                    .in_set(SceneSet::Input),
            )
            .add_systems(
                Update,
                (
                    grid_render::rebuild_grid_lines,
                    sprites::sync_placed_sprites,
                    cursor_preview::update_cursor_preview,
                    coords::apply_canvas_anchors,
                )
                    .chain()
                    .after(SceneSet::Animate),
            );
    }
}
