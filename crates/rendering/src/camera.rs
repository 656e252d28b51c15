use bevy::prelude::*;

/// Sky blue behind the grid.
pub const BACKGROUND_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);

/// The whole canvas is one fixed 2D view; there is no pan or zoom.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
