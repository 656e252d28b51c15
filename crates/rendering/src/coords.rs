//! Canvas ↔ world conversion.
//!
//! Scene positions are canvas pixels (origin top-left, `y` down). The default
//! 2D camera puts the world origin at the window center with `y` up and one
//! world unit per logical pixel.

use bevy::prelude::*;

pub fn canvas_to_world(canvas: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        canvas.x - window_size.x * 0.5,
        window_size.y * 0.5 - canvas.y,
    )
}

/// Clockwise-on-screen degrees to a world rotation. World `z` rotations are
/// counter-clockwise, hence the sign flip.
pub fn rotation_quat(degrees: f32) -> Quat {
    Quat::from_rotation_z(-degrees.to_radians())
}

/// Canvas placement for an entity; `apply_canvas_anchors` turns it into a
/// world translation and keeps it there when the window is resized.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CanvasAnchor {
    pub position: Vec2,
    pub z: f32,
}

pub fn apply_canvas_anchors(
    windows: Query<&Window, With<bevy::window::PrimaryWindow>>,
    mut last_size: Local<Vec2>,
    mut anchors: Query<(Ref<CanvasAnchor>, &mut Transform)>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = window.size();
    let resized = *last_size != size;
    *last_size = size;

    for (anchor, mut transform) in &mut anchors {
        if resized || anchor.is_changed() {
            transform.translation = canvas_to_world(anchor.position, size).extend(anchor.z);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_corners_map_to_world_corners() {
        let size = Vec2::new(1280.0, 720.0);
        assert_eq!(canvas_to_world(Vec2::ZERO, size), Vec2::new(-640.0, 360.0));
        assert_eq!(canvas_to_world(size, size), Vec2::new(640.0, -360.0));
        assert_eq!(canvas_to_world(size * 0.5, size), Vec2::ZERO);
    }

    #[test]
    fn test_canvas_y_grows_downward() {
        let size = Vec2::new(800.0, 600.0);
        let upper = canvas_to_world(Vec2::new(100.0, 25.0), size);
        let lower = canvas_to_world(Vec2::new(100.0, 75.0), size);
        assert!(lower.y < upper.y);
    }

    #[test]
    fn test_quarter_turn_is_clockwise_on_screen() {
        // +x rotated a clockwise quarter turn points down the screen, i.e. world -y.
        let rotated = rotation_quat(90.0) * Vec3::X;
        assert!((rotated - Vec3::NEG_Y).length() < 1e-5, "got {rotated}");
        assert!((rotation_quat(0.0) * Vec3::X - Vec3::X).length() < 1e-6);
    }
}
