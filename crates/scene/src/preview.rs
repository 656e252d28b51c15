//! Preview controller: the transient ghost object that follows the pointer.
//!
//! The preview holds a snapped position, an occupancy flag, and two rotations.
//! Key presses move `target_rotation` in quarter turns; every animation frame
//! `rotation` covers a fixed fraction of the remaining arc until it is close
//! enough to snap onto the target.
//!
//! The remaining arc is signed and accumulates across presses, so the preview
//! always turns the way the keys say, even when several presses stack up past
//! half a turn.

use bevy::prelude::*;

use crate::config::{ROTATION_EASE_FACTOR, ROTATION_SNAP_EPSILON_DEG, ROTATION_STEP_DEG};
use crate::grid;
use crate::scene_state::SceneState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// 'r'
    Clockwise,
    /// 'e'
    CounterClockwise,
}

impl RotationDirection {
    pub fn degrees(self) -> f32 {
        match self {
            RotationDirection::Clockwise => ROTATION_STEP_DEG,
            RotationDirection::CounterClockwise => -ROTATION_STEP_DEG,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PreviewState {
    pub x: f32,
    pub y: f32,
    pub is_valid: bool,
    /// Degrees, clockwise, in `[0, 360)`.
    pub rotation: f32,
    /// Degrees, clockwise, in `[0, 360)`.
    pub target_rotation: f32,
    /// False while the pointer is outside the canvas.
    pub visible: bool,
    /// Signed degrees still to turn; positive is clockwise. `rotation +
    /// remaining` equals `target_rotation` modulo 360.
    remaining: f32,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            is_valid: false,
            rotation: 0.0,
            target_rotation: 0.0,
            visible: false,
            remaining: 0.0,
        }
    }
}

impl PreviewState {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Snap a raw pointer position and recompute validity against the scene.
    pub fn move_to(&mut self, raw: Vec2, scene: &SceneState) {
        let center = grid::snap_to_cell(raw);
        self.x = center.x;
        self.y = center.y;
        self.visible = true;
        self.revalidate(scene);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn revalidate(&mut self, scene: &SceneState) {
        self.is_valid = !scene.is_occupied(self.position());
    }

    pub fn rotate(&mut self, direction: RotationDirection) {
        let degrees = direction.degrees();
        self.target_rotation = wrap_degrees(self.target_rotation + degrees);
        self.remaining += degrees;
    }

    pub fn is_animating(&self) -> bool {
        self.remaining != 0.0
    }

    /// One animation frame of rotation easing.
    pub fn ease_rotation(&mut self) {
        let step = ease_step(self.remaining);
        self.remaining -= step;
        if self.remaining == 0.0 {
            self.rotation = self.target_rotation;
        } else {
            self.rotation = wrap_degrees(self.rotation + step);
        }
    }
}

// ---------------------------------------------------------------------------
// Animation tick
// ---------------------------------------------------------------------------

/// Run condition for the animation tick. The tick stops while the preview is
/// hidden or already at rest.
pub fn preview_animating(preview: Res<PreviewState>) -> bool {
    preview.visible && preview.is_animating()
}

pub fn animate_preview_rotation(mut preview: ResMut<PreviewState>) {
    preview.ease_rotation();
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0 in f32.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Degrees to turn this frame for a signed remaining arc: a fixed fraction of
/// it, or all of it once it drops under the snap epsilon.
pub fn ease_step(remaining: f32) -> f32 {
    if remaining.abs() < ROTATION_SNAP_EPSILON_DEG {
        remaining
    } else {
        remaining * ROTATION_EASE_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ObjectKind;

    #[test]
    fn test_clockwise_presses_cycle_through_quarter_turns() {
        let mut preview = PreviewState::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            preview.rotate(RotationDirection::Clockwise);
            seen.push(preview.target_rotation);
        }
        assert_eq!(seen, vec![90.0, 180.0, 270.0, 0.0]);
    }

    #[test]
    fn test_counter_clockwise_wraps_below_zero() {
        let mut preview = PreviewState::default();
        preview.rotate(RotationDirection::CounterClockwise);
        assert_eq!(preview.target_rotation, 270.0);
        preview.rotate(RotationDirection::CounterClockwise);
        assert_eq!(preview.target_rotation, 180.0);
    }

    #[test]
    fn test_target_stays_in_range_for_mixed_presses() {
        let mut preview = PreviewState::default();
        let dirs = [
            RotationDirection::CounterClockwise,
            RotationDirection::Clockwise,
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise,
        ];
        for dir in dirs {
            preview.rotate(dir);
            assert!(
                (0.0..360.0).contains(&preview.target_rotation),
                "target out of range: {}",
                preview.target_rotation
            );
        }
    }

    #[test]
    fn test_ease_step_covers_ten_percent() {
        let step = ease_step(90.0);
        assert!((step - 9.0).abs() < 1e-4, "got {step}");
        let step = ease_step(-90.0);
        assert!((step + 9.0).abs() < 1e-4, "got {step}");
    }

    #[test]
    fn test_ease_step_snaps_within_epsilon() {
        assert_eq!(ease_step(0.5), 0.5);
        assert_eq!(ease_step(-0.5), -0.5);
        assert_eq!(ease_step(0.0), 0.0);
    }

    #[test]
    fn test_270_to_0_turns_forward_through_360() {
        let mut preview = PreviewState::default();
        for _ in 0..3 {
            preview.rotate(RotationDirection::Clockwise);
        }
        while preview.is_animating() {
            preview.ease_rotation();
        }
        assert_eq!(preview.rotation, 270.0);

        preview.rotate(RotationDirection::Clockwise);
        preview.ease_rotation();
        assert!((preview.rotation - 279.0).abs() < 1e-3, "got {}", preview.rotation);
    }

    #[test]
    fn test_counter_clockwise_from_zero_turns_backward() {
        let mut preview = PreviewState::default();
        preview.rotate(RotationDirection::CounterClockwise);
        preview.ease_rotation();
        assert!((preview.rotation - 351.0).abs() < 1e-3, "got {}", preview.rotation);
    }

    #[test]
    fn test_stacked_presses_past_half_turn_keep_direction() {
        let mut preview = PreviewState::default();
        preview.rotate(RotationDirection::Clockwise);
        preview.ease_rotation();
        preview.rotate(RotationDirection::Clockwise);
        preview.rotate(RotationDirection::Clockwise);

        let mut previous = preview.rotation;
        while preview.is_animating() {
            preview.ease_rotation();
            let turned = wrap_degrees(preview.rotation - previous);
            assert!(turned < 180.0, "turned backwards by {}", 360.0 - turned);
            previous = preview.rotation;
        }
        assert_eq!(preview.rotation, 270.0);
    }

    #[test]
    fn test_opposite_presses_cancel_out() {
        let mut preview = PreviewState::default();
        preview.rotate(RotationDirection::Clockwise);
        preview.rotate(RotationDirection::CounterClockwise);
        assert_eq!(preview.target_rotation, 0.0);
        assert!(!preview.is_animating());
    }

    #[test]
    fn test_easing_converges_on_target() {
        let mut preview = PreviewState::default();
        preview.rotate(RotationDirection::Clockwise);
        let mut frames = 0;
        while preview.is_animating() {
            preview.ease_rotation();
            frames += 1;
            assert!(frames < 200, "easing did not converge");
        }
        assert_eq!(preview.rotation, 90.0);
        // 90 * 0.9^n < 1  =>  n = 43
        assert!(frames > 30, "converged suspiciously fast: {frames}");
    }

    #[test]
    fn test_move_to_snaps_and_checks_occupancy() {
        let mut scene = SceneState::default();
        let mut preview = PreviewState::default();

        preview.move_to(Vec2::new(60.0, 10.0), &scene);
        assert_eq!(preview.position(), Vec2::new(75.0, 25.0));
        assert!(preview.visible);
        assert!(preview.is_valid);

        scene
            .try_place(Vec2::new(75.0, 25.0), ObjectKind::Road, 0.0)
            .unwrap();
        preview.move_to(Vec2::new(99.0, 49.0), &scene);
        assert!(!preview.is_valid);
    }

    #[test]
    fn test_wrap_degrees_edge_cases() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(-1e-7), 0.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
    }
}
