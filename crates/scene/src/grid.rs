//! Grid snapping.
//!
//! Canvas coordinates are window pixels with the origin at the top-left corner
//! and `y` growing downward. A cell `(cx, cy)` covers
//! `[cx * CELL_SIZE, (cx + 1) * CELL_SIZE)` on each axis; its center is the
//! only position an object can be placed at.

use bevy::math::{IVec2, Vec2};

use crate::config::{CELL_SIZE, OCCUPANCY_THRESHOLD};

/// Cell index containing the canvas position. Floors toward negative infinity,
/// so positions left of / above the origin land in negative cells.
pub fn cell_index(raw: Vec2) -> IVec2 {
    IVec2::new(
        (raw.x / CELL_SIZE).floor() as i32,
        (raw.y / CELL_SIZE).floor() as i32,
    )
}

/// Canvas position of the midpoint of a cell.
pub fn cell_center(cell: IVec2) -> Vec2 {
    Vec2::new(
        cell.x as f32 * CELL_SIZE + CELL_SIZE * 0.5,
        cell.y as f32 * CELL_SIZE + CELL_SIZE * 0.5,
    )
}

/// Snap a raw pointer position to the center of the cell under it.
pub fn snap_to_cell(raw: Vec2) -> Vec2 {
    cell_center(cell_index(raw))
}

/// Proximity test used for occupancy: both axis offsets under the threshold.
pub fn same_cell(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < OCCUPANCY_THRESHOLD && (a.y - b.y).abs() < OCCUPANCY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_cell_centers_inside_cell() {
        assert_eq!(snap_to_cell(Vec2::new(0.0, 0.0)), Vec2::new(25.0, 25.0));
        assert_eq!(snap_to_cell(Vec2::new(49.9, 10.0)), Vec2::new(25.0, 25.0));
        assert_eq!(snap_to_cell(Vec2::new(50.0, 120.0)), Vec2::new(75.0, 125.0));
    }

    #[test]
    fn test_snap_is_idempotent() {
        for &(x, y) in &[
            (0.0, 0.0),
            (12.3, 99.9),
            (640.0, 360.0),
            (1279.0, 719.0),
            (-0.5, -77.0),
        ] {
            let once = snap_to_cell(Vec2::new(x, y));
            let twice = snap_to_cell(once);
            assert_eq!(once, twice, "snap not idempotent for ({x}, {y})");
        }
    }

    #[test]
    fn test_cell_index_floors_negative_coordinates() {
        assert_eq!(cell_index(Vec2::new(-0.1, -49.9)), IVec2::new(-1, -1));
        assert_eq!(cell_index(Vec2::new(-50.1, 0.0)), IVec2::new(-2, 0));
        assert_eq!(snap_to_cell(Vec2::new(-1.0, -1.0)), Vec2::new(-25.0, -25.0));
    }

    #[test]
    fn test_cell_center_round_trips_index() {
        let cell = IVec2::new(7, 3);
        assert_eq!(cell_index(cell_center(cell)), cell);
    }

    #[test]
    fn test_same_cell_uses_strict_threshold() {
        let a = Vec2::new(25.0, 25.0);
        assert!(same_cell(a, a));
        assert!(same_cell(a, Vec2::new(29.9, 20.1)));
        // Exactly at the threshold does not count as overlapping.
        assert!(!same_cell(a, Vec2::new(25.0 + OCCUPANCY_THRESHOLD, 25.0)));
        // Neighbouring cell center.
        assert!(!same_cell(a, Vec2::new(75.0, 25.0)));
    }
}
