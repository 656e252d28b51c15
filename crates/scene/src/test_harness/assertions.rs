//! Assertion helpers for `TestTown` integration tests.

use bevy::prelude::*;

use crate::config::OCCUPANCY_THRESHOLD;
use crate::grid;

use super::TestTown;

impl TestTown {
    pub fn assert_counts(&self, buildings: usize, roads: usize) {
        let scene = self.scene();
        assert_eq!(
            (scene.buildings().len(), scene.roads().len()),
            (buildings, roads),
            "Expected {buildings} buildings and {roads} roads"
        );
    }

    /// Assert the cell under the raw canvas position holds an object.
    pub fn assert_occupied(&self, x: f32, y: f32) {
        let center = grid::snap_to_cell(Vec2::new(x, y));
        assert!(
            self.scene().is_occupied(center),
            "Expected cell at {center} to be occupied"
        );
    }

    pub fn assert_free(&self, x: f32, y: f32) {
        let center = grid::snap_to_cell(Vec2::new(x, y));
        assert!(
            !self.scene().is_occupied(center),
            "Expected cell at {center} to be free"
        );
    }

    /// No two placed objects are closer than the occupancy threshold.
    pub fn assert_no_overlaps(&self) {
        let objects: Vec<_> = self.scene().iter().copied().collect();
        for (i, a) in objects.iter().enumerate() {
            for b in &objects[i + 1..] {
                let dist = a.position().distance(b.position());
                assert!(
                    dist >= OCCUPANCY_THRESHOLD,
                    "{:?} and {:?} are only {dist} apart",
                    a,
                    b
                );
            }
        }
    }
}
