use bevy::prelude::*;

use crate::error::PlacementError;
use crate::grid;
use crate::objects::{ObjectKind, PlacedObject};

/// Every committed object, split into buildings and roads in placement order.
///
/// `generation` increments on every clear so observers that mirror the lists
/// (sprite sync) can tell "cleared and refilled" apart from "appended".
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneState {
    buildings: Vec<PlacedObject>,
    roads: Vec<PlacedObject>,
    generation: u64,
}

impl SceneState {
    pub fn buildings(&self) -> &[PlacedObject] {
        &self.buildings
    }

    pub fn roads(&self) -> &[PlacedObject] {
        &self.roads
    }

    /// Buildings first, then roads.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> {
        self.buildings.iter().chain(self.roads.iter())
    }

    pub fn len(&self) -> usize {
        self.buildings.len() + self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty() && self.roads.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Linear scan over both lists for an object at this cell center.
    pub fn is_occupied(&self, center: Vec2) -> bool {
        self.iter().any(|obj| grid::same_cell(obj.position(), center))
    }

    /// Append a new object at `center` unless the cell is taken. Roads go to the
    /// road list, every other kind to the building list.
    pub(crate) fn try_place(
        &mut self,
        center: Vec2,
        kind: ObjectKind,
        rotation: f32,
    ) -> Result<PlacedObject, PlacementError> {
        if self.is_occupied(center) {
            return Err(PlacementError::Occupied {
                x: center.x,
                y: center.y,
            });
        }
        let obj = PlacedObject::new(center, kind, rotation);
        if kind.is_building() {
            self.buildings.push(obj);
        } else {
            self.roads.push(obj);
        }
        Ok(obj)
    }

    pub(crate) fn clear(&mut self) {
        self.buildings.clear();
        self.roads.clear();
        self.generation += 1;
    }
}
