//! Fluent helpers that queue an action and run one frame.

use crate::objects::BuildingType;
use crate::preview::RotationDirection;
use crate::scene_actions::{ActionSource, SceneAction};
use crate::tools::ActiveTool;

use super::TestTown;

impl TestTown {
    pub fn hover(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(ActionSource::Pointer, SceneAction::MovePreview { x, y })
            .tick(1)
    }

    pub fn leave_canvas(&mut self) -> &mut Self {
        self.push(ActionSource::Pointer, SceneAction::HidePreview)
            .tick(1)
    }

    pub fn click(&mut self) -> &mut Self {
        self.push(ActionSource::Pointer, SceneAction::Commit).tick(1)
    }

    /// Hover then click in the same frame.
    pub fn click_at(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(ActionSource::Pointer, SceneAction::MovePreview { x, y })
            .push(ActionSource::Pointer, SceneAction::Commit)
            .tick(1)
    }

    pub fn rotate(&mut self, direction: RotationDirection) -> &mut Self {
        self.push(ActionSource::Keyboard, SceneAction::Rotate { direction })
            .tick(1)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.push(ActionSource::Overlay, SceneAction::Clear).tick(1)
    }

    pub fn with_tool(&mut self, tool: ActiveTool) -> &mut Self {
        self.push(ActionSource::Overlay, SceneAction::SelectTool { tool })
            .tick(1)
    }

    pub fn with_building_type(&mut self, building_type: BuildingType) -> &mut Self {
        self.push(
            ActionSource::Overlay,
            SceneAction::SelectBuildingType { building_type },
        )
        .tick(1)
    }
}
