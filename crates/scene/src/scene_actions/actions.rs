use crate::objects::BuildingType;
use crate::preview::RotationDirection;
use crate::tools::ActiveTool;

#[derive(Debug, Clone, PartialEq)]
pub enum SceneAction {
    /// Pointer moved to this raw canvas position.
    MovePreview { x: f32, y: f32 },
    /// Pointer left the canvas.
    HidePreview,
    Rotate { direction: RotationDirection },
    /// Place the preview into the scene.
    Commit,
    /// Remove every placed object.
    Clear,
    SelectTool { tool: ActiveTool },
    /// Also switches to the building tool.
    SelectBuildingType { building_type: BuildingType },
}
