use bevy::prelude::*;

use crate::objects::{BuildingType, ObjectKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTool {
    #[default]
    Building,
    Road,
}

impl ActiveTool {
    pub fn label(self) -> &'static str {
        match self {
            ActiveTool::Building => "Place Building",
            ActiveTool::Road => "Place Road",
        }
    }
}

/// Current tool plus the building subtype used when the building tool is active.
/// The subtype is remembered while the road tool is selected.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolSelection {
    pub tool: ActiveTool,
    pub building_type: BuildingType,
}

impl ToolSelection {
    /// Kind of object a commit creates with this selection.
    pub fn object_kind(&self) -> ObjectKind {
        match self.tool {
            ActiveTool::Building => self.building_type.object_kind(),
            ActiveTool::Road => ObjectKind::Road,
        }
    }
}
