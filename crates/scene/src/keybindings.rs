//! Configurable keyboard shortcuts.
//!
//! Input systems read from the `KeyBindings` resource instead of hardcoding
//! `KeyCode` values, and the controls overlay uses the same resource to label
//! its buttons.

use bevy::prelude::*;

use crate::objects::BuildingType;
use crate::preview::RotationDirection;
use crate::scene_actions::SceneAction;
use crate::tools::ActiveTool;

// =============================================================================
// Bindable Action enum
// =============================================================================

/// Every action that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindableAction {
    RotateClockwise,
    RotateCounterClockwise,
    ToolBuilding,
    ToolRoad,
    BuildingHouse,
    BuildingStore,
    BuildingFactory,
    ClearAll,
}

impl BindableAction {
    pub const ALL: [BindableAction; 8] = [
        BindableAction::RotateClockwise,
        BindableAction::RotateCounterClockwise,
        BindableAction::ToolBuilding,
        BindableAction::ToolRoad,
        BindableAction::BuildingHouse,
        BindableAction::BuildingStore,
        BindableAction::BuildingFactory,
        BindableAction::ClearAll,
    ];

    /// The scene action this shortcut queues.
    pub fn scene_action(self) -> SceneAction {
        match self {
            Self::RotateClockwise => SceneAction::Rotate {
                direction: RotationDirection::Clockwise,
            },
            Self::RotateCounterClockwise => SceneAction::Rotate {
                direction: RotationDirection::CounterClockwise,
            },
            Self::ToolBuilding => SceneAction::SelectTool {
                tool: ActiveTool::Building,
            },
            Self::ToolRoad => SceneAction::SelectTool {
                tool: ActiveTool::Road,
            },
            Self::BuildingHouse => SceneAction::SelectBuildingType {
                building_type: BuildingType::House,
            },
            Self::BuildingStore => SceneAction::SelectBuildingType {
                building_type: BuildingType::Store,
            },
            Self::BuildingFactory => SceneAction::SelectBuildingType {
                building_type: BuildingType::Factory,
            },
            Self::ClearAll => SceneAction::Clear,
        }
    }
}

// =============================================================================
// Single binding
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    /// Create a simple binding with no modifiers.
    pub const fn simple(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    /// True on the frame the key goes down with exactly these modifiers held.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let ctrl_held = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
        let shift_held = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
        ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label (e.g. "R", "Ctrl+Delete").
    pub fn display_label(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(keycode_label(self.key));
        parts.join("+")
    }
}

// =============================================================================
// KeyBindings resource
// =============================================================================

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub rotate_clockwise: KeyBinding,
    pub rotate_counter_clockwise: KeyBinding,
    pub tool_building: KeyBinding,
    pub tool_road: KeyBinding,
    pub building_house: KeyBinding,
    pub building_store: KeyBinding,
    pub building_factory: KeyBinding,
    pub clear_all: KeyBinding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate_clockwise: KeyBinding::simple(KeyCode::KeyR),
            rotate_counter_clockwise: KeyBinding::simple(KeyCode::KeyE),
            tool_building: KeyBinding::simple(KeyCode::KeyB),
            tool_road: KeyBinding::simple(KeyCode::KeyG),
            building_house: KeyBinding::simple(KeyCode::Digit1),
            building_store: KeyBinding::simple(KeyCode::Digit2),
            building_factory: KeyBinding::simple(KeyCode::Digit3),
            clear_all: KeyBinding::simple(KeyCode::Delete),
        }
    }
}

impl KeyBindings {
    pub fn get(&self, action: BindableAction) -> KeyBinding {
        match action {
            BindableAction::RotateClockwise => self.rotate_clockwise,
            BindableAction::RotateCounterClockwise => self.rotate_counter_clockwise,
            BindableAction::ToolBuilding => self.tool_building,
            BindableAction::ToolRoad => self.tool_road,
            BindableAction::BuildingHouse => self.building_house,
            BindableAction::BuildingStore => self.building_store,
            BindableAction::BuildingFactory => self.building_factory,
            BindableAction::ClearAll => self.clear_all,
        }
    }

    /// Actions whose binding went down this frame, in `BindableAction::ALL` order.
    pub fn just_pressed_actions(&self, keys: &ButtonInput<KeyCode>) -> Vec<BindableAction> {
        BindableAction::ALL
            .into_iter()
            .filter(|&action| self.get(action).just_pressed(keys))
            .collect()
    }
}

// =============================================================================
// Helper: human-readable key labels
// =============================================================================

pub fn keycode_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::KeyB => "B",
        KeyCode::KeyE => "E",
        KeyCode::KeyG => "G",
        KeyCode::KeyR => "R",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Delete => "Delete",
        _ => "?",
    }
}
