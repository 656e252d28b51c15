use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use scene::keybindings::{BindableAction, KeyBindings};
use scene::objects::BuildingType;
use scene::scene_actions::{ActionQueue, ActionResultLog, ActionSource, SceneAction};
use scene::scene_state::SceneState;
use scene::tools::{ActiveTool, ToolSelection};

use super::widgets::{
    filled_button, format_counts, rotation_hint, status_text, tool_button, with_shortcut,
};
use crate::theme::{BUTTON_DANGER, STATUS_WARN};

const OVERLAY_POS: egui::Pos2 = egui::pos2(20.0, 20.0);

fn tool_action(tool: ActiveTool) -> BindableAction {
    match tool {
        ActiveTool::Building => BindableAction::ToolBuilding,
        ActiveTool::Road => BindableAction::ToolRoad,
    }
}

fn building_action(building_type: BuildingType) -> BindableAction {
    match building_type {
        BuildingType::House => BindableAction::BuildingHouse,
        BuildingType::Store => BindableAction::BuildingStore,
        BuildingType::Factory => BindableAction::BuildingFactory,
    }
}

/// Fixed panel in the top-left corner of the canvas. Buttons never touch the
/// scene directly; they enqueue the same actions the keyboard shortcuts do.
pub fn controls_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    selection: Res<ToolSelection>,
    scene: Res<SceneState>,
    log: Res<ActionResultLog>,
    bindings: Res<KeyBindings>,
) {
    let mut pressed: Vec<SceneAction> = Vec::new();

    egui::Area::new(egui::Id::new("town_controls"))
        .fixed_pos(OVERLAY_POS)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style())
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for tool in [ActiveTool::Building, ActiveTool::Road] {
                            let label = with_shortcut(tool.label(), &bindings, tool_action(tool));
                            if tool_button(ui, &label, selection.tool == tool).clicked() {
                                pressed.push(SceneAction::SelectTool { tool });
                            }
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Type:");
                        for building_type in BuildingType::ALL {
                            let label = with_shortcut(
                                building_type.label(),
                                &bindings,
                                building_action(building_type),
                            );
                            let active = selection.tool == ActiveTool::Building
                                && selection.building_type == building_type;
                            if tool_button(ui, &label, active).clicked() {
                                pressed.push(SceneAction::SelectBuildingType { building_type });
                            }
                        }
                    });

                    ui.separator();

                    ui.horizontal(|ui| {
                        let clear_label =
                            with_shortcut("Clear All", &bindings, BindableAction::ClearAll);
                        if filled_button(ui, &clear_label, BUTTON_DANGER, false).clicked() {
                            pressed.push(SceneAction::Clear);
                        }
                        ui.label(format_counts(scene.buildings().len(), scene.roads().len()));
                    });

                    ui.label(
                        egui::RichText::new(rotation_hint(&bindings))
                            .small()
                            .weak(),
                    );

                    if let Some(text) = status_text(log.last_rejection()) {
                        ui.colored_label(STATUS_WARN, text);
                    }
                });
        });

    for action in pressed {
        queue.push(ActionSource::Overlay, action);
    }
}
