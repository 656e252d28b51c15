//! Action executor system: drains the [`ActionQueue`] each frame and applies
//! every queued [`SceneAction`] in order, recording results in the
//! [`ActionResultLog`].

use bevy::prelude::*;

use crate::error::PlacementError;
use crate::preview::PreviewState;
use crate::scene_state::SceneState;
use crate::tools::{ActiveTool, ToolSelection};

use super::result_log::ActionResultLog;
use super::{ActionQueue, ActionResult, SceneAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut scene: ResMut<SceneState>,
    mut preview: ResMut<PreviewState>,
    mut selection: ResMut<ToolSelection>,
) {
    // Touching the ResMuts below marks them changed; skip idle frames.
    if queue.is_empty() {
        return;
    }
    for queued in queue.drain() {
        let result = execute_single(&queued.action, &mut scene, &mut preview, &mut selection);
        if let ActionResult::Rejected(err) = &result {
            debug!(
                "{:?} action {:?} rejected: {}",
                queued.source, queued.action, err
            );
        }
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

fn execute_single(
    action: &SceneAction,
    scene: &mut SceneState,
    preview: &mut PreviewState,
    selection: &mut ToolSelection,
) -> ActionResult {
    match action {
        SceneAction::MovePreview { x, y } => {
            preview.move_to(Vec2::new(*x, *y), scene);
            ActionResult::Success
        }
        SceneAction::HidePreview => {
            preview.hide();
            ActionResult::Success
        }
        SceneAction::Rotate { direction } => {
            preview.rotate(*direction);
            ActionResult::Success
        }
        SceneAction::Commit => execute_commit(scene, preview, selection).into(),
        SceneAction::Clear => {
            let removed = scene.len();
            scene.clear();
            preview.revalidate(scene);
            info!("Cleared {} placed objects", removed);
            ActionResult::Success
        }
        SceneAction::SelectTool { tool } => {
            selection.tool = *tool;
            debug!("Tool: {}", tool.label());
            ActionResult::Success
        }
        SceneAction::SelectBuildingType { building_type } => {
            selection.building_type = *building_type;
            selection.tool = ActiveTool::Building;
            debug!("Building type: {}", building_type.label());
            ActionResult::Success
        }
    }
}

// ---------------------------------------------------------------------------
// Commit
// ---------------------------------------------------------------------------

/// Commit uses the preview's current rotation, not its target, so a click
/// mid-animation freezes whatever angle is on screen.
fn execute_commit(
    scene: &mut SceneState,
    preview: &mut PreviewState,
    selection: &ToolSelection,
) -> Result<(), PlacementError> {
    if !preview.visible {
        return Err(PlacementError::NoPreview);
    }
    if !preview.is_valid {
        return Err(PlacementError::Occupied {
            x: preview.x,
            y: preview.y,
        });
    }

    let placed = scene.try_place(preview.position(), selection.object_kind(), preview.rotation)?;
    info!(
        "Placed {} at ({:.0}, {:.0}) rotated {:.0} deg",
        placed.kind().label(),
        placed.x(),
        placed.y(),
        placed.rotation()
    );
    preview.revalidate(scene);
    Ok(())
}
