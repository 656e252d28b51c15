//! Ring-buffer log of recently executed scene actions and their results.
//!
//! The [`ActionResultLog`] resource stores the last 64 `(SceneAction, ActionResult)`
//! pairs so the overlay and tests can inspect what happened without watching
//! every resource.

use bevy::prelude::*;

use crate::error::PlacementError;

use super::{ActionResult, SceneAction};

/// Maximum number of entries retained in the ring buffer.
const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: Vec<(SceneAction, ActionResult)>,
}

impl ActionResultLog {
    /// Record a new action/result pair. If the buffer is full the oldest entry
    /// is evicted.
    pub fn push(&mut self, action: SceneAction, result: ActionResult) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((action, result));
    }

    /// Newest rejection not yet superseded by a successful commit or clear.
    /// Preview moves and tool switches in between do not hide it.
    pub fn last_rejection(&self) -> Option<PlacementError> {
        for (action, result) in self.entries.iter().rev() {
            if let Some(err) = result.error() {
                return Some(err);
            }
            if matches!(action, SceneAction::Commit | SceneAction::Clear) {
                return None;
            }
        }
        None
    }
}
