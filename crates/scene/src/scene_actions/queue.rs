use bevy::prelude::*;

use super::SceneAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    Pointer,
    Keyboard,
    Overlay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedAction {
    pub source: ActionSource,
    pub action: SceneAction,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, source: ActionSource, action: SceneAction) {
        self.pending.push(QueuedAction { source, action });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
