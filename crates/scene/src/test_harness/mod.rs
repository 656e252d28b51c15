//! # TestTown: headless integration test harness
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`ScenePlugin`] so tests
//! can drive the scene through the same action queue the input systems use,
//! without a window or renderer.

mod assertions;
mod setup;

use bevy::prelude::*;

use crate::preview::PreviewState;
use crate::scene_actions::{ActionQueue, ActionResultLog, ActionSource, SceneAction};
use crate::scene_state::SceneState;
use crate::tools::ToolSelection;
use crate::ScenePlugin;

pub struct TestTown {
    app: App,
}

impl TestTown {
    /// Empty scene, preview hidden, default tool selection.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ScenePlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Queue an action without ticking.
    pub fn push(&mut self, source: ActionSource, action: SceneAction) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(source, action);
        self
    }

    /// Run `n` frames.
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    /// Run frames until the preview rotation settles, panicking after `max`.
    pub fn tick_until_settled(&mut self, max: u32) -> u32 {
        for frame in 0..max {
            if !self.preview().is_animating() {
                return frame;
            }
            self.app.update();
        }
        panic!("preview rotation still animating after {max} frames");
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn scene(&self) -> &SceneState {
        self.app.world().resource::<SceneState>()
    }

    pub fn preview(&self) -> &PreviewState {
        self.app.world().resource::<PreviewState>()
    }

    pub fn selection(&self) -> &ToolSelection {
        self.app.world().resource::<ToolSelection>()
    }

    pub fn log(&self) -> &ActionResultLog {
        self.app.world().resource::<ActionResultLog>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}

impl Default for TestTown {
    fn default() -> Self {
        Self::new()
    }
}
