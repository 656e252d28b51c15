//! Scene actions: the only path by which scene, preview and tool state change.
//!
//! Input systems and the controls overlay push [`SceneAction`]s into the
//! [`ActionQueue`]; [`execute_queued_actions`] drains it once per frame and
//! records each outcome in the [`ActionResultLog`].

pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::*;
pub use executor::execute_queued_actions;
pub use plugin::SceneActionsPlugin;
pub use queue::*;
pub use result_log::ActionResultLog;
pub use results::*;
