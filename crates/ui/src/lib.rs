use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use scene::SceneSet;

pub mod theme;
pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_town_theme)
            // Overlay buttons enqueue actions, so they must land before the executor.
            .add_systems(Update, toolbar::controls_ui.in_set(SceneSet::Input));
    }
}
