use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use scene::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use scene::preview::PreviewState;
use scene::SceneSet;

const LOG_FILTER: &str = "wgpu=error,naga=warn,scene=debug,rendering=info";

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "TownGrid".to_string(),
                    resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                    present_mode: PresentMode::AutoVsync,
                    // Only read on wasm32; the page hosts a <canvas id="towngrid-canvas">.
                    canvas: Some("#towngrid-canvas".to_string()),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                level: bevy::log::Level::INFO,
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    )
    .insert_resource(winit_settings(false))
    .add_plugins((
        scene::ScenePlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ))
    .add_systems(Update, pace_frames_for_animation.after(SceneSet::Animate));

    info!("TownGrid started");
    app.run();
}

/// Low-power pacing at rest; continuous frames while the preview is easing,
/// since the easing advances a fixed fraction per frame.
fn winit_settings(animating: bool) -> WinitSettings {
    if animating {
        WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::Continuous,
        }
    } else {
        WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        }
    }
}

fn pace_frames_for_animation(
    preview: Res<PreviewState>,
    mut settings: ResMut<WinitSettings>,
    mut was_animating: Local<bool>,
) {
    let animating = preview.visible && preview.is_animating();
    if animating == *was_animating {
        return;
    }
    *was_animating = animating;
    *settings = winit_settings(animating);
}
