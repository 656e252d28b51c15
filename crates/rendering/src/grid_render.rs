//! Background grid: one thin sprite per grid line, rebuilt whenever the
//! window size changes so the grid always fills the canvas.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use scene::config::CELL_SIZE;

use crate::coords::CanvasAnchor;

const GRID_LINE_COLOR: Color = Color::srgba(0.8, 0.8, 0.8, 0.3);
const GRID_LINE_WIDTH: f32 = 1.0;
pub(crate) const GRID_Z: f32 = -1.0;

#[derive(Component)]
pub struct GridLine;

/// Canvas x (vertical lines) or y (horizontal lines) offsets from 0 to
/// `extent` inclusive, one per cell boundary.
pub fn line_offsets(extent: f32) -> Vec<f32> {
    let count = (extent / CELL_SIZE).floor() as usize;
    (0..=count).map(|i| i as f32 * CELL_SIZE).collect()
}

pub fn rebuild_grid_lines(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    lines: Query<Entity, With<GridLine>>,
    mut built_for: Local<Option<Vec2>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = window.size();
    if *built_for == Some(size) {
        return;
    }
    *built_for = Some(size);

    for entity in &lines {
        commands.entity(entity).despawn();
    }

    for x in line_offsets(size.x) {
        spawn_line(
            &mut commands,
            Vec2::new(x, size.y * 0.5),
            Vec2::new(GRID_LINE_WIDTH, size.y),
        );
    }
    for y in line_offsets(size.y) {
        spawn_line(
            &mut commands,
            Vec2::new(size.x * 0.5, y),
            Vec2::new(size.x, GRID_LINE_WIDTH),
        );
    }
}

fn spawn_line(commands: &mut Commands, center: Vec2, extent: Vec2) {
    commands.spawn((
        GridLine,
        Sprite {
            color: GRID_LINE_COLOR,
            custom_size: Some(extent),
            ..default()
        },
        Transform::default(),
        CanvasAnchor {
            position: center,
            z: GRID_Z,
        },
    ));
}
