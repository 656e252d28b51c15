use bevy::prelude::*;

use scene::config::SPRITE_SIZE;
use scene::preview::PreviewState;
use scene::tools::ToolSelection;

use crate::coords::{rotation_quat, CanvasAnchor};
use crate::sprites::SpriteAssets;

const PREVIEW_Z: f32 = 2.0;
const VALID_TINT: Color = Color::srgba(1.0, 1.0, 1.0, 0.6);
const INVALID_TINT: Color = Color::srgba(1.0, 0.3, 0.3, 0.6);

/// Marker for the cursor ghost preview entity
#[derive(Component)]
pub struct CursorPreview;

pub fn preview_tint(is_valid: bool) -> Color {
    if is_valid {
        VALID_TINT
    } else {
        INVALID_TINT
    }
}

pub fn spawn_cursor_preview(
    mut commands: Commands,
    assets: Res<SpriteAssets>,
    selection: Res<ToolSelection>,
) {
    commands.spawn((
        CursorPreview,
        Sprite {
            image: assets.handle(selection.object_kind()),
            custom_size: Some(Vec2::splat(SPRITE_SIZE)),
            color: VALID_TINT,
            ..default()
        },
        Transform::default(),
        CanvasAnchor {
            position: Vec2::ZERO,
            z: PREVIEW_Z,
        },
        Visibility::Hidden,
    ));
}

pub fn update_cursor_preview(
    preview: Res<PreviewState>,
    selection: Res<ToolSelection>,
    assets: Res<SpriteAssets>,
    mut query: Query<
        (
            &mut Sprite,
            &mut CanvasAnchor,
            &mut Transform,
            &mut Visibility,
        ),
        With<CursorPreview>,
    >,
) {
    let Ok((mut sprite, mut anchor, mut transform, mut vis)) = query.get_single_mut() else {
        return;
    };

    if !preview.visible {
        *vis = Visibility::Hidden;
        return;
    }

    let image = assets.handle(selection.object_kind());
    if sprite.image != image {
        sprite.image = image;
    }
    sprite.color = preview_tint(preview.is_valid);

    anchor.set_if_neq(CanvasAnchor {
        position: preview.position(),
        z: PREVIEW_Z,
    });
    transform.rotation = rotation_quat(preview.rotation);

    *vis = Visibility::Visible;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_preview_is_tinted_red() {
        let valid = preview_tint(true).to_srgba();
        let invalid = preview_tint(false).to_srgba();
        assert_eq!(valid.red, invalid.red);
        assert!(invalid.green < valid.green);
        assert!(invalid.blue < valid.blue);
        assert_eq!(valid.alpha, invalid.alpha);
    }
}
