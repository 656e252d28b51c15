//! Sprites for committed objects.
//!
//! The scene only ever appends to its lists or clears them, so the sync keeps a
//! per-list high-water mark and spawns sprites for the new tail. A generation
//! change (or a list shorter than the mark) means a clear happened: every
//! placed sprite is despawned and the lists are replayed from the start.

use bevy::prelude::*;

use scene::config::SPRITE_SIZE;
use scene::objects::{ObjectKind, PlacedObject};
use scene::scene_state::SceneState;

use crate::coords::{rotation_quat, CanvasAnchor};

pub(crate) const ROAD_Z: f32 = 0.0;
pub(crate) const BUILDING_Z: f32 = 1.0;

/// Image handles for every object kind, loaded once at startup.
#[derive(Resource, Debug, Clone)]
pub struct SpriteAssets {
    house: Handle<Image>,
    store: Handle<Image>,
    factory: Handle<Image>,
    road: Handle<Image>,
}

impl SpriteAssets {
    pub fn handle(&self, kind: ObjectKind) -> Handle<Image> {
        match kind {
            ObjectKind::House => self.house.clone(),
            ObjectKind::Store => self.store.clone(),
            ObjectKind::Factory => self.factory.clone(),
            ObjectKind::Road => self.road.clone(),
        }
    }
}

pub fn load_sprite_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SpriteAssets {
        house: asset_server.load(ObjectKind::House.asset_path()),
        store: asset_server.load(ObjectKind::Store.asset_path()),
        factory: asset_server.load(ObjectKind::Factory.asset_path()),
        road: asset_server.load(ObjectKind::Road.asset_path()),
    });
}

/// Marker for sprites mirroring a `PlacedObject`.
#[derive(Component)]
pub struct PlacedSprite;

/// How far the sprite mirror has caught up with `SceneState`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteSync {
    pub generation: u64,
    pub buildings: usize,
    pub roads: usize,
}

/// What one sync pass has to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPlan {
    pub despawn_all: bool,
    pub building_start: usize,
    pub road_start: usize,
}

impl SyncPlan {
    pub fn is_noop(&self, scene: &SceneState) -> bool {
        !self.despawn_all
            && self.building_start == scene.buildings().len()
            && self.road_start == scene.roads().len()
    }
}

impl SpriteSync {
    pub fn plan(&self, scene: &SceneState) -> SyncPlan {
        let reset = self.generation != scene.generation()
            || self.buildings > scene.buildings().len()
            || self.roads > scene.roads().len();
        if reset {
            SyncPlan {
                despawn_all: true,
                building_start: 0,
                road_start: 0,
            }
        } else {
            SyncPlan {
                despawn_all: false,
                building_start: self.buildings,
                road_start: self.roads,
            }
        }
    }

    pub fn caught_up(scene: &SceneState) -> Self {
        Self {
            generation: scene.generation(),
            buildings: scene.buildings().len(),
            roads: scene.roads().len(),
        }
    }
}

pub fn sync_placed_sprites(
    mut commands: Commands,
    scene: Res<SceneState>,
    assets: Res<SpriteAssets>,
    mut sync: ResMut<SpriteSync>,
    existing: Query<Entity, With<PlacedSprite>>,
) {
    if !scene.is_changed() {
        return;
    }
    let plan = sync.plan(&scene);
    if plan.is_noop(&scene) {
        return;
    }

    if plan.despawn_all {
        let count = existing.iter().count();
        for entity in &existing {
            commands.entity(entity).despawn();
        }
        debug!("Despawned {} placed sprites", count);
    }
    for obj in &scene.roads()[plan.road_start..] {
        spawn_placed_sprite(&mut commands, &assets, obj, ROAD_Z);
    }
    for obj in &scene.buildings()[plan.building_start..] {
        spawn_placed_sprite(&mut commands, &assets, obj, BUILDING_Z);
    }
    *sync = SpriteSync::caught_up(&scene);
}

fn spawn_placed_sprite(
    commands: &mut Commands,
    assets: &SpriteAssets,
    obj: &PlacedObject,
    z: f32,
) {
    commands.spawn((
        PlacedSprite,
        Sprite {
            image: assets.handle(obj.kind()),
            custom_size: Some(Vec2::splat(SPRITE_SIZE)),
            ..default()
        },
        Transform::from_rotation(rotation_quat(obj.rotation())),
        CanvasAnchor {
            position: obj.position(),
            z,
        },
    ));
}
