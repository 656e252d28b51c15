use bevy::math::Vec2;

/// Everything that can be placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    House,
    Store,
    Factory,
    Road,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::House,
        ObjectKind::Store,
        ObjectKind::Factory,
        ObjectKind::Road,
    ];

    /// Image asset for this kind, relative to the asset root.
    pub fn asset_path(self) -> &'static str {
        match self {
            ObjectKind::House => "sprites/house.png",
            ObjectKind::Store => "sprites/store.png",
            ObjectKind::Factory => "sprites/factory.png",
            ObjectKind::Road => "sprites/road.png",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::House => "House",
            ObjectKind::Store => "Store",
            ObjectKind::Factory => "Factory",
            ObjectKind::Road => "Road",
        }
    }

    pub fn is_building(self) -> bool {
        !matches!(self, ObjectKind::Road)
    }
}

/// Building subtype picked in the controls overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildingType {
    #[default]
    House,
    Store,
    Factory,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [
        BuildingType::House,
        BuildingType::Store,
        BuildingType::Factory,
    ];

    pub fn object_kind(self) -> ObjectKind {
        match self {
            BuildingType::House => ObjectKind::House,
            BuildingType::Store => ObjectKind::Store,
            BuildingType::Factory => ObjectKind::Factory,
        }
    }

    pub fn label(self) -> &'static str {
        self.object_kind().label()
    }
}

/// A committed object. Only [`crate::scene_state::SceneState`] creates these,
/// and nothing mutates one after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedObject {
    x: f32,
    y: f32,
    kind: ObjectKind,
    rotation: f32,
}

impl PlacedObject {
    pub(crate) fn new(position: Vec2, kind: ObjectKind, rotation: f32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            kind,
            rotation,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Clockwise rotation in degrees, in `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}
