/// Edge length of one grid cell in canvas pixels.
pub const CELL_SIZE: f32 = 50.0;
/// Placed sprites fill their cell.
pub const SPRITE_SIZE: f32 = CELL_SIZE;

/// Two objects whose centers are closer than this on both axes share a cell.
pub const OCCUPANCY_THRESHOLD: f32 = 5.0;

/// Degrees added to (or removed from) the preview's target per rotate key press.
pub const ROTATION_STEP_DEG: f32 = 90.0;
/// Fraction of the remaining arc the preview covers each animation frame.
pub const ROTATION_EASE_FACTOR: f32 = 0.1;
/// Below this remaining arc (degrees) the preview snaps onto its target.
pub const ROTATION_SNAP_EPSILON_DEG: f32 = 1.0;

pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;
