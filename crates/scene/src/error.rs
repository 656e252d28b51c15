// ---------------------------------------------------------------------------
// PlacementError: why a scene action was not applied
// ---------------------------------------------------------------------------

use std::fmt;

/// Reasons a placement request is rejected.
///
/// These never reach the user as messages; an invalid click is a silent no-op
/// in the UI. They are recorded in the action log and logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementError {
    /// Another object already sits at this cell center.
    Occupied { x: f32, y: f32 },
    /// The pointer is not over the canvas, so there is nothing to commit.
    NoPreview,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Occupied { x, y } => {
                write!(f, "Cell at ({x:.0}, {y:.0}) is already occupied")
            }
            PlacementError::NoPreview => write!(f, "No placement preview to commit"),
        }
    }
}

impl std::error::Error for PlacementError {}
