use crate::error::PlacementError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionResult {
    Success,
    Rejected(PlacementError),
}

impl ActionResult {
    pub fn error(&self) -> Option<PlacementError> {
        match self {
            ActionResult::Rejected(err) => Some(*err),
            ActionResult::Success => None,
        }
    }
}

impl<T> From<Result<T, PlacementError>> for ActionResult {
    fn from(result: Result<T, PlacementError>) -> Self {
        match result {
            Ok(_) => ActionResult::Success,
            Err(err) => ActionResult::Rejected(err),
        }
    }
}
