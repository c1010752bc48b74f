use crate::field::{FieldLocation, SlotPosition};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field '{0}' is stored under key '{1}'")]
    KeyMismatch(String, String),

    #[error("field '{0}' appears in both the unplaced pool and the grid")]
    DuplicateKey(String),

    #[error("slot {position} is taken by both '{first}' and '{second}'")]
    SlotConflict {
        position: SlotPosition,
        first: String,
        second: String,
    },

    #[error("static field '{0}' cannot sit in the unplaced pool")]
    StaticUnplaced(String),

    #[error("field '{key}' is marked {} but stored in the {} partition", .found.as_str(), .expected.as_str())]
    WrongLocation {
        key: String,
        expected: FieldLocation,
        found: FieldLocation,
    },

    #[error("field '{0}' has a position that does not match its location")]
    PositionMismatch(String),

    #[error("label of field '{0}' is longer than 20 characters")]
    LabelTooLong(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
