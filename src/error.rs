use crate::geometry::Side;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaserError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error(
        "Invalid field size {0}: expected 1..={max}",
        max = crate::geometry::MAX_CENTER_SIZE
    )]
    InvalidSize(usize),

    #[error("Mirror offset ({row},{col}) is outside the {size}x{size} mirror field")]
    OffsetOutOfRange { row: usize, col: usize, size: usize },

    #[error("Clue index {index} on side '{side}' is outside 1..={size}")]
    ClueIndexOutOfRange { side: Side, index: usize, size: usize },

    #[error("Hidden clue table does not match the primary table: {0}")]
    HiddenTableMismatch(String),

    #[error("Puzzle is not solved; hidden clues can only be recovered from a solved board")]
    NotSolved,

    #[error("Invalid mirror placement '{0}': expected 'row,col,/' or 'row,col,\\'")]
    InvalidPlacement(String),
}

pub type LgResult<T> = Result<T, LaserError>;
