use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimensions { rows: usize, cols: usize },
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "board dimensions must be positive, got {}x{}", rows, cols)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "position ({}, {}) is outside the board", row, col)
            }
        }
    }
}

impl std::error::Error for BoardError {}
