//! Error types for board construction and search requests.

use crate::types::Figure;

/// Error raised when a board would violate its shape or contents.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell count is not a perfect square.
    #[display("Board of {} cells is not square", _0)]
    NotSquare(usize),

    /// The side length is outside the supported range.
    #[display("Board size {} is not supported (expected 3, 4 or 5)", _0)]
    UnsupportedSize(usize),

    /// The index does not address a cell.
    #[display("Cell index {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The numeric code is not a known cell value.
    #[display("Cell code {} is not 0, 1 or 2", _0)]
    InvalidCell(u8),

    /// The text could not be read as a board.
    #[display("Cannot parse board symbol {:?}", _0)]
    Parse(String),
}

impl std::error::Error for BoardError {}

/// Error raised when a search request is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// Both sides were given the same figure.
    #[display("Both players cannot use {}", _0)]
    SameFigure(Figure),
}

impl std::error::Error for SearchError {}
