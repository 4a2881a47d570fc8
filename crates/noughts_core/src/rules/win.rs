//! Win detection for N×N boards.

use crate::types::{Board, Cell, Figure};
use serde::{Deserialize, Serialize};

/// A complete line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    /// Row with the given index.
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left, where `row + col == size - 1`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Row-major indices of the cells on this line.
    pub fn cells(self, size: usize) -> Vec<usize> {
        match self {
            Line::Row(row) => (0..size).map(|col| row * size + col).collect(),
            Line::Column(col) => (0..size).map(|row| row * size + col).collect(),
            Line::MainDiagonal => (0..size).map(|i| i * size + i).collect(),
            Line::AntiDiagonal => (0..size).map(|row| row * size + (size - 1 - row)).collect(),
        }
    }
}

/// Finds the first line fully owned by `figure`.
///
/// Lines are checked rows first, then columns, then the main diagonal,
/// then the anti-diagonal.
pub fn find_winning_line(board: &Board, figure: Figure) -> Option<Line> {
    let n = board.size();
    let target = Cell::Occupied(figure);
    let owns = |row: usize, col: usize| board.at(row, col) == target;

    if let Some(row) = (0..n).find(|&row| (0..n).all(|col| owns(row, col))) {
        return Some(Line::Row(row));
    }
    if let Some(col) = (0..n).find(|&col| (0..n).all(|row| owns(row, col))) {
        return Some(Line::Column(col));
    }
    if (0..n).all(|i| owns(i, i)) {
        return Some(Line::MainDiagonal);
    }
    if (0..n).all(|row| owns(row, n - 1 - row)) {
        return Some(Line::AntiDiagonal);
    }
    None
}

/// Checks whether `figure` owns a complete row, column or diagonal.
pub fn is_winning_line(board: &Board, figure: Figure) -> bool {
    find_winning_line(board, figure).is_some()
}

/// Returns the figure owning a complete line, crosses checked first.
pub fn winner(board: &Board) -> Option<Figure> {
    [Figure::Cross, Figure::Zero]
        .into_iter()
        .find(|&figure| is_winning_line(board, figure))
}
