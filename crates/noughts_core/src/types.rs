//! Core domain types for N×N tic-tac-toe.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Board sizes the engine plays on.
pub const SUPPORTED_SIZES: RangeInclusive<usize> = 3..=5;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Figure {
    /// Nought, cell code `1`.
    #[strum(to_string = "zero", serialize = "o")]
    Zero,
    /// Cross, cell code `2`. Crosses open the game.
    #[strum(to_string = "cross", serialize = "x")]
    Cross,
}

impl Figure {
    /// Returns the opposing figure.
    pub fn opponent(self) -> Self {
        match self {
            Figure::Zero => Figure::Cross,
            Figure::Cross => Figure::Zero,
        }
    }

    /// Numeric cell code (`1` for zero, `2` for cross).
    pub fn code(self) -> u8 {
        match self {
            Figure::Zero => 1,
            Figure::Cross => 2,
        }
    }

    /// Single-character board symbol.
    pub fn symbol(self) -> char {
        match self {
            Figure::Zero => 'O',
            Figure::Cross => 'X',
        }
    }
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Nothing placed yet.
    Empty,
    /// Holds a figure.
    Occupied(Figure),
}

impl Cell {
    /// Numeric cell code (`0` empty, `1` zero, `2` cross).
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(figure) => figure.code(),
        }
    }

    /// The figure in this cell, if any.
    pub fn figure(self) -> Option<Figure> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(figure) => Some(figure),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(figure) => figure.symbol(),
        }
    }
}

impl From<Figure> for Cell {
    fn from(figure: Figure) -> Self {
        Cell::Occupied(figure)
    }
}

impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Occupied(Figure::Zero)),
            2 => Ok(Cell::Occupied(Figure::Cross)),
            other => Err(BoardError::InvalidCell(other)),
        }
    }
}

/// Seat of a player in a two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// Player 0.
    First,
    /// Player 1.
    Second,
}

impl Seat {
    /// Zero-based player index.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The seat that moves after this one.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Seat for a zero-based player index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            _ => None,
        }
    }
}

/// Square N×N board, cells in row-major order.
///
/// Cell `(row, col)` lives at index `row * size + col`. The cell count is
/// always a perfect square and the side length is one of [`SUPPORTED_SIZES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Builds a board from row-major cells, deriving the side length.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, BoardError> {
        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(BoardError::NotSquare(cells.len()));
        }
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }
        Ok(Self { size, cells })
    }

    /// Builds a board from numeric cell codes (`0` empty, `1` zero, `2` cross).
    pub fn from_codes(codes: &[u8]) -> Result<Self, BoardError> {
        let cells = codes
            .iter()
            .map(|&code| Cell::try_from(code))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(cells)
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (N²).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Numeric codes of all cells in row-major order.
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at `index` exists and is empty.
    pub fn is_free(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Row-major index of `(row, col)`.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Sets the cell at the given index.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;
        *slot = cell;
        Ok(())
    }

    /// Places `figure` at `index`, overwriting whatever was there.
    pub fn place(&mut self, index: usize, figure: Figure) -> Result<(), BoardError> {
        self.set(index, Cell::Occupied(figure))
    }

    /// Cell at `(row, col)`; both must be below `size`.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Writes a cell whose index came from the board itself.
    pub(crate) fn put(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = BoardError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let line: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

/// Parses a board from text.
///
/// Comma-separated input is read as numeric codes (`"2,2,0,1,1,0,0,0,0"`).
/// Anything else is read one symbol per cell, ignoring whitespace and `|`:
/// `X`/`x`/`2` cross, `O`/`o`/`1` zero, `.`/`_`/`-`/`0` empty.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            let codes = s
                .split(',')
                .map(|part| {
                    part.trim()
                        .parse::<u8>()
                        .map_err(|_| BoardError::Parse(part.trim().to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Self::from_codes(&codes);
        }

        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' | '2' => Ok(Cell::Occupied(Figure::Cross)),
                'O' | 'o' | '1' => Ok(Cell::Occupied(Figure::Zero)),
                '.' | '_' | '-' | '0' => Ok(Cell::Empty),
                other => Err(BoardError::Parse(other.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(cells)
    }
}

/// Position status as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    /// No line and at least one free cell.
    InProgress,
    /// The figure owns a complete line.
    Won(Figure),
    /// Full board without a line.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.cell_count(), 16);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_unsupported_size_rejected() {
        assert_eq!(Board::new(2), Err(BoardError::UnsupportedSize(2)));
        assert_eq!(Board::new(6), Err(BoardError::UnsupportedSize(6)));
    }

    #[test]
    fn test_non_square_length_rejected() {
        let result = Board::from_codes(&[0; 10]);
        assert_eq!(result, Err(BoardError::NotSquare(10)));
    }

    #[test]
    fn test_invalid_code_rejected() {
        let result = Board::from_codes(&[0, 0, 0, 0, 3, 0, 0, 0, 0]);
        assert_eq!(result, Err(BoardError::InvalidCell(3)));
    }

    #[test]
    fn test_row_major_layout() {
        let mut board = Board::new(3).unwrap();
        let idx = board.index_of(1, 2);
        assert_eq!(idx, 5);
        board.place(idx, Figure::Cross).unwrap();
        assert_eq!(board.at(1, 2), Cell::Occupied(Figure::Cross));
        assert!(!board.is_free(5));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.set(9, Cell::Occupied(Figure::Zero)),
            Err(BoardError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_parse_codes_and_symbols_agree() {
        let from_codes: Board = "2,2,0, 1,1,0, 0,0,0".parse().unwrap();
        let from_symbols: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(from_codes, from_symbols);
        assert_eq!(from_codes.codes(), vec![2, 2, 0, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let result = "XX? OO. ...".parse::<Board>();
        assert_eq!(result, Err(BoardError::Parse("?".to_string())));
    }

    #[test]
    fn test_display() {
        let board: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    }

    #[test]
    fn test_figure_parsing() {
        assert_eq!("cross".parse::<Figure>().unwrap(), Figure::Cross);
        assert_eq!("X".parse::<Figure>().unwrap(), Figure::Cross);
        assert_eq!("o".parse::<Figure>().unwrap(), Figure::Zero);
        assert_eq!(Figure::Zero.to_string(), "zero");
    }

    #[test]
    fn test_seat_alternates() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other().index(), 0);
        assert_eq!(Seat::from_index(2), None);
    }
}
