//! Draw detection and overall position status.

use super::win::winner;
use crate::types::{Board, BoardStatus, Cell};

/// Checks if the board is full (no empty cell left).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Cell::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

/// Classifies the position.
pub fn status(board: &Board) -> BoardStatus {
    match winner(board) {
        Some(figure) => BoardStatus::Won(figure),
        None if is_full(board) => BoardStatus::Draw,
        None => BoardStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Figure;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
        assert_eq!(status(&board), BoardStatus::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "XOX OXO OX.".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
        assert_eq!(status(&board), BoardStatus::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
        assert_eq!(status(&board), BoardStatus::Won(Figure::Cross));
    }
}
