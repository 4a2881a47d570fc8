//! Enumeration of playable cells.

use crate::types::{Board, Cell};
use rand::Rng;
use rand::seq::SliceRandom;

/// Indices of every empty cell, ascending.
///
/// Recomputed on every call; the search mutates the board between calls.
pub fn free_cells(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
        .collect()
}

/// A uniformly chosen empty cell, or `None` on a full board.
pub fn random_free_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    free_cells(board).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_free_cells_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(free_cells(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_free_cells_filters_occupied() {
        let board: Board = "X... .O.. .... ...X".parse().unwrap();
        let free = free_cells(&board);
        assert_eq!(free.len(), 13);
        assert!(!free.contains(&0));
        assert!(!free.contains(&5));
        assert!(!free.contains(&15));
        assert!(free.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_random_free_cell_is_free() {
        let board: Board = "XOX OX. .O.".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let cell = random_free_cell(&board, &mut rng).unwrap();
            assert!(board.is_free(cell));
        }
    }

    #[test]
    fn test_random_free_cell_full_board() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_free_cell(&board, &mut rng), None);
    }
}
