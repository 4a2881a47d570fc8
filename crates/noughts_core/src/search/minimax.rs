//! Exhaustive minimax.
//!
//! Recurses until every branch is decided, so the tree size equals the number
//! of reachable games from the position. Fine on 3×3, hopeless on 4×4 and up.

use super::Move;
use super::context::SearchContext;
use crate::rules::free_cells;
use crate::types::{Board, Cell, Seat};

/// Best move for `to_move`, trial moves placed on and undone from `board`.
pub(crate) fn minimax(
    ctx: &mut SearchContext,
    board: &mut Board,
    to_move: Seat,
    depth: i32,
) -> Move {
    ctx.nodes += 1;

    if let Some(score) = ctx.terminal_score(board, depth) {
        return Move::leaf(score);
    }

    let figure = ctx.figure_of(to_move);
    let maximizing = ctx.is_maximizing(to_move);
    let mut best = Move::horizon();
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for cell in free_cells(board) {
        board.put(cell, Cell::Occupied(figure));
        let score = minimax(ctx, board, to_move.other(), depth - 1)
            .evaluation
            .score();
        board.put(cell, Cell::Empty);

        // Strict comparison: the earliest cell wins ties.
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = Move::scored(Some(cell), score);
        }
    }

    best
}
