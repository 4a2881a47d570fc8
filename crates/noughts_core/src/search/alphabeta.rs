//! Depth-limited minimax with alpha-beta pruning.
//!
//! Fail-hard variant: a node returns its final `alpha` when maximizing and
//! its final `beta` when minimizing, even if no child improved the bound.
//! Children past the depth budget report the horizon and are skipped rather
//! than compared, so a node whose children all hit the horizon returns no
//! cell and a neutral score of zero. Budgets per board size live in
//! [`DepthBudgets`](super::DepthBudgets).

use super::Move;
use super::context::SearchContext;
use crate::rules::free_cells;
use crate::types::{Board, Cell, Seat};

/// Best move for `to_move` within `depth` further plies.
pub(crate) fn alpha_beta(
    ctx: &mut SearchContext,
    board: &mut Board,
    to_move: Seat,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> Move {
    ctx.nodes += 1;

    if let Some(score) = ctx.terminal_score(board, depth) {
        return Move::leaf(score);
    }
    if depth < 0 {
        return Move::horizon();
    }

    let figure = ctx.figure_of(to_move);
    let maximizing = ctx.is_maximizing(to_move);
    let mut chosen = None;
    let mut scored = false;

    for cell in free_cells(board) {
        board.put(cell, Cell::Occupied(figure));
        let child = alpha_beta(ctx, board, to_move.other(), depth - 1, alpha, beta);
        board.put(cell, Cell::Empty);

        if child.evaluation.is_horizon() {
            continue;
        }
        scored = true;
        let score = child.evaluation.score();

        if maximizing {
            if score > alpha {
                alpha = score;
                chosen = Some(cell);
                if beta <= alpha {
                    break;
                }
            }
        } else if score < beta {
            beta = score;
            chosen = Some(cell);
            if beta <= alpha {
                break;
            }
        }
    }

    if !scored {
        return Move::scored(None, 0);
    }
    Move::scored(chosen, if maximizing { alpha } else { beta })
}
