//! Per-call search state.

use super::engine::SearchRequest;
use super::{DRAW_SCORE, WIN_SCORE};
use crate::rules::{is_full, is_winning_line};
use crate::types::{Board, Figure, Seat};

/// State shared by every frame of one top-level search.
///
/// Figures are fixed to the root's point of view for the whole call: a node
/// is scored against the root mover's figure and its opponent's, never
/// against whoever moved last.
#[derive(Debug)]
pub(crate) struct SearchContext {
    whose_turn: Seat,
    current: Figure,
    other: Figure,
    pub(crate) nodes: u64,
}

impl SearchContext {
    pub(crate) fn new(request: &SearchRequest) -> Self {
        Self {
            whose_turn: request.whose_turn(),
            current: request.current(),
            other: request.other(),
            nodes: 0,
        }
    }

    /// Figure placed by the player in `seat`.
    pub(crate) fn figure_of(&self, seat: Seat) -> Figure {
        if seat == self.whose_turn {
            self.current
        } else {
            self.other
        }
    }

    /// Nodes where the root mover is to play maximize.
    pub(crate) fn is_maximizing(&self, seat: Seat) -> bool {
        seat == self.whose_turn
    }

    /// Score of a decided position, `None` while play continues.
    pub(crate) fn terminal_score(&self, board: &Board, depth: i32) -> Option<i32> {
        if is_winning_line(board, self.current) {
            Some(WIN_SCORE + depth)
        } else if is_winning_line(board, self.other) {
            Some(-WIN_SCORE - depth)
        } else if is_full(board) {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }
}
