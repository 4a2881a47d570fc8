//! Move search for N×N tic-tac-toe.
//!
//! Contains:
//! - Exhaustive minimax, practical on 3×3 boards only
//! - Depth-limited minimax with alpha-beta pruning
//! - [`Searcher`], the entry point the turn orchestrator calls
//!
//! Scores are always taken from the point of view of the player to move at
//! the root: `10 + depth` when its figure owns a line, `-10 - depth` when the
//! opponent's does, `0` for a full board. Depth counts down from the root, so
//! quicker wins and slower losses score higher.

mod alphabeta;
mod context;
mod engine;
mod minimax;

pub use engine::{
    DepthBudgets, MINIMAX_MAX_SIZE, SearchMode, SearchReport, SearchRequest, Searcher,
};

use serde::{Deserialize, Serialize};

/// Base score for a completed line.
pub const WIN_SCORE: i32 = 10;

/// Score of a full board without a line.
pub const DRAW_SCORE: i32 = 0;

/// Score reported when the depth budget runs out before a decision.
///
/// Alpha-beta skips any child carrying this score, including one that
/// arrives as an ordinary [`Evaluation::Score`]. Terminal scores are
/// `10 + depth`, `-10 - depth` or `0`, none of which can equal `-1` inside
/// the depth range the search visits.
pub const HORIZON_SCORE: i32 = -1;

/// Value of a searched position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// Score from the root player's point of view.
    Score(i32),
    /// Depth budget exhausted; the branch was not evaluated.
    Horizon,
}

impl Evaluation {
    /// Numeric score, [`HORIZON_SCORE`] for the horizon.
    pub fn score(self) -> i32 {
        match self {
            Evaluation::Score(score) => score,
            Evaluation::Horizon => HORIZON_SCORE,
        }
    }

    /// True for the horizon and for any score equal to [`HORIZON_SCORE`].
    pub fn is_horizon(self) -> bool {
        self.score() == HORIZON_SCORE
    }
}

/// Best cell found at a search node together with its evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Cell to play; `None` at leaves and when nothing was selected.
    pub cell: Option<usize>,
    /// Value of the node.
    pub evaluation: Evaluation,
}

impl Move {
    pub(crate) fn leaf(score: i32) -> Self {
        Self {
            cell: None,
            evaluation: Evaluation::Score(score),
        }
    }

    pub(crate) fn horizon() -> Self {
        Self {
            cell: None,
            evaluation: Evaluation::Horizon,
        }
    }

    pub(crate) fn scored(cell: Option<usize>, score: i32) -> Self {
        Self {
            cell,
            evaluation: Evaluation::Score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores_never_collide_with_horizon() {
        // Leaves are evaluated down to depth -1 before the horizon kicks in.
        for depth in -1..=10 {
            assert_ne!(WIN_SCORE + depth, HORIZON_SCORE);
            assert_ne!(-WIN_SCORE - depth, HORIZON_SCORE);
        }
        assert_ne!(DRAW_SCORE, HORIZON_SCORE);
    }

    #[test]
    fn test_horizon_collision_is_preserved() {
        assert!(Evaluation::Horizon.is_horizon());
        assert!(Evaluation::Score(HORIZON_SCORE).is_horizon());
        assert!(!Evaluation::Score(DRAW_SCORE).is_horizon());
        assert_eq!(Evaluation::Horizon.score(), -1);
    }
}
