//! Search entry point used by the turn orchestrator.

use super::Evaluation;
use super::alphabeta::alpha_beta;
use super::context::SearchContext;
use super::minimax::minimax;
use crate::error::SearchError;
use crate::types::{Board, Figure, Seat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Search algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SearchMode {
    /// Exhaustive minimax; only tractable on 3×3.
    Minimax,
    /// Depth-limited alpha-beta pruning.
    #[default]
    AlphaBeta,
}

/// Largest board side exhaustive minimax finishes on.
pub const MINIMAX_MAX_SIZE: usize = 3;

impl SearchMode {
    /// Whether a search in this mode on a `size`×`size` board terminates in
    /// practice. Alpha-beta is bounded by its depth budget; minimax is not.
    pub fn is_tractable(self, size: usize) -> bool {
        match self {
            SearchMode::Minimax => size <= MINIMAX_MAX_SIZE,
            SearchMode::AlphaBeta => true,
        }
    }
}

/// Alpha-beta depth budget per board size.
///
/// Tuned so a move on each size comes back in interactive time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthBudgets {
    /// Depth for 3×3 boards.
    pub size3: i32,
    /// Depth for 4×4 boards.
    pub size4: i32,
    /// Depth for 5×5 boards.
    pub size5: i32,
}

impl DepthBudgets {
    /// Depth for a board of the given side length.
    pub fn for_size(&self, size: usize) -> i32 {
        match size {
            3 => self.size3,
            4 => self.size4,
            _ => self.size5,
        }
    }
}

impl Default for DepthBudgets {
    fn default() -> Self {
        Self {
            size3: 10,
            size4: 8,
            size5: 6,
        }
    }
}

/// Inputs of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    whose_turn: Seat,
    other: Figure,
    current: Figure,
    depth: i32,
}

impl SearchRequest {
    /// Creates a request for the player in `whose_turn`, who plays `current`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SameFigure`] if both figures are equal.
    pub fn new(
        whose_turn: Seat,
        other: Figure,
        current: Figure,
        depth: i32,
    ) -> Result<Self, SearchError> {
        if other == current {
            return Err(SearchError::SameFigure(current));
        }
        Ok(Self {
            whose_turn,
            other,
            current,
            depth,
        })
    }

    /// Request with the budgeted depth for `board`'s size.
    pub fn for_board(
        board: &Board,
        whose_turn: Seat,
        current: Figure,
        budgets: &DepthBudgets,
    ) -> Self {
        Self {
            whose_turn,
            other: current.opponent(),
            current,
            depth: budgets.for_size(board.size()),
        }
    }

    /// Seat of the player to move at the root.
    pub fn whose_turn(&self) -> Seat {
        self.whose_turn
    }

    /// Figure of the player to move.
    pub fn current(&self) -> Figure {
        self.current
    }

    /// Figure of the opponent.
    pub fn other(&self) -> Figure {
        self.other
    }

    /// Remaining depth at the root.
    pub fn depth(&self) -> i32 {
        self.depth
    }
}

/// Outcome of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen cell. `None` tells the caller to fall back to a random free cell.
    pub cell: Option<usize>,
    /// Root evaluation.
    pub evaluation: Evaluation,
    /// Nodes visited during this call.
    pub nodes: u64,
}

/// Picks moves for a search-driven player.
///
/// Holds configuration only; every call starts from a fresh context, so
/// results depend on nothing but the board and the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Searcher {
    mode: SearchMode,
}

impl Searcher {
    /// Creates a searcher running the given algorithm.
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Algorithm in use.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Searches `board` for the best cell for the requested player.
    ///
    /// Trial moves are placed on `board` and undone before the call returns,
    /// so the caller observes the board unchanged.
    #[instrument(skip(self, board), fields(mode = %self.mode, size = board.size()))]
    pub fn find_best_move(&self, board: &mut Board, request: &SearchRequest) -> SearchReport {
        #[cfg(debug_assertions)]
        let snapshot = board.clone();

        let mut ctx = SearchContext::new(request);
        let best = match self.mode {
            SearchMode::Minimax => minimax(&mut ctx, board, request.whose_turn, request.depth),
            SearchMode::AlphaBeta => alpha_beta(
                &mut ctx,
                board,
                request.whose_turn,
                request.depth,
                i32::MIN,
                i32::MAX,
            ),
        };

        #[cfg(debug_assertions)]
        debug_assert_eq!(snapshot, *board, "search left trial moves on the board");

        debug!(cell = ?best.cell, evaluation = ?best.evaluation, nodes = ctx.nodes, "Search finished");
        SearchReport {
            cell: best.cell,
            evaluation: best.evaluation,
            nodes: ctx.nodes,
        }
    }

    /// Searches a private copy of `board`.
    pub fn analyze(&self, board: &Board, request: &SearchRequest) -> SearchReport {
        let mut scratch = board.clone();
        self.find_best_move(&mut scratch, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budgets() {
        let budgets = DepthBudgets::default();
        assert_eq!(budgets.for_size(3), 10);
        assert_eq!(budgets.for_size(4), 8);
        assert_eq!(budgets.for_size(5), 6);
    }

    #[test]
    fn test_request_rejects_same_figure() {
        let result = SearchRequest::new(Seat::First, Figure::Cross, Figure::Cross, 10);
        assert_eq!(result, Err(SearchError::SameFigure(Figure::Cross)));
    }

    #[test]
    fn test_request_for_board_uses_budget() {
        let board = Board::new(4).unwrap();
        let request =
            SearchRequest::for_board(&board, Seat::Second, Figure::Zero, &DepthBudgets::default());
        assert_eq!(request.depth(), 8);
        assert_eq!(request.other(), Figure::Cross);
        assert_eq!(request.whose_turn(), Seat::Second);
    }

    #[test]
    fn test_search_mode_parsing() {
        assert_eq!("alpha-beta".parse::<SearchMode>().unwrap(), SearchMode::AlphaBeta);
        assert_eq!("Minimax".parse::<SearchMode>().unwrap(), SearchMode::Minimax);
        assert_eq!(SearchMode::default().to_string(), "alpha-beta");
    }

    #[test]
    fn test_minimax_tractable_on_three_only() {
        assert!(SearchMode::Minimax.is_tractable(3));
        assert!(!SearchMode::Minimax.is_tractable(4));
        assert!(!SearchMode::Minimax.is_tractable(5));
        assert!(SearchMode::AlphaBeta.is_tractable(5));
    }

    #[test]
    fn test_report_json_shape() {
        let report = SearchReport {
            cell: None,
            evaluation: Evaluation::Horizon,
            nodes: 3,
        };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["cell"], serde_json::Value::Null);
        assert_eq!(json["evaluation"], "horizon");
    }

    #[test]
    fn test_second_seat_maximizes_for_itself() {
        // Zero sits in the second seat and can win at once on the middle row.
        let mut board: Board = "XX. OO. X..".parse().unwrap();
        let request = SearchRequest::new(Seat::Second, Figure::Cross, Figure::Zero, 10).unwrap();
        let report = Searcher::default().find_best_move(&mut board, &request);
        assert_eq!(report.cell, Some(5));
        assert_eq!(report.evaluation, Evaluation::Score(19));
    }
}
