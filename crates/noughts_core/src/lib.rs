//! Pure N×N tic-tac-toe logic and move search.
//!
//! Boards are 3×3, 4×4 or 5×5; a player wins by owning a full row, column
//! or diagonal. The crate has no notion of turns or players beyond a
//! [`Seat`] and a [`Figure`]; keeping score of a game is left to the caller.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, DepthBudgets, Figure, SearchRequest, Searcher, Seat};
//!
//! let mut board: Board = "XX. OO. ...".parse().unwrap();
//! let request = SearchRequest::for_board(&board, Seat::First, Figure::Cross, &DepthBudgets::default());
//! let report = Searcher::default().find_best_move(&mut board, &request);
//! assert_eq!(report.cell, Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod types;

pub mod rules;
pub mod search;

pub use error::{BoardError, SearchError};
pub use types::{Board, BoardStatus, Cell, Figure, SUPPORTED_SIZES, Seat};

pub use rules::{
    Line, find_winning_line, free_cells, is_draw, is_full, is_winning_line, random_free_cell,
    status, winner,
};
pub use search::{
    DRAW_SCORE, DepthBudgets, Evaluation, HORIZON_SCORE, MINIMAX_MAX_SIZE, Move, SearchMode,
    SearchReport, SearchRequest, Searcher, WIN_SCORE,
};
