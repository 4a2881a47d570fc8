//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a board: line detection, draw detection and the
//! list of playable cells. The search engine calls these at every node.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full, status};
pub use moves::{free_cells, random_free_cell};
pub use win::{Line, find_winning_line, is_winning_line, winner};
