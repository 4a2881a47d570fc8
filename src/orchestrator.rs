//! Turn orchestration for a single match.
//!
//! A [`Match`] owns the live board and the turn bookkeeping. It asks the
//! search engine for moves on search-driven turns, applies the chosen cell,
//! then checks for a win or a draw and hands the turn over.

use crate::player::{GameMode, Player, players_for};
use noughts_core::{
    Board, BoardError, DepthBudgets, Figure, SearchMode, SearchReport, SearchRequest, Searcher,
    Seat, is_full, is_winning_line, random_free_cell,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Stage of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStage {
    /// Moves are being made.
    InProgress,
    /// The player in this seat completed a line.
    Won(Seat),
    /// The board filled up without a line.
    Draw,
}

/// How the cell of a turn was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MoveSource {
    /// Chosen by a person.
    Player,
    /// Chosen by the search engine.
    Search,
    /// Drawn at random: opening move, or the search returned no cell.
    Random,
}

/// Record of one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Seat that moved.
    pub seat: Seat,
    /// Figure placed.
    pub figure: Figure,
    /// Cell played.
    pub cell: usize,
    /// How the cell was picked.
    pub source: MoveSource,
    /// Search report, when the search ran.
    pub report: Option<SearchReport>,
    /// Stage after the move.
    pub stage: GameStage,
}

/// How search-driven players pick their moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Search algorithm.
    pub searcher: Searcher,
    /// Depth budget per board size.
    pub budgets: DepthBudgets,
    /// Play the very first move of a game at random instead of searching.
    pub randomize_opening: bool,
}

impl SearchPolicy {
    /// Searcher to use on a `size`×`size` board.
    ///
    /// Exhaustive minimax does not finish on boards larger than 3×3, so
    /// those searches run alpha-beta with the configured depth budget.
    pub fn searcher_for(&self, size: usize) -> Searcher {
        let mode = self.searcher.mode();
        if mode.is_tractable(size) {
            return self.searcher;
        }
        warn!(%mode, size, "Search mode intractable on this board, using alpha-beta");
        Searcher::new(SearchMode::AlphaBeta)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            searcher: Searcher::default(),
            budgets: DepthBudgets::default(),
            randomize_opening: true,
        }
    }
}

/// Error that can occur when making a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// The match has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The seat to move is not controlled the way the move was requested.
    #[display("It's not a {} turn for {:?}", _1, _0)]
    NotYourTurn(Seat, &'static str),

    /// The cell already holds a figure.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// No free cell was left to play.
    #[display("No free cell left on the board")]
    BoardFull,

    /// The board rejected the move.
    #[display("{}", _0)]
    Board(BoardError),
}

impl std::error::Error for MatchError {}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

/// A two-player match on an N×N board.
#[derive(Debug, Clone)]
pub struct Match {
    mode: GameMode,
    players: [Player; 2],
    board: Board,
    stage: GameStage,
    whose_turn: Seat,
    turns: u32,
}

impl Match {
    /// Starts a match; the first player places `first_figure`.
    ///
    /// Crosses always open, so the seat holding the cross moves first.
    #[instrument]
    pub fn new(mode: GameMode, size: usize, first_figure: Figure) -> Result<Self, MatchError> {
        let board = Board::new(size)?;
        let players = players_for(mode, first_figure);
        let whose_turn = if first_figure == Figure::Cross {
            Seat::First
        } else {
            Seat::Second
        };
        info!(%mode, size, starts = %players[whose_turn.index()].name(), "Match created");
        Ok(Self {
            mode,
            players,
            board,
            stage: GameStage::InProgress,
            whose_turn,
            turns: 0,
        })
    }

    /// Game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, by seat index.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player sitting in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Player to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.whose_turn)
    }

    /// Player waiting.
    pub fn other_player(&self) -> &Player {
        self.player(self.whose_turn.other())
    }

    /// Seat to move.
    pub fn whose_turn(&self) -> Seat {
        self.whose_turn
    }

    /// Completed turns that handed play to the other side.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Current stage.
    pub fn stage(&self) -> GameStage {
        self.stage
    }

    /// True once the match is won or drawn.
    pub fn is_over(&self) -> bool {
        self.stage != GameStage::InProgress
    }

    /// Plays `cell` for a person-controlled seat.
    ///
    /// # Errors
    ///
    /// Fails when the match is over, the seat to move is search-driven, or
    /// the cell is taken or does not exist.
    #[instrument(skip(self), fields(seat = ?self.whose_turn))]
    pub fn player_turn(&mut self, cell: usize) -> Result<TurnOutcome, MatchError> {
        self.ensure_in_progress()?;
        if *self.current_player().search_driven() {
            return Err(MatchError::NotYourTurn(self.whose_turn, "person"));
        }
        match self.board.get(cell) {
            None => return Err(BoardError::OutOfBounds(cell).into()),
            Some(_) if !self.board.is_free(cell) => return Err(MatchError::CellOccupied(cell)),
            Some(_) => {}
        }
        self.finish_turn(cell, MoveSource::Player, None)
    }

    /// Lets the search engine play for a search-driven seat.
    ///
    /// The opening move of the game is random when the policy asks for it,
    /// and any search that returns no cell falls back to a random free cell.
    ///
    /// # Errors
    ///
    /// Fails when the match is over or the seat to move is person-controlled.
    #[instrument(skip(self, policy, rng), fields(seat = ?self.whose_turn, turns = self.turns))]
    pub fn ai_turn<R: Rng + ?Sized>(
        &mut self,
        policy: &SearchPolicy,
        rng: &mut R,
    ) -> Result<TurnOutcome, MatchError> {
        self.ensure_in_progress()?;
        if !*self.current_player().search_driven() {
            return Err(MatchError::NotYourTurn(self.whose_turn, "search"));
        }

        if self.turns == 0 && policy.randomize_opening {
            debug!("Opening move, placing randomly");
            let cell = random_free_cell(&self.board, rng).ok_or(MatchError::BoardFull)?;
            return self.finish_turn(cell, MoveSource::Random, None);
        }

        let figure = *self.current_player().figure();
        let request = SearchRequest::for_board(&self.board, self.whose_turn, figure, &policy.budgets);
        let searcher = policy.searcher_for(self.board.size());
        let report = searcher.find_best_move(&mut self.board, &request);

        match report.cell {
            Some(cell) => self.finish_turn(cell, MoveSource::Search, Some(report)),
            None => {
                warn!(nodes = report.nodes, "No move found, placing randomly");
                let cell = random_free_cell(&self.board, rng).ok_or(MatchError::BoardFull)?;
                self.finish_turn(cell, MoveSource::Random, Some(report))
            }
        }
    }

    fn ensure_in_progress(&self) -> Result<(), MatchError> {
        if self.is_over() {
            return Err(MatchError::GameOver);
        }
        Ok(())
    }

    fn finish_turn(
        &mut self,
        cell: usize,
        source: MoveSource,
        report: Option<SearchReport>,
    ) -> Result<TurnOutcome, MatchError> {
        let seat = self.whose_turn;
        let figure = *self.current_player().figure();
        self.board.place(cell, figure)?;
        debug!(?seat, %figure, cell, %source, "Move applied");

        self.handle_end_turn();

        Ok(TurnOutcome {
            seat,
            figure,
            cell,
            source,
            report,
            stage: self.stage,
        })
    }

    /// Checks the mover for a win, otherwise records a draw if the board is
    /// full and passes the turn.
    fn handle_end_turn(&mut self) {
        let figure = *self.current_player().figure();
        if is_winning_line(&self.board, figure) {
            self.stage = GameStage::Won(self.whose_turn);
            info!(winner = %self.current_player().name(), %figure, "Match won");
            return;
        }
        if is_full(&self.board) {
            self.stage = GameStage::Draw;
            info!("Match drawn");
        }
        self.whose_turn = self.whose_turn.other();
        self.turns += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cross_moves_first() {
        let game = Match::new(GameMode::PlayerAi, 3, Figure::Zero).unwrap();
        assert_eq!(game.whose_turn(), Seat::Second);
        assert_eq!(*game.current_player().figure(), Figure::Cross);
        assert_eq!(*game.other_player().figure(), Figure::Zero);
    }

    #[test]
    fn test_unsupported_size() {
        let result = Match::new(GameMode::AiAi, 6, Figure::Cross);
        assert_eq!(
            result.err(),
            Some(MatchError::Board(BoardError::UnsupportedSize(6)))
        );
    }

    #[test]
    fn test_person_cannot_move_for_search_seat() {
        let mut game = Match::new(GameMode::PlayerAi, 3, Figure::Zero).unwrap();
        assert!(matches!(
            game.player_turn(4),
            Err(MatchError::NotYourTurn(Seat::Second, _))
        ));
    }

    #[test]
    fn test_search_cannot_move_for_person_seat() {
        let mut game = Match::new(GameMode::PlayerPlayer, 3, Figure::Cross).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            game.ai_turn(&SearchPolicy::default(), &mut rng),
            Err(MatchError::NotYourTurn(Seat::First, _))
        ));
    }

    #[test]
    fn test_opening_move_is_random_then_searched() {
        let mut game = Match::new(GameMode::AiAi, 3, Figure::Cross).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let policy = SearchPolicy::default();

        let first = game.ai_turn(&policy, &mut rng).unwrap();
        assert_eq!(first.source, MoveSource::Random);
        assert!(first.report.is_none());

        let second = game.ai_turn(&policy, &mut rng).unwrap();
        assert_eq!(second.source, MoveSource::Search);
        assert_eq!(second.figure, Figure::Zero);
        assert!(second.report.is_some_and(|r| r.nodes > 0));
    }

    #[test]
    fn test_opening_searched_when_not_randomized() {
        let mut game = Match::new(GameMode::AiAi, 3, Figure::Cross).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let policy = SearchPolicy {
            randomize_opening: false,
            ..SearchPolicy::default()
        };
        let first = game.ai_turn(&policy, &mut rng).unwrap();
        assert_eq!(first.source, MoveSource::Search);
    }

    #[test]
    fn test_minimax_policy_falls_back_on_large_boards() {
        let policy = SearchPolicy {
            searcher: Searcher::new(SearchMode::Minimax),
            ..SearchPolicy::default()
        };
        assert_eq!(policy.searcher_for(3).mode(), SearchMode::Minimax);
        assert_eq!(policy.searcher_for(4).mode(), SearchMode::AlphaBeta);
        assert_eq!(policy.searcher_for(5).mode(), SearchMode::AlphaBeta);
    }
}
