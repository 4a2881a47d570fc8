//! Noughts - headless N×N tic-tac-toe.
//!
//! Wraps the search engine from [`noughts_core`] in a turn orchestrator and
//! a TOML-driven engine configuration.
//!
//! # Architecture
//!
//! - **Core** (`noughts_core`): board, rules, minimax and alpha-beta search
//! - **Orchestrator**: owns a live [`Match`], applies moves, tracks the stage
//! - **Config**: search algorithm, depth budgets, opening randomization
//!
//! # Example
//!
//! ```
//! use noughts::{EngineConfig, GameMode, Match};
//! use noughts_core::Figure;
//! use rand::SeedableRng;
//!
//! let policy = EngineConfig::default().policy();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(3);
//! let mut game = Match::new(GameMode::AiAi, 3, Figure::Cross).unwrap();
//! while !game.is_over() {
//!     game.ai_turn(&policy, &mut rng).unwrap();
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod player;

pub use config::{ConfigError, EngineConfig};
pub use orchestrator::{GameStage, Match, MatchError, MoveSource, SearchPolicy, TurnOutcome};
pub use player::{GameMode, Player, players_for};
