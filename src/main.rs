//! Noughts - command line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{EngineConfig, GameMode, GameStage, Match};
use noughts_core::{Board, Figure, SearchMode, SearchRequest, Seat};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            size,
            first,
            seed,
            search,
        } => run_play(config, size, first, seed, search),
        Command::Analyze {
            board,
            to_move,
            search,
            depth,
            json,
        } => run_analyze(config, board, to_move, search, depth, json),
    }
}

/// Plays a full game between two search-driven players.
#[instrument(skip(config))]
fn run_play(
    config: EngineConfig,
    size: usize,
    first: Option<Figure>,
    seed: Option<u64>,
    search: Option<SearchMode>,
) -> Result<()> {
    let config = match search {
        Some(mode) => config.with_search(mode),
        None => config,
    };
    let policy = config.policy();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let first = first.unwrap_or_else(|| {
        if rng.gen_bool(0.5) {
            Figure::Cross
        } else {
            Figure::Zero
        }
    });

    let mut game = Match::new(GameMode::AiAi, size, first)?;
    println!("{}\n", game.board());

    while !game.is_over() {
        let outcome = game.ai_turn(&policy, &mut rng)?;
        let nodes = outcome.report.map(|r| r.nodes).unwrap_or(0);
        println!(
            "{} ({}) plays {} [{}, {} nodes]",
            game.player(outcome.seat).name(),
            outcome.figure,
            outcome.cell,
            outcome.source,
            nodes
        );
        println!("{}\n", game.board());
    }

    if let GameStage::Won(seat) = game.stage() {
        let winner = game.player(seat);
        println!("{} ({}) wins", winner.name(), winner.figure());
    } else {
        println!("Draw");
    }
    info!(turns = game.turns(), "Game finished");
    Ok(())
}

/// Runs one search on the given board.
#[instrument(skip(config, board))]
fn run_analyze(
    config: EngineConfig,
    mut board: Board,
    to_move: Figure,
    search: Option<SearchMode>,
    depth: Option<i32>,
    as_json: bool,
) -> Result<()> {
    let mut config = match search {
        Some(mode) => config.with_search(mode),
        None => config,
    };
    if let Some(depth) = depth {
        config = config.with_depth(board.size(), depth)?;
    }
    let policy = config.policy();
    let searcher = policy.searcher_for(board.size());

    let request = SearchRequest::for_board(&board, Seat::First, to_move, &policy.budgets);
    let report = searcher.find_best_move(&mut board, &request);

    if as_json {
        let output = json!({
            "board": board.codes(),
            "to_move": to_move,
            "search": searcher.mode(),
            "depth": request.depth(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", board);
    match report.cell {
        Some(cell) => println!(
            "{} to move: play {} (row {}, col {}), evaluation {:?}",
            to_move,
            cell,
            cell / board.size(),
            cell % board.size(),
            report.evaluation
        ),
        None => println!("{} to move: no move found, evaluation {:?}", to_move, report.evaluation),
    }
    println!("{} nodes searched with {}", report.nodes, searcher.mode());
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,noughts=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
