//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `RUST_LOG=info cargo run --release --bin engine_match_series -- --games 20`

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use plum_checkers::engines::engine_checkers_bot::CheckersBot;
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::game_state::game_state::GameState;
use plum_checkers::search::iterative_deepening::SearchConfig;
use plum_checkers::utils::layout_parser::load_layout;
use plum_checkers::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Parser)]
#[command(about = "Play the checkers bot against a random mover")]
struct Args {
    /// Starting layout; the standard 8x8 opening when omitted.
    #[arg(long)]
    layout: Option<std::path::PathBuf>,

    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Bot search depth cap.
    #[arg(long, default_value_t = 6)]
    depth: u32,

    /// Bot time budget per move, in milliseconds.
    #[arg(long, default_value_t = 500)]
    move_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let start = match &args.layout {
        Some(path) => load_layout(path, false)?,
        None => GameState::new_game(false),
    };

    let search = SearchConfig {
        max_depth: args.depth,
        max_time: Duration::from_millis(args.move_ms),
        ..SearchConfig::default()
    };
    let size = start.size();

    // Customize these two closures to experiment with different engines/scorers/depths.
    let player1 = || {
        Box::new(CheckersBot::new(GameState::new_empty(size, true), search))
            as Box<dyn Engine>
    };
    let player2 = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        &start,
        &MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                opening_min_plies: 2,
                opening_max_plies: 6,
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
