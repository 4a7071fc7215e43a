//! Interactive checkers: a human plays the player side against the bot.
//!
//! Run with:
//! `cargo run --release -- layouts/8x8.board --max-time 5`

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use plum_checkers::game_state::checkers_rules::DEFAULT_LAYOUT_PATH;
use plum_checkers::play::checkers_game::CheckersGame;
use plum_checkers::search::iterative_deepening::{
    ScorePerspective, SearchConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SCORE,
};
use plum_checkers::utils::layout_parser::load_layout;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PerspectiveArg {
    SideToMove,
    Bot,
}

impl From<PerspectiveArg> for ScorePerspective {
    fn from(value: PerspectiveArg) -> Self {
        match value {
            PerspectiveArg::SideToMove => ScorePerspective::SideToMove,
            PerspectiveArg::Bot => ScorePerspective::Bot,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "plum_checkers", version, about = "Play checkers against a search bot")]
struct Args {
    /// Board layout file, one line of `_ b B p P` symbols per row.
    #[arg(default_value = DEFAULT_LAYOUT_PATH)]
    layout: PathBuf,

    /// Score assigned to a won or lost position.
    #[arg(long, default_value_t = DEFAULT_MAX_SCORE)]
    max_score: f64,

    /// Iterative deepening stops before reaching this depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Search time budget per bot move, in seconds.
    #[arg(long, default_value_t = 10.0)]
    max_time: f64,

    /// Let the bot make the first move.
    #[arg(long)]
    bot_first: bool,

    /// Whose point of view leaf and terminal scores are taken from.
    #[arg(long, value_enum, default_value_t = PerspectiveArg::SideToMove)]
    perspective: PerspectiveArg,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let max_time = Duration::try_from_secs_f64(args.max_time)
        .with_context(|| format!("invalid --max-time {}", args.max_time))?;
    let config = SearchConfig {
        max_score: args.max_score,
        max_depth: args.max_depth,
        max_time,
        perspective: args.perspective.into(),
    };

    let state = load_layout(&args.layout, args.bot_first)
        .with_context(|| format!("failed to load layout {}", args.layout.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = CheckersGame::new(state, config, stdin.lock(), stdout.lock());
    game.play()?;
    Ok(())
}
