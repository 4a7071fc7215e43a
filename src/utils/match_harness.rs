//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any text
//! I/O. Engines only ever play the bot side of a position, so the engine
//! seated on the player side is handed the mirrored board and its answer is
//! mirrored back.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::checkers_types::Side;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_successors;
use crate::utils::move_notation::format_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win(Side),
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    Win { player: PlayerId, side: Side },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    /// Who acts first in the starting position.
    pub bot_first: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            bot_first: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub bot_side_move_count: u32,
    pub player_side_move_count: u32,
    pub bot_side_total_time_ns: u128,
    pub player_side_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    fn avg_ms(total_ns: u128, moves: u32) -> f64 {
        if moves == 0 {
            0.0
        } else {
            total_ns as f64 / f64::from(moves) / 1_000_000.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            Self::avg_ms(self.player1_total_time_ns, self.player1_moves),
            Self::avg_ms(self.player2_total_time_ns, self.player2_moves),
        )
    }
}

/// Play one match from `start_state`, with a seeded random opening prefix.
///
/// `bot_side` plays the pieces marked as the bot's, `player_side` the others.
pub fn play_engine_match(
    bot_side: &mut dyn Engine,
    player_side: &mut dyn Engine,
    start_state: GameState,
    seed: u64,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    bot_side.new_game();
    player_side.new_game();

    let (mut state, opening_moves) = apply_seeded_random_opening(start_state, seed, config);

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state.clone(),
        opening_moves,
        played_moves: Vec::new(),
        bot_side_move_count: 0,
        player_side_move_count: 0,
        bot_side_total_time_ns: 0,
        player_side_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if state.is_terminal() {
            let winner = if state.bot_lost() { Side::Player } else { Side::Bot };
            result.outcome = MatchOutcome::Win(winner);
            break;
        }

        let mover = state.side_to_move();
        let successors = generate_successors(&state);
        if successors.is_empty() {
            result.outcome = MatchOutcome::Win(mover.opposite());
            break;
        }

        let started = Instant::now();
        let chosen = match mover {
            Side::Bot => bot_side.choose_move(&state)?.best_move,
            Side::Player => player_side
                .choose_move(&state.mirrored())?
                .best_move
                .map(|s| s.mirrored()),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::Bot => {
                result.bot_side_move_count += 1;
                result.bot_side_total_time_ns += elapsed_ns;
            }
            Side::Player => {
                result.player_side_move_count += 1;
                result.player_side_total_time_ns += elapsed_ns;
            }
        }

        // An engine with no answer forfeits, as the bot does in play.
        let Some(chosen) = chosen else {
            result.outcome = MatchOutcome::Win(mover.opposite());
            break;
        };

        if !successors.contains(&chosen) {
            let engine = match mover {
                Side::Bot => bot_side.name(),
                Side::Player => player_side.name(),
            };
            return Err(CheckersError::IllegalEngineMove {
                engine: engine.to_owned(),
                path: format_move(&chosen.moves),
            });
        }

        result.played_moves.push(format_move(&chosen.moves));
        state = chosen;
    }

    result.final_state = state;
    Ok(result)
}

fn apply_seeded_random_opening(
    mut state: GameState,
    seed: u64,
    config: &MatchConfig,
) -> (GameState, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let min = config.opening_min_plies.min(config.opening_max_plies);
    let plies = rng.random_range(min..=config.opening_max_plies);
    let mut moves = Vec::with_capacity(usize::from(plies));

    for _ in 0..plies {
        let successors = generate_successors(&state);
        let Some(next) = successors.choose(&mut rng) else {
            break;
        };
        moves.push(format_move(&next.moves));
        state = next.clone();
    }

    (state, moves)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Seats are drawn per game from `base_seed`, so both engines get to play
/// each side.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    start_state: &GameState,
    config: &MatchSeriesConfig,
) -> CheckersResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut seat_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for game in 0..config.games {
        let player1_is_bot = seat_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(game));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let mut start = start_state.clone();
        start.bots_move = config.per_game.bot_first;

        let result = if player1_is_bot {
            play_engine_match(player1.as_mut(), player2.as_mut(), start, seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), start, seed, &config.per_game)?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_bot {
            (
                result.bot_side_move_count,
                result.player_side_move_count,
                result.bot_side_total_time_ns,
                result.player_side_total_time_ns,
            )
        } else {
            (
                result.player_side_move_count,
                result.bot_side_move_count,
                result.player_side_total_time_ns,
                result.bot_side_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player2_moves += p2_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_total_time_ns += p2_ns;

        let mapped = match result.outcome {
            MatchOutcome::Win(side) => {
                let player1_won = (side == Side::Bot) == player1_is_bot;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::Win { player, side }
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = game + 1,
            games = config.games,
            seed,
            player1_is_bot,
            outcome = ?mapped,
            plies = result.played_moves.len(),
            "series game finished"
        );
    }

    Ok(stats)
}
