//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search delegates static position scoring to `BoardScorer`, so alternate
//! heuristics can be swapped without touching search code. Any
//! `Fn(&GameState) -> f64` closure is also a scorer.

use crate::game_state::checkers_rules::is_edge_square;
use crate::game_state::checkers_types::{Side, Square};
use crate::game_state::game_state::GameState;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side that acts on `game_state`:
    /// positive is good for it, negative is good for its opponent.
    fn score(&self, game_state: &GameState) -> f64;
}

impl<F> BoardScorer for F
where
    F: Fn(&GameState) -> f64 + Send + Sync,
{
    fn score(&self, game_state: &GameState) -> f64 {
        self(game_state)
    }
}

/// Bot-minus-player total, flipped when the player is to act.
#[inline]
fn relative_to_side_to_move(game_state: &GameState, bot: f64, player: f64) -> f64 {
    if game_state.bots_move {
        bot - player
    } else {
        player - bot
    }
}

/// Default heuristic: material, a bonus for pieces on the board edge (they
/// cannot be captured there), and a small pull for men to advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceCountScorer;

impl PieceCountScorer {
    pub const MAN_VALUE: f64 = 1.0;
    pub const KING_VALUE: f64 = 1.5;
    pub const EDGE_BONUS: f64 = 1.0;
    pub const ADVANCE_WEIGHT: f64 = 0.1;

    /// Value of one piece on `(row, col)` for its owner.
    pub fn piece_value(size: usize, row: usize, col: usize, square: Square) -> f64 {
        let edge = if is_edge_square(size, (row, col)) {
            Self::EDGE_BONUS
        } else {
            0.0
        };

        match square {
            Square::Empty => 0.0,
            // Distance still to travel, measured from the bot's back rank.
            Square::BotMan => Self::MAN_VALUE + edge - Self::ADVANCE_WEIGHT * (size - row) as f64,
            Square::PlayerMan => Self::MAN_VALUE + edge - Self::ADVANCE_WEIGHT * row as f64,
            Square::BotKing | Square::PlayerKing => Self::KING_VALUE + edge,
        }
    }
}

impl BoardScorer for PieceCountScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        let size = game_state.size();
        let mut bot = 0.0;
        let mut player = 0.0;

        for (row, squares) in game_state.rows().enumerate() {
            for (col, &square) in squares.iter().enumerate() {
                let value = Self::piece_value(size, row, col, square);
                match square.side() {
                    Some(Side::Bot) => bot += value,
                    Some(Side::Player) => player += value,
                    None => {}
                }
            }
        }

        relative_to_side_to_move(game_state, bot, player)
    }
}

/// Men and kings only, no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> f64 {
        let mut bot = 0.0;
        let mut player = 0.0;

        for &square in game_state.board() {
            let value = if square.is_king() {
                PieceCountScorer::KING_VALUE
            } else {
                PieceCountScorer::MAN_VALUE
            };
            match square.side() {
                Some(Side::Bot) => bot += value,
                Some(Side::Player) => player += value,
                None => {}
            }
        }

        relative_to_side_to_move(game_state, bot, player)
    }
}
