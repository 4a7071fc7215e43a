//! Engine abstraction layer used by the game loop and the match harness.
//!
//! Engines always play the bot side: they are handed a position where
//! `bots_move` is true and answer with one of its successors. A caller that
//! wants an engine to play the other side hands it the mirrored position.

use crate::checkers_errors::CheckersResult;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Chosen successor, or `None` when the engine has no move to offer.
    pub best_move: Option<GameState>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> CheckersResult<EngineOutput>;
}
