//! Random-move engine.
//!
//! Selects uniformly among legal successors. Used as a sparring partner in
//! engine matches and for smoke-testing the game loop.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{CheckersMoveGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: CheckersMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: CheckersMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            move_generator: CheckersMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Checkers Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> CheckersResult<EngineOutput> {
        if !game_state.bots_move {
            return Err(CheckersError::NotBotsMove);
        }

        let successors = self.move_generator.generate_successors(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            successors.len()
        ));
        out.best_move = successors.choose(&mut self.rng).cloned();
        Ok(out)
    }
}
