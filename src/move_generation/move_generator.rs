//! Successor generation entry points.
//!
//! `MoveGenerator` is the seam between the rules and the search; the search
//! only ever sees positions through it. `SuccessorGenerator` is the
//! retargetable wrapper used by game loops that hold one current position.

use tracing::trace;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_jumps::generate_jumps;
use crate::move_generation::legal_steps::generate_steps;

pub trait MoveGenerator: Send + Sync {
    /// Every position reachable by one legal ply of the side to move.
    fn generate_successors(&self, game_state: &GameState) -> Vec<GameState>;
}

/// Checkers rules with mandatory jumps and jump chaining.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckersMoveGenerator;

impl MoveGenerator for CheckersMoveGenerator {
    fn generate_successors(&self, game_state: &GameState) -> Vec<GameState> {
        generate_successors(game_state)
    }
}

/// Jumps first; plain steps only when no piece of the side to move can jump.
pub fn generate_successors(game_state: &GameState) -> Vec<GameState> {
    let mut successors = Vec::with_capacity(16);

    generate_jumps(game_state, &mut successors);
    if successors.is_empty() {
        generate_steps(game_state, &mut successors);
    }

    trace!(
        bots_move = game_state.bots_move,
        count = successors.len(),
        "generated successors"
    );
    successors
}

/// Successor generator bound to one position.
#[derive(Debug, Clone)]
pub struct SuccessorGenerator {
    state: GameState,
}

impl SuccessorGenerator {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn update_state(&mut self, new_state: GameState) {
        self.state = new_state;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn successors(&self) -> Vec<GameState> {
        generate_successors(&self.state)
    }
}

/// Generator that never finds a move, for exercising terminal handling.
pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_successors(&self, _game_state: &GameState) -> Vec<GameState> {
        Vec::new()
    }
}
