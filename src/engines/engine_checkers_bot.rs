//! The checkers bot: iterative-deepening alpha-beta behind the `Engine` trait.
//!
//! The bot holds the position it will move from. Callers retarget it with
//! `update_state` before every turn and then ask for a move.

use tracing::info;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::CheckersMoveGenerator;
use crate::search::board_scoring::{BoardScorer, PieceCountScorer};
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig, SearchResult};
use crate::utils::move_notation::format_move;

pub struct CheckersBot {
    state: GameState,
    config: SearchConfig,
    move_generator: CheckersMoveGenerator,
    scorer: Box<dyn BoardScorer>,
}

impl CheckersBot {
    /// Bot using the default piece-count heuristic.
    pub fn new(state: GameState, config: SearchConfig) -> Self {
        Self::with_scorer(state, config, PieceCountScorer)
    }

    pub fn with_scorer(
        state: GameState,
        config: SearchConfig,
        scorer: impl BoardScorer + 'static,
    ) -> Self {
        Self {
            state,
            config,
            move_generator: CheckersMoveGenerator,
            scorer: Box::new(scorer),
        }
    }

    pub fn update_state(&mut self, new_state: GameState) {
        self.state = new_state;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Full search report for the current position.
    pub fn search(&self) -> SearchResult {
        iterative_deepening_search(
            &self.state,
            &self.move_generator,
            self.scorer.as_ref(),
            &self.config,
        )
    }

    /// Best successor of the current position; `None` when no completed
    /// depth found a move that avoids a forced loss.
    pub fn get_move(&self) -> Option<GameState> {
        self.search().best_move
    }
}

impl Engine for CheckersBot {
    fn name(&self) -> &str {
        "Plum Checkers Bot"
    }

    fn choose_move(&mut self, game_state: &GameState) -> CheckersResult<EngineOutput> {
        if !game_state.bots_move {
            return Err(CheckersError::NotBotsMove);
        }

        self.update_state(game_state.clone());
        let result = self.search();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time_ms {}",
            result.reached_depth,
            result.best_score,
            result.nodes,
            result.elapsed.as_millis()
        ));
        out.info_lines.push(format!(
            "info string checkers_bot max_depth {} perspective {:?}",
            self.config.max_depth, self.config.perspective
        ));

        match &result.best_move {
            Some(best) => info!(
                mv = %format_move(&best.moves),
                depth = result.reached_depth,
                score = result.best_score,
                nodes = result.nodes,
                "bot chose move"
            ),
            None => info!(nodes = result.nodes, "bot found no move"),
        }

        out.best_move = result.best_move;
        Ok(out)
    }
}
