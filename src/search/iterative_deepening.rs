//! Iterative deepening search with minimax alpha-beta pruning.
//!
//! The root position's successors are re-searched at increasing depth until
//! the depth limit or the wall-clock budget is reached. The clock is polled
//! cooperatively: before each new depth, and at every node before expanding
//! it. A node that finds the budget spent is scored by the evaluator instead
//! of expanded, so an overrun is bounded by the depth already committed.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

pub const DEFAULT_MAX_SCORE: f64 = 1e9;
pub const DEFAULT_MAX_DEPTH: u32 = 25;
pub const DEFAULT_MAX_TIME: Duration = Duration::from_secs(10);

/// How terminal and leaf scores are oriented inside the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorePerspective {
    /// Terminal states score `+max_score` when `bots_move != bot_lost`, and
    /// leaves take the evaluator's score as given (relative to the side that
    /// acts on the leaf).
    #[default]
    SideToMove,
    /// Every score is from the bot's point of view: terminals are `+max_score`
    /// unless the bot lost, and leaves where the player acts are negated.
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Magnitude of a won or lost position; bounds the search window.
    pub max_score: f64,
    /// Iterative deepening runs depths `1..max_depth`.
    pub max_depth: u32,
    pub max_time: Duration,
    pub perspective: ScorePerspective,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_SCORE,
            max_depth: DEFAULT_MAX_DEPTH,
            max_time: DEFAULT_MAX_TIME,
            perspective: ScorePerspective::default(),
        }
    }
}

impl SearchConfig {
    /// Same limits without a wall-clock cutoff.
    pub fn without_time_limit(self) -> Self {
        Self {
            max_time: Duration::MAX,
            ..self
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<GameState>,
    pub best_score: f64,
    pub reached_depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Score of a position in which one side has no pieces left.
pub fn terminal_score(game_state: &GameState, config: &SearchConfig) -> f64 {
    let favourable = match config.perspective {
        ScorePerspective::SideToMove => game_state.bots_move != game_state.bot_lost(),
        ScorePerspective::Bot => !game_state.bot_lost(),
    };
    if favourable {
        config.max_score
    } else {
        -config.max_score
    }
}

/// Evaluator score of a cut-off position, oriented per `config.perspective`.
pub fn leaf_score<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    config: &SearchConfig,
) -> f64 {
    let score = scorer.score(game_state);
    match config.perspective {
        ScorePerspective::Bot if !game_state.bots_move => -score,
        _ => score,
    }
}

struct SearchContext<'a, G: ?Sized, S: ?Sized> {
    generator: &'a G,
    scorer: &'a S,
    config: &'a SearchConfig,
    start: Instant,
    nodes: u64,
}

impl<'a, G, S> SearchContext<'a, G, S>
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    fn new(generator: &'a G, scorer: &'a S, config: &'a SearchConfig) -> Self {
        Self {
            generator,
            scorer,
            config,
            start: Instant::now(),
            nodes: 0,
        }
    }

    #[inline]
    fn out_of_time(&self) -> bool {
        self.start.elapsed() > self.config.max_time
    }

    /// Searches every root successor with the full window. A successor is
    /// chosen only if it scores strictly above `-max_score`, so a depth at
    /// which every move loses chooses nothing.
    fn search_root(&mut self, successors: &[GameState], depth: u32) -> Option<(usize, f64)> {
        let bound = self.config.max_score;
        let mut best_score = -bound;
        let mut best_index = None;

        for (index, successor) in successors.iter().enumerate() {
            let score = self.alpha_beta(successor, -bound, bound, depth);
            if score > best_score {
                best_score = score;
                best_index = Some(index);
            }
        }

        best_index.map(|index| (index, best_score))
    }

    fn alpha_beta(&mut self, game_state: &GameState, alpha: f64, beta: f64, depth: u32) -> f64 {
        self.nodes += 1;

        if game_state.is_terminal() {
            return terminal_score(game_state, self.config);
        }

        if depth == 0 || self.out_of_time() {
            return leaf_score(game_state, self.scorer, self.config);
        }

        if game_state.bots_move {
            self.max_value(game_state, alpha, beta, depth)
        } else {
            self.min_value(game_state, alpha, beta, depth)
        }
    }

    fn max_value(&mut self, game_state: &GameState, mut alpha: f64, beta: f64, depth: u32) -> f64 {
        let mut value = -self.config.max_score;
        for successor in self.generator.generate_successors(game_state) {
            value = value.max(self.alpha_beta(&successor, alpha, beta, depth - 1));
            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }

    fn min_value(&mut self, game_state: &GameState, alpha: f64, mut beta: f64, depth: u32) -> f64 {
        let mut value = self.config.max_score;
        for successor in self.generator.generate_successors(game_state) {
            value = value.min(self.alpha_beta(&successor, alpha, beta, depth - 1));
            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }
}

/// Picks the bot's move from `game_state` by iterative deepening.
///
/// A depth at which every successor scores `-max_score` keeps the move of
/// the previous depth. Returns no move when the side to move has no
/// successors, when the depth range `1..max_depth` is empty, when the budget
/// is already spent before the first depth starts, or when no completed
/// depth found a move that avoids a forced loss.
pub fn iterative_deepening_search<G, S>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
) -> SearchResult
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    let mut ctx = SearchContext::new(generator, scorer, config);
    let successors = generator.generate_successors(game_state);
    let mut result = SearchResult {
        best_score: -config.max_score,
        ..SearchResult::default()
    };
    if successors.is_empty() {
        return result;
    }

    for depth in 1..config.max_depth {
        if ctx.out_of_time() {
            debug!(depth, elapsed = ?ctx.start.elapsed(), "search budget spent");
            break;
        }

        result.reached_depth = depth;
        match ctx.search_root(&successors, depth) {
            Some((index, score)) => {
                result.best_move = Some(successors[index].clone());
                result.best_score = score;
                debug!(depth, score, nodes = ctx.nodes, "completed search depth");
            }
            None => debug!(depth, nodes = ctx.nodes, "every move loses at this depth"),
        }
    }

    result.nodes = ctx.nodes;
    result.elapsed = ctx.start.elapsed();
    result
}

/// One root pass at exactly `depth`, without iterative deepening.
pub fn fixed_depth_search<G, S>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
    depth: u32,
) -> SearchResult
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    let mut ctx = SearchContext::new(generator, scorer, config);
    let successors = generator.generate_successors(game_state);
    let mut result = SearchResult {
        best_score: -config.max_score,
        reached_depth: depth,
        ..SearchResult::default()
    };

    if let Some((index, score)) = ctx.search_root(&successors, depth) {
        result.best_move = Some(successors[index].clone());
        result.best_score = score;
    }

    result.nodes = ctx.nodes;
    result.elapsed = ctx.start.elapsed();
    result
}

/// Alpha-beta value of `game_state` searched `depth` plies deep with the
/// full `(-max_score, max_score)` window.
pub fn alpha_beta_value<G, S>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
    depth: u32,
) -> f64
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    let mut ctx = SearchContext::new(generator, scorer, config);
    let bound = config.max_score;
    ctx.alpha_beta(game_state, -bound, bound, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Square;
    use crate::move_generation::move_generator::{CheckersMoveGenerator, NullMoveGenerator};
    use crate::search::board_scoring::{MaterialScorer, PieceCountScorer};

    fn state_with(size: usize, pieces: &[((usize, usize), Square)], bots_move: bool) -> GameState {
        let mut state = GameState::new_empty(size, bots_move);
        for &(at, sq) in pieces {
            state.set_square(at, sq);
        }
        state
    }

    fn config(max_depth: u32, perspective: ScorePerspective) -> SearchConfig {
        SearchConfig {
            max_depth,
            perspective,
            ..SearchConfig::default()
        }
        .without_time_limit()
    }

    #[test]
    fn terminal_scores_follow_the_side_to_move_formula() {
        let cfg = config(3, ScorePerspective::SideToMove);
        let bot_wiped_bot_to_move = state_with(6, &[((3, 3), Square::PlayerMan)], true);
        let player_wiped_player_to_move = state_with(6, &[((3, 3), Square::BotMan)], false);
        let player_wiped_bot_to_move = state_with(6, &[((3, 3), Square::BotMan)], true);

        assert_eq!(terminal_score(&bot_wiped_bot_to_move, &cfg), -DEFAULT_MAX_SCORE);
        assert_eq!(terminal_score(&player_wiped_player_to_move, &cfg), -DEFAULT_MAX_SCORE);
        assert_eq!(terminal_score(&player_wiped_bot_to_move, &cfg), DEFAULT_MAX_SCORE);
    }

    #[test]
    fn bot_perspective_scores_any_bot_survival_as_a_win() {
        let cfg = config(3, ScorePerspective::Bot);
        let player_wiped = state_with(6, &[((3, 3), Square::BotMan)], false);
        let bot_wiped = state_with(6, &[((3, 3), Square::PlayerMan)], false);

        assert_eq!(terminal_score(&player_wiped, &cfg), DEFAULT_MAX_SCORE);
        assert_eq!(terminal_score(&bot_wiped, &cfg), -DEFAULT_MAX_SCORE);
    }

    #[test]
    fn leaf_scores_flip_only_in_bot_perspective() {
        let state = state_with(
            6,
            &[((2, 3), Square::BotKing), ((3, 2), Square::PlayerMan)],
            false,
        );
        let raw = MaterialScorer.score(&state);
        let literal = leaf_score(&state, &MaterialScorer, &config(2, ScorePerspective::SideToMove));
        let bot = leaf_score(&state, &MaterialScorer, &config(2, ScorePerspective::Bot));
        assert_eq!(literal, raw);
        assert_eq!(bot, -raw);
    }

    #[test]
    fn search_avoids_stepping_into_a_capture() {
        // Moving to (3,3) lets the player jump the bot's only man.
        let state = state_with(
            6,
            &[((2, 2), Square::BotMan), ((4, 4), Square::PlayerMan)],
            true,
        );
        for perspective in [ScorePerspective::SideToMove, ScorePerspective::Bot] {
            let result = iterative_deepening_search(
                &state,
                &CheckersMoveGenerator,
                &PieceCountScorer,
                &config(2, perspective),
            );
            let best = result.best_move.expect("bot has moves");
            assert_eq!(best.moves, vec![(2, 2), (3, 1)], "{perspective:?}");
            assert_eq!(result.reached_depth, 1);
        }
    }

    #[test]
    fn depth_loop_stops_before_max_depth() {
        let game = GameState::new_game(true);
        let result = iterative_deepening_search(
            &game,
            &CheckersMoveGenerator,
            &PieceCountScorer,
            &config(4, ScorePerspective::SideToMove),
        );
        assert_eq!(result.reached_depth, 3);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 7);
    }

    #[test]
    fn max_depth_of_one_searches_nothing() {
        let game = GameState::new_game(true);
        let result = iterative_deepening_search(
            &game,
            &CheckersMoveGenerator,
            &PieceCountScorer,
            &config(1, ScorePerspective::SideToMove),
        );
        assert!(result.best_move.is_none());
        assert_eq!(result.reached_depth, 0);
    }

    #[test]
    fn spent_budget_returns_no_move() {
        let game = GameState::new_game(true);
        let cfg = SearchConfig {
            max_time: Duration::ZERO,
            ..SearchConfig::default()
        };
        let result = iterative_deepening_search(&game, &CheckersMoveGenerator, &PieceCountScorer, &cfg);
        assert!(result.best_move.is_none());
    }

    #[test]
    fn small_budget_still_returns_a_move() {
        let game = GameState::new_game(true);
        let cfg = SearchConfig {
            max_time: Duration::from_millis(50),
            ..SearchConfig::default()
        };
        let result = iterative_deepening_search(&game, &CheckersMoveGenerator, &PieceCountScorer, &cfg);
        assert!(result.best_move.is_some());
        assert!(result.reached_depth >= 1);
    }

    #[test]
    fn no_successors_means_no_move() {
        let game = GameState::new_game(true);
        let result = iterative_deepening_search(
            &game,
            &NullMoveGenerator,
            &PieceCountScorer,
            &config(5, ScorePerspective::SideToMove),
        );
        assert!(result.best_move.is_none());
    }

    #[test]
    fn all_losing_moves_choose_nothing() {
        // Every bot step hands the player a capture of the last bot piece.
        let state = state_with(5, &[((1, 2), Square::BotMan), ((3, 2), Square::PlayerMan)], true);
        let result = fixed_depth_search(
            &state,
            &CheckersMoveGenerator,
            &PieceCountScorer,
            &config(3, ScorePerspective::Bot),
            1,
        );
        assert_eq!(result.best_score, -DEFAULT_MAX_SCORE);
        assert!(result.best_move.is_none());
    }

    #[test]
    fn losing_first_depth_returns_no_move() {
        let state = state_with(5, &[((1, 2), Square::BotMan), ((3, 2), Square::PlayerMan)], true);
        let result = iterative_deepening_search(
            &state,
            &CheckersMoveGenerator,
            &PieceCountScorer,
            &config(2, ScorePerspective::SideToMove),
        );
        assert!(result.best_move.is_none());
        assert_eq!(result.best_score, -DEFAULT_MAX_SCORE);
        assert_eq!(result.reached_depth, 1);
    }

    #[test]
    fn losing_later_depth_keeps_the_earlier_move() {
        // The bot man on (3,0) is walled in. The only move, (3,5) to (4,4),
        // is captured from (5,5), after which the bot cannot move at all.
        // Depth 1 only sees the capture as a leaf; depth 2 sees the loss.
        let state = state_with(
            6,
            &[
                ((3, 0), Square::BotMan),
                ((3, 5), Square::BotMan),
                ((4, 1), Square::PlayerMan),
                ((5, 2), Square::PlayerMan),
                ((5, 5), Square::PlayerMan),
            ],
            true,
        );
        let generator = CheckersMoveGenerator;
        let cfg = config(3, ScorePerspective::Bot);

        let shallow = fixed_depth_search(&state, &generator, &PieceCountScorer, &cfg, 1);
        let deep = fixed_depth_search(&state, &generator, &PieceCountScorer, &cfg, 2);
        assert_eq!(shallow.best_move.as_ref().map(|s| s.moves.clone()), Some(vec![(3, 5), (4, 4)]));
        assert!(deep.best_move.is_none());

        let result = iterative_deepening_search(&state, &generator, &PieceCountScorer, &cfg);
        assert_eq!(result.reached_depth, 2);
        assert_eq!(result.best_move, shallow.best_move);
        assert_eq!(result.best_score, shallow.best_score);
    }

    #[test]
    fn closure_scorer_drives_the_search() {
        let game = GameState::new_game(true);
        let flat = |_: &GameState| 0.0;
        let result = fixed_depth_search(
            &game,
            &CheckersMoveGenerator,
            &flat,
            &config(3, ScorePerspective::SideToMove),
            2,
        );
        // Every line scores zero, so the first successor is kept.
        let first = CheckersMoveGenerator.generate_successors(&game).remove(0);
        assert_eq!(result.best_move, Some(first));
        assert_eq!(result.best_score, 0.0);
    }
}
