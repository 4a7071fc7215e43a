//! Plain minimax without pruning.
//!
//! Shares terminal and leaf scoring with the alpha-beta search and expands
//! every node, which makes it the reference the pruned search must agree
//! with. Only practical for shallow depths.

use std::time::Instant;

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;
use crate::search::iterative_deepening::{leaf_score, terminal_score, SearchConfig, SearchResult};

pub fn minimax_value<G, S>(
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
    let start = Instant::now();
    let mut nodes = 0;
    minimax(game_state, generator, scorer, config, depth, start, &mut nodes)
}

/// Root successor with the highest minimax value at `depth`; ties keep the
/// earliest successor. Successors scoring `-max_score` are never chosen.
pub fn minimax_best_successor<G, S>(
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
    let start = Instant::now();
    let mut nodes = 0;
    let mut result = SearchResult {
        best_score: -config.max_score,
        reached_depth: depth,
        ..SearchResult::default()
    };

    for successor in generator.generate_successors(game_state) {
        let score = minimax(&successor, generator, scorer, config, depth, start, &mut nodes);
        if score > result.best_score {
            result.best_score = score;
            result.best_move = Some(successor);
        }
    }

    result.nodes = nodes;
    result.elapsed = start.elapsed();
    result
}

fn minimax<G, S>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
    depth: u32,
    start: Instant,
    nodes: &mut u64,
) -> f64
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    *nodes += 1;

    if game_state.is_terminal() {
        return terminal_score(game_state, config);
    }
    if depth == 0 || start.elapsed() > config.max_time {
        return leaf_score(game_state, scorer, config);
    }

    let children = generator.generate_successors(game_state);
    let values = children
        .iter()
        .map(|child| minimax(child, generator, scorer, config, depth - 1, start, nodes));

    if game_state.bots_move {
        values.fold(-config.max_score, f64::max)
    } else {
        values.fold(config.max_score, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Square;
    use crate::move_generation::move_generator::CheckersMoveGenerator;
    use crate::search::board_scoring::PieceCountScorer;
    use crate::search::iterative_deepening::{alpha_beta_value, fixed_depth_search, ScorePerspective};

    fn midgame() -> GameState {
        GameState::from_layout(
            "\
_b_b_b
b___b_
___b__
__p___
_p_p_p
p_p___
",
            true,
        )
        .expect("layout should parse")
    }

    #[test]
    fn pruned_and_unpruned_values_agree() {
        let state = midgame();
        for perspective in [ScorePerspective::SideToMove, ScorePerspective::Bot] {
            let config = SearchConfig {
                perspective,
                ..SearchConfig::default()
            }
            .without_time_limit();

            for depth in 0..4 {
                for child in CheckersMoveGenerator.generate_successors(&state) {
                    let pruned =
                        alpha_beta_value(&child, &CheckersMoveGenerator, &PieceCountScorer, &config, depth);
                    let full =
                        minimax_value(&child, &CheckersMoveGenerator, &PieceCountScorer, &config, depth);
                    assert_eq!(pruned, full, "depth {depth} {perspective:?}");
                }
            }
        }
    }

    #[test]
    fn pruning_selects_the_same_successor_with_fewer_nodes() {
        let state = midgame();
        let config = SearchConfig::default().without_time_limit();

        let pruned = fixed_depth_search(&state, &CheckersMoveGenerator, &PieceCountScorer, &config, 3);
        let full = minimax_best_successor(&state, &CheckersMoveGenerator, &PieceCountScorer, &config, 3);

        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.best_score, full.best_score);
        assert!(pruned.nodes <= full.nodes);
    }

    #[test]
    fn terminal_root_children_use_terminal_scores() {
        let mut state = GameState::new_empty(6, true);
        state.set_square((0, 0), Square::BotMan);
        state.set_square((1, 1), Square::PlayerMan);

        let config = SearchConfig {
            perspective: ScorePerspective::Bot,
            ..SearchConfig::default()
        };
        let result = minimax_best_successor(&state, &CheckersMoveGenerator, &PieceCountScorer, &config, 2);
        assert_eq!(result.best_score, config.max_score);
        assert_eq!(result.best_move.map(|s| s.moves), Some(vec![(0, 0), (2, 2)]));
    }

    #[test]
    fn forced_losses_are_never_chosen() {
        let mut state = GameState::new_empty(5, true);
        state.set_square((1, 2), Square::BotMan);
        state.set_square((3, 2), Square::PlayerMan);

        let config = SearchConfig::default().without_time_limit();
        let result = minimax_best_successor(&state, &CheckersMoveGenerator, &PieceCountScorer, &config, 1);
        assert!(result.best_move.is_none());
        assert_eq!(result.best_score, -config.max_score);
    }
}
