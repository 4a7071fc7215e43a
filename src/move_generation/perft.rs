use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub jumps: usize,
    pub multi_jumps: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.jumps += rhs.jumps;
        self.multi_jumps += rhs.multi_jumps;
        self.promotions += rhs.promotions;
    }
}

/// Counts the leaves of the successor tree `depth` plies below `game_state`,
/// classifying the ply that reached each leaf.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for child in generator.generate_successors(game_state) {
        perft_recurse(generator, game_state, &child, depth, 1, &mut total);
    }
    total
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &GameState,
    child: &GameState,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.merge(classify_ply(parent, child));
        return;
    }

    for grandchild in generator.generate_successors(child) {
        perft_recurse(
            generator,
            child,
            &grandchild,
            search_depth,
            current_depth + 1,
            counts,
        );
    }
}

fn classify_ply(parent: &GameState, child: &GameState) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    let (Some(&origin), Some(&landing)) = (child.moves.first(), child.moves.last()) else {
        return counts;
    };

    let first_hop = child.moves.get(1).copied().unwrap_or(landing);
    if origin.0.abs_diff(first_hop.0) == 2 {
        counts.jumps = 1;
        if child.moves.len() > 2 {
            counts.multi_jumps = 1;
        }
    }
    if !parent.square(origin).is_king() && child.square(landing).is_king() {
        counts.promotions = 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Square;
    use crate::move_generation::move_generator::{CheckersMoveGenerator, NullMoveGenerator};

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game(true);
        let counts = perft(&NullMoveGenerator, &game, 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn opening_perft_matches_known_counts() {
        let game = GameState::new_game(true);
        assert_eq!(perft(&CheckersMoveGenerator, &game, 1).nodes, 7);
        assert_eq!(perft(&CheckersMoveGenerator, &game, 2).nodes, 49);
    }

    #[test]
    fn perft_classifies_chains_and_promotions() {
        // Bot man double-jumps onto the last row of a 5x5 board.
        let mut state = GameState::new_empty(5, true);
        state.set_square((0, 0), Square::BotMan);
        state.set_square((1, 1), Square::PlayerMan);
        state.set_square((3, 3), Square::PlayerMan);
        state.set_square((0, 4), Square::PlayerKing);

        let counts = perft(&CheckersMoveGenerator, &state, 1);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                jumps: 1,
                multi_jumps: 1,
                promotions: 1,
            }
        );
    }

    #[test]
    fn null_generator_has_no_leaves() {
        let game = GameState::new_game(false);
        assert_eq!(perft(&NullMoveGenerator, &game, 3), PerftCounts::default());
    }
}
