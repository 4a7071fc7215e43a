use crate::game_state::checkers_rules::{crowning_row, offset};
use crate::game_state::checkers_types::Square;
use crate::game_state::game_state::GameState;

/// Appends one successor per single diagonal step onto an empty square.
///
/// Callers must only use this when the side to move has no jump.
pub fn generate_steps(game_state: &GameState, successors: &mut Vec<GameState>) {
    let size = game_state.size();
    let side = game_state.side_to_move();

    for row in 0..size {
        for col in 0..size {
            let piece = game_state.square((row, col));
            if !piece.belongs_to(side) {
                continue;
            }

            for &dir in piece.directions() {
                let Some(to) = offset(size, (row, col), dir) else {
                    continue;
                };
                if !game_state.square(to).is_empty() {
                    continue;
                }

                let mut board = game_state.board().to_vec();
                board[to.0 * size + to.1] = if to.0 == crowning_row(side, size) {
                    piece.crowned()
                } else {
                    piece
                };
                board[row * size + col] = Square::Empty;

                successors.push(game_state.successor(board, vec![(row, col), to]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_steps;
    use crate::game_state::checkers_types::Square;
    use crate::game_state::game_state::GameState;

    #[test]
    fn edge_man_has_one_step_and_center_man_two() {
        let mut state = GameState::new_empty(6, true);
        state.set_square((0, 0), Square::BotMan);
        state.set_square((0, 2), Square::BotMan);

        let mut out = Vec::new();
        generate_steps(&state, &mut out);

        let paths: Vec<_> = out.iter().map(|s| s.moves.clone()).collect();
        assert_eq!(
            paths,
            vec![
                vec![(0, 0), (1, 1)],
                vec![(0, 2), (1, 1)],
                vec![(0, 2), (1, 3)],
            ]
        );
    }

    #[test]
    fn step_onto_far_row_crowns() {
        let mut state = GameState::new_empty(4, false);
        state.set_square((1, 2), Square::PlayerMan);

        let mut out = Vec::new();
        generate_steps(&state, &mut out);

        assert_eq!(out.len(), 2);
        for child in &out {
            let landing = child.moves[1];
            assert_eq!(landing.0, 0);
            assert_eq!(child.square(landing), Square::PlayerKing);
            assert_eq!(child.square((1, 2)), Square::Empty);
        }
    }

    #[test]
    fn king_steps_in_all_directions_and_stays_king() {
        let mut state = GameState::new_empty(5, true);
        state.set_square((2, 2), Square::BotKing);

        let mut out = Vec::new();
        generate_steps(&state, &mut out);

        assert_eq!(out.len(), 4);
        assert!(out
            .iter()
            .all(|child| child.square(child.moves[1]) == Square::BotKing));
    }
}
