//! Jump-chain generation.
//!
//! Every piece of the side to move is extended by depth-first backtracking
//! over one scratch board: a jump is applied, the chain continues from the
//! landing square, and the jump is reverted before the next branch. A
//! successor is emitted only where a chain cannot be extended any further,
//! and it receives its own copy of the scratch board.

use crate::game_state::checkers_rules::{crowning_row, offset};
use crate::game_state::checkers_types::{Coord, Side, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::jump_undo::JumpUndo;

/// Appends one successor per maximal jump chain to `successors`.
pub fn generate_jumps(game_state: &GameState, successors: &mut Vec<GameState>) {
    let size = game_state.size();
    let side = game_state.side_to_move();
    let mut scratch = game_state.board().to_vec();
    let mut path = Vec::with_capacity(8);

    for row in 0..size {
        for col in 0..size {
            if !scratch[row * size + col].belongs_to(side) {
                continue;
            }
            path.clear();
            path.push((row, col));
            extend_jump_chain(game_state, side, &mut scratch, &mut path, successors);
        }
    }

    debug_assert_eq!(scratch.as_slice(), game_state.board());
}

/// True if any piece of the side to move can capture.
pub fn has_any_jump(game_state: &GameState) -> bool {
    let size = game_state.size();
    let side = game_state.side_to_move();
    (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .filter(|&at| game_state.square(at).belongs_to(side))
        .any(|at| !jump_targets(game_state.board(), size, at).is_empty())
}

fn extend_jump_chain(
    parent: &GameState,
    side: Side,
    board: &mut [Square],
    path: &mut Vec<Coord>,
    successors: &mut Vec<GameState>,
) {
    let size = parent.size();
    let Some(&from) = path.last() else {
        return;
    };

    let targets = jump_targets(board, size, from);
    for (over, landing) in &targets {
        let crown = landing.0 == crowning_row(side, size);
        let undo = JumpUndo::apply(
            board,
            index(size, from),
            index(size, *over),
            index(size, *landing),
            crown,
        );
        path.push(*landing);

        extend_jump_chain(parent, side, board, path, successors);

        path.pop();
        undo.revert(board);
    }

    if targets.is_empty() && path.len() > 1 {
        successors.push(parent.successor(board.to_vec(), path.clone()));
    }
}

/// `(captured square, landing square)` pairs available to the piece at
/// `from`, in the piece's direction order.
fn jump_targets(board: &[Square], size: usize, from: Coord) -> Vec<(Coord, Coord)> {
    let jumper = board[index(size, from)];
    jumper
        .directions()
        .iter()
        .filter_map(|&dir| {
            let over = offset(size, from, dir)?;
            let landing = offset(size, over, dir)?;
            let captures = jumper.is_opponent_of(board[index(size, over)]);
            let lands = board[index(size, landing)].is_empty();
            (captures && lands).then_some((over, landing))
        })
        .collect()
}

#[inline]
fn index(size: usize, (row, col): Coord) -> usize {
    row * size + col
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(size: usize, pieces: &[(Coord, Square)], bots_move: bool) -> GameState {
        let mut state = GameState::new_empty(size, bots_move);
        for &(at, sq) in pieces {
            state.set_square(at, sq);
        }
        state
    }

    #[test]
    fn single_jump_removes_captured_piece() {
        let state = state_with(
            6,
            &[((0, 0), Square::BotMan), ((1, 1), Square::PlayerMan)],
            true,
        );
        let mut out = Vec::new();
        generate_jumps(&state, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].moves, vec![(0, 0), (2, 2)]);
        assert_eq!(out[0].square((1, 1)), Square::Empty);
        assert_eq!(out[0].square((0, 0)), Square::Empty);
        assert_eq!(out[0].square((2, 2)), Square::BotMan);
        assert!(!out[0].bots_move);
    }

    #[test]
    fn chain_continues_to_exhaustion() {
        let state = state_with(
            8,
            &[
                ((0, 0), Square::BotMan),
                ((1, 1), Square::PlayerMan),
                ((3, 3), Square::PlayerMan),
            ],
            true,
        );
        let mut out = Vec::new();
        generate_jumps(&state, &mut out);

        assert_eq!(out.len(), 1, "intermediate landings are not successors");
        assert_eq!(out[0].moves, vec![(0, 0), (2, 2), (4, 4)]);
        assert_eq!(out[0].count_pieces(Side::Player), 0);
    }

    #[test]
    fn branching_chain_yields_one_successor_per_branch() {
        let state = state_with(
            8,
            &[
                ((0, 2), Square::BotMan),
                ((1, 3), Square::PlayerMan),
                ((3, 3), Square::PlayerMan),
                ((3, 5), Square::PlayerMan),
            ],
            true,
        );
        let mut out = Vec::new();
        generate_jumps(&state, &mut out);

        let paths: Vec<_> = out.iter().map(|s| s.moves.clone()).collect();
        assert_eq!(
            paths,
            vec![
                vec![(0, 2), (2, 4), (4, 2)],
                vec![(0, 2), (2, 4), (4, 6)],
            ]
        );
    }

    #[test]
    fn man_crowned_mid_chain_keeps_jumping_as_king() {
        // Player man jumps onto row 0, is crowned, then jumps back down.
        let state = state_with(
            8,
            &[
                ((2, 2), Square::PlayerMan),
                ((1, 3), Square::BotMan),
                ((1, 5), Square::BotMan),
            ],
            false,
        );
        let mut out = Vec::new();
        generate_jumps(&state, &mut out);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].moves, vec![(2, 2), (0, 4), (2, 6)]);
        assert_eq!(out[0].square((2, 6)), Square::PlayerKing);
        assert_eq!(out[0].count_pieces(Side::Bot), 0);
    }

    #[test]
    fn no_jump_without_empty_landing() {
        let state = state_with(
            6,
            &[
                ((0, 0), Square::BotMan),
                ((1, 1), Square::PlayerMan),
                ((2, 2), Square::PlayerMan),
            ],
            true,
        );
        assert!(!has_any_jump(&state));
        let mut out = Vec::new();
        generate_jumps(&state, &mut out);
        assert!(out.is_empty());
    }
}
