//! Plain-text board renderer.
//!
//! Columns are labelled with zero-based indices, rows with letters, matching
//! the coordinates a human types in move notation.

use crate::game_state::game_state::GameState;
use crate::utils::move_notation::row_letter;

pub fn render_board(game_state: &GameState) -> String {
    let mut out = String::from("  ");
    for col in 0..game_state.size() {
        out.push_str(&col.to_string());
    }
    out.push('\n');

    for (row, squares) in game_state.rows().enumerate() {
        out.push(row_letter(row));
        out.push(' ');
        out.extend(squares.iter().map(|sq| sq.to_char()));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::game_state::GameState;

    #[test]
    fn renders_labels_and_symbols() {
        let state = GameState::from_layout("_b__\n____\n____\nP___\n", true)
            .expect("layout should parse");
        let expected = "  0123\nA _b__\nB ____\nC ____\nD P___\n";
        assert_eq!(render_board(&state), expected);
    }
}
