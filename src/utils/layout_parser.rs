//! Board layout parser.
//!
//! A layout is plain text with one line per board row, using `_` for empty
//! squares, `b`/`B` for bot men/kings and `p`/`P` for player men/kings.
//! Blank lines are skipped and trailing whitespace is ignored.

use std::fs;
use std::path::Path;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::{checkers_types::Square, game_state::GameState};

pub fn parse_layout(layout: &str, bots_move: bool) -> CheckersResult<GameState> {
    let mut rows = Vec::new();

    for line in layout.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
        let row = rows.len();
        let squares = line
            .chars()
            .enumerate()
            .map(|(col, symbol)| {
                Square::from_char(symbol)
                    .ok_or(CheckersError::UnknownSquareSymbol { symbol, row, col })
            })
            .collect::<CheckersResult<Vec<_>>>()?;
        rows.push(squares);
    }

    GameState::from_rows(rows, bots_move)
}

pub fn load_layout(path: impl AsRef<Path>, bots_move: bool) -> CheckersResult<GameState> {
    let text = fs::read_to_string(path)?;
    parse_layout(&text, bots_move)
}

/// Inverse of `parse_layout`: one line per row, newline terminated.
pub fn generate_layout(game_state: &GameState) -> String {
    let mut out = String::with_capacity(game_state.size() * (game_state.size() + 1));
    for row in game_state.rows() {
        out.extend(row.iter().map(|sq| sq.to_char()));
        out.push('\n');
    }
    out
}
