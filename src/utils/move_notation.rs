//! Text notation for checkers moves.
//!
//! A square is written as its row letter followed by its zero-based column
//! (`A0`, `C3`, `H7`). A move is the whitespace-separated path of squares the
//! piece visits, so a double jump reads `B1 D3 F5`.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::MAX_BOARD_SIZE;
use crate::game_state::{checkers_types::Coord, game_state::GameState};

/// Letter used for a row index. Boards are at most `MAX_BOARD_SIZE` rows,
/// so every row has its own letter.
#[inline]
pub fn row_letter(row: usize) -> char {
    debug_assert!(row < MAX_BOARD_SIZE);
    char::from(b'A' + row as u8)
}

pub fn square_to_notation((row, col): Coord) -> String {
    format!("{}{}", row_letter(row), col)
}

pub fn notation_to_square(token: &str, size: usize) -> CheckersResult<Coord> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(|| CheckersError::InvalidMoveToken(token.to_owned()))?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CheckersError::InvalidMoveToken(token.to_owned()));
    }
    let col = digits
        .parse::<usize>()
        .map_err(|_| CheckersError::InvalidMoveToken(token.to_owned()))?;
    let row = usize::from(letter.to_ascii_uppercase() as u8 - b'A');

    if row >= size || col >= size {
        return Err(CheckersError::CoordinateOutOfBounds {
            token: token.to_owned(),
            size,
        });
    }

    Ok((row, col))
}

/// Parses a full move path such as `"C2 D3"`.
pub fn parse_move(text: &str, size: usize) -> CheckersResult<Vec<Coord>> {
    let path = text
        .split_whitespace()
        .map(|token| notation_to_square(token, size))
        .collect::<CheckersResult<Vec<_>>>()?;

    if path.len() < 2 {
        return Err(CheckersError::MoveTooShort(path.len()));
    }

    Ok(path)
}

pub fn format_move(path: &[Coord]) -> String {
    path.iter()
        .map(|&sq| square_to_notation(sq))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Successor whose move path equals `path` step for step.
pub fn find_matching_successor<'a>(
    successors: &'a [GameState],
    path: &[Coord],
) -> Option<&'a GameState> {
    successors.iter().find(|s| s.moves == path)
}
