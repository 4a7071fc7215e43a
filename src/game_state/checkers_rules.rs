use crate::game_state::checkers_types::{Coord, Direction, Side};

/// Layout shipped with the binary and used when no path is given.
pub const DEFAULT_LAYOUT_PATH: &str = "layouts/8x8.board";

/// Largest supported board: rows are labelled `A` to `Z` in move notation.
pub const MAX_BOARD_SIZE: usize = 26;

/// Standard 8x8 starting position. The bot occupies the low rows.
pub const STARTING_LAYOUT_8X8: &str = "\
_b_b_b_b
b_b_b_b_
_b_b_b_b
________
________
p_p_p_p_
_p_p_p_p
p_p_p_p_
";

/// Row on which a man of `side` is crowned.
#[inline]
pub const fn crowning_row(side: Side, size: usize) -> usize {
    match side {
        Side::Bot => size - 1,
        Side::Player => 0,
    }
}

/// Square reached by one diagonal step, if it is on the board.
#[inline]
pub fn offset(size: usize, (row, col): Coord, (d_row, d_col): Direction) -> Option<Coord> {
    let row = row.checked_add_signed(d_row)?;
    let col = col.checked_add_signed(d_col)?;
    (row < size && col < size).then_some((row, col))
}

/// True for squares on the outer ring of the board.
#[inline]
pub const fn is_edge_square(size: usize, (row, col): Coord) -> bool {
    row == 0 || col == 0 || row + 1 == size || col + 1 == size
}
