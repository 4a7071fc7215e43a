//! Board position snapshot.
//!
//! `GameState` is the node type of the search tree. It owns its board, knows
//! whose turn it is, and remembers the coordinate path of the ply that
//! produced it. Successors are always built from an independent copy of the
//! parent board, so states never alias each other.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{MAX_BOARD_SIZE, STARTING_LAYOUT_8X8};
use crate::game_state::checkers_types::{Coord, Side, Square};
use crate::utils::layout_parser::parse_layout;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    // Row-major, `size * size` squares.
    board: Vec<Square>,
    size: usize,

    /// True when the bot acts on this position.
    pub bots_move: bool,

    /// Path of the ply that produced this state: origin, then every landing
    /// square. Empty for positions that were not generated.
    pub moves: Vec<Coord>,
}

impl GameState {
    /// Empty `size`×`size` board.
    pub fn new_empty(size: usize, bots_move: bool) -> Self {
        Self {
            board: vec![Square::Empty; size * size],
            size,
            bots_move,
            moves: Vec::new(),
        }
    }

    /// Standard 8x8 opening position.
    pub fn new_game(bots_move: bool) -> Self {
        parse_layout(STARTING_LAYOUT_8X8, bots_move).expect("starting layout should always parse")
    }

    pub fn from_layout(layout: &str, bots_move: bool) -> CheckersResult<Self> {
        parse_layout(layout, bots_move)
    }

    /// Builds a state from explicit rows; the grid must be square and at
    /// most `MAX_BOARD_SIZE` rows tall.
    pub fn from_rows(rows: Vec<Vec<Square>>, bots_move: bool) -> CheckersResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(CheckersError::EmptyLayout);
        }
        if size > MAX_BOARD_SIZE {
            return Err(CheckersError::BoardTooLarge {
                size,
                max: MAX_BOARD_SIZE,
            });
        }

        let mut board = Vec::with_capacity(size * size);
        for (row, squares) in rows.into_iter().enumerate() {
            if squares.len() != size {
                return Err(CheckersError::NonSquareBoard {
                    row,
                    found: squares.len(),
                    expected: size,
                });
            }
            board.extend(squares);
        }

        Ok(Self {
            board,
            size,
            bots_move,
            moves: Vec::new(),
        })
    }

    /// Child position with the turn handed over. `board` must already be an
    /// owned copy holding the post-move squares.
    pub(crate) fn successor(&self, board: Vec<Square>, moves: Vec<Coord>) -> Self {
        debug_assert_eq!(board.len(), self.board.len());
        debug_assert!(moves.len() >= 2);
        Self {
            board,
            size: self.size,
            bots_move: !self.bots_move,
            moves,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        Side::from_bots_move(self.bots_move)
    }

    #[inline]
    pub fn square(&self, (row, col): Coord) -> Square {
        self.board[row * self.size + col]
    }

    /// Places a piece; intended for setting up positions.
    #[inline]
    pub fn set_square(&mut self, (row, col): Coord, value: Square) {
        self.board[row * self.size + col] = value;
    }

    #[inline]
    pub fn board(&self) -> &[Square] {
        &self.board
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Square]> + '_ {
        self.board.chunks(self.size)
    }

    pub fn count_pieces(&self, side: Side) -> usize {
        self.board.iter().filter(|sq| sq.belongs_to(side)).count()
    }

    fn piece_presence(&self) -> (bool, bool) {
        let mut bot_exists = false;
        let mut player_exists = false;
        for sq in &self.board {
            match sq.side() {
                Some(Side::Bot) => bot_exists = true,
                Some(Side::Player) => player_exists = true,
                None => {}
            }
            if bot_exists && player_exists {
                break;
            }
        }
        (bot_exists, player_exists)
    }

    /// True when one side has no pieces left. Having no legal move while
    /// pieces remain is not detected here.
    pub fn is_terminal(&self) -> bool {
        let (bot_exists, player_exists) = self.piece_presence();
        !(bot_exists && player_exists)
    }

    /// True when the player still has pieces and the bot has none.
    /// Only meaningful once `is_terminal` holds.
    pub fn bot_lost(&self) -> bool {
        let (bot_exists, player_exists) = self.piece_presence();
        player_exists && !bot_exists
    }

    /// Same position seen from the other side of the table: the board is
    /// rotated 180 degrees and every piece changes owner.
    pub fn mirrored(&self) -> Self {
        let last = self.size.saturating_sub(1);
        let board = self
            .board
            .iter()
            .rev()
            .map(|sq| sq.swapped_side())
            .collect();
        let moves = self
            .moves
            .iter()
            .map(|&(row, col)| (last - row, last - col))
            .collect();
        Self {
            board,
            size: self.size,
            bots_move: !self.bots_move,
            moves,
        }
    }
}
