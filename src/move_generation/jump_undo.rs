use crate::game_state::checkers_types::Square;

/// Single undo record for one jump applied to a scratch board.
///
/// Holds the pre-jump contents of every square the jump touches so that
/// `revert` restores the board exactly, including un-crowning a man that was
/// crowned on landing.
#[derive(Debug, Clone, Copy)]
pub struct JumpUndo {
    pub from: usize,
    pub over: usize,
    pub landing: usize,
    pub moved_piece: Square,
    pub captured_piece: Square,
}

impl JumpUndo {
    /// Moves the piece at `from` over `over` onto `landing`, removing the
    /// captured piece and crowning the mover when `crown` is set.
    pub fn apply(board: &mut [Square], from: usize, over: usize, landing: usize, crown: bool) -> Self {
        let undo = Self {
            from,
            over,
            landing,
            moved_piece: board[from],
            captured_piece: board[over],
        };

        board[landing] = if crown {
            undo.moved_piece.crowned()
        } else {
            undo.moved_piece
        };
        board[from] = Square::Empty;
        board[over] = Square::Empty;

        undo
    }

    pub fn revert(self, board: &mut [Square]) {
        board[self.landing] = Square::Empty;
        board[self.over] = self.captured_piece;
        board[self.from] = self.moved_piece;
    }
}
