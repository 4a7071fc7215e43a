//! Core value types for the checkers board.
//!
//! A square holds exactly one of five values; sides and kinds are derived
//! from it rather than stored separately.

/// Board coordinate as `(row, col)`, zero-based.
pub type Coord = (usize, usize);

/// Diagonal step as `(d_row, d_col)`.
pub type Direction = (isize, isize);

/// Which player owns a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Bot,
    Player,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Bot => Side::Player,
            Side::Player => Side::Bot,
        }
    }

    #[inline]
    pub const fn from_bots_move(bots_move: bool) -> Self {
        if bots_move {
            Side::Bot
        } else {
            Side::Player
        }
    }
}

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    BotMan,
    BotKing,
    PlayerMan,
    PlayerKing,
}

const TOWARD_ROW_ZERO: [Direction; 2] = [(-1, -1), (-1, 1)];
const TOWARD_LAST_ROW: [Direction; 2] = [(1, -1), (1, 1)];
const ALL_DIAGONALS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Square {
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::BotMan | Square::BotKing => Some(Side::Bot),
            Square::PlayerMan | Square::PlayerKing => Some(Side::Player),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Square::BotKing | Square::PlayerKing)
    }

    #[inline]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// True when `other` holds a piece of the opposing side.
    #[inline]
    pub fn is_opponent_of(self, other: Square) -> bool {
        match (self.side(), other.side()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// King form of this piece. Kings and empty squares are unchanged.
    #[inline]
    pub const fn crowned(self) -> Self {
        match self {
            Square::BotMan => Square::BotKing,
            Square::PlayerMan => Square::PlayerKing,
            other => other,
        }
    }

    /// Same piece kind owned by the other side.
    #[inline]
    pub const fn swapped_side(self) -> Self {
        match self {
            Square::Empty => Square::Empty,
            Square::BotMan => Square::PlayerMan,
            Square::BotKing => Square::PlayerKing,
            Square::PlayerMan => Square::BotMan,
            Square::PlayerKing => Square::BotKing,
        }
    }

    /// Diagonal directions this piece may move or jump in.
    ///
    /// Bot men advance toward the last row, player men toward row zero,
    /// kings go both ways. Player-facing directions come first.
    #[inline]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Square::Empty => &[],
            Square::BotMan => &TOWARD_LAST_ROW,
            Square::PlayerMan => &TOWARD_ROW_ZERO,
            Square::BotKing | Square::PlayerKing => &ALL_DIAGONALS,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Square::Empty => '_',
            Square::BotMan => 'b',
            Square::BotKing => 'B',
            Square::PlayerMan => 'p',
            Square::PlayerKing => 'P',
        }
    }

    #[inline]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(Square::Empty),
            'b' => Some(Square::BotMan),
            'B' => Some(Square::BotKing),
            'p' => Some(Square::PlayerMan),
            'P' => Some(Square::PlayerKing),
            _ => None,
        }
    }
}
