use smallvec::SmallVec;

use super::{Position, Type};

/*-------ARCHITECTURE--------*/

// A move names the permanent slot of the moving piece, not its origin square.
// The origin is read back from the position the move was generated in.
//
// | slot | to_x | to_y | move_type |

/// Every legal move of one side, in generation order.
pub type MoveList = SmallVec<[Move; 64]>;

/// Pseudo-legal moves of a single piece. A queen has at most 27 targets and a
/// pawn at most 12 (three targets times four promotions).
pub type PieceMoves = SmallVec<[Move; 28]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveType {
    #[default]
    Normal,
    PawnDoubleStep,
    EnPassant,
    PromoteKnight,
    PromoteBishop,
    PromoteRook,
    PromoteQueen,
    CastleKingSide,
    CastleQueenSide,
    /// Passes the turn. Only used to flip perspective, never generated.
    NullMove,
}

impl MoveType {
    /// Promotion variants in generation order.
    pub const PROMOTIONS: [MoveType; 4] = [
        MoveType::PromoteKnight,
        MoveType::PromoteBishop,
        MoveType::PromoteRook,
        MoveType::PromoteQueen,
    ];

    #[inline]
    pub fn is_promotion(self) -> bool {
        self.promotion_type().is_some()
    }

    pub fn promotion_type(self) -> Option<Type> {
        match self {
            MoveType::PromoteKnight => Some(Type::Knight),
            MoveType::PromoteBishop => Some(Type::Bishop),
            MoveType::PromoteRook => Some(Type::Rook),
            MoveType::PromoteQueen => Some(Type::Queen),
            _ => None,
        }
    }

    #[inline]
    pub fn is_castle(self) -> bool {
        matches!(self, MoveType::CastleKingSide | MoveType::CastleQueenSide)
    }

    fn promotion_char(self) -> Option<char> {
        match self {
            MoveType::PromoteKnight => Some('n'),
            MoveType::PromoteBishop => Some('b'),
            MoveType::PromoteRook => Some('r'),
            MoveType::PromoteQueen => Some('q'),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move {
    pub slot: u8,
    pub to_x: u8,
    pub to_y: u8,
    pub move_type: MoveType,
}

impl Move {
    pub const NULL: Move = Move {
        slot: 0,
        to_x: 0,
        to_y: 0,
        move_type: MoveType::NullMove,
    };

    pub const fn new(slot: u8, to_x: u8, to_y: u8, move_type: MoveType) -> Self {
        Self { slot, to_x, to_y, move_type }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.move_type == MoveType::NullMove
    }

    /// Destination square index.
    #[inline]
    pub fn square(&self) -> usize {
        ((self.to_y as usize) << 3) + self.to_x as usize
    }

    #[inline]
    pub fn mask(&self) -> u64 {
        1u64 << self.square()
    }

    /// Text code such as `e2e4` or `a7a8q`. `position` must be the position the
    /// move is played from, since the origin comes from the moving slot.
    pub fn code(&self, position: &Position) -> String {
        if self.is_null() {
            return "0000".to_string();
        }
        let piece = position.own_pieces()[self.slot as usize];
        let mut code = String::with_capacity(5);
        code.push(file_char(piece.x));
        code.push(rank_char(piece.y));
        code.push(file_char(self.to_x));
        code.push(rank_char(self.to_y));
        if let Some(c) = self.move_type.promotion_char() {
            code.push(c);
        }
        code
    }
}

#[inline]
pub(crate) fn file_char(x: u8) -> char {
    (b'a' + x) as char
}

#[inline]
pub(crate) fn rank_char(y: u8) -> char {
    (b'1' + y) as char
}

/// Parses an algebraic square such as `e4` into `(x, y)`.
pub fn parse_square(text: &str) -> Option<(u8, u8)> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let x = bytes[0].wrapping_sub(b'a');
    let y = bytes[1].wrapping_sub(b'1');
    (x < 8 && y < 8).then_some((x, y))
}
