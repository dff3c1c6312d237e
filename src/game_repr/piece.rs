use crate::error::FenError;

/// Number of permanent piece slots per side.
pub const N_SLOTS: usize = 16;
/// The king always lives in this slot and is never removed.
pub const KING_SLOT: usize = 4;
/// Queen-side rook of the starting layout.
pub const QUEEN_ROOK_SLOT: usize = 0;
/// King-side rook of the starting layout.
pub const KING_ROOK_SLOT: usize = 7;
/// Pawns start in slots 8..16, one per file.
pub const FIRST_PAWN_SLOT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Empty slot: the piece was captured.
    #[default]
    None,
    King,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Type {
    /// Index into per-type tables (King = 0 .. Queen = 5).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Type::King => 0,
            Type::Pawn => 1,
            Type::Knight => 2,
            Type::Bishop => 3,
            Type::Rook => 4,
            Type::Queen => 5,
            Type::None => panic!("Cannot index Type::None"),
        }
    }

    pub fn from_char(c: char) -> Result<(Type, Color), FenError> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => Type::King,
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            _ => return Err(FenError::InvalidPiece(c)),
        };
        Ok((piece_type, color))
    }

    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            Type::None => return ' ',
            Type::King => 'k',
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    /// Rank holding this side's king and rooks at the start.
    #[inline]
    pub fn home_rank(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Rank this side's pawns start on (and may double-step from).
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 6,
        }
    }

    /// Rank a pawn of this side promotes on.
    #[inline]
    pub fn promotion_rank(self) -> u8 {
        self.opposite().home_rank()
    }

    /// Direction pawns of this side advance along the y axis.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Queen,
    King,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Queen, CastleSide::King];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Queen => 0,
            Self::King => 1,
        }
    }
}

/// A piece occupying one permanent slot. The owning colour is implied by
/// which of the position's two slot arrays it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    pub piece_type: Type,
    pub x: u8,
    pub y: u8,
}

impl Piece {
    pub const fn new(piece_type: Type, x: u8, y: u8) -> Self {
        Self { piece_type, x, y }
    }

    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    #[inline]
    pub fn is_at(&self, x: u8, y: u8) -> bool {
        !self.is_none() && self.x == x && self.y == y
    }

    /// Square index, `y * 8 + x`.
    #[inline]
    pub fn square(&self) -> usize {
        ((self.y as usize) << 3) + self.x as usize
    }

    #[inline]
    pub fn mask(&self) -> u64 {
        1u64 << self.square()
    }
}
