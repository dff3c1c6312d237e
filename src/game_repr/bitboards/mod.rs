use super::{CastleSide, Color, MoveType, Piece, KING_ROOK_SLOT, QUEEN_ROOK_SLOT};

pub mod tables;
pub use tables::*;

/// Bit for square `(x, y)`; bit 0 is a1, bit 63 is h8.
#[inline(always)]
pub fn square_mask(x: u8, y: u8) -> u64 {
    1u64 << square_of(x, y)
}

#[inline(always)]
pub fn square_of(x: u8, y: u8) -> usize {
    ((y as usize) << 3) + x as usize
}

/// Occupancy implied by one side's slot array.
pub fn occupancy(pieces: &[Piece]) -> u64 {
    pieces
        .iter()
        .filter(|piece| !piece.is_none())
        .fold(0u64, |bb, piece| bb | piece.mask())
}

// Castling masks are written for white on rank 1 and shifted up 56 bits for black.
const QUEEN_SIDE_EMPTY: u64 = 0b0000_1110;
const KING_SIDE_EMPTY: u64 = 0b0110_0000;
const QUEEN_SIDE_SAFE: u64 = 0b0001_1100;
const KING_SIDE_SAFE: u64 = 0b0111_0000;
const QUEEN_SIDE_TOGGLE: u64 = 0b0001_1101;
const KING_SIDE_TOGGLE: u64 = 0b1111_0000;

/// Everything castling needs to know about one side and wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    /// Squares between king and rook.
    pub empty: u64,
    /// King start, transit and destination squares.
    pub safe: u64,
    /// King and rook origin and destination bits; XOR applies the castle.
    pub toggle: u64,
    pub king_to_x: u8,
    pub rook_slot: usize,
    pub rook_from_x: u8,
    pub rook_to_x: u8,
    pub move_type: MoveType,
}

pub fn castling_path(color: Color, side: CastleSide) -> CastlingPath {
    let shift = if color == Color::White { 0 } else { 56 };
    match side {
        CastleSide::Queen => CastlingPath {
            empty: QUEEN_SIDE_EMPTY << shift,
            safe: QUEEN_SIDE_SAFE << shift,
            toggle: QUEEN_SIDE_TOGGLE << shift,
            king_to_x: 2,
            rook_slot: QUEEN_ROOK_SLOT,
            rook_from_x: 0,
            rook_to_x: 3,
            move_type: MoveType::CastleQueenSide,
        },
        CastleSide::King => CastlingPath {
            empty: KING_SIDE_EMPTY << shift,
            safe: KING_SIDE_SAFE << shift,
            toggle: KING_SIDE_TOGGLE << shift,
            king_to_x: 6,
            rook_slot: KING_ROOK_SLOT,
            rook_from_x: 7,
            rook_to_x: 5,
            move_type: MoveType::CastleKingSide,
        },
    }
}
