//! 128-bit position hashing.
//!
//! A position hash is the XOR of independent random features: side to move,
//! each castling right still held, each live piece on its square, and the file
//! of an immediately preceding double pawn step. Two 64-bit lanes are drawn
//! from separate random streams, so a collision needs both lanes to agree.

use std::ops::{BitXor, BitXorAssign};

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bitboards::castling_path;
use super::{CastleSide, Color, MoveType, Position, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionHash {
    pub alpha: u64,
    pub beta: u64,
}

impl PositionHash {
    pub const ZERO: PositionHash = PositionHash { alpha: 0, beta: 0 };

    fn random(rng: &mut StdRng) -> Self {
        Self {
            alpha: rng.gen(),
            beta: rng.gen(),
        }
    }

    /// Slot of this hash in a direct-mapped table of `capacity` entries.
    #[inline]
    pub fn table_index(&self, capacity: usize) -> usize {
        (self.alpha % capacity as u64) as usize
    }
}

impl BitXor for PositionHash {
    type Output = PositionHash;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            alpha: self.alpha ^ rhs.alpha,
            beta: self.beta ^ rhs.beta,
        }
    }
}

impl BitXorAssign for PositionHash {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.alpha ^= rhs.alpha;
        self.beta ^= rhs.beta;
    }
}

/// Random hash features, generated once from a fixed seed so hashes are
/// reproducible between runs.
pub struct HashKeys {
    /// [piece_type][color][square]
    pub pieces: [[[PositionHash; 64]; 2]; 6],
    /// [color * 2 + castle side], only XORed in while the right is held
    pub castling: [PositionHash; 4],
    /// [file] of the previous double pawn step
    pub en_passant: [PositionHash; 8],
    /// XORed in while white is to move
    pub white_to_move: PositionHash,
    /// [color][castle side] combined king and rook displacement of a castle
    pub castle_moves: [[PositionHash; 2]; 2],
}

const HASH_SEED: u64 = 0x517cc1b727220a95;

impl HashKeys {
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(HASH_SEED);

        let mut pieces = [[[PositionHash::ZERO; 64]; 2]; 6];
        for piece_type in &mut pieces {
            for color in piece_type {
                for square in color {
                    *square = PositionHash::random(&mut rng);
                }
            }
        }

        let mut castling = [PositionHash::ZERO; 4];
        for castle in &mut castling {
            *castle = PositionHash::random(&mut rng);
        }

        let mut en_passant = [PositionHash::ZERO; 8];
        for ep in &mut en_passant {
            *ep = PositionHash::random(&mut rng);
        }

        let white_to_move = PositionHash::random(&mut rng);

        let mut castle_moves = [[PositionHash::ZERO; 2]; 2];
        for color in [Color::White, Color::Black] {
            let rank = color.home_rank() as usize * 8;
            let c = color.index();
            for side in CastleSide::ALL {
                let path = castling_path(color, side);
                let king = Type::King.index();
                let rook = Type::Rook.index();
                castle_moves[c][side.index()] = pieces[king][c][rank + 4]
                    ^ pieces[king][c][rank + path.king_to_x as usize]
                    ^ pieces[rook][c][rank + path.rook_from_x as usize]
                    ^ pieces[rook][c][rank + path.rook_to_x as usize];
            }
        }

        Self {
            pieces,
            castling,
            en_passant,
            white_to_move,
            castle_moves,
        }
    }

    #[inline]
    pub fn piece(&self, piece_type: Type, color: Color, square: usize) -> PositionHash {
        self.pieces[piece_type.index()][color.index()][square]
    }
}

pub static HASH_KEYS: Lazy<HashKeys> = Lazy::new(HashKeys::generate);

/// Index of a castling right in the position's flag array and the hash table.
#[inline]
pub fn castle_index(color: Color, side: CastleSide) -> usize {
    color.index() * 2 + side.index()
}

/// Hash of `position` computed from scratch. The incrementally maintained
/// `Position::hash` must always agree with this.
pub fn compute_hash(position: &Position) -> PositionHash {
    let keys = &*HASH_KEYS;
    let mut hash = PositionHash::ZERO;

    if position.side() == Color::White {
        hash ^= keys.white_to_move;
    }

    for color in [Color::White, Color::Black] {
        for side in CastleSide::ALL {
            if position.can_castle(color, side) {
                hash ^= keys.castling[castle_index(color, side)];
            }
        }
        for piece in position.pieces(color) {
            if !piece.is_none() {
                hash ^= keys.piece(piece.piece_type, color, piece.square());
            }
        }
    }

    let prev = position.prev_move();
    if prev.move_type == MoveType::PawnDoubleStep {
        hash ^= keys.en_passant[prev.to_x as usize];
    }

    hash
}
