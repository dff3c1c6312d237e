use once_cell::sync::Lazy;

use crate::game_repr::{Color, PieceMoves, Piece, Position, Type};

/// Precomputed attack masks and pseudo-legal move counts
/// ATTACK_TABLES.attack_mask(piece, color) returns every square the piece could
/// reach or attack from its square on an otherwise empty board
pub static ATTACK_TABLES: Lazy<AttackTables> = Lazy::new(AttackTables::build);

const N_TABLES: usize = 7;
/// White pawns share index 1 with the other piece types; black pawns get their own table.
const BLACK_PAWN_TABLE: usize = 6;

pub struct AttackTables {
    attacks: [[u64; 64]; N_TABLES],
    move_counts: [[u8; 64]; N_TABLES],
}

#[inline]
fn table_index(piece_type: Type, color: Color) -> usize {
    match (piece_type, color) {
        (Type::Pawn, Color::Black) => BLACK_PAWN_TABLE,
        _ => piece_type.index(),
    }
}

impl AttackTables {
    /// Fill every table by dropping a single piece on each square of an empty
    /// board and asking the move generator what it can do from there.
    fn build() -> Self {
        let mut tables = Self {
            attacks: [[0; 64]; N_TABLES],
            move_counts: [[0; 64]; N_TABLES],
        };

        let mut moves = PieceMoves::new();
        for (piece_type, color) in [
            (Type::King, Color::White),
            (Type::Pawn, Color::White),
            (Type::Knight, Color::White),
            (Type::Bishop, Color::White),
            (Type::Rook, Color::White),
            (Type::Queen, Color::White),
            (Type::Pawn, Color::Black),
        ] {
            let idx = table_index(piece_type, color);
            // pawns never stand on their own back rank
            let ranks = match (piece_type, color) {
                (Type::Pawn, Color::White) => 0..=6,
                (Type::Pawn, Color::Black) => 1..=7,
                _ => 0..=7,
            };
            for y in ranks {
                for x in 0..8u8 {
                    let position = Position::isolated(Piece::new(piece_type, x, y), color);
                    let sq = ((y as usize) << 3) + x as usize;

                    tables.attacks[idx][sq] = position.our_attack_bb();

                    moves.clear();
                    position.pseudo_legal_moves_into(position.isolated_slot(), &mut moves);
                    tables.move_counts[idx][sq] = moves.len() as u8;
                }
            }
        }

        tables
    }

    /// Attack mask of `piece` from its current square. Empty slots attack nothing.
    #[inline]
    pub fn attack_mask(&self, piece: &Piece, color: Color) -> u64 {
        if piece.is_none() {
            return 0;
        }
        self.attacks[table_index(piece.piece_type, color)][piece.square()]
    }

    /// Pseudo-legal move count of `piece` on an otherwise empty board.
    #[inline]
    pub fn move_count(&self, piece: &Piece, color: Color) -> u8 {
        if piece.is_none() {
            return 0;
        }
        self.move_counts[table_index(piece.piece_type, color)][piece.square()]
    }
}
