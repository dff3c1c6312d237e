pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use crate::game_repr::{Move, MoveType, PieceMoves, Type};
use crate::game_repr::bitboards::square_mask;

use super::position::Position;

impl Position {
    /// Pseudo-legal moves of the piece in own slot `slot`, appended to `moves`.
    /// Castling is generated separately.
    pub fn pseudo_legal_moves_into(&self, slot: usize, moves: &mut PieceMoves) {
        match self.own_pieces()[slot].piece_type {
            Type::None => {}
            Type::Pawn => self.pawn_moves_into(slot, moves),
            Type::Knight => self.knight_moves_into(slot, moves),
            Type::Bishop => self.bishop_moves_into(slot, moves),
            Type::Rook => self.rook_moves_into(slot, moves),
            Type::Queen => self.queen_moves_into(slot, moves),
            Type::King => self.king_moves_into(slot, moves),
        }
    }

    /// Walk each direction until the board edge or the first occupied square,
    /// which is a target only when the opponent holds it.
    pub(crate) fn ray_moves_into(&self, slot: usize, directions: &[(i8, i8)], moves: &mut PieceMoves) {
        let piece = self.own_pieces()[slot];
        for &(dx, dy) in directions {
            let mut x = piece.x as i8 + dx;
            let mut y = piece.y as i8 + dy;
            while (0..8).contains(&x) && (0..8).contains(&y) {
                let target = square_mask(x as u8, y as u8);
                if self.own_bb() & target != 0 {
                    break;
                }
                moves.push(Move::new(slot as u8, x as u8, y as u8, MoveType::Normal));
                if self.opponent_bb() & target != 0 {
                    break;
                }
                x += dx;
                y += dy;
            }
        }
    }

    /// Single-step targets for knights and kings: in bounds and not own-occupied.
    pub(crate) fn step_moves_into(&self, slot: usize, dx: &[i8; 8], dy: &[i8; 8], moves: &mut PieceMoves) {
        let piece = self.own_pieces()[slot];
        for (&dx, &dy) in dx.iter().zip(dy.iter()) {
            let x = piece.x as i8 + dx;
            let y = piece.y as i8 + dy;
            if !(0..8).contains(&x) || !(0..8).contains(&y) {
                continue;
            }
            if self.own_bb() & square_mask(x as u8, y as u8) == 0 {
                moves.push(Move::new(slot as u8, x as u8, y as u8, MoveType::Normal));
            }
        }
    }
}
