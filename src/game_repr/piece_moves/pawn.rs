use crate::game_repr::{Move, MoveType, PieceMoves};
use crate::game_repr::bitboards::square_mask;

use super::super::position::Position;

/// A pawn reaching the last rank is always offered as four promotions.
fn push_pawn_move(moves: &mut PieceMoves, slot: u8, x: u8, y: u8, promotes: bool) {
    if promotes {
        for promotion in MoveType::PROMOTIONS {
            moves.push(Move::new(slot, x, y, promotion));
        }
    } else {
        moves.push(Move::new(slot, x, y, MoveType::Normal));
    }
}

impl Position {
    /// Generate pawn moves into a provided buffer: forward, double step,
    /// then left and right captures (en passant included)
    pub fn pawn_moves_into(&self, slot: usize, moves: &mut PieceMoves) {
        let pawn = self.own_pieces()[slot];
        let color = self.side();
        let forward = color.forward();

        let next_y = pawn.y as i8 + forward;
        if !(0..8).contains(&next_y) {
            return;
        }
        let next_y = next_y as u8;
        let promotes = next_y == color.promotion_rank();
        let s = slot as u8;

        if self.all_bb() & square_mask(pawn.x, next_y) == 0 {
            push_pawn_move(moves, s, pawn.x, next_y, promotes);

            if pawn.y == color.pawn_rank() {
                let jump_y = (next_y as i8 + forward) as u8;
                if self.all_bb() & square_mask(pawn.x, jump_y) == 0 {
                    moves.push(Move::new(s, pawn.x, jump_y, MoveType::PawnDoubleStep));
                }
            }
        }

        let prev = self.prev_move();
        for dx in [-1i8, 1] {
            let x = pawn.x as i8 + dx;
            if !(0..8).contains(&x) {
                continue;
            }
            let x = x as u8;
            if self.opponent_bb() & square_mask(x, next_y) != 0 {
                push_pawn_move(moves, s, x, next_y, promotes);
            } else if prev.move_type == MoveType::PawnDoubleStep && prev.to_y == pawn.y && prev.to_x == x {
                moves.push(Move::new(s, x, next_y, MoveType::EnPassant));
            }
        }
    }
}
