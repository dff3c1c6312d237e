use crate::game_repr::PieceMoves;

use super::super::position::Position;

const KING_DX: [i8; 8] = [-1, 0, 1, -1, 1, -1, 0, 1];
const KING_DY: [i8; 8] = [1, 1, 1, 0, 0, -1, -1, -1];

impl Position {
    /// Generate king steps into a provided buffer. Castling lives in movegen.
    pub fn king_moves_into(&self, slot: usize, moves: &mut PieceMoves) {
        self.step_moves_into(slot, &KING_DX, &KING_DY, moves);
    }
}
