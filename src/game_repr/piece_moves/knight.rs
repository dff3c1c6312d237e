use crate::game_repr::PieceMoves;

use super::super::position::Position;

const KNIGHT_DX: [i8; 8] = [-1, 1, -2, 2, -2, 2, -1, 1];
const KNIGHT_DY: [i8; 8] = [2, 2, 1, 1, -1, -1, -2, -2];

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, slot: usize, moves: &mut PieceMoves) {
        self.step_moves_into(slot, &KNIGHT_DX, &KNIGHT_DY, moves);
    }
}
