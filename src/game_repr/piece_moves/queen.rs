use crate::game_repr::PieceMoves;

use super::super::position::Position;

impl Position {
    /// Generate queen moves into a provided buffer: rook rays, then bishop rays
    pub fn queen_moves_into(&self, slot: usize, moves: &mut PieceMoves) {
        self.rook_moves_into(slot, moves);
        self.bishop_moves_into(slot, moves);
    }
}
