use crate::game_repr::PieceMoves;

use super::super::position::Position;

// horizontal first, then vertical
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, slot: usize, moves: &mut PieceMoves) {
        self.ray_moves_into(slot, &ROOK_DIRECTIONS, moves);
    }
}
