use crate::game_repr::PieceMoves;

use super::super::position::Position;

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, slot: usize, moves: &mut PieceMoves) {
        self.ray_moves_into(slot, &BISHOP_DIRECTIONS, moves);
    }
}
