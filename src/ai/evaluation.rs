// Position evaluation function
// Returns a score from the perspective of the side to move (positive = good)

use crate::game_repr::bitboards::ATTACK_TABLES;
use crate::game_repr::{Color, Piece, Position, Type};

pub type Score = i32;

// Material values
const PAWN_VALUE: i64 = 1000;
const KNIGHT_VALUE: i64 = 3000;
const BISHOP_VALUE: i64 = 3300;
const ROOK_VALUE: i64 = 5000;
const QUEEN_VALUE: i64 = 9000;

/// Bonus per pseudo-legal move the piece would have on an empty board
const MOBILITY_BONUS: i64 = 20;
/// Bonus per rank a pawn has advanced from its own back rank
const PAWN_ADVANCE_BONUS: i64 = 30;
/// Material difference is expressed relative to the mover's total
const RATIO_SCALE: i64 = 10_000;

/// Side to move has been checkmated. Mate scores shrink by one point per ply,
/// so this margin leaves ample room above any material score.
pub const LOSS_VALUE: Score = -1_000_000_000;
pub const WIN_VALUE: Score = 1_000_000_000;
pub const DRAW_VALUE: Score = 0;

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i64 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King | Type::None => 0,
    }
}

fn piece_total(piece: &Piece, color: Color) -> i64 {
    if piece.is_none() {
        return 0;
    }
    let mut total = piece_value(piece.piece_type)
        + MOBILITY_BONUS * ATTACK_TABLES.move_count(piece, color) as i64;
    if piece.piece_type == Type::Pawn {
        let advanced = match color {
            Color::White => piece.y,
            Color::Black => 7 - piece.y,
        };
        total += PAWN_ADVANCE_BONUS * advanced as i64;
    }
    total
}

/// Material, mobility and pawn advancement of every live piece of `color`.
pub fn side_total(position: &Position, color: Color) -> i64 {
    position
        .pieces(color)
        .iter()
        .map(|piece| piece_total(piece, color))
        .sum()
}

/// `10000 * (own - opponent) / own`, ignoring whether the game is over.
pub fn evaluate_material(position: &Position) -> Score {
    let own = side_total(position, position.side());
    let opponent = side_total(position, position.side().opposite());
    // the king's mobility keeps `own` positive
    if own <= 0 {
        return DRAW_VALUE;
    }
    (RATIO_SCALE * (own - opponent) / own) as Score
}

/// Static score of `position`. Positions without a legal move score as a
/// loss when in check and a draw otherwise.
pub fn evaluate(position: &Position) -> Score {
    evaluate_with(position, position.has_legal_move())
}

/// [`evaluate`] when the caller already knows whether a legal move exists.
pub fn evaluate_with(position: &Position, has_legal_move: bool) -> Score {
    if !has_legal_move {
        return terminal_score(position);
    }
    evaluate_material(position)
}

#[inline]
pub(crate) fn terminal_score(position: &Position) -> Score {
    if position.is_in_check() {
        LOSS_VALUE
    } else {
        DRAW_VALUE
    }
}
