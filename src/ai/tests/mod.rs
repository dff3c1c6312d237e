use super::*;
use crate::game_repr::{Color, Move, Position, RepetitionTracker, Type};

// ==================== HELPER FUNCTIONS ====================

/// Route `log` output through the test harness
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|err| panic!("bad test FEN {fen}: {err}"))
}

/// Plays `codes` from the starting position, tracking every position reached
pub fn line(codes: &[&str]) -> (Position, RepetitionTracker) {
    let mut pos = Position::new();
    let mut tracker = RepetitionTracker::starting_at(pos.hash());
    for code in codes {
        let mv = pos
            .find_move(code)
            .unwrap_or_else(|| panic!("{code} is not legal in {}", pos.to_fen()));
        pos.apply_move(mv);
        tracker.append(pos.hash());
    }
    (pos, tracker)
}

pub fn code(pos: &Position, mv: Option<Move>) -> Option<String> {
    mv.map(|mv| mv.code(pos))
}

// ==================== TEST MODULES ====================

mod evaluation_tests;
