mod moves;
mod piece;
mod position;
mod piece_moves;
mod movegen;
pub mod bitboards;
pub mod hash;
pub mod repetition;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;
pub use bitboards::*;
pub use hash::{compute_hash, PositionHash};
pub use repetition::{RepetitionTracker, DRAW_REPETITIONS};
