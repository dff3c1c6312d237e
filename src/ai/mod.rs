// AI - Negamax with Alpha-Beta Pruning
//
// Classical depth-bounded search over the rules core:
// - Deterministic (same position, depth and tables always give the same move)
// - Negamax with alpha-beta pruning and a one-point mate-distance decay per ply
// - Direct-mapped transposition cache, trusted for leaf results only
// - Repetition-aware: a line reaching its third occurrence scores as a draw

mod config;
mod evaluation;
mod transposition_table;
mod negamax;

#[cfg(test)]
mod tests;

pub use config::{Difficulty, SearchConfig};
pub use evaluation::{
    evaluate, evaluate_material, evaluate_with, piece_value, side_total, Score, DRAW_VALUE,
    LOSS_VALUE, WIN_VALUE,
};
pub use negamax::{best_move, decay, reply_depth, search_with_cache, BestMove, SearchResult};
pub use transposition_table::{CacheEntry, TranspositionCache};
