use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ply_chess::game_repr::{Position, RepetitionTracker};

/// Route `log` output through the test harness
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Plays up to `plies` uniformly random legal moves from the starting
/// position, calling `visit` on every position reached (the start included).
/// Stops early when the side to move has no legal move.
pub fn random_game(seed: u64, plies: usize, mut visit: impl FnMut(&Position, &RepetitionTracker)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::new();
    let mut tracker = RepetitionTracker::starting_at(pos.hash());
    visit(&pos, &tracker);

    for _ in 0..plies {
        let moves = pos.all_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        pos.apply_move(mv);
        tracker.append(pos.hash());
        visit(&pos, &tracker);
    }
}
