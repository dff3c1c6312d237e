// Negamax Search with Alpha-Beta Pruning
//
// Every call returns the score from the perspective of the side to move, and
// the parent negates it. `floor` is the score at which the side to move stops
// looking (the opponent already has something better elsewhere) and `ceiling`
// is the best score it is already guaranteed.
//
// Scores lose one point toward zero per ply on the way up, so a mate found
// sooner outranks the same mate found later. The search window is widened by
// that point when passed down so pruning never changes the returned score.

use log::debug;

use crate::game_repr::{Move, MoveList, Position, RepetitionTracker};

use super::config::SearchConfig;
use super::evaluation::{evaluate, terminal_score, Score, DRAW_VALUE, LOSS_VALUE, WIN_VALUE};
use super::transposition_table::TranspositionCache;

/// Best move found in a position together with its score. The move is
/// [`Move::NULL`] for leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub score: Score,
    pub mv: Move,
}

impl BestMove {
    fn leaf(score: Score) -> Self {
        Self { score, mv: Move::NULL }
    }
}

/// Outcome of one call to [`best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the position has no legal move or the depth is zero.
    pub best_move: Option<Move>,
    /// Score for the side to move.
    pub score: Score,
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Positions answered straight from the transposition cache.
    pub cache_hits: u64,
}

/// Moves `score` one point toward zero.
#[inline]
pub fn decay(score: Score) -> Score {
    match score {
        s if s > 0 => s - 1,
        s if s < 0 => s + 1,
        _ => 0,
    }
}

/// Smallest child score that decays past `floor` once negated.
#[inline]
fn widen_lower(floor: Score) -> Score {
    if floor > 0 {
        floor + 1
    } else {
        floor - 1
    }
}

/// Largest child score that still decays to at most `ceiling` once negated.
#[inline]
fn widen_upper(ceiling: Score) -> Score {
    if ceiling >= 0 {
        ceiling + 1
    } else {
        ceiling - 1
    }
}

/// Depth to search `branch` at after a move made with `depth` plies left.
///
/// A move that gives check on the last ply is searched one ply further so the
/// evaluation never lands right after a check. Each line is extended at most
/// once; `extended` records whether that already happened.
pub fn reply_depth(depth: u8, extended: bool, branch: &Position) -> (u8, bool) {
    if depth == 1 && !extended && branch.is_in_check() {
        (1, true)
    } else {
        (depth.saturating_sub(1), extended)
    }
}

struct Search<'a> {
    cache: &'a mut TranspositionCache,
    nodes: u64,
}

impl Search<'_> {
    fn negamax(
        &mut self,
        tracker: &RepetitionTracker,
        position: &Position,
        depth: u8,
        extended: bool,
        floor: Score,
        mut ceiling: Score,
    ) -> BestMove {
        self.nodes += 1;
        let hash = position.hash();

        if let Some(cached) = self.cache.probe(hash, depth) {
            return cached;
        }

        if depth == 0 {
            let best = BestMove::leaf(evaluate(position));
            self.cache.store(hash, best, depth, true);
            return best;
        }

        let mut moves = MoveList::new();
        position.all_legal_moves_into(&mut moves);
        if moves.is_empty() {
            let best = BestMove::leaf(terminal_score(position));
            self.cache.store(hash, best, depth, true);
            return best;
        }

        let mut best = BestMove { score: 2 * LOSS_VALUE, mv: Move::NULL };
        for &mv in &moves {
            let branch = position.branch(mv);
            let branch_tracker = tracker.branch(branch.hash());

            let score = if branch_tracker.is_draw(branch.hash()) {
                DRAW_VALUE
            } else {
                let (child_depth, child_extended) = reply_depth(depth, extended, &branch);
                let reply = self.negamax(
                    &branch_tracker,
                    &branch,
                    child_depth,
                    child_extended,
                    -widen_upper(ceiling),
                    -widen_lower(floor),
                );
                decay(-reply.score)
            };

            if score > best.score {
                best = BestMove { score, mv };
            }
            if score > ceiling {
                ceiling = score;
            }
            if score >= floor {
                break;
            }
        }

        // interior results depend on the window and are never cached
        self.cache.store(hash, best, depth, false);
        best
    }
}

/// Searches `position` to `depth` plies using (and filling) `cache`.
///
/// `tracker` holds the occurrences of every position on the line so far,
/// normally including `position` itself.
pub fn search_with_cache(
    tracker: &RepetitionTracker,
    position: &Position,
    depth: u8,
    cache: &mut TranspositionCache,
) -> SearchResult {
    let hits_before = cache.hits();
    let mut search = Search { cache, nodes: 0 };
    let best = search.negamax(tracker, position, depth, false, WIN_VALUE, LOSS_VALUE);
    let nodes = search.nodes;

    let result = SearchResult {
        best_move: (!best.mv.is_null()).then_some(best.mv),
        score: best.score,
        nodes,
        cache_hits: cache.hits() - hits_before,
    };

    debug!(
        "search depth {depth}: score {} best {} nodes {} cache hits {}",
        result.score,
        result
            .best_move
            .map(|mv| mv.code(position))
            .unwrap_or_else(|| "none".to_string()),
        result.nodes,
        result.cache_hits,
    );

    result
}

/// Best move for the side to move in `position`, searched with a fresh cache.
pub fn best_move(
    tracker: &RepetitionTracker,
    position: &Position,
    config: &SearchConfig,
) -> SearchResult {
    let mut cache = TranspositionCache::with_capacity(config.cache_entries);
    search_with_cache(tracker, position, config.depth, &mut cache)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_moves_toward_zero() {
        assert_eq!(decay(5), 4);
        assert_eq!(decay(-5), -4);
        assert_eq!(decay(1), 0);
        assert_eq!(decay(-1), 0);
        assert_eq!(decay(0), 0);
        assert_eq!(decay(WIN_VALUE), WIN_VALUE - 1);
    }

    #[test]
    fn test_window_widening_covers_decay() {
        for bound in [-3, -1, 0, 1, 4] {
            // the widened bounds are the tightest child scores that still
            // land on the right side of the parent's bounds after decay
            assert!(decay(widen_lower(bound)) >= bound);
            assert!(decay(widen_lower(bound) - 1) < bound);
            assert!(decay(widen_upper(bound)) <= bound);
            assert!(decay(widen_upper(bound) + 1) > bound);
        }
    }

    #[test]
    fn test_reply_depth() {
        let quiet = Position::new();
        assert_eq!(reply_depth(3, false, &quiet), (2, false));
        assert_eq!(reply_depth(1, false, &quiet), (0, false));

        let check = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
        assert!(check.is_in_check());
        assert_eq!(reply_depth(1, false, &check), (1, true));
        assert_eq!(reply_depth(1, true, &check), (0, true));
        assert_eq!(reply_depth(2, false, &check), (1, false));
    }
}
