use std::collections::HashMap;

use super::hash::PositionHash;

/// Occurrences that make a position a draw.
pub const DRAW_REPETITIONS: u8 = 3;

/// How many times each position has occurred along one line of play.
///
/// The live game owns one tracker; every search node gets its own copy via
/// [`RepetitionTracker::branch`], so sibling lines never see each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionTracker {
    counts: HashMap<PositionHash, u8>,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker for a line starting at a position with hash `start`.
    pub fn starting_at(start: PositionHash) -> Self {
        let mut tracker = Self::new();
        tracker.append(start);
        tracker
    }

    pub fn append(&mut self, hash: PositionHash) {
        let count = self.counts.entry(hash).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Undo one `append`. The entry disappears when its count reaches zero.
    pub fn remove(&mut self, hash: PositionHash) {
        if let Some(count) = self.counts.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&hash);
            }
        }
    }

    pub fn count(&self, hash: PositionHash) -> u8 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub fn is_draw(&self, hash: PositionHash) -> bool {
        self.count(hash) >= DRAW_REPETITIONS
    }

    /// One more occurrence of `hash` would make it a draw.
    pub fn will_be_draw(&self, hash: PositionHash) -> bool {
        self.count(hash) >= DRAW_REPETITIONS - 1
    }

    /// Independent copy with `hash` appended.
    pub fn branch(&self, hash: PositionHash) -> Self {
        let mut branch = self.clone();
        branch.append(hash);
        branch
    }

    /// Number of distinct positions seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(n: u64) -> PositionHash {
        PositionHash { alpha: n, beta: n.rotate_left(17) }
    }

    #[test]
    fn test_draw_needs_three_occurrences() {
        let mut tracker = RepetitionTracker::new();
        tracker.append(hash(1));
        tracker.append(hash(1));
        assert_eq!(tracker.count(hash(1)), 2);
        assert!(!tracker.is_draw(hash(1)));
        assert!(tracker.will_be_draw(hash(1)));

        tracker.append(hash(1));
        assert!(tracker.is_draw(hash(1)));
    }

    #[test]
    fn test_remove_deletes_empty_entries() {
        let mut tracker = RepetitionTracker::starting_at(hash(7));
        tracker.append(hash(7));
        tracker.remove(hash(7));
        assert_eq!(tracker.count(hash(7)), 1);
        tracker.remove(hash(7));
        assert_eq!(tracker.count(hash(7)), 0);
        assert!(tracker.is_empty());

        // removing something never seen is a no-op
        tracker.remove(hash(9));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_branch_does_not_touch_parent() {
        let parent = RepetitionTracker::starting_at(hash(1));
        let child = parent.branch(hash(2));
        let grandchild = child.branch(hash(1));

        assert_eq!(parent.count(hash(2)), 0);
        assert_eq!(parent.count(hash(1)), 1);
        assert_eq!(child.count(hash(2)), 1);
        assert_eq!(grandchild.count(hash(1)), 2);
        assert_eq!(grandchild.len(), 2);
    }

    #[test]
    fn test_count_saturates() {
        let mut tracker = RepetitionTracker::new();
        for _ in 0..300 {
            tracker.append(hash(3));
        }
        assert_eq!(tracker.count(hash(3)), u8::MAX);
        assert!(tracker.is_draw(hash(3)));
    }

    #[test]
    fn test_lanes_both_matter() {
        let mut tracker = RepetitionTracker::new();
        tracker.append(PositionHash { alpha: 5, beta: 1 });
        assert_eq!(tracker.count(PositionHash { alpha: 5, beta: 2 }), 0);
    }
}
