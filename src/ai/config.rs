//! Search configuration.
//!
//! A [`SearchConfig`] carries everything one call to
//! [`best_move`](super::best_move) needs beyond the position itself.

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;

/// Default transposition cache size, in entries.
pub const DEFAULT_CACHE_ENTRIES: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched before static evaluation. Checks may extend one ply further.
    pub depth: u8,
    /// Slots in the direct-mapped transposition cache.
    pub cache_entries: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            cache_entries: DEFAULT_CACHE_ENTRIES,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// At least one entry is always kept.
    pub fn with_cache_entries(mut self, entries: usize) -> Self {
        self.cache_entries = entries.max(1);
        self
    }
}

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Depth 2: sees its own reply to the opponent's next move
    Easy,
    /// Depth 4
    Medium,
    /// Depth 5
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        SearchConfig::default().with_depth(difficulty.depth())
    }
}
