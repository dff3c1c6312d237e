use crate::game_repr::PositionHash;

use super::negamax::BestMove;

/// Entry in the transposition cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    /// Full hash of the position, checked before the entry is trusted
    pub hash: PositionHash,
    pub best: BestMove,
    /// Remaining depth when this position was searched
    pub depth: u8,
    /// Static evaluation or a position without legal moves
    pub is_leaf: bool,
}

/// Direct-mapped cache of search results, owned by one search.
///
/// Each hash maps to exactly one slot; a write simply replaces whatever lives
/// there unless that entry already describes the same position at least as
/// deeply. Only leaf results are stored, since their scores do not depend on
/// the alpha-beta window they were found in.
pub struct TranspositionCache {
    entries: Vec<Option<CacheEntry>>,
    /// Statistics: number of successful probes
    hits: u64,
    /// Statistics: number of failed probes
    misses: u64,
}

impl TranspositionCache {
    /// Cache with `capacity` slots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    fn index(&self, hash: PositionHash) -> usize {
        hash.table_index(self.entries.len())
    }

    /// Stored result for `hash` searched to at least `depth` plies.
    pub fn probe(&mut self, hash: PositionHash, depth: u8) -> Option<BestMove> {
        match self.entries[self.index(hash)] {
            Some(entry) if entry.hash == hash && entry.depth >= depth => {
                self.hits += 1;
                Some(entry.best)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Records a search result. Non-leaf results are ignored.
    pub fn store(&mut self, hash: PositionHash, best: BestMove, depth: u8, is_leaf: bool) {
        if !is_leaf {
            return;
        }
        let index = self.index(hash);
        if let Some(existing) = self.entries[index] {
            if existing.hash == hash && existing.depth >= depth {
                return;
            }
        }
        self.entries[index] = Some(CacheEntry { hash, best, depth, is_leaf });
    }

    /// Entry currently occupying the slot `hash` maps to, whichever position it describes.
    pub fn slot(&self, hash: PositionHash) -> Option<&CacheEntry> {
        self.entries[self.index(hash)].as_ref()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Occupied slots
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Clear the cache and its statistics
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|entry| *entry = None);
        self.hits = 0;
        self.misses = 0;
    }
}
