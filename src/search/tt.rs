//! Proof cache for the alpha-beta searcher
//!
//! Stores only *solved* results (values backed by terminal positions), so
//! entries never depend on the depth limit of the pass that produced them.
//! A cache lives for a single `solve` call and is dropped with it.
//!
//! Keys combine the Zobrist hash with the last move: the terminal test and
//! priority move generation both look at the last move, so two positions
//! with the same stones but different last moves may be solved differently.

use crate::board::{Board, Move, Point};

/// Entry type for value interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact value - the node was searched with no cutoff inside the window
    Exact,
    /// Lower bound - value >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - value <= stored value (alpha fail-low)
    UpperBound,
}

/// Proof cache entry
#[derive(Debug, Clone, Copy)]
pub struct ProofEntry {
    pub key: u64,
    pub value: f64,
    pub entry_type: EntryType,
    /// Move that produced the value, tried first on a later visit
    pub best_move: Option<Point>,
}

/// Direct-mapped table of solved values; a newer proof replaces the slot.
#[derive(Debug)]
pub struct ProofCache {
    entries: Vec<Option<ProofEntry>>,
    hits: u64,
}

impl ProofCache {
    /// Create a cache with `entries` slots (at least 1).
    #[must_use]
    pub fn new(entries: usize) -> Self {
        Self {
            entries: vec![None; entries.max(1)],
            hits: 0,
        }
    }

    /// Cache key for the current position
    #[must_use]
    pub fn key(board: &Board) -> u64 {
        let last = match board.last_move() {
            None => 0,
            Some(Move::Pass) => 1,
            Some(Move::Place(p)) => u64::from(p.0) + 2,
        };
        board.hash() ^ last.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    #[inline]
    fn slot(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Probe for a value usable inside `(alpha, beta)`.
    ///
    /// Returns `Some(value)` for an exact entry, a lower bound at or above
    /// `beta`, or an upper bound at or below `alpha`.
    pub fn probe(&mut self, key: u64, alpha: f64, beta: f64) -> Option<f64> {
        let entry = self.entries[self.slot(key)]?;
        if entry.key != key {
            return None;
        }
        let usable = match entry.entry_type {
            EntryType::Exact => true,
            EntryType::LowerBound => entry.value >= beta,
            EntryType::UpperBound => entry.value <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry.value)
        } else {
            None
        }
    }

    /// Best move stored for this key, for move ordering.
    #[must_use]
    pub fn best_move(&self, key: u64) -> Option<Point> {
        self.entries[self.slot(key)]
            .filter(|e| e.key == key)
            .and_then(|e| e.best_move)
    }

    /// Record a solved value, classifying it against the window it was
    /// searched with.
    pub fn store(&mut self, key: u64, value: f64, alpha: f64, beta: f64, best_move: Option<Point>) {
        let entry_type = if value >= beta {
            EntryType::LowerBound
        } else if value <= alpha {
            EntryType::UpperBound
        } else {
            EntryType::Exact
        };
        let idx = self.slot(key);
        self.entries[idx] = Some(ProofEntry {
            key,
            value,
            entry_type,
            best_move,
        });
    }

    /// Probes that returned a usable value
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
