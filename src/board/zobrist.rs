//! Zobrist keys for incremental position hashing
//!
//! The board keeps its hash up to date on every stone change, side-to-move
//! change and capture-count change, so `undo` restores it exactly (XOR is
//! its own inverse). Keys are indexed by padded linear index, which lets
//! boards of every supported size share one table.

use std::sync::OnceLock;

use super::{Point, Stone, MAX_SIZE};

/// Cells in the largest padded grid
pub const MAX_CELLS: usize = (MAX_SIZE + 2) * (MAX_SIZE + 2);

/// Distinct capture-count keys per color; counts are stored in pairs and
/// saturate at the last slot.
const CAPTURE_SLOTS: usize = 32;

/// Zobrist hash table for position hashing.
pub struct ZobristTable {
    black: [u64; MAX_CELLS],
    white: [u64; MAX_CELLS],
    /// XORed in while black is to move
    black_to_move: u64,
    /// [color][pairs captured]
    captures: [[u64; CAPTURE_SLOTS]; 2],
}

impl ZobristTable {
    /// Build the table from a fixed-seed LCG so hashes are reproducible.
    fn new() -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // Mix high bits down; the low bits of an LCG have short periods
            seed ^ (seed >> 29)
        };

        let mut black = [0u64; MAX_CELLS];
        let mut white = [0u64; MAX_CELLS];
        for i in 0..MAX_CELLS {
            black[i] = next_rand();
            white[i] = next_rand();
        }

        let mut captures = [[0u64; CAPTURE_SLOTS]; 2];
        for row in &mut captures {
            for key in row.iter_mut() {
                *key = next_rand();
            }
        }

        Self {
            black,
            white,
            black_to_move: next_rand(),
            captures,
        }
    }

    /// Shared, lazily built table
    pub fn global() -> &'static ZobristTable {
        static TABLE: OnceLock<ZobristTable> = OnceLock::new();
        TABLE.get_or_init(ZobristTable::new)
    }

    /// Key for a stone of `color` at `point` (0 for non-colors)
    #[inline]
    #[must_use]
    pub fn stone(&self, point: Point, color: Stone) -> u64 {
        match color {
            Stone::Black => self.black[point.index()],
            Stone::White => self.white[point.index()],
            Stone::Empty | Stone::Border => 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn side(&self) -> u64 {
        self.black_to_move
    }

    /// Key for `color` having captured `stones` stones
    #[inline]
    #[must_use]
    pub fn capture_count(&self, color: Stone, stones: u32) -> u64 {
        let slot = ((stones / 2) as usize).min(CAPTURE_SLOTS - 1);
        match color {
            Stone::Black => self.captures[0][slot],
            Stone::White => self.captures[1][slot],
            Stone::Empty | Stone::Border => 0,
        }
    }
}
