//! Board representation for Ninuki
//!
//! The board is a one-dimensional array over a padded `(N+2)x(N+2)` index
//! space. The outer ring holds [`Stone::Border`] so that line and capture
//! scans stop without bounds checks.

pub mod board;
pub mod coord;
pub mod zobrist;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::{Board, GameStatus, MoveRecord};
pub use coord::{format_point, parse_point};
pub use zobrist::ZobristTable;

/// Largest supported board size (25 column letters without `I`)
pub const MAX_SIZE: usize = 25;
/// Board size used when nothing else is configured
pub const DEFAULT_SIZE: usize = 7;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Empty,
    Black,
    White,
    /// Sentinel for the padding ring around the playable area
    Border,
}

impl Stone {
    /// Get opponent color
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            other => other,
        }
    }

    /// True for `Black` and `White`
    #[inline]
    #[must_use]
    pub fn is_color(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }

    /// Single-character rendering used by `Display` impls
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Border => '#',
        }
    }
}

/// Linear index into the padded grid.
///
/// For a board of size `N` the row stride is `N + 2`; interior rows and
/// columns run from 1 to `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point(pub u16);

impl Point {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Offset this point by a signed step along the linear index.
    ///
    /// Only valid for steps that stay inside the padded array, which holds
    /// for any scan that stops at the border ring.
    #[inline]
    #[must_use]
    pub fn offset(self, step: isize) -> Point {
        Point((self.0 as isize + step) as u16)
    }
}

/// A move: place a stone or pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Place(Point),
    Pass,
}

impl Move {
    /// The placed point, if any
    #[inline]
    #[must_use]
    pub fn point(self) -> Option<Point> {
        match self {
            Move::Place(p) => Some(p),
            Move::Pass => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_pass(self) -> bool {
        self == Move::Pass
    }
}

impl From<Point> for Move {
    fn from(point: Point) -> Self {
        Move::Place(point)
    }
}

/// Full-board view for status display and serialization.
///
/// `rows[0]` is board row 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub rows: Vec<Vec<Stone>>,
    pub current_player: Stone,
    pub black_captures: u32,
    pub white_captures: u32,
}
