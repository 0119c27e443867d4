//! Text coordinates for board points
//!
//! Columns are letters `A..Z` skipping `I`, rows are numbers `1..=N`, and
//! a pass is written `pass`. Formatting and parsing are exact inverses of
//! the board's (row, col) to point mapping.

use super::{Move, Point, MAX_SIZE};
use crate::error::BoardError;

const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Letter for a 1-based column
#[must_use]
pub fn column_letter(col: usize) -> char {
    COLUMN_LETTERS
        .get(col.wrapping_sub(1))
        .map_or('?', |&b| b as char)
}

/// Format a move on a board of the given size, e.g. `c4` or `pass`.
#[must_use]
pub fn format_point(mv: Move, size: usize) -> String {
    match mv {
        Move::Pass => "pass".to_string(),
        Move::Place(point) => {
            let stride = size + 2;
            let (row, col) = (point.index() / stride, point.index() % stride);
            format!("{}{}", column_letter(col).to_ascii_lowercase(), row)
        }
    }
}

/// Parse a coordinate such as `c4`, `C4` or `pass`.
pub fn parse_point(text: &str, size: usize) -> Result<Move, BoardError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }
    let bad = || BoardError::BadCoordinate(text.to_string());

    let mut chars = text.chars();
    let letter = chars.next().ok_or_else(bad)?.to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&b| b as char == letter)
        .ok_or_else(bad)?
        + 1;
    let row: usize = chars.as_str().parse().map_err(|_| bad())?;

    if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
        return Err(BoardError::OffBoard { row, col });
    }
    Ok(Move::Place(Point((row * (size + 2) + col) as u16)))
}
