//! Capture rules for Ninuki (Pente-style pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured.

use crate::board::{Board, Point, Stone};

/// Stones flanked by a `color` stone standing at `point`.
///
/// The stone at `point` must already be on the board (or be treated as
/// such by the caller). Checks all 8 rays; each match yields the pair in
/// ray order. The border ring ends every scan, so no bounds checks.
#[must_use]
pub fn captured_by(board: &Board, point: Point, color: Stone) -> Vec<Point> {
    let opponent = color.opponent();
    let mut captured = Vec::new();

    for step in board.ray_offsets() {
        let p1 = point.offset(step);
        let p2 = point.offset(2 * step);
        if board.get(p1) == opponent && board.get(p2) == opponent {
            // p2 is interior here, so p3 is at most the border cell
            if board.get(point.offset(3 * step)) == color {
                captured.push(p1);
                captured.push(p2);
            }
        }
    }

    captured
}

/// True if placing `color` on the empty `point` would capture anything.
#[must_use]
pub fn would_capture(board: &Board, point: Point, color: Stone) -> bool {
    board.is_empty(point) && !captured_by(board, point, color).is_empty()
}
