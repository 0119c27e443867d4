//! Line patterns through a single point
//!
//! All scans run along the padded grid and stop at the first cell that is
//! not `color`, which includes the border ring.

use crate::board::{Board, Move, Point, Stone};

use super::capture::would_capture;

/// Radius (in rows and columns) around the last move searched for captures
const CAPTURE_RADIUS: usize = 3;

/// Stones of `color` directly following `point` in direction `step`.
#[inline]
fn count_direction(board: &Board, point: Point, step: isize, color: Stone) -> usize {
    let mut count = 0;
    let mut p = point.offset(step);
    while board.get(p) == color {
        count += 1;
        p = p.offset(step);
    }
    count
}

/// Length of the `color` run through `point` along `±step`, counting
/// `point` itself as `color` whatever it currently holds.
#[inline]
#[must_use]
pub fn run_length(board: &Board, point: Point, step: isize, color: Stone) -> usize {
    1 + count_direction(board, point, step, color) + count_direction(board, point, -step, color)
}

/// Run length along `±step` and whether both cells past its ends are empty
fn run_with_ends(board: &Board, point: Point, step: isize, color: Stone) -> (usize, bool) {
    let forward = count_direction(board, point, step, color);
    let backward = count_direction(board, point, -step, color);
    let front = point.offset((forward as isize + 1) * step);
    let back = point.offset(-(backward as isize + 1) * step);
    let open = board.is_empty(front) && board.is_empty(back);
    (1 + forward + backward, open)
}

fn detect_open_run(board: &Board, point: Point, color: Stone, length: usize) -> bool {
    board.line_offsets().into_iter().any(|step| {
        let (len, open) = run_with_ends(board, point, step, color);
        len == length && open
    })
}

/// Exactly four in a row through `point` with both ends empty.
///
/// Callers pass a board that already reflects the hypothetical stone; an
/// empty `point` is treated as holding `color`.
#[must_use]
pub fn detect_open_four(board: &Board, point: Point, color: Stone) -> bool {
    detect_open_run(board, point, color, 4)
}

/// Exactly three in a row through `point` with both ends empty.
#[must_use]
pub fn detect_open_three(board: &Board, point: Point, color: Stone) -> bool {
    detect_open_run(board, point, color, 3)
}

/// Run of `color` through `point` along the linear index only.
///
/// This is the horizontal run; it is a cheap rollout signal, not a line
/// detector.
#[must_use]
pub fn count_stones_in_row(board: &Board, point: Point, color: Stone) -> usize {
    run_length(board, point, 1, color)
}

/// Forcing candidates around the last move for `color`.
///
/// Returns nothing unless the last move placed a `color` stone. Otherwise
/// returns, in ascending order without duplicates:
/// - the empty cell past either end of each line through the last move when
///   filling it makes a run of at least `n` (runs beyond the gap included);
/// - empty points within three rows/columns of the last move where `color`
///   would capture.
#[must_use]
pub fn moves_for_n_in_a_row(board: &Board, color: Stone, n: usize) -> Vec<Point> {
    let Some(Move::Place(last)) = board.last_move() else {
        return Vec::new();
    };
    if board.get(last) != color {
        return Vec::new();
    }

    let mut moves = Vec::new();

    for step in board.line_offsets() {
        let forward = count_direction(board, last, step, color);
        let backward = count_direction(board, last, -step, color);
        let len = 1 + forward + backward;

        for (end, dir) in [
            (last.offset((forward as isize + 1) * step), step),
            (last.offset(-(backward as isize + 1) * step), -step),
        ] {
            if !board.is_empty(end) {
                continue;
            }
            let beyond = count_direction(board, end, dir, color);
            if len + 1 + beyond >= n {
                moves.push(end);
            }
        }
    }

    let (row, col) = board.coord(last);
    let size = board.size();
    for r in row.saturating_sub(CAPTURE_RADIUS).max(1)..=(row + CAPTURE_RADIUS).min(size) {
        for c in col.saturating_sub(CAPTURE_RADIUS).max(1)..=(col + CAPTURE_RADIUS).min(size) {
            let p = board.point(r, c);
            if would_capture(board, p, color) {
                moves.push(p);
            }
        }
    }

    moves.sort_unstable();
    moves.dedup();
    moves
}
