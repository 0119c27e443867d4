//! Depth-cutoff evaluation for the alpha-beta searcher
//!
//! Deliberately weak: terminal positions are scored by the search itself,
//! this only breaks ties between unresolved lines.

use crate::board::Board;

use super::patterns::capture_score;

/// Capture differential divided by 10, from the side to move's view.
///
/// `heuristic_eval(b)` for Black to move equals `-heuristic_eval(b)` with
/// White to move, which negamax relies on.
#[must_use]
pub fn heuristic_eval(board: &Board) -> f64 {
    let mover = board.current_player();
    capture_score(board.captures(mover), board.captures(mover.opponent()))
}
