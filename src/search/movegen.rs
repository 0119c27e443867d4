//! Candidate move generation
//!
//! Every empty point is legal. Tactical "priority" moves come from
//! [`moves_for_n_in_a_row`](crate::rules::moves_for_n_in_a_row) with a
//! target length of 4; they only change the order (or, when restricted,
//! the subset) of what gets searched, never legality.

use crate::board::{Board, Point, Stone};

/// Target run length for priority moves
pub const PRIORITY_RUN: usize = 4;

/// All empty points in ascending order. Empty means the caller must pass.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Point> {
    board.empty_points()
}

/// Points extending `color`'s last line to four or more, plus nearby
/// capturing points. Empty unless `color` made the last placement.
#[must_use]
pub fn priority_moves(board: &Board, color: Stone) -> Vec<Point> {
    board.moves_for_n_in_a_row(color, PRIORITY_RUN)
}

/// Moves to search for `color`.
///
/// With `restrict` set and at least one priority move, only the priority
/// moves are returned. Otherwise priority moves come first, followed by the
/// remaining legal moves in ascending order.
#[must_use]
pub fn ordered_moves(board: &Board, color: Stone, restrict: bool) -> Vec<Point> {
    let priority = priority_moves(board, color);
    if priority.is_empty() {
        return legal_moves(board);
    }
    if restrict {
        return priority;
    }
    let mut moves = priority.clone();
    moves.extend(
        legal_moves(board)
            .into_iter()
            .filter(|p| priority.binary_search(p).is_err()),
    );
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Black three in a row on row 4, Black made the last move and stays
    /// to move
    fn three_in_row() -> Board {
        let mut board = Board::new(7);
        assert!(board.play(board.point(1, 7), Stone::White));
        for col in 2..=4 {
            assert!(board.play(board.point(4, col), Stone::Black));
        }
        board.set_current_player(Stone::Black);
        board
    }

    #[test]
    fn test_legal_moves_are_empty_points() {
        let mut board = Board::new(5);
        assert_eq!(legal_moves(&board).len(), 25);
        assert!(board.play(board.point(3, 3), Stone::Black));
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&board.point(3, 3)));
    }

    #[test]
    fn test_priority_moves_extend_line() {
        let board = three_in_row();
        assert_eq!(
            priority_moves(&board, Stone::Black),
            vec![board.point(4, 1), board.point(4, 5)]
        );
        assert!(priority_moves(&board, Stone::White).is_empty());
    }

    #[test]
    fn test_ordered_moves_restricted() {
        let board = three_in_row();
        let moves = ordered_moves(&board, Stone::Black, true);
        assert_eq!(moves, vec![board.point(4, 1), board.point(4, 5)]);
    }

    #[test]
    fn test_ordered_moves_unrestricted_keeps_everything() {
        let board = three_in_row();
        let moves = ordered_moves(&board, Stone::Black, false);
        assert_eq!(moves.len(), board.empty_count());
        assert_eq!(&moves[..2], &[board.point(4, 1), board.point(4, 5)]);

        let mut sorted = moves.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, legal_moves(&board));
    }

    #[test]
    fn test_ordered_moves_without_priority() {
        let mut board = Board::new(5);
        assert!(board.play(board.point(1, 1), Stone::Black));
        // White to move, Black made the last move
        assert_eq!(ordered_moves(&board, Stone::White, true), legal_moves(&board));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new(2);
        for (i, p) in board.empty_points().into_iter().enumerate() {
            let color = if i % 2 == 0 { Stone::Black } else { Stone::White };
            assert!(board.play(p, color));
        }
        assert!(ordered_moves(&board, Stone::Black, false).is_empty());
    }
}
