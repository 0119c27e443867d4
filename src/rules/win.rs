//! Five-in-a-row detection
//!
//! The canonical check after every move only looks at the lines through
//! the last move. A full-board scan exists for verification; on any board
//! reached through `play` (stopping at the first terminal position) the
//! two agree, because a new five must contain the stone just placed.

use crate::board::{Board, Move, Stone};

use super::capture::captured_by;
use super::lines::run_length;
use super::CAPTURE_WIN;

/// Color with five or more in a row through the last move, else `Empty`.
#[must_use]
pub fn detect_five_in_row(board: &Board) -> Stone {
    let Some(Move::Place(last)) = board.last_move() else {
        return Stone::Empty;
    };
    let color = board.get(last);
    if !color.is_color() {
        return Stone::Empty;
    }
    for step in board.line_offsets() {
        if run_length(board, last, step, color) >= 5 {
            return color;
        }
    }
    Stone::Empty
}

/// Color with five or more in a row anywhere on the board, else `Empty`.
///
/// Scans every stone in all 4 directions; use only for verification.
#[must_use]
pub fn full_board_five_in_row(board: &Board) -> Stone {
    for idx in 0..board.max_point() {
        let point = crate::board::Point(idx as u16);
        let color = board.get(point);
        if !color.is_color() {
            continue;
        }
        for step in board.line_offsets() {
            if run_length(board, point, step, color) >= 5 {
                return color;
            }
        }
    }
    Stone::Empty
}

/// True if `color` could win with one stone: a five through an empty
/// point, or a capture that reaches [`CAPTURE_WIN`].
#[must_use]
pub fn has_immediate_win(board: &Board, color: Stone) -> bool {
    let captures = board.captures(color);
    board.empty_points().into_iter().any(|point| {
        board
            .line_offsets()
            .into_iter()
            .any(|step| run_length(board, point, step, color) >= 5)
            || captures + captured_by(board, point, color).len() as u32 >= CAPTURE_WIN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;

    fn line(board: &mut Board, cells: &[(usize, usize)], color: Stone) -> Vec<Point> {
        cells
            .iter()
            .map(|&(r, c)| {
                let p = board.point(r, c);
                assert!(board.play(p, color));
                p
            })
            .collect()
    }

    #[test]
    fn test_horizontal_five() {
        let mut board = Board::new(7);
        line(&mut board, &[(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)], Stone::Black);
        assert_eq!(detect_five_in_row(&board), Stone::Black);
        assert_eq!(full_board_five_in_row(&board), Stone::Black);
    }

    #[test]
    fn test_five_completed_in_the_middle() {
        let mut board = Board::new(7);
        line(&mut board, &[(1, 1), (2, 2), (4, 4), (5, 5), (3, 3)], Stone::White);
        assert_eq!(detect_five_in_row(&board), Stone::White);
    }

    #[test]
    fn test_anti_diagonal_five() {
        let mut board = Board::new(7);
        line(&mut board, &[(1, 5), (2, 4), (3, 3), (4, 2), (5, 1)], Stone::Black);
        assert_eq!(detect_five_in_row(&board), Stone::Black);
    }

    #[test]
    fn test_overline_counts() {
        let mut board = Board::new(7);
        line(
            &mut board,
            &[(1, 4), (2, 4), (3, 4), (5, 4), (6, 4), (4, 4)],
            Stone::Black,
        );
        assert_eq!(detect_five_in_row(&board), Stone::Black);
    }

    #[test]
    fn test_four_is_not_five() {
        let mut board = Board::new(7);
        line(&mut board, &[(2, 1), (2, 2), (2, 3), (2, 4)], Stone::Black);
        assert_eq!(detect_five_in_row(&board), Stone::Empty);
        assert_eq!(full_board_five_in_row(&board), Stone::Empty);
    }

    #[test]
    fn test_rows_do_not_wrap() {
        let mut board = Board::new(7);
        // end of row 2 and start of row 3 are separated by the border column
        line(&mut board, &[(2, 5), (2, 6), (2, 7), (3, 1), (3, 2)], Stone::Black);
        assert_eq!(full_board_five_in_row(&board), Stone::Empty);
    }

    #[test]
    fn test_scoped_check_ignores_older_lines() {
        let mut board = Board::new(7);
        line(&mut board, &[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)], Stone::Black);
        line(&mut board, &[(6, 6)], Stone::White);
        assert_eq!(detect_five_in_row(&board), Stone::Empty);
        assert_eq!(full_board_five_in_row(&board), Stone::Black);
    }

    #[test]
    fn test_immediate_win_by_five() {
        let mut board = Board::new(7);
        line(&mut board, &[(4, 1), (4, 2), (4, 4), (4, 5)], Stone::White);
        assert!(has_immediate_win(&board, Stone::White));
        assert!(!has_immediate_win(&board, Stone::Black));

        assert!(board.play(board.point(4, 3), Stone::Black));
        assert!(!has_immediate_win(&board, Stone::White));
    }

    #[test]
    fn test_immediate_win_by_capture() {
        let mut board = Board::new(7);
        line(&mut board, &[(2, 2), (2, 3)], Stone::Black);
        line(&mut board, &[(2, 1)], Stone::White);
        assert!(!has_immediate_win(&board, Stone::White));
        board.set_captures(Stone::White, 8);
        assert!(has_immediate_win(&board, Stone::White));
    }

    #[test]
    fn test_pass_has_no_five() {
        let mut board = Board::new(7);
        assert!(board.play(Move::Pass, Stone::Black));
        assert_eq!(detect_five_in_row(&board), Stone::Empty);
    }
}
