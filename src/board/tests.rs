use super::*;
use crate::error::BoardError;
use proptest::prelude::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
    assert_eq!(Stone::Border.opponent(), Stone::Border);
}

#[test]
fn test_new_board() {
    let board = Board::new(7);
    assert_eq!(board.size(), 7);
    assert_eq!(board.stride(), 9);
    assert_eq!(board.max_point(), 81);
    assert_eq!(board.empty_count(), 49);
    assert_eq!(board.current_player(), Stone::Black);
    assert_eq!(board.captures(Stone::Black), 0);
    assert_eq!(board.captures(Stone::White), 0);
    assert_eq!(board.last_move(), None);
    assert_eq!(board.history_len(), 0);
    assert_eq!(board.depth(), 0);
    assert_eq!(board.terminal_status(), GameStatus::Ongoing);
}

#[test]
fn test_invalid_sizes() {
    assert!(matches!(Board::try_new(1), Err(BoardError::InvalidSize { size: 1 })));
    assert!(matches!(
        Board::try_new(MAX_SIZE + 1),
        Err(BoardError::InvalidSize { .. })
    ));
    assert!(Board::try_new(2).is_ok());
    assert!(Board::try_new(MAX_SIZE).is_ok());
}

#[test]
fn test_border_ring() {
    let board = Board::new(5);
    assert_eq!(board.get(Point(0)), Stone::Border);
    assert_eq!(board.get(Point(6)), Stone::Border);
    assert_eq!(board.get(Point((board.max_point() - 1) as u16)), Stone::Border);
    // past the end of the grid
    assert_eq!(board.get(Point(10_000)), Stone::Border);
    for row in 1..=5 {
        assert_eq!(board.get(Point((row * 7) as u16)), Stone::Border);
        assert_eq!(board.get(Point((row * 7 + 6) as u16)), Stone::Border);
    }
}

#[test]
fn test_point_coord_inverse() {
    let board = Board::new(9);
    for row in 1..=9 {
        for col in 1..=9 {
            let p = board.point(row, col);
            assert!(board.is_on_board(p));
            assert_eq!(board.coord(p), (row, col));
        }
    }
    assert!(board.try_point(0, 3).is_err());
    assert!(board.try_point(3, 10).is_err());
}

#[test]
fn test_empty_points_ascending() {
    let mut board = Board::new(3);
    assert!(board.play(board.point(2, 2), Stone::Black));
    let empties = board.empty_points();
    assert_eq!(empties.len(), 8);
    assert!(empties.windows(2).all(|w| w[0] < w[1]));
    assert!(!empties.contains(&board.point(2, 2)));
}

#[test]
fn test_play_switches_player() {
    let mut board = Board::new(7);
    let p = board.point(4, 4);
    assert!(board.play(p, Stone::Black));
    assert_eq!(board.get(p), Stone::Black);
    assert_eq!(board.current_player(), Stone::White);
    assert_eq!(board.last_move(), Some(Move::Place(p)));
    assert_eq!(board.depth(), 1);
    assert_eq!(board.empty_count(), 48);
}

#[test]
fn test_play_occupied_fails_without_mutation() {
    let mut board = Board::new(7);
    let p = board.point(4, 4);
    assert!(board.play(p, Stone::Black));
    let before = board.clone();
    assert!(!board.play(p, Stone::White));
    assert_eq!(board, before);
    assert!(matches!(board.try_play(p, Stone::White), Err(BoardError::Occupied { .. })));
    assert!(!board.is_legal(p, Stone::White));
    assert!(board.is_legal(Move::Pass, Stone::White));
}

#[test]
fn test_capture_then_undo() {
    let mut board = Board::new(7);
    let cells = [(3, 1, Stone::Black), (3, 2, Stone::White), (3, 3, Stone::White)];
    for (r, c, color) in cells {
        assert!(board.play(board.point(r, c), color));
    }
    let before = board.clone();

    let flank = board.point(3, 4);
    assert!(board.play(flank, Stone::Black));
    assert_eq!(board.captures(Stone::Black), 2);
    assert!(board.is_empty(board.point(3, 2)));
    assert!(board.is_empty(board.point(3, 3)));
    assert_eq!(board.history().last().map(|r| r.captured.len()), Some(2));

    board.undo();
    assert_eq!(board, before);
    assert_eq!(board.get(board.point(3, 2)), Stone::White);
    assert_eq!(board.get(board.point(3, 3)), Stone::White);
    assert_eq!(board.captures(Stone::Black), 0);
}

#[test]
fn test_undo_restores_last_moves() {
    let mut board = Board::new(7);
    let a = board.point(1, 1);
    let b = board.point(2, 2);
    assert!(board.play(a, Stone::Black));
    assert!(board.play(b, Stone::White));
    assert!(board.play(Move::Pass, Stone::Black));
    assert_eq!(board.second_last_move(), Some(Move::Place(b)));

    board.undo();
    assert_eq!(board.last_move(), Some(Move::Place(b)));
    assert_eq!(board.second_last_move(), Some(Move::Place(a)));
    board.undo();
    board.undo();
    assert_eq!(board.last_move(), None);
    assert_eq!(board.second_last_move(), None);
    assert_eq!(board, Board::new(7));
}

#[test]
#[should_panic(expected = "empty move history")]
fn test_undo_without_history_panics() {
    let mut board = Board::new(5);
    board.undo();
}

#[test]
fn test_ten_captures_wins() {
    let mut board = Board::new(9);
    board.set_captures(Stone::White, 10);
    assert_eq!(board.is_terminal(), (true, Stone::White));
    assert_eq!(board.terminal_status(), GameStatus::Won(Stone::White));

    board.set_captures(Stone::White, 8);
    assert_eq!(board.is_terminal(), (false, Stone::Empty));
}

#[test]
fn test_capture_reaching_ten_is_terminal() {
    let mut board = Board::new(7);
    board.set_captures(Stone::Black, 8);
    for (r, c, color) in [(4, 1, Stone::Black), (4, 2, Stone::White), (4, 3, Stone::White)] {
        assert!(board.play(board.point(r, c), color));
    }
    assert!(!board.is_terminal().0);
    assert!(board.play(board.point(4, 4), Stone::Black));
    assert_eq!(board.is_terminal(), (true, Stone::Black));
}

#[test]
fn test_two_passes_draw() {
    let mut board = Board::new(5);
    assert!(board.play(Move::Pass, Stone::Black));
    assert!(!board.is_terminal().0);
    assert!(board.play(Move::Pass, Stone::White));
    assert_eq!(board.is_terminal(), (true, Stone::Empty));
    assert_eq!(board.terminal_status(), GameStatus::Draw);
    assert!(board.last_board_moves().is_empty());
}

#[test]
fn test_full_board_draw() {
    let mut board = Board::new(2);
    for (i, p) in board.empty_points().into_iter().enumerate() {
        let color = if i % 2 == 0 { Stone::Black } else { Stone::White };
        assert!(board.play(p, color));
    }
    assert_eq!(board.empty_count(), 0);
    assert_eq!(board.terminal_status(), GameStatus::Draw);
}

#[test]
fn test_five_is_terminal() {
    let mut board = Board::new(7);
    for col in 1..=4 {
        assert!(board.play(board.point(2, col), Stone::Black));
        assert!(board.play(board.point(5, col), Stone::White));
    }
    assert!(!board.is_terminal().0);
    assert!(board.play(board.point(2, 5), Stone::Black));
    assert_eq!(board.is_terminal(), (true, Stone::Black));
}

#[test]
fn test_last_board_moves_skips_passes() {
    let mut board = Board::new(7);
    let p = board.point(3, 3);
    assert!(board.play(p, Stone::Black));
    assert!(board.play(Move::Pass, Stone::White));
    assert_eq!(board.last_board_moves(), vec![p]);
}

#[test]
fn test_depth_counts_from_search_root() {
    let mut board = Board::new(7);
    assert!(board.play(board.point(1, 1), Stone::Black));
    assert!(board.play(board.point(1, 2), Stone::White));
    board.mark_search_root();
    assert_eq!(board.depth(), 0);
    assert!(board.play(board.point(1, 3), Stone::Black));
    assert_eq!(board.depth(), 1);
    board.undo();
    assert_eq!(board.depth(), 0);
}

#[test]
fn test_set_current_player_updates_hash() {
    let mut board = Board::new(7);
    let original = board.hash();
    board.set_current_player(Stone::White);
    assert_ne!(board.hash(), original);
    board.set_current_player(Stone::White);
    board.set_current_player(Stone::Black);
    assert_eq!(board.hash(), original);
}

#[test]
fn test_hash_depends_on_position_not_order() {
    let mut a = Board::new(7);
    let mut b = Board::new(7);
    let (p, q) = (a.point(2, 2), a.point(5, 5));
    let (r, s) = (a.point(3, 6), a.point(6, 1));
    assert!(a.play(p, Stone::Black));
    assert!(a.play(r, Stone::White));
    assert!(a.play(q, Stone::Black));
    assert!(a.play(s, Stone::White));

    assert!(b.play(q, Stone::Black));
    assert!(b.play(s, Stone::White));
    assert!(b.play(p, Stone::Black));
    assert!(b.play(r, Stone::White));
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn test_snapshot_rows() {
    let mut board = Board::new(5);
    assert!(board.play(board.point(1, 2), Stone::Black));
    assert!(board.play(board.point(5, 5), Stone::White));
    let snap = board.snapshot();
    assert_eq!(snap.size, 5);
    assert_eq!(snap.rows.len(), 5);
    assert_eq!(snap.rows[0][1], Stone::Black);
    assert_eq!(snap.rows[4][4], Stone::White);
    assert_eq!(snap.current_player, Stone::Black);

    let json = serde_json::to_string(&snap).unwrap();
    let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn test_display() {
    let mut board = Board::new(5);
    assert!(board.play(board.point(1, 1), Stone::Black));
    let text = board.to_string();
    assert!(text.contains(" 1 X...."));
    assert!(text.contains("ABCDE"));
    assert!(text.contains("captures: X=0 O=0"));
}

/// Plays moves chosen by `picks` until the game ends; a pick divisible by 17
/// is a pass. Calls `check` after every move.
fn play_random(board: &mut Board, picks: &[usize], mut check: impl FnMut(&Board)) -> usize {
    let mut played = 0;
    for &pick in picks {
        if board.is_terminal().0 {
            break;
        }
        let color = board.current_player();
        let empties = board.empty_points();
        let mv = if pick % 17 == 0 || empties.is_empty() {
            Move::Pass
        } else {
            Move::Place(empties[pick % empties.len()])
        };
        assert!(board.play(mv, color));
        played += 1;
        check(board);
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_undo_inverts_play(
        size in 5usize..=9,
        picks in prop::collection::vec(0usize..1000, 0..60)
    ) {
        let mut board = Board::new(size);
        let start = board.clone();
        let mut snapshots = vec![board.clone()];
        let played = play_random(&mut board, &picks, |b| snapshots.push(b.clone()));

        for _ in 0..played {
            snapshots.pop();
            board.undo();
            prop_assert_eq!(Some(&board), snapshots.last());
        }
        prop_assert_eq!(board, start);
    }

    #[test]
    fn prop_scoped_five_matches_full_scan(
        size in 5usize..=9,
        picks in prop::collection::vec(0usize..1000, 0..80)
    ) {
        let mut board = Board::new(size);
        let mut mismatch = None;
        play_random(&mut board, &picks, |b| {
            if mismatch.is_none() && b.detect_five_in_row() != b.full_board_five_in_row() {
                mismatch = Some(b.to_string());
            }
        });
        prop_assert!(mismatch.is_none(), "disagreement on\n{:?}", mismatch);
    }

    #[test]
    fn prop_capture_counts_even(
        size in 5usize..=9,
        picks in prop::collection::vec(0usize..1000, 0..80)
    ) {
        let mut board = Board::new(size);
        let mut ok = true;
        play_random(&mut board, &picks, |b| {
            ok &= b.captures(Stone::Black) % 2 == 0 && b.captures(Stone::White) % 2 == 0;
            let stones = b.size() * b.size() - b.empty_count();
            let placed = b.history().iter().filter(|r| !r.mv.is_pass()).count();
            let removed = (b.captures(Stone::Black) + b.captures(Stone::White)) as usize;
            ok &= stones + removed == placed;
        });
        prop_assert!(ok);
    }
}
