//! Rollout policy for MCTS playouts
//!
//! A candidate move is scored by playing it, running an ordered rule chain
//! where the first matching rule decides the score, and undoing it.

use crate::board::{Board, GameStatus, Point, Stone};
use crate::rules;

use super::patterns::RolloutScore;

/// A rollout rule sees the board with the candidate already played
type Rule = fn(&Board, Point, Stone) -> Option<f64>;

const RULES: [Rule; 4] = [wins_now, loses_now, open_four, open_three];

fn wins_now(board: &Board, _point: Point, color: Stone) -> Option<f64> {
    (board.terminal_status() == GameStatus::Won(color)).then_some(RolloutScore::WIN)
}

/// The opponent can win on its next move
fn loses_now(board: &Board, _point: Point, color: Stone) -> Option<f64> {
    rules::has_immediate_win(board, color.opponent()).then_some(RolloutScore::LOSS)
}

fn open_four(board: &Board, point: Point, color: Stone) -> Option<f64> {
    rules::detect_open_four(board, point, color)
        .then(|| base_score(board, point, color) + RolloutScore::OPEN_FOUR_BONUS)
}

fn open_three(board: &Board, point: Point, color: Stone) -> Option<f64> {
    rules::detect_open_three(board, point, color)
        .then(|| base_score(board, point, color) + RolloutScore::OPEN_THREE_BONUS)
}

/// Mover's capture count plus the horizontal run through `point`
fn base_score(board: &Board, point: Point, color: Stone) -> f64 {
    f64::from(board.captures(color)) + rules::count_stones_in_row(board, point, color) as f64
}

/// Score `color` playing at `point`.
///
/// The board is left exactly as it was. An occupied point scores
/// [`RolloutScore::LOSS`].
#[must_use]
pub fn rollout_score(board: &mut Board, point: Point, color: Stone) -> f64 {
    if !board.play(point, color) {
        return RolloutScore::LOSS;
    }
    let score = RULES
        .iter()
        .find_map(|rule| rule(board, point, color))
        .unwrap_or_else(|| base_score(board, point, color));
    board.undo();
    score
}

/// Highest-scoring empty point for `color`; ties go to the lowest point.
///
/// `None` when the board is full.
#[must_use]
pub fn best_rollout_move(board: &mut Board, color: Stone) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for point in board.empty_points() {
        let score = rollout_score(board, point, color);
        if score == RolloutScore::WIN {
            return Some(point);
        }
        match best {
            Some((_, s)) if s >= score => {}
            _ => best = Some((point, score)),
        }
    }
    best.map(|(point, _)| point)
}
