//! Score constants for evaluation
//!
//! Rollout scores rank candidate moves during MCTS playouts; the capture
//! scale turns a capture differential into the alpha-beta leaf value.

/// Scores returned by the rollout rule chain
pub struct RolloutScore;

impl RolloutScore {
    /// Move completes a win for the mover
    pub const WIN: f64 = f64::INFINITY;
    /// Move leaves the opponent winning
    pub const LOSS: f64 = f64::NEG_INFINITY;
    /// Bonus on top of the base score for an open four: _OOOO_
    pub const OPEN_FOUR_BONUS: f64 = 5.0;
    /// Bonus on top of the base score for an open three: _OOO_
    pub const OPEN_THREE_BONUS: f64 = 0.8;
}

/// Divisor applied to the capture differential at a depth cutoff.
///
/// Keeps heuristic values inside the `(-1, 1)` search window for any
/// capture count short of a capture win.
pub const CAPTURE_SCALE: f64 = 10.0;

/// Capture differential seen by `mine`, scaled into `(-1, 1)`.
///
/// Symmetric: `capture_score(a, b) == -capture_score(b, a)`.
#[must_use]
pub fn capture_score(mine: u32, theirs: u32) -> f64 {
    (f64::from(mine) - f64::from(theirs)) / CAPTURE_SCALE
}
