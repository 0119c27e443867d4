//! Evaluation for both search engines
//!
//! - `heuristic`: capture differential used at alpha-beta depth cutoffs
//! - `rollout`: ordered rule chain that drives MCTS playouts
//! - `patterns`: the score constants both rely on

pub mod heuristic;
pub mod patterns;
pub mod rollout;

pub use heuristic::heuristic_eval;
pub use patterns::{capture_score, RolloutScore, CAPTURE_SCALE};
pub use rollout::{best_rollout_move, rollout_score};
