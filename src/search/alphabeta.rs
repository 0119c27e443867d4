//! Iterative-deepening alpha-beta with proof propagation
//!
//! Negamax over one shared board using play/undo. Terminal positions are
//! worth `+inf`, `-inf` or `0` for the side to move and count as *solved*;
//! a depth cutoff returns the capture heuristic and is never solved. A node
//! is solved when every child it explored was solved, or when it cut off on
//! a solved child.
//!
//! Each pass searches the root with the window `(-1, 1)`, one ply deeper
//! than the last, until a pass is solved or the deadline passes.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ninuki::board::{Board, Stone};
//! use ninuki::config::AlphaBetaConfig;
//! use ninuki::search::{AlphaBetaSearcher, Verdict};
//!
//! let mut board = Board::new(5);
//! for col in 1..=4 {
//!     board.play(board.point(3, col), Stone::Black);
//! }
//! board.set_current_player(Stone::Black);
//!
//! let mut searcher = AlphaBetaSearcher::new(AlphaBetaConfig::default(), Duration::from_secs(1));
//! let outcome = searcher.solve(&mut board);
//! assert_eq!(outcome.verdict, Verdict::Win(Stone::Black));
//! ```

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, GameStatus, Move, Point, Stone};
use crate::config::AlphaBetaConfig;
use crate::engine::Player;
use crate::eval::heuristic_eval;

use super::movegen::ordered_moves;
use super::tt::ProofCache;

/// Root search window
const WINDOW: (f64, f64) = (-1.0, 1.0);

/// The search ran past its deadline. Only ever returned after the board
/// has been restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search deadline exceeded")]
pub struct Timeout;

/// Game-theoretic result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win(Stone),
    Draw,
    /// Not proven within the time limit
    Unknown,
}

/// Value of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeValue {
    pub value: f64,
    pub solved: bool,
}

impl NodeValue {
    const fn solved(value: f64) -> Self {
        Self {
            value,
            solved: true,
        }
    }
}

/// Result of [`AlphaBetaSearcher::solve`]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Root value from the side to move's view (last completed pass)
    pub value: f64,
    pub solved: bool,
    pub timed_out: bool,
    /// Depth limit of the last completed pass (0 if none completed)
    pub depth: i32,
    pub nodes: u64,
    pub verdict: Verdict,
}

/// Per-search state handed down the recursion
struct SearchContext {
    deadline: Instant,
    /// `board.depth()` at the root; plies are counted from here
    root_depth: i32,
    max_depth: i32,
    nodes: u64,
    /// Best root move of the current pass and its value
    root_best: Option<(Point, f64)>,
    cache: Option<ProofCache>,
    rng: StdRng,
    restrict: bool,
    shuffle_root: bool,
}

impl SearchContext {
    #[inline]
    fn ply(&self, board: &Board) -> i32 {
        board.depth() - self.root_depth
    }

    #[inline]
    fn check_time(&self) -> Result<(), Timeout> {
        if Instant::now() >= self.deadline {
            Err(Timeout)
        } else {
            Ok(())
        }
    }
}

/// Fail-soft negamax. The board is identical on every return path.
fn negamax(
    board: &mut Board,
    ctx: &mut SearchContext,
    mut alpha: f64,
    beta: f64,
) -> Result<NodeValue, Timeout> {
    ctx.check_time()?;
    ctx.nodes += 1;

    let mover = board.current_player();
    match board.terminal_status() {
        GameStatus::Won(color) if color == mover => return Ok(NodeValue::solved(f64::INFINITY)),
        GameStatus::Won(_) => return Ok(NodeValue::solved(f64::NEG_INFINITY)),
        GameStatus::Draw => return Ok(NodeValue::solved(0.0)),
        GameStatus::Ongoing => {}
    }

    let ply = ctx.ply(board);
    if ply >= ctx.max_depth {
        return Ok(NodeValue {
            value: heuristic_eval(board),
            solved: false,
        });
    }

    let key = ProofCache::key(board);
    let mut moves = ordered_moves(board, mover, ctx.restrict);
    if ply == 0 {
        if ctx.shuffle_root {
            moves.shuffle(&mut ctx.rng);
        }
    } else if let Some(cache) = ctx.cache.as_mut() {
        if let Some(value) = cache.probe(key, alpha, beta) {
            return Ok(NodeValue::solved(value));
        }
        if let Some(hint) = cache.best_move(key) {
            if let Some(pos) = moves.iter().position(|&p| p == hint) {
                moves[..=pos].rotate_right(1);
            }
        }
    }

    if moves.is_empty() {
        // full board; terminal_status already reports this as a draw
        return Ok(NodeValue::solved(0.0));
    }

    let alpha_orig = alpha;
    let mut best = NodeValue {
        value: f64::NEG_INFINITY,
        solved: true,
    };
    let mut best_move = None;

    for point in moves {
        board.play(point, mover);
        let child = negamax(board, ctx, -beta, -alpha);
        board.undo();
        let child = child?;

        let value = -child.value;
        best.solved &= child.solved;
        if best_move.is_none() || value > best.value {
            best.value = value;
            best_move = Some(point);
        }
        if ply == 0 && ctx.root_best.map_or(true, |(_, v)| value > v) {
            ctx.root_best = Some((point, value));
        }
        if value > alpha {
            alpha = value;
        }
        if value >= beta {
            best = NodeValue {
                value,
                solved: child.solved,
            };
            break;
        }
    }

    if best.solved {
        if let Some(cache) = ctx.cache.as_mut() {
            cache.store(key, best.value, alpha_orig, beta, best_move);
        }
    }
    Ok(best)
}

/// Time-boxed iterative-deepening solver
pub struct AlphaBetaSearcher {
    config: AlphaBetaConfig,
    time_limit: Duration,
    rng: StdRng,
}

impl AlphaBetaSearcher {
    #[must_use]
    pub fn new(config: AlphaBetaConfig, time_limit: Duration) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            time_limit,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }

    /// Solve the position for the side to move.
    ///
    /// The board is searched in place and handed back unchanged, on a
    /// timeout as well.
    pub fn solve(&mut self, board: &mut Board) -> SearchOutcome {
        let start = Instant::now();
        let budget = self
            .time_limit
            .saturating_sub(Duration::from_millis(self.config.time_margin_ms));
        let mover = board.current_player();

        let mut ctx = SearchContext {
            deadline: start + budget,
            root_depth: board.depth(),
            max_depth: 0,
            nodes: 0,
            root_best: None,
            cache: self
                .config
                .use_proof_cache
                .then(|| ProofCache::new(self.config.proof_cache_entries)),
            rng: StdRng::seed_from_u64(self.rng.gen()),
            restrict: self.config.restrict_to_priority_moves,
            shuffle_root: self.config.shuffle_root,
        };

        let mut completed: Option<(Option<Point>, NodeValue, i32)> = None;
        let mut partial: Option<Point> = None;
        let mut timed_out = false;

        loop {
            ctx.max_depth += 1;
            ctx.root_best = None;
            match negamax(board, &mut ctx, WINDOW.0, WINDOW.1) {
                Ok(result) => {
                    let best = ctx.root_best.map(|(p, _)| p);
                    debug!(
                        depth = ctx.max_depth,
                        value = result.value,
                        solved = result.solved,
                        nodes = ctx.nodes,
                        best = ?best,
                        "alpha-beta pass complete"
                    );
                    completed = Some((best, result, ctx.max_depth));
                    if result.solved {
                        break;
                    }
                }
                Err(Timeout) => {
                    timed_out = true;
                    partial = ctx.root_best.map(|(p, _)| p);
                    debug!(
                        depth = ctx.max_depth,
                        nodes = ctx.nodes,
                        partial = ?partial,
                        "alpha-beta pass timed out"
                    );
                    break;
                }
            }
        }

        let completed_best = completed.and_then(|(best, _, _)| best);
        let best_move = match completed_best.or(partial) {
            Some(point) => Move::Place(point),
            None => {
                let fallback = board
                    .empty_points()
                    .first()
                    .map_or(Move::Pass, |&p| Move::Place(p));
                debug!(fallback = ?fallback, "no searched move, using fallback");
                fallback
            }
        };

        let (value, solved, depth) = completed.map_or((0.0, false, 0), |(_, r, d)| (r.value, r.solved, d));
        let verdict = if !solved {
            Verdict::Unknown
        } else if value == f64::INFINITY {
            Verdict::Win(mover)
        } else if value == f64::NEG_INFINITY {
            Verdict::Win(mover.opponent())
        } else {
            Verdict::Draw
        };

        info!(
            engine = "alphabeta",
            color = ?mover,
            best_move = ?best_move,
            value,
            solved,
            timed_out,
            depth,
            nodes = ctx.nodes,
            cache_hits = ctx.cache.as_ref().map_or(0, ProofCache::hits),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "move chosen"
        );

        SearchOutcome {
            best_move,
            value,
            solved,
            timed_out,
            depth,
            nodes: ctx.nodes,
            verdict,
        }
    }
}

impl Player for AlphaBetaSearcher {
    fn choose_move(&mut self, board: &Board, color: Stone) -> Move {
        let mut work = board.clone();
        work.set_current_player(color);
        work.mark_search_root();
        self.solve(&mut work).best_move
    }

    fn set_time_limit(&mut self, limit: Duration) {
        self.time_limit = limit;
    }

    fn time_limit(&self) -> Duration {
        self.time_limit
    }
}
