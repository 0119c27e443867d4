//! Monte Carlo Tree Search with UCT selection
//!
//! Each simulation selects a leaf by UCT, expands one random untried move,
//! plays a greedy rollout with the [rollout rule chain](crate::eval::rollout)
//! on a copy of the leaf's board and credits the result back to the root.
//! The answer is the most visited root child.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::board::{Board, GameStatus, Move, Stone};
use crate::config::MctsConfig;
use crate::engine::Player;
use crate::eval::best_rollout_move;

use super::tree::{NodeId, SearchTree};

/// Smallest batch size the adaptive budget may halve to
const MIN_SIMULATIONS: u32 = 500;
/// Largest batch size the adaptive budget may double to
const MAX_SIMULATIONS: u32 = 5000;

/// Summary of one MCTS search
#[derive(Debug, Clone, PartialEq)]
pub struct MctsReport {
    pub best_move: Move,
    /// Simulations that were backpropagated
    pub simulations: u64,
    /// Rollouts cut short by the deadline
    pub discarded: u64,
    pub tree_size: usize,
    /// Visits of the chosen root child
    pub best_visits: u32,
    /// Batch size in effect when the search stopped
    pub simulation_target: u32,
}

/// Next batch size given the time left after a batch.
///
/// Halves while more than half the budget remains, doubles once less than
/// a fifth remains. Never returns 0.
#[must_use]
pub fn adjust_simulations(target: u32, remaining: Duration, limit: Duration) -> u32 {
    let target = target.max(1);
    let remaining = remaining.as_secs_f64();
    let limit = limit.as_secs_f64();
    if remaining > 0.5 * limit && target > MIN_SIMULATIONS {
        target / 2
    } else if remaining < 0.2 * limit && target < MAX_SIMULATIONS {
        target * 2
    } else {
        target
    }
}

pub struct MctsSearcher {
    config: MctsConfig,
    time_limit: Duration,
    rng: StdRng,
}

impl MctsSearcher {
    #[must_use]
    pub fn new(config: MctsConfig, time_limit: Duration) -> Self {
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
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Search for `color` to move on a copy of `board`.
    pub fn search(&mut self, board: &Board, color: Stone) -> MctsReport {
        let start = Instant::now();
        let deadline = start + self.time_limit;

        let mut root_board = board.clone();
        root_board.set_current_player(color);
        root_board.mark_search_root();
        let mut tree = SearchTree::new(root_board);

        let mut target = self.config.initial_simulations.max(1);
        let mut simulations = 0u64;
        let mut discarded = 0u64;

        // Nothing to choose between: skip the search entirely
        let searchable = tree.root().untried.len() > 1;

        'search: while searchable {
            if Instant::now() >= deadline {
                break;
            }
            for _ in 0..target {
                if Instant::now() >= deadline {
                    break 'search;
                }
                if self.simulate(&mut tree, deadline) {
                    simulations += 1;
                } else {
                    discarded += 1;
                }
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            let next = adjust_simulations(target, remaining, self.time_limit);
            debug!(
                simulations,
                tree_size = tree.len(),
                batch = target,
                next_batch = next,
                remaining_ms = remaining.as_millis() as u64,
                "mcts batch complete"
            );
            target = next;
        }

        let root = tree.root_id();
        let (best_move, best_visits) = match tree.best_child(root).and_then(|id| tree.get(id)) {
            Some(child) => (child.mv.unwrap_or(Move::Pass), child.visits),
            None => (fallback_move(&tree.root().board), 0),
        };

        info!(
            engine = "mcts",
            color = ?color,
            best_move = ?best_move,
            best_visits,
            simulations,
            discarded,
            tree_size = tree.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "move chosen"
        );

        MctsReport {
            best_move,
            simulations,
            discarded,
            tree_size: tree.len(),
            best_visits,
            simulation_target: target,
        }
    }

    /// One select/expand/rollout/backpropagate cycle. Returns false when the
    /// rollout hit the deadline and nothing was credited.
    fn simulate(&mut self, tree: &mut SearchTree, deadline: Instant) -> bool {
        let mut node = tree.select_leaf(self.config.exploration);

        let untried = tree.get(node).map_or(0, |n| n.untried.len());
        if untried > 0 && tree.len() < self.config.max_nodes {
            let index = self.rng.gen_range(0..untried);
            node = tree.expand(node, index);
        }

        match self.rollout(tree, node, deadline) {
            Some(winner) => {
                tree.backpropagate(node, winner);
                true
            }
            None => false,
        }
    }

    /// Greedy playout from a copy of the node's board. Returns the winner
    /// (`Stone::Empty` for a draw), or `None` if the deadline passed.
    fn rollout(&self, tree: &SearchTree, node: NodeId, deadline: Instant) -> Option<Stone> {
        let mut board = tree.get(node)?.board.clone();
        for _ in 0..self.config.rollout_plies(board.size()) {
            match board.terminal_status() {
                GameStatus::Won(color) => return Some(color),
                GameStatus::Draw => return Some(Stone::Empty),
                GameStatus::Ongoing => {}
            }
            if Instant::now() >= deadline {
                return None;
            }
            let color = board.current_player();
            let point = best_rollout_move(&mut board, color)?;
            board.play(point, color);
        }
        match board.terminal_status() {
            GameStatus::Won(color) => Some(color),
            GameStatus::Draw | GameStatus::Ongoing => Some(Stone::Empty),
        }
    }
}

/// First empty point, or a pass on a full board
fn fallback_move(board: &Board) -> Move {
    board
        .empty_points()
        .first()
        .map_or(Move::Pass, |&p| Move::Place(p))
}

impl Player for MctsSearcher {
    fn choose_move(&mut self, board: &Board, color: Stone) -> Move {
        self.search(board, color).best_move
    }

    fn set_time_limit(&mut self, limit: Duration) {
        self.time_limit = limit;
    }

    fn time_limit(&self) -> Duration {
        self.time_limit
    }
}
