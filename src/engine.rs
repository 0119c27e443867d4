//! Engine front end
//!
//! [`Player`] is the single entry point both searchers implement: given a
//! board and a color, return a move within the time limit. [`Engine`]
//! owns one searcher of each kind and answers with the configured one.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ninuki::{Board, Engine, EngineConfig, EngineKind, Move, Player, Stone};
//!
//! let config = EngineConfig {
//!     engine: EngineKind::AlphaBeta,
//!     time_limit_ms: 200,
//!     ..EngineConfig::default()
//! };
//! let mut engine = Engine::new(&config);
//!
//! let mut board = Board::new(config.board_size);
//! board.play(board.point(4, 4), Stone::Black);
//!
//! let mv = engine.choose_move(&board, Stone::White);
//! assert!(board.is_legal(mv, Stone::White));
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Move, Stone};
use crate::config::{EngineConfig, EngineKind};
use crate::search::{AlphaBetaSearcher, MctsReport, MctsSearcher, SearchOutcome};

/// Something that picks moves under a time budget
pub trait Player {
    /// Move for `color` in `board`. Never an occupied point; `Pass` only
    /// when the board is full.
    fn choose_move(&mut self, board: &Board, color: Stone) -> Move;

    /// Budget for later calls to [`Player::choose_move`]
    fn set_time_limit(&mut self, limit: Duration);

    fn time_limit(&self) -> Duration;

    /// Set the time limit, then choose a move.
    fn choose_move_within(&mut self, board: &Board, color: Stone, limit: Duration) -> Move {
        self.set_time_limit(limit);
        self.choose_move(board, color)
    }
}

/// Engine-specific statistics behind a move
#[derive(Debug, Clone, PartialEq)]
pub enum SearchDetail {
    Mcts(MctsReport),
    AlphaBeta(SearchOutcome),
}

/// A chosen move with the search that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub best_move: Move,
    pub engine: EngineKind,
    /// Wall-clock time of the search in milliseconds
    pub time_ms: u64,
    pub detail: SearchDetail,
}

/// Façade over both searchers
pub struct Engine {
    kind: EngineKind,
    mcts: MctsSearcher,
    alphabeta: AlphaBetaSearcher,
    time_limit: Duration,
}

impl Engine {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let time_limit = config.time_limit();
        Self {
            kind: config.engine,
            mcts: MctsSearcher::new(config.mcts.clone(), time_limit),
            alphabeta: AlphaBetaSearcher::new(config.alphabeta.clone(), time_limit),
            time_limit,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    /// Switch engines; takes effect on the next move.
    pub fn set_kind(&mut self, kind: EngineKind) {
        self.kind = kind;
    }

    /// Choose a move with the configured engine and report how.
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let (best_move, detail) = match self.kind {
            EngineKind::Mcts => {
                let report = self.mcts.search(board, color);
                (report.best_move, SearchDetail::Mcts(report))
            }
            EngineKind::AlphaBeta => {
                let outcome = self.solve(board, color);
                (outcome.best_move, SearchDetail::AlphaBeta(outcome))
            }
        };
        MoveResult {
            best_move,
            engine: self.kind,
            time_ms: start.elapsed().as_millis() as u64,
            detail,
        }
    }

    /// Run the alpha-beta solver for `color` regardless of the configured
    /// engine. The caller's board is not touched.
    pub fn solve(&mut self, board: &Board, color: Stone) -> SearchOutcome {
        let mut work = board.clone();
        work.set_current_player(color);
        work.mark_search_root();
        self.alphabeta.solve(&mut work)
    }
}

impl Player for Engine {
    fn choose_move(&mut self, board: &Board, color: Stone) -> Move {
        self.get_move_with_stats(board, color).best_move
    }

    fn set_time_limit(&mut self, limit: Duration) {
        self.time_limit = limit;
        self.mcts.set_time_limit(limit);
        self.alphabeta.set_time_limit(limit);
    }

    fn time_limit(&self) -> Duration {
        self.time_limit
    }
}
