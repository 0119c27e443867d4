//! Ninuki playing engine
//!
//! Ninuki is a Pente-style connection-and-capture game:
//! - Square board of size 2..=25 (7x7 by default)
//! - 5-in-a-row to win (overlines allowed)
//! - Pair capture rule: X-O-O-X pattern captures the O-O pair
//! - Capture win: 10 captured stones
//! - Passing is always legal; two passes in a row end the game as a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Padded one-dimensional board with exact play/undo
//! - [`rules`]: Captures, five-in-a-row, open threes/fours, priority moves
//! - [`eval`]: Capture heuristic and the MCTS rollout policy
//! - [`search`]: Move generation, alpha-beta solver, MCTS
//! - [`engine`]: The [`Player`] trait and the [`Engine`] façade
//! - [`config`]: TOML-backed engine configuration
//!
//! # Quick Start
//!
//! ```
//! use ninuki::{Board, Engine, EngineConfig, Player, Stone};
//!
//! let mut config = EngineConfig::default();
//! config.time_limit_ms = 100;
//! let mut engine = Engine::new(&config);
//!
//! let mut board = Board::new(config.board_size);
//! board.play(board.point(4, 4), Stone::Black);
//!
//! let mv = engine.choose_move(&board, Stone::White);
//! board.play(mv, Stone::White);
//! println!("{board}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{format_point, parse_point, Board, GameStatus, Move, Point, Stone};
pub use config::{EngineConfig, EngineKind};
pub use engine::{Engine, MoveResult, Player, SearchDetail};
pub use error::{BoardError, ConfigError};
pub use search::{AlphaBetaSearcher, MctsSearcher, SearchOutcome, Verdict};
