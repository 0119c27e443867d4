//! Search module for the Ninuki engines
//!
//! Contains:
//! - Move generation with tactical priority moves
//! - Proof cache for solved alpha-beta results
//! - Iterative-deepening alpha-beta with proof propagation
//! - Arena search tree and the MCTS/UCT searcher

pub mod alphabeta;
pub mod mcts;
pub mod movegen;
pub mod tree;
pub mod tt;

pub use alphabeta::{AlphaBetaSearcher, NodeValue, SearchOutcome, Timeout, Verdict};
pub use mcts::{adjust_simulations, MctsReport, MctsSearcher};
pub use movegen::{legal_moves, ordered_moves, priority_moves};
pub use tree::{Node, NodeId, SearchTree};
pub use tt::{EntryType, ProofCache, ProofEntry};
