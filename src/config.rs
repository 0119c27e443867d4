//! Engine configuration
//!
//! Every field has a default, so a partial (or empty) TOML document is a
//! valid configuration:
//!
//! ```toml
//! engine = "alphabeta"
//! time_limit_ms = 2000
//!
//! [alphabeta]
//! restrict_to_priority_moves = false
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::MAX_SIZE;
use crate::error::{ConfigError, Result};
use crate::rules::CAPTURE_WIN;

/// Which search engine answers `choose_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Mcts,
    AlphaBeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub engine: EngineKind,
    /// Wall-clock budget per move
    pub time_limit_ms: u64,
    pub board_size: usize,
    pub mcts: MctsConfig,
    pub alphabeta: AlphaBetaConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            time_limit_ms: 1000,
            board_size: crate::board::DEFAULT_SIZE,
            mcts: MctsConfig::default(),
            alphabeta: AlphaBetaConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// UCT exploration constant `C`
    pub exploration: f64,
    /// First batch size; later batches halve or double with remaining time
    pub initial_simulations: u32,
    /// Rollouts longer than this are scored as draws. `None` derives the
    /// cap from the board size (see [`MctsConfig::rollout_plies`]).
    pub max_rollout_plies: Option<u32>,
    /// Expansion stops once the tree holds this many nodes
    pub max_nodes: usize,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration: 1.1,
            initial_simulations: 1000,
            max_rollout_plies: None,
            max_nodes: 200_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaBetaConfig {
    /// Safety margin subtracted from the time limit
    pub time_margin_ms: u64,
    /// Search only priority moves when any exist
    pub restrict_to_priority_moves: bool,
    /// Shuffle root moves before each pass
    pub shuffle_root: bool,
    pub use_proof_cache: bool,
    pub proof_cache_entries: usize,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            time_margin_ms: 10,
            restrict_to_priority_moves: true,
            shuffle_root: true,
            use_proof_cache: true,
            proof_cache_entries: 1 << 16,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Rollout ply cap on a board of `size`.
    ///
    /// The derived cap is every cell plus every stone that can be captured
    /// and replayed before a capture win, so a greedy rollout (which never
    /// passes) always ends on its own first.
    #[must_use]
    pub fn rollout_plies(&self, size: usize) -> u32 {
        self.max_rollout_plies
            .unwrap_or_else(|| (size * size) as u32 + 2 * CAPTURE_WIN)
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board_size {} outside 2..={MAX_SIZE}",
                self.board_size
            )));
        }
        if self.time_limit_ms == 0 {
            return Err(ConfigError::Invalid("time_limit_ms must be positive".into()));
        }
        if !(self.mcts.exploration.is_finite() && self.mcts.exploration >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "mcts.exploration {} must be finite and non-negative",
                self.mcts.exploration
            )));
        }
        if self.mcts.initial_simulations == 0 {
            return Err(ConfigError::Invalid(
                "mcts.initial_simulations must be positive".into(),
            ));
        }
        if self.mcts.max_nodes == 0 {
            return Err(ConfigError::Invalid("mcts.max_nodes must be positive".into()));
        }
        if self.alphabeta.use_proof_cache && self.alphabeta.proof_cache_entries == 0 {
            return Err(ConfigError::Invalid(
                "alphabeta.proof_cache_entries must be positive".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}
