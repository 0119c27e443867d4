//! Game rules for Ninuki
//!
//! This module implements the rule set on top of the padded board:
//! - Capture rules (pair capture)
//! - Win conditions (five in a row, scoped and full-board)
//! - Line patterns used by move ordering and heuristics

pub mod capture;
pub mod lines;
pub mod win;

/// Captured stones needed to win
pub const CAPTURE_WIN: u32 = 10;

// Re-exports for convenient access
pub use capture::{captured_by, would_capture};
pub use lines::{
    count_stones_in_row, detect_open_four, detect_open_three, moves_for_n_in_a_row, run_length,
};
pub use win::{detect_five_in_row, full_board_five_in_row, has_immediate_win};
