//! Evaluation module for Gomoku positions
//!
//! Scores a single hypothetical placement by the 5-cell windows it
//! takes part in:
//! - Attack patterns (twos, threes, fours) for the mover
//! - Block patterns (threes, fours) of the opponent

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_line, line_through, Line, SCAN_HALF_WIDTH};
pub use patterns::{attack_score, block_score, PatternScore, WINDOW_LEN};
