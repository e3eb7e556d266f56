//! Game rules for Gomoku
//!
//! Standard free-style rules: the first player to make five or more stones
//! in a row (horizontal, vertical or diagonal) wins. There are no captures
//! and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, winning_line, WIN_LENGTH};
