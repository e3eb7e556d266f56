//! Gomoku game engine with a heuristic computer opponent
//!
//! Free-style five-in-a-row on a square board (15x15 by default):
//! - Black moves first, players alternate
//! - Five or more stones in a row wins (overlines allowed)
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, turn and game-over tracking
//! - [`rules`]: Win detection through the last stone played
//! - [`search`]: Candidate move generation
//! - [`eval`]: Pattern heuristic for a single candidate
//! - [`engine`]: Decision engine picking the computer's move
//! - [`game`]: Session operations used by a front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{apply_human_move, request_computer_move, AiEngine, Board, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AiEngine::with_seed(42);
//!
//! // Human plays Black in the centre
//! apply_human_move(&mut board, Pos::new(7, 7)).unwrap();
//!
//! // Computer answers as White
//! let played = request_computer_move(&mut board, &mut engine).unwrap();
//! println!("AI plays at {}", played.outcome.pos);
//! assert!(played.outcome.winner().is_none());
//! ```
//!
//! # Move Decision
//!
//! The computer does not search ahead. It:
//! 1. Collects every empty cell next to a stone (the centre on an empty board)
//! 2. Scores each with 5-cell window patterns, attack and block combined
//! 3. Picks uniformly at random among the top-scoring cells

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, GameStatus, Player, Pos, Stone, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{AiEngine, MoveResult};
pub use error::{ConfigError, GameError};
pub use game::{
    apply_human_move, new_game, request_computer_move, reset_game, ComputerMove, MoveOutcome,
};
