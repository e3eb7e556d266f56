//! Decision engine for the computer player
//!
//! The engine scores every candidate cell with the pattern heuristic and
//! plays one of the best. There is no look-ahead: each candidate is judged
//! on its own, so the cost of a decision is bounded by the candidate count.
//!
//! Ties are common (several ways to extend the same three, say), so the
//! engine picks uniformly among all top-scoring cells with its own random
//! number generator. Seed it to get reproducible play.
//!
//! # Example
//!
//! ```
//! use gomoku::{AiEngine, Board, Player, Pos};
//!
//! let mut engine = AiEngine::with_seed(7);
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Player::Black).unwrap();
//!
//! let result = engine.choose_move(&board, Player::White).unwrap();
//! println!("Best move: {} (score {})", result.best_move, result.score);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::GameError;
use crate::eval::evaluate;
use crate::search::candidates;

/// Result of a move decision with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move chosen
    pub best_move: Pos,
    /// Heuristic score of the chosen move
    pub score: u32,
    /// Number of candidates scored
    pub candidates: usize,
    /// Number of candidates sharing the top score
    pub ties: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Score every candidate for `player`, in candidate order.
#[must_use]
pub fn score_candidates(board: &Board, player: Player) -> Vec<(Pos, u32)> {
    candidates(board)
        .into_iter()
        .map(|pos| (pos, evaluate(board, pos, player)))
        .collect()
}

/// Heuristic AI engine for Gomoku.
///
/// Generic over the random source used for tie-breaking. The default
/// [`StdRng`] is seeded from the OS unless built with [`AiEngine::with_seed`].
pub struct AiEngine<R = StdRng> {
    rng: R,
}

impl AiEngine<StdRng> {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an engine whose tie-breaks are reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AiEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AiEngine<R> {
    /// Create an engine around any random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Choose the move for `player`.
    ///
    /// Returns [`GameError::NoCandidateMoves`] when the board offers no
    /// candidate cell (a full board). The board is only read.
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Result<MoveResult, GameError> {
        let start = Instant::now();

        let scored = score_candidates(board, player);

        let mut best_score = 0;
        let mut best_moves: Vec<Pos> = Vec::new();
        for &(pos, score) in &scored {
            if best_moves.is_empty() || score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(pos);
            } else if score == best_score {
                best_moves.push(pos);
            }
        }

        let Some(&best_move) = best_moves.choose(&mut self.rng) else {
            debug!(player = player.name(), "no candidate moves");
            return Err(GameError::NoCandidateMoves);
        };

        let result = MoveResult {
            best_move,
            score: best_score,
            candidates: scored.len(),
            ties: best_moves.len(),
            time_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            player = player.name(),
            candidates = result.candidates,
            score = result.score,
            ties = result.ties,
            chosen = %result.best_move,
            "engine chose move"
        );

        Ok(result)
    }
}
