//! Game session operations
//!
//! Thin orchestration over [`Board`], the win check and [`AiEngine`]. A
//! front-end drives a game through these four calls and never touches the
//! turn bookkeeping itself.

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, GameStatus, Player, Pos};
use crate::config::GameConfig;
use crate::engine::{AiEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{winning_line, WIN_LENGTH};

/// What a successful placement did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pos: Pos,
    pub player: Player,
    /// Status after the move
    pub status: GameStatus,
    /// The five that ended the game, when it was won
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
}

impl MoveOutcome {
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// A computer move together with the decision that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerMove {
    pub outcome: MoveOutcome,
    pub decision: MoveResult,
}

/// Fresh board for the configured size, Black to move.
pub fn new_game(config: &GameConfig) -> Result<Board, GameError> {
    let board = Board::with_size(config.board_size)?;
    info!(size = board.size(), "new game");
    Ok(board)
}

/// Place a stone for the side to move at `pos`.
pub fn apply_human_move(board: &mut Board, pos: Pos) -> Result<MoveOutcome, GameError> {
    let player = board.turn().ok_or(GameError::MoveAfterGameOver)?;
    play(board, pos, player)
}

/// Let the engine choose and play the move for the side to move.
pub fn request_computer_move<R: Rng>(
    board: &mut Board,
    engine: &mut AiEngine<R>,
) -> Result<ComputerMove, GameError> {
    let player = board.turn().ok_or(GameError::MoveAfterGameOver)?;
    let decision = engine.choose_move(board, player)?;
    let outcome = play(board, decision.best_move, player)?;
    Ok(ComputerMove { outcome, decision })
}

/// Clear the board and give the move back to Black.
pub fn reset_game(board: &mut Board) {
    board.reset();
    info!("game reset");
}

fn play(board: &mut Board, pos: Pos, player: Player) -> Result<MoveOutcome, GameError> {
    let status = board.place(pos, player)?;
    debug!(player = player.name(), %pos, ?status, "stone placed");

    let winning_line = match status {
        GameStatus::Won(winner) => {
            info!(winner = winner.name(), moves = board.stone_count(), "game won");
            winning_line(board, pos, winner)
        }
        GameStatus::Draw => {
            info!(moves = board.stone_count(), "game drawn");
            None
        }
        GameStatus::InProgress(_) => None,
    };

    Ok(MoveOutcome {
        pos,
        player,
        status,
        winning_line,
    })
}
