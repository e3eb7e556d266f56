//! Game state management for the Gomoku GUI

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{
    apply_human_move, new_game, request_computer_move, reset_game, AiEngine, Board, GameConfig,
    GameStatus, MoveOutcome, MoveResult, Player, Pos,
};

/// Main game state
pub struct GameState {
    pub board: Board,
    pub ai_enabled: bool,
    /// Side the computer plays when enabled
    pub ai_player: Player,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,

    engine: AiEngine,
    ai_delay: Duration,
    /// When the pending computer move should be played
    ai_due: Option<Instant>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let board = new_game(config).unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default board");
            Board::new()
        });

        Self {
            board,
            ai_enabled: config.ai_enabled,
            ai_player: Player::White,
            last_move: None,
            winning_line: None,
            last_ai_result: None,
            message: None,
            engine: config.engine(),
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            ai_due: None,
        }
    }

    pub fn reset(&mut self) {
        reset_game(&mut self.board);
        self.last_move = None;
        self.winning_line = None;
        self.last_ai_result = None;
        self.message = None;
        self.ai_due = None;
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.ai_enabled && self.board.turn() == Some(self.ai_player)
    }

    /// Check if a computer move is waiting for its delay
    pub fn is_ai_pending(&self) -> bool {
        self.ai_due.is_some()
    }

    /// Turn the computer opponent on or off
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
        if enabled {
            self.schedule_ai_move(Instant::now());
        } else {
            self.ai_due = None;
        }
    }

    /// Attempt to place a stone for the human at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_turn() {
            return Err("Not your turn".to_string());
        }

        let outcome = apply_human_move(&mut self.board, pos).map_err(|e| e.to_string())?;
        self.record(outcome);
        self.schedule_ai_move(Instant::now());
        Ok(())
    }

    fn schedule_ai_move(&mut self, now: Instant) {
        if self.is_ai_turn() && self.ai_due.is_none() {
            self.ai_due = Some(now + self.ai_delay);
        }
    }

    /// Play the pending computer move once its delay has passed.
    ///
    /// Returns true when a move was played.
    pub fn poll_ai(&mut self, now: Instant) -> bool {
        match self.ai_due {
            Some(due) if now >= due => {}
            _ => return false,
        }
        self.ai_due = None;

        if !self.is_ai_turn() {
            return false;
        }

        match request_computer_move(&mut self.board, &mut self.engine) {
            Ok(played) => {
                self.last_ai_result = Some(played.decision);
                self.record(played.outcome);
                true
            }
            Err(e) => {
                warn!(error = %e, "computer move failed");
                self.message = Some(format!("AI could not move: {e}"));
                false
            }
        }
    }

    /// Time left before the pending computer move
    pub fn time_until_ai(&self, now: Instant) -> Option<Duration> {
        self.ai_due.map(|due| due.saturating_duration_since(now))
    }

    fn record(&mut self, outcome: MoveOutcome) {
        debug!(player = outcome.player.name(), pos = %outcome.pos, "move recorded");
        self.last_move = Some(outcome.pos);
        self.winning_line = outcome.winning_line;
        self.message = None;
    }

    /// Text announcing the result, once the game is over
    pub fn result_text(&self) -> Option<String> {
        match self.board.status() {
            GameStatus::Won(winner) if self.ai_enabled && winner == self.ai_player => {
                Some("AI wins!".to_string())
            }
            GameStatus::Won(winner) => Some(format!("{} wins!", winner.name())),
            GameStatus::Draw => Some("Draw - the board is full".to_string()),
            GameStatus::InProgress(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_ai_config() -> GameConfig {
        GameConfig {
            ai_enabled: true,
            ai_delay_ms: 0,
            ai_seed: Some(1),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_human_vs_human_alternates() {
        let mut state = GameState::new(&GameConfig::default());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(7, 8)).unwrap();
        assert_eq!(state.board.stone_count(), 2);
        assert_eq!(state.last_move, Some(Pos::new(7, 8)));
        assert!(!state.is_ai_pending());
    }

    #[test]
    fn test_ai_replies_after_delay() {
        let mut state = GameState::new(&instant_ai_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.is_ai_pending());
        assert!(state.try_place_stone(Pos::new(0, 0)).is_err());

        assert!(state.poll_ai(Instant::now()));
        assert_eq!(state.board.stone_count(), 2);
        assert_eq!(state.board.turn(), Some(Player::Black));
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_ai_waits_for_deadline() {
        let config = GameConfig {
            ai_delay_ms: 60_000,
            ..instant_ai_config()
        };
        let mut state = GameState::new(&config);
        state.try_place_stone(Pos::new(7, 7)).unwrap();

        let now = Instant::now();
        assert!(!state.poll_ai(now));
        assert!(state.time_until_ai(now).is_some());
        assert_eq!(state.board.stone_count(), 1);
    }

    #[test]
    fn test_enabling_ai_on_its_turn_schedules_move() {
        let mut state = GameState::new(&GameConfig {
            ai_enabled: false,
            ..instant_ai_config()
        });
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(!state.is_ai_pending());

        state.set_ai_enabled(true);
        assert!(state.is_ai_pending());
        assert!(state.poll_ai(Instant::now()));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new(&instant_ai_config());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.poll_ai(Instant::now());

        state.reset();
        assert!(state.board.is_board_empty());
        assert_eq!(state.last_move, None);
        assert!(state.last_ai_result.is_none());
        assert!(!state.is_ai_pending());
    }

    #[test]
    fn test_result_text() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.result_text(), None);

        for col in 0..5u8 {
            state.try_place_stone(Pos::new(0, col)).unwrap();
            if col < 4 {
                state.try_place_stone(Pos::new(5, col)).unwrap();
            }
        }
        assert_eq!(state.result_text().as_deref(), Some("Black wins!"));
        assert!(state.winning_line.is_some());
    }
}
