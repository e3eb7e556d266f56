//! Board structure with turn and game-over tracking

use super::{Player, Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;
use crate::rules::check_win;

/// Whole-game state machine.
///
/// `InProgress(Black)` is the initial state. `Won` and `Draw` are terminal:
/// only [`Board::reset`] leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game running, holding the side to move
    InProgress(Player),
    /// Five (or more) in a row was made by this player
    Won(Player),
    /// Board filled with no winner
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Square game board.
///
/// Cells are stored row-major. Once placed, a stone is never removed
/// except by a full [`reset`](Board::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    stone_count: usize,
    status: GameStatus,
}

/// Check that `size` can host a five-in-a-row and fits `Pos` coordinates.
pub fn validate_size(size: usize) -> Result<(), GameError> {
    if size < MIN_BOARD_SIZE {
        return Err(GameError::BoardTooSmall { size });
    }
    if size > MAX_BOARD_SIZE {
        return Err(GameError::BoardTooLarge { size });
    }
    Ok(())
}

impl Board {
    /// Empty board of the default size, Black to move.
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE)
    }

    /// Empty board of a custom size.
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        validate_size(size)?;
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stone_count: 0,
            status: GameStatus::InProgress(Player::Black),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move, `None` once the game is over
    #[inline]
    pub fn turn(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress(player) => Some(player),
            _ => None,
        }
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    #[inline]
    fn in_bounds(&self, pos: Pos) -> bool {
        usize::from(pos.row) < self.size && usize::from(pos.col) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        usize::from(pos.row) * self.size + usize::from(pos.col)
    }

    /// Get stone at position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the board. Callers validate coordinates first.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        assert!(
            self.in_bounds(pos),
            "position {pos} outside {n}x{n} board",
            n = self.size
        );
        self.cells[self.index(pos)]
    }

    /// Get stone at signed coordinates, `None` past the edge
    #[inline]
    pub fn get_checked(&self, row: i32, col: i32) -> Option<Stone> {
        if self.contains(row, col) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a stone for `player` and advance the game state.
    ///
    /// `player` must be the side to move. Returns the status after the move:
    /// `Won(player)` when the stone completes a five, `Draw` when it fills
    /// the last cell, otherwise the opponent's turn. A rejected placement
    /// leaves the board untouched.
    pub fn place(&mut self, pos: Pos, player: Player) -> Result<GameStatus, GameError> {
        let turn = self.turn().ok_or(GameError::MoveAfterGameOver)?;
        if player != turn {
            return Err(GameError::OutOfTurn { player });
        }
        if !self.in_bounds(pos) {
            return Err(GameError::InvalidCoordinate {
                row: usize::from(pos.row),
                col: usize::from(pos.col),
                size: self.size,
            });
        }

        let idx = self.index(pos);
        if !self.cells[idx].is_empty() {
            return Err(GameError::CellOccupied {
                row: usize::from(pos.row),
                col: usize::from(pos.col),
            });
        }

        self.cells[idx] = player.into();
        self.stone_count += 1;

        self.status = if check_win(self, pos, player) {
            GameStatus::Won(player)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(player.opponent())
        };

        Ok(self.status)
    }

    /// Clear every cell and hand the move back to Black
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.stone_count = 0;
        self.status = GameStatus::InProgress(Player::Black);
    }

    /// Iterate over occupied cells in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, stone)| {
            stone
                .player()
                .map(|player| (Pos::new((idx / size) as u8, (idx % size) as u8), player))
        })
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stone_count
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stone_count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count == self.cells.len()
    }

    /// Centre cell, `(N/2, N/2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }
}

#[cfg(test)]
impl Board {
    /// Write a stone straight into a cell, skipping turn order and win
    /// detection. Lets tests build positions one colour at a time.
    pub(crate) fn set_stone(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos);
        if self.cells[idx].is_empty() {
            self.stone_count += 1;
        }
        self.cells[idx] = player.into();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
