//! Pattern scores for Gomoku evaluation
//!
//! A 5-cell window is scored by how many of its cells each side holds.
//! Offensive and defensive scores are independent and add up, so a move
//! that both extends a line and blocks one ranks above either alone.

/// Cells in one scoring window
pub const WINDOW_LEN: usize = 5;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    // Attacking patterns (counted with the candidate stone in place)
    /// Four of ours and one gap: wins next move
    pub const FOUR: u32 = 10_000;
    /// Three of ours and two gaps
    pub const THREE: u32 = 1_000;
    /// Two of ours and three gaps
    pub const TWO: u32 = 100;

    // Blocking patterns (counted on the board as it stands)
    /// Opponent four with one gap: must block
    pub const BLOCK_FOUR: u32 = 5_000;
    /// Opponent three with two gaps
    pub const BLOCK_THREE: u32 = 500;
}

/// Score a window from the mover's side.
///
/// `mine + empty` must not exceed [`WINDOW_LEN`]; any remaining cells
/// belong to the opponent, which only the listed patterns exclude.
#[inline]
pub fn attack_score(mine: usize, empty: usize) -> u32 {
    match (mine, empty) {
        (4, 1) => PatternScore::FOUR,
        (3, 2) => PatternScore::THREE,
        (2, 3) => PatternScore::TWO,
        _ => 0,
    }
}

/// Score a window from the blocker's side.
#[inline]
pub fn block_score(theirs: usize, empty: usize) -> u32 {
    match (theirs, empty) {
        (4, 1) => PatternScore::BLOCK_FOUR,
        (3, 2) => PatternScore::BLOCK_THREE,
        _ => 0,
    }
}
