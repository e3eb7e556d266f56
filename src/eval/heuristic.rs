//! Heuristic evaluation of a single candidate move
//!
//! For each axis through the candidate a line of up to 9 cells is read
//! (4 on each side, clipped at the edges). Every 5-cell window of that line
//! is scored twice:
//! - attack: the candidate cell counts as the mover's stone
//! - block: the candidate cell counts as empty, so an opponent four with the
//!   candidate as its only gap is recognised as a threat this move removes
//!
//! The two scores add up over all windows and all four axes.

use crate::board::{Board, Player, Pos, Stone, DIRECTIONS};

use super::patterns::{attack_score, block_score, WINDOW_LEN};

/// Cells read on each side of the candidate
pub const SCAN_HALF_WIDTH: i32 = 4;

/// Cells of one axis through a candidate, clipped at the board edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub cells: Vec<Stone>,
    /// Index of the candidate within `cells`
    pub center: usize,
}

/// Read the line through `pos` along `(dr, dc)`.
pub fn line_through(board: &Board, pos: Pos, dr: i32, dc: i32) -> Line {
    let mut cells = Vec::with_capacity(2 * SCAN_HALF_WIDTH as usize + 1);
    let mut center = 0;

    for dist in -SCAN_HALF_WIDTH..=SCAN_HALF_WIDTH {
        let (r, c) = pos.offset(dr, dc, dist);
        if let Some(stone) = board.get_checked(r, c) {
            if dist == 0 {
                center = cells.len();
            }
            cells.push(stone);
        }
    }

    Line { cells, center }
}

/// Score placing `player` at `pos`.
///
/// `pos` should be empty; the board is not modified. Higher is better for
/// `player`.
#[must_use]
pub fn evaluate(board: &Board, pos: Pos, player: Player) -> u32 {
    debug_assert!(board.is_empty(pos), "evaluating occupied cell {pos}");

    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            let line = line_through(board, pos, dr, dc);
            evaluate_line(&line.cells, line.center, player)
        })
        .sum()
}

/// Score every 5-cell window of `line` for a stone of `player` at `center`.
///
/// `line[center]` is expected to be empty. Lines shorter than a window
/// score 0.
#[must_use]
pub fn evaluate_line(line: &[Stone], center: usize, player: Player) -> u32 {
    if line.len() < WINDOW_LEN {
        return 0;
    }

    let mine = Stone::from(player);
    let theirs = Stone::from(player.opponent());
    let mut score = 0;

    for start in 0..=line.len() - WINDOW_LEN {
        let window = &line[start..start + WINDOW_LEN];

        let mut my_count = 0;
        let mut opp_count = 0;
        let mut empty = 0;
        for &stone in window {
            if stone == mine {
                my_count += 1;
            } else if stone == theirs {
                opp_count += 1;
            } else {
                empty += 1;
            }
        }

        // Block side: board as it stands
        score += block_score(opp_count, empty);

        // Attack side: candidate filled in
        if (start..start + WINDOW_LEN).contains(&center) && line[center].is_empty() {
            score += attack_score(my_count + 1, empty - 1);
        } else {
            score += attack_score(my_count, empty);
        }
    }

    score
}
