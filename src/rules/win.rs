//! Win condition checking
//!
//! A player wins by making five or more stones in a row along any axis.
//! Overlines count. Only lines through the last stone are examined, since
//! a new five can only appear through the stone just placed.

use crate::board::{Board, Player, Pos, Stone, DIRECTIONS};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Count `player` stones contiguous to `pos` along `(dr, dc)`, excluding `pos`.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> usize {
    let stone = Stone::from(player);
    let mut count = 0;
    let mut dist = 1;
    loop {
        let (r, c) = pos.offset(dr, dc, dist);
        if board.get_checked(r, c) != Some(stone) {
            return count;
        }
        count += 1;
        dist += 1;
    }
}

/// Check whether the stone `player` just placed at `pos` completes a five.
///
/// For each of the 4 axes the run is 1 (the placed stone) plus the stones
/// reached walking forward and backward.
#[must_use]
pub fn check_win(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, player) + run_length(board, pos, -dr, -dc, player)
            >= WIN_LENGTH
    })
}

/// Find the winning line through `pos`, if any.
///
/// Returns the first five stones of the run in board order (an overline is
/// truncated to its first five).
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<[Pos; WIN_LENGTH]> {
    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, player) as i32;
        let forward = run_length(board, pos, dr, dc, player) as i32;

        if (1 + back + forward) as usize >= WIN_LENGTH {
            let mut line = [pos; WIN_LENGTH];
            for (i, slot) in line.iter_mut().enumerate() {
                let (r, c) = pos.offset(dr, dc, i as i32 - back);
                *slot = Pos::new(r as u8, c as u8);
            }
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::full_board_without_five;

    /// Write stones directly, in any colour order.
    fn board_with(stones: &[(u8, u8, Player)]) -> Board {
        let mut board = Board::new();
        for &(r, c, player) in stones {
            board.set_stone(Pos::new(r, c), player);
        }
        board
    }

    fn rotate(pos: Pos, size: usize) -> Pos {
        let n = size as u8 - 1;
        Pos::new(n - pos.row, n - pos.col)
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let stones: Vec<_> = (0..5).map(|i| (9, i, Player::Black)).collect();
        let board = board_with(&stones);
        assert!(check_win(&board, Pos::new(9, 4), Player::Black));
        assert!(check_win(&board, Pos::new(9, 2), Player::Black));
        assert!(!check_win(&board, Pos::new(9, 2), Player::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let stones: Vec<_> = (0..5).map(|i| (i, 9, Player::White)).collect();
        let board = board_with(&stones);
        assert!(check_win(&board, Pos::new(0, 9), Player::White));
    }

    #[test]
    fn test_five_in_row_diagonal_sw() {
        let stones: Vec<_> = (0..5).map(|i| (4 + i, 8 - i, Player::White)).collect();
        let board = board_with(&stones);
        assert!(check_win(&board, Pos::new(6, 6), Player::White));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let stones: Vec<_> = (0..4).map(|i| (9, i, Player::Black)).collect();
        let board = board_with(&stones);
        assert!(!check_win(&board, Pos::new(9, 3), Player::Black));
    }

    #[test]
    fn test_broken_run_not_win() {
        let mut stones: Vec<_> = [0, 1, 3, 4].iter().map(|&i| (9, i, Player::Black)).collect();
        stones.push((9, 2, Player::White));
        let board = board_with(&stones);
        assert!(!check_win(&board, Pos::new(9, 4), Player::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for (i, filler) in [0, 1, 2, 4, 5].into_iter().zip(0u8..) {
            board.place(Pos::new(3, i), Player::Black).unwrap();
            board.place(Pos::new(12, 2 * filler), Player::White).unwrap();
        }
        board.place(Pos::new(3, 3), Player::Black).unwrap();
        assert!(check_win(&board, Pos::new(3, 3), Player::Black));
        assert_eq!(board.winner(), Some(Player::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let stones: Vec<_> = (0..5).map(|i| (10 + i, 10 + i, Player::Black)).collect();
        let board = board_with(&stones);
        assert!(check_win(&board, Pos::new(14, 14), Player::Black));
    }

    #[test]
    fn test_diagonal_with_fillers_wins() {
        let mut board = Board::new();
        for i in 0..5u8 {
            board.place(Pos::new(i, i), Player::Black).unwrap();
            if i < 4 {
                board.place(Pos::new(i, 10 + i), Player::White).unwrap();
            }
        }
        assert!(check_win(&board, Pos::new(4, 4), Player::Black));
        assert_eq!(board.winner(), Some(Player::Black));
    }

    #[test]
    fn test_symmetric_under_rotation_and_relabel() {
        let layouts: [&[(u8, u8)]; 3] = [
            &[(2, 3), (3, 4), (4, 5), (5, 6), (6, 7)],
            &[(0, 10), (1, 10), (2, 10), (3, 10)],
            &[(14, 0), (13, 1), (12, 2), (11, 3), (10, 4)],
        ];

        for cells in layouts {
            let last = Pos::new(cells[0].0, cells[0].1);
            let base: Vec<_> = cells.iter().map(|&(r, c)| (r, c, Player::Black)).collect();
            let rotated: Vec<_> = cells
                .iter()
                .map(|&(r, c)| {
                    let p = rotate(Pos::new(r, c), 15);
                    (p.row, p.col, Player::Black)
                })
                .collect();
            let relabelled: Vec<_> = cells.iter().map(|&(r, c)| (r, c, Player::White)).collect();

            let expected = check_win(&board_with(&base), last, Player::Black);
            assert_eq!(
                check_win(&board_with(&rotated), rotate(last, 15), Player::Black),
                expected
            );
            assert_eq!(
                check_win(&board_with(&relabelled), last, Player::White),
                expected
            );
        }
    }

    #[test]
    fn test_winning_line_positions() {
        let mut board = Board::new();
        for i in [3, 4, 6, 7, 5] {
            board.set_stone(Pos::new(i, 2), Player::White);
        }

        let line = winning_line(&board, Pos::new(5, 2), Player::White).unwrap();
        let expected: Vec<_> = (3..8).map(|r| Pos::new(r, 2)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn test_no_winning_line() {
        let board = board_with(&[(7, 7, Player::Black), (7, 8, Player::Black)]);
        assert_eq!(winning_line(&board, Pos::new(7, 7), Player::Black), None);
    }

    #[test]
    fn test_full_board_has_no_five() {
        let board = full_board_without_five(15);
        for (pos, player) in board.stones() {
            assert!(!check_win(&board, pos, player));
        }
    }
}
