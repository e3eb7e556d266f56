//! Candidate move generation
//!
//! Only empty cells touching an existing stone are worth evaluating. This
//! keeps the candidate set bounded by 8 per stone instead of the whole board.

use crate::board::{Board, Pos};

/// Ring of neighbours searched around every stone
pub const CANDIDATE_RADIUS: i32 = 1;

/// Generate the candidate moves for `board`.
///
/// Every empty, on-board neighbour of an occupied cell is included once.
/// The result is sorted row-major. A board with no stones yields only the
/// centre cell; a full board yields nothing.
#[must_use]
pub fn candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut moves = Vec::with_capacity(8 * board.stone_count());

    for (pos, _) in board.stones() {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (r, c) = pos.offset(dr, dc, 1);
                if !board.contains(r, c) {
                    continue;
                }

                #[allow(clippy::cast_sign_loss)]
                let idx = r as usize * size + c as usize;
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let new_pos = Pos::new(r as u8, c as u8);

                if board.is_empty(new_pos) {
                    moves.push(new_pos);
                }
            }
        }
    }

    moves.sort_unstable();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::full_board_without_five;
    use crate::board::Player;

    #[test]
    fn test_empty_board_gives_center() {
        assert_eq!(candidates(&Board::new()), vec![Pos::new(7, 7)]);
        assert_eq!(candidates(&Board::with_size(9).unwrap()), vec![Pos::new(4, 4)]);
        assert_eq!(candidates(&Board::with_size(19).unwrap()), vec![Pos::new(9, 9)]);
    }

    #[test]
    fn test_single_stone_has_eight_neighbours() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Player::Black).unwrap();

        let moves = candidates(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Pos::new(7, 7)));
        for pos in &moves {
            assert!(pos.row.abs_diff(7) <= 1 && pos.col.abs_diff(7) <= 1);
        }
    }

    #[test]
    fn test_corner_stone_clipped() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Player::Black).unwrap();

        assert_eq!(
            candidates(&board),
            vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
        );
    }

    #[test]
    fn test_shared_neighbours_deduplicated() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Player::Black).unwrap();
        board.place(Pos::new(7, 8), Player::White).unwrap();

        let moves = candidates(&board);
        // 3x4 block around the pair, minus the two stones
        assert_eq!(moves.len(), 10);

        let mut deduped = moves.clone();
        deduped.dedup();
        assert_eq!(deduped, moves);
    }

    #[test]
    fn test_candidates_are_sorted_and_empty() {
        let mut board = Board::new();
        for (pos, player) in [
            (Pos::new(3, 3), Player::Black),
            (Pos::new(10, 2), Player::White),
            (Pos::new(4, 4), Player::Black),
        ] {
            board.place(pos, player).unwrap();
        }

        let moves = candidates(&board);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert!(moves.iter().all(|&pos| board.is_empty(pos)));
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let board = full_board_without_five(15);
        assert!(candidates(&board).is_empty());
    }
}
