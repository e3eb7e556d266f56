//! Board rendering for the Gomoku GUI

use crate::{Board, Player, Pos, Stone};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Lines per side of the last board drawn
    lines: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
            lines: crate::BOARD_SIZE,
        }
    }
}

/// Star points for a board of `size` lines: the centre plus, on larger
/// boards, the four points three lines in from each corner.
fn star_points(size: usize) -> Vec<(u8, u8)> {
    let mid = (size / 2) as u8;
    if size < 9 {
        return vec![(mid, mid)];
    }
    let near = 3u8;
    let far = (size - 4) as u8;
    vec![(near, near), (near, far), (mid, mid), (far, near), (far, far)]
}

impl BoardView {
    /// Render the board and return click position if any.
    ///
    /// Clicks are only reported when `interactive` is set, and only on
    /// empty cells.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 5]>,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        self.lines = board.size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 10.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (self.lines as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked_pos = None;

        if interactive {
            if let (Some(pointer_pos), Some(turn)) = (response.hover_pos(), board.turn()) {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if board.get(board_pos) == Stone::Empty {
                        self.draw_hover_preview(&painter, board_pos, turn);

                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (self.lines as f32 - 1.0) * self.cell_size;

        for i in 0..self.lines {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in star_points(self.lines) {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        for (pos, player) in board.stones() {
            let center = self.board_to_screen(pos);
            match player {
                Player::Black => {
                    painter.circle_filled(center, radius, BLACK_STONE);
                }
                Player::White => {
                    // Outline keeps white stones visible on the light board
                    painter.circle_filled(center, radius, WHITE_STONE);
                    painter.circle_stroke(center, radius, Stroke::new(1.0, WHITE_STONE_OUTLINE));
                }
            }
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_preview(turn));
    }

    /// Convert screen coordinates to board position (nearest intersection)
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;
        let n = self.lines as i32;

        if col >= 0 && col < n && row >= 0 && row < n {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at_origin(lines: usize, cell_size: f32) -> BoardView {
        BoardView {
            cell_size,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(600.0)),
            lines,
        }
    }

    #[test]
    fn test_screen_board_roundtrip_center() {
        let view = view_at_origin(15, 40.0);
        let pos = Pos::new(7, 3);
        let screen = view.board_to_screen(pos);
        assert_eq!(view.screen_to_board(screen), Some(pos));
        // Slightly off the intersection still snaps to it
        assert_eq!(view.screen_to_board(screen + Vec2::new(12.0, -12.0)), Some(pos));
    }

    #[test]
    fn test_screen_outside_board() {
        let view = view_at_origin(15, 40.0);
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(1000.0, 50.0)), None);
    }

    #[test]
    fn test_star_points() {
        assert_eq!(
            star_points(15),
            vec![(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)]
        );
        assert_eq!(star_points(7), vec![(3, 3)]);
    }
}
