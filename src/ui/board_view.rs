//! Board rendering for the Tic-Tac-Toe GUI

use crate::{Board, Mark, Pos};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        interactive: bool,
        help_position: Option<Pos>,
        win_run: Option<(Pos, Pos)>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y);
        self.cell_size = board_size / board.size() as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter, board.size());
        self.draw_marks(&painter, board);

        if let Some(pos) = help_position {
            self.draw_help_marker(&painter, pos);
        }

        if let Some((start, end)) = win_run {
            self.draw_win_line(&painter, start, end);
        }

        // Hover preview and click, only while the human may move
        let mut clicked_pos = None;
        if interactive {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos, board.size()) {
                    if board.is_empty(pos) {
                        self.draw_hover_preview(&painter, pos);
                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the interior grid lines
    fn draw_grid(&self, painter: &Painter, n: usize) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = n as f32 * self.cell_size;

        for i in 1..n {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..board.size() {
            for col in 0..board.size() {
                let pos = Pos::new(row, col);
                match board.get(pos) {
                    Mark::Cross => self.draw_cross(painter, pos),
                    Mark::Nought => self.draw_nought(painter, pos),
                    Mark::Empty => {}
                }
            }
        }
    }

    /// Draw a cross: two diagonal strokes inside the cell
    fn draw_cross(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        let off = self.cell_size / 3.0;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, CROSS_COLOR);

        painter.line_segment(
            [center + Vec2::new(-off, -off), center + Vec2::new(off, off)],
            stroke,
        );
        painter.line_segment(
            [center + Vec2::new(-off, off), center + Vec2::new(off, -off)],
            stroke,
        );
    }

    /// Draw a nought: a stroked circle inside the cell
    fn draw_nought(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        painter.circle_stroke(
            center,
            self.cell_size / 3.0,
            Stroke::new(MARK_STROKE_WIDTH, NOUGHT_COLOR),
        );
    }

    /// Draw the help suggestion marker
    fn draw_help_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        painter.circle_stroke(
            center,
            self.cell_size / 6.0,
            Stroke::new(4.0, HELP_MARKER),
        );
    }

    /// Draw the line through a horizontal winning run
    fn draw_win_line(&self, painter: &Painter, start: Pos, end: Pos) {
        let y = self.board_rect.min.y + (start.row as f32 + 0.5) * self.cell_size;
        let x0 = self.board_rect.min.x + start.col as f32 * self.cell_size;
        let x1 = self.board_rect.min.x + (end.col as f32 + 1.0) * self.cell_size;

        painter.line_segment(
            [Pos2::new(x0, y), Pos2::new(x1, y)],
            Stroke::new(WIN_LINE_WIDTH, WIN_LINE),
        );
    }

    /// Draw hover preview on an empty cell
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let center = self.cell_center(pos);
        let off = self.cell_size / 3.0;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, hover_preview());

        painter.line_segment(
            [center + Vec2::new(-off, -off), center + Vec2::new(off, off)],
            stroke,
        );
        painter.line_segment(
            [center + Vec2::new(-off, off), center + Vec2::new(off, -off)],
            stroke,
        );
    }

    /// Convert screen coordinates to a board position
    fn screen_to_board(&self, screen_pos: Pos2, n: usize) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if col >= 0 && col < n as i32 && row >= 0 && row < n as i32 {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    fn cell_center(&self, pos: Pos) -> Pos2 {
        Pos2::new(
            self.board_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size,
            self.board_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size,
        )
    }
}
