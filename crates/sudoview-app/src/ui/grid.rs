use std::sync::Arc;

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use sudoview_core::Position;
use sudoview_game::Board;

const GRID_CELLS: f32 = 9.0;
const THIN_LINE_WIDTH: f32 = 2.0;
const THICK_LINE_WIDTH: f32 = 5.0;

/// Draws the board and returns the cell a click landed on, if any.
pub(crate) fn show(ui: &mut Ui, board: &Board, selected: Option<Position>) -> Option<Position> {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let line_color = visuals.widgets.inactive.fg_stroke.color;
    let given_text_color = visuals.strong_text_color();
    let filled_text_color = visuals.text_color();
    let selected_bg_color = visuals.selection.bg_fill;
    let bg_color = visuals.text_edit_bg_color();

    let side = ui.available_size().min_elem();
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click());
    let cell_size = (side - 2.0 * THICK_LINE_WIDTH) / GRID_CELLS;
    let grid_rect = Rect::from_min_size(
        rect.min + Vec2::splat(THICK_LINE_WIDTH),
        Vec2::splat(cell_size * GRID_CELLS),
    );

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, bg_color);

    for pos in Position::ALL {
        let cell_rect = cell_rect(grid_rect, cell_size, pos);
        if selected == Some(pos) {
            painter.rect_filled(cell_rect, 0.0, selected_bg_color);
        }
        let cell = board.cell(pos);
        if let Some(digit) = cell.as_digit() {
            let color = if cell.is_given() {
                given_text_color
            } else {
                filled_text_color
            };
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                digit.as_str(),
                FontId::proportional(cell_size * 0.55),
                color,
            );
        }
    }
    draw_lines(painter, grid_rect, cell_size, line_color);

    if response.clicked()
        && let Some(pointer) = response.interact_pointer_pos()
    {
        return cell_at(grid_rect, cell_size, pointer);
    }
    None
}

fn cell_rect(grid_rect: Rect, cell_size: f32, pos: Position) -> Rect {
    let min = grid_rect.min
        + Vec2::new(
            f32::from(pos.x()) * cell_size,
            f32::from(pos.y()) * cell_size,
        );
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

fn draw_lines(painter: &Painter, grid_rect: Rect, cell_size: f32, color: Color32) {
    let thin = Stroke::new(THIN_LINE_WIDTH, color);
    let thick = Stroke::new(THICK_LINE_WIDTH, color);

    for i in 1..9u8 {
        let stroke = if i % 3 == 0 { thick } else { thin };
        let offset = cell_size * f32::from(i);
        painter.line_segment(
            [
                Pos2::new(grid_rect.left() + offset, grid_rect.top()),
                Pos2::new(grid_rect.left() + offset, grid_rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                Pos2::new(grid_rect.left(), grid_rect.top() + offset),
                Pos2::new(grid_rect.right(), grid_rect.top() + offset),
            ],
            stroke,
        );
    }
    painter.rect_stroke(grid_rect, 0.0, thick, StrokeKind::Outside);
}

/// Maps a pointer position to the cell under it.
///
/// Pointers outside `grid_rect` are rejected, and the computed coordinates
/// are re-validated, so a click near the window edge can never index out of
/// the board.
pub(crate) fn cell_at(grid_rect: Rect, cell_size: f32, pointer: Pos2) -> Option<Position> {
    if !grid_rect.contains(pointer) {
        return None;
    }
    let dx = pointer.x - grid_rect.left();
    let dy = pointer.y - grid_rect.top();
    if dx < 0.0 || dy < 0.0 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "bounded by the rect check above"
    )]
    let (x, y) = ((dx / cell_size) as u8, (dy / cell_size) as u8);
    Position::try_new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f32 = 68.0;

    fn grid() -> Rect {
        Rect::from_min_size(Pos2::new(15.0, 15.0), Vec2::splat(CELL * 9.0))
    }

    #[test]
    fn test_cell_at_maps_by_cell_size() {
        assert_eq!(
            cell_at(grid(), CELL, Pos2::new(49.0, 49.0)),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            cell_at(grid(), CELL, Pos2::new(115.0, 49.0)),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            cell_at(grid(), CELL, Pos2::new(16.0, 626.0)),
            Some(Position::new(0, 8))
        );
        assert_eq!(
            cell_at(grid(), CELL, Pos2::new(626.0, 626.0)),
            Some(Position::new(8, 8))
        );
    }

    #[test]
    fn test_cell_at_lands_on_exact_boundaries() {
        // A pointer exactly on an internal line belongs to the cell it opens.
        assert_eq!(
            cell_at(grid(), CELL, Pos2::new(15.0 + CELL * 2.0, 15.0)),
            Some(Position::new(2, 0))
        );
    }

    #[test]
    fn test_cell_at_rejects_out_of_grid_pointers() {
        assert_eq!(cell_at(grid(), CELL, Pos2::new(0.0, 49.0)), None);
        assert_eq!(cell_at(grid(), CELL, Pos2::new(49.0, 0.0)), None);
        assert_eq!(cell_at(grid(), CELL, Pos2::new(700.0, 49.0)), None);
        assert_eq!(cell_at(grid(), CELL, Pos2::new(49.0, 700.0)), None);
        assert_eq!(cell_at(grid(), CELL, Pos2::new(-5.0, -5.0)), None);
    }

    #[test]
    fn test_cell_rect_tiles_the_grid() {
        let rect = cell_rect(grid(), CELL, Position::new(0, 0));
        assert_eq!(rect.min, Pos2::new(15.0, 15.0));

        let rect = cell_rect(grid(), CELL, Position::new(8, 8));
        assert_eq!(rect.min, Pos2::new(15.0 + CELL * 8.0, 15.0 + CELL * 8.0));
        assert_eq!(rect.max, Pos2::new(15.0 + CELL * 9.0, 15.0 + CELL * 9.0));
    }
}
