//! Cell rendering.

use super::{rows, CellType, Table};
use crate::canvas::Canvas;
use crate::text::truncate_with_ellipsis;

/// Draws cell `(i, j)` in a `width × height` box at the cursor and leaves
/// the cursor at the top-left of the next column.
///
/// The cell's style is applied before the background is drawn and the
/// previous graphics state is restored afterwards.
pub fn render_cell<C: Canvas + ?Sized>(
    table: &Table,
    canvas: &mut C,
    i: usize,
    j: usize,
    width: f64,
    height: f64,
) {
    let saved = canvas.graphics_state();
    let (x, y) = canvas.cursor();

    let style = table.cell_styles[i][j];
    if let Some(style) = style {
        style.apply(canvas);
    }
    let border = table.cell_borders[i][j];
    let fill = style.is_some_and(|s| s.fills());
    if border || style.is_some() {
        canvas.draw_rect(x, y, width, height, border, fill);
    }

    let padding = table.cell_paddings[i][j];
    let inner_width = (width - padding.horizontal()).max(0.0);
    let inner_height = (height - padding.vertical()).max(0.0);
    let align = table.cell_aligns[i][j];
    let text = &table.cells[i][j];
    let weight = canvas.graphics_state().weight;

    canvas.set_cursor(x + padding.left, y + padding.top);
    match table.cell_types[i][j] {
        CellType::SingleLine => {
            let shown = truncate_with_ellipsis(text, inner_width, |c| canvas.char_width(c, weight));
            if shown.is_empty() && !text.is_empty() {
                log::warn!(
                    "cell ({}, {}) is too narrow ({:.3}) to show any of {:?}",
                    i + 1,
                    j + 1,
                    inner_width,
                    text
                );
            }
            canvas.draw_text(&shown, inner_width, inner_height, align);
        }
        CellType::MultiLine => {
            let lines = rows::wrapped_lines(table, &*canvas, i, j, width, saved.weight);
            let line_height = table.line_height(canvas.font_height(), i, j);
            canvas.draw_text_block(&lines, inner_width, line_height, align.horizontal());
        }
    }

    canvas.set_graphics_state(saved);
    canvas.set_cursor(x + width, y);
}

/// Draws every cell of row `i`, separated by the column gaps, starting at
/// the cursor. The cursor ends at `origin_x`, below the row.
pub fn render_row<C: Canvas + ?Sized>(
    table: &Table,
    canvas: &mut C,
    i: usize,
    origin_x: f64,
    widths: &[f64],
    height: f64,
) {
    let (_, y) = canvas.cursor();
    canvas.set_cursor(origin_x, y);
    for (j, &width) in widths.iter().enumerate() {
        if j > 0 {
            let (cx, cy) = canvas.cursor();
            canvas.set_cursor(cx + table.column_gaps[j - 1], cy);
        }
        render_cell(table, canvas, i, j, width, height);
    }
    canvas.set_cursor(origin_x, y + height);
}
