//! # Page Break Decisions
//!
//! Tables break between rows, never inside one. Before each row is drawn
//! its resolved height is compared with the space left on the page; if it
//! does not fit, a new page is started first and, when the table repeats
//! its header, row 0 is drawn again at the top of that page. The header is
//! left off a page when it and the row would not both fit there.

use super::{cell, HeaderPolicy, Table};
use crate::canvas::Canvas;

const FIT_TOLERANCE: f64 = 1e-9;

/// What to do with the next row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPlacement {
    /// Draw the row on the current page.
    Place,
    /// Start a new page first, optionally repeating the header row there.
    BreakBefore { repeat_header: bool },
}

/// Decides where row `row` of height `height` goes.
///
/// A row that does not fit even at the top of a page is placed anyway:
/// breaking would only produce an empty page and the row would still
/// overflow the next one.
pub fn decide_row(
    row: usize,
    height: f64,
    remaining: f64,
    at_page_top: bool,
    header: HeaderPolicy,
) -> RowPlacement {
    if height <= remaining + FIT_TOLERANCE || at_page_top {
        return RowPlacement::Place;
    }
    RowPlacement::BreakBefore {
        repeat_header: header == HeaderPolicy::FirstRowRepeats && row > 0,
    }
}

/// Whether a repeated header and the row after it both fit in `remaining`.
pub fn header_fits(header_height: f64, row_height: f64, remaining: f64) -> bool {
    header_height + row_height <= remaining + FIT_TOLERANCE
}

/// Draws every row of a sized table, starting at the canvas cursor.
///
/// All rows share the cursor's x at entry as their left edge, on every page.
pub fn paginate<C: Canvas + ?Sized>(table: &Table, canvas: &mut C) {
    let (origin_x, _) = canvas.cursor();
    let widths = table.column_widths();
    let heights = table.row_heights();

    for (i, &height) in heights.iter().enumerate() {
        if i > 0 {
            let gap = table.row_gaps[i - 1];
            if gap != 0.0 {
                let (x, y) = canvas.cursor();
                canvas.set_cursor(x, y + gap);
            }
        }

        let remaining = canvas.remaining_print_height();
        let at_page_top = remaining >= canvas.print_height() - FIT_TOLERANCE;
        match decide_row(i, height, remaining, at_page_top, table.header) {
            RowPlacement::Place => {
                if height > remaining + FIT_TOLERANCE {
                    log::warn!(
                        "row {} is {:.3} high but a page only holds {:.3}; it will overflow",
                        i + 1,
                        height,
                        remaining
                    );
                }
            }
            RowPlacement::BreakBefore { repeat_header } => {
                log::debug!(
                    "row {} ({:.3}) does not fit in {:.3}: page break",
                    i + 1,
                    height,
                    remaining
                );
                canvas.page_break();
                let fresh = canvas.remaining_print_height();
                if repeat_header {
                    if header_fits(heights[0], height, fresh) {
                        cell::render_row(table, canvas, 0, origin_x, widths, heights[0]);
                    } else {
                        log::debug!(
                            "header ({:.3}) and row {} ({:.3}) do not fit in {:.3}: header skipped",
                            heights[0],
                            i + 1,
                            height,
                            fresh
                        );
                    }
                }
                if height > fresh + FIT_TOLERANCE {
                    log::warn!(
                        "row {} is {:.3} high but a page only holds {:.3}; it will overflow",
                        i + 1,
                        height,
                        fresh
                    );
                }
            }
        }

        cell::render_row(table, canvas, i, origin_x, widths, height);
    }
}
