//! Row sizing.
//!
//! A cell's required height is one line (single-line) or its wrapped line
//! count (multi-line) times its line height, plus vertical padding. Multi-line
//! cells wrap to the inner width of their resolved column, the same width
//! the renderer wraps to.

use super::{CellType, RowPolicy, Table};
use crate::canvas::Measure;
use crate::error::TableError;
use crate::style::FontWeight;

/// Slack for comparing a fixed row height against its content.
const HEIGHT_TOLERANCE: f64 = 1e-9;

/// Wrapped lines of cell `(i, j)` at its inner width.
pub fn wrapped_lines<M: Measure + ?Sized>(
    table: &Table,
    measure: &M,
    i: usize,
    j: usize,
    column_width: f64,
    base: FontWeight,
) -> Vec<String> {
    let inner = (column_width - table.cell_paddings[i][j].horizontal()).max(0.0);
    measure.split_text(&table.cells[i][j], inner, table.cell_weight(i, j, base))
}

pub fn cell_height<M: Measure + ?Sized>(
    table: &Table,
    measure: &M,
    i: usize,
    j: usize,
    column_width: f64,
    base: FontWeight,
) -> f64 {
    let line_height = table.line_height(measure.font_height(), i, j);
    let padding = table.cell_paddings[i][j].vertical();
    match table.cell_types[i][j] {
        CellType::SingleLine => line_height + padding,
        CellType::MultiLine => {
            let lines = wrapped_lines(table, measure, i, j, column_width, base).len();
            lines as f64 * line_height + padding
        }
    }
}

/// Content-required height of every row, regardless of row policy.
pub fn required_heights<M: Measure + ?Sized>(
    table: &Table,
    measure: &M,
    widths: &[f64],
    base: FontWeight,
) -> Vec<f64> {
    (0..table.rows)
        .map(|i| {
            (0..table.cols)
                .map(|j| cell_height(table, measure, i, j, widths[j], base))
                .fold(0.0, f64::max)
        })
        .collect()
}

/// A `Fixed` row must be able to hold its own content.
pub fn validate(table: &Table, required: &[f64]) -> Result<(), TableError> {
    for (i, policy) in table.row_policies.iter().enumerate() {
        if let RowPolicy::Fixed(height) = *policy {
            if required[i] > height + HEIGHT_TOLERANCE {
                return Err(TableError::RowTooShort {
                    row: i + 1,
                    required: required[i],
                    height,
                });
            }
        }
    }
    Ok(())
}

pub fn resolve(table: &Table, required: &[f64]) -> Vec<f64> {
    table
        .row_policies
        .iter()
        .zip(required)
        .map(|(policy, req)| match policy {
            RowPolicy::Fixed(h) => *h,
            RowPolicy::Calculated => *req,
        })
        .collect()
}
