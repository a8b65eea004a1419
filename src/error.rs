//! Structured error types.
//!
//! `TableError` covers every way a table definition can be rejected. None of
//! them are retried: they describe a structurally invalid table and generation
//! stops at the first one. `InvoiceError` is what the invoice layer and the
//! public entry points return.

use thiserror::Error;

/// Errors raised while building, configuring or generating a table.
///
/// Row and column numbers in `DimensionMismatch`, `UnmeasurableColumn` and
/// `RowTooShort` are 1-based, matching how a caller counts rows in their data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// A row of the cell matrix has a different length than the first row.
    #[error("row {row} has mismatching columns: got: {got} should: {expected}")]
    DimensionMismatch {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// A per-column or per-row configuration array has the wrong length.
    #[error("{axis} count mismatch: got: {got} should: {expected}")]
    CountMismatch {
        axis: &'static str,
        got: usize,
        expected: usize,
    },

    /// A per-cell setter was given a row or column outside the table.
    /// `len` is the number of rows or columns the table has.
    #[error("invalid {axis} index: got: {index} should: {}", valid_range(.len))]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    /// A `Calculated` column has no single-line cell to measure.
    #[error("column {column} of type Calculated has only multi-line cells and cannot be calculated")]
    UnmeasurableColumn { column: usize },

    /// The resolved table is wider than the print area.
    #[error("error generating table: table wider than print width: {width} > {print_width}")]
    TableTooWide { width: f64, print_width: f64 },

    /// A `Fixed` row is too short for its own content.
    #[error("row {row} cannot display all cells; insufficient height: needs {required} has {height}")]
    RowTooShort {
        row: usize,
        required: f64,
        height: f64,
    },

    /// A cell type name that is not part of the closed cell type set.
    #[error("unsupported cell type: {0}")]
    UnsupportedCellType(String),
}

/// The unified error type returned by the invoice entry points.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// JSON input failed to parse as an invoice document or locale.
    #[error("failed to parse document: {source}{}", hint_suffix(.hint))]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// A table inside the invoice was rejected.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A sum was requested but one of the invoice rows lacks the value.
    #[error("invoice row {row}: {field} is not defined")]
    MissingValue { row: usize, field: &'static str },

    /// A date field is not in `YYYY-MM-DD` form.
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

fn valid_range(len: &usize) -> String {
    match *len {
        0 => "none, the table is empty".to_string(),
        n => format!("0-{}", n - 1),
    }
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for InvoiceError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the invoice schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input, is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        InvoiceError::Parse { source: e, hint }
    }
}
