//! # Table Layout
//!
//! A rectangular matrix of text cells rendered onto a [`Canvas`], with
//! per-column, per-row and per-cell sizing policies.
//!
//! ```text
//! Table::generate
//!   ├─ columns::validate      every Calculated column has a single-line cell
//!   ├─ columns::resolve       Fixed, then Calculated, then gaps, then Dynamic
//!   ├─ rows::validate         Fixed rows can hold their own content
//!   ├─ rows::resolve          heights from wrapped line counts
//!   └─ pagination::paginate   row by row, breaking pages before a row
//!        └─ cell::render_row
//! ```
//!
//! A row is never split across pages: whether it fits is decided before any
//! of it is drawn. With [`HeaderPolicy::FirstRowRepeats`] the first row is
//! drawn again at the top of every page the table continues on.
//!
//! All sizes are in the canvas unit. Derived state (column widths, row
//! heights, table width) is recomputed on every `generate` call.

pub mod cell;
pub mod columns;
pub mod pagination;
pub mod rows;

use crate::canvas::Canvas;
use crate::error::TableError;
use crate::model::Edges;
use crate::style::{Align, CellStyle, FontWeight};
use crate::text::sanitize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a column's width is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnPolicy {
    /// Exactly this width.
    Fixed(f64),
    /// Widest single-line cell plus its horizontal padding.
    Calculated,
    /// An equal share of whatever print width is left.
    #[default]
    Dynamic,
}

/// How a row's height is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowPolicy {
    /// Exactly this height; content that needs more is an error.
    Fixed(f64),
    /// Tallest cell of the row.
    #[default]
    Calculated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    /// One line, shortened with "..." when too wide.
    #[default]
    #[serde(rename = "single")]
    SingleLine,
    /// Wrapped to the column's inner width.
    #[serde(rename = "multi")]
    MultiLine,
}

impl FromStr for CellType {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(CellType::SingleLine),
            "multi" => Ok(CellType::MultiLine),
            other => Err(TableError::UnsupportedCellType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderPolicy {
    #[default]
    None,
    /// Row 0 is drawn again at the top of every continuation page.
    FirstRowRepeats,
}

/// Construction-time settings. Every field is the uniform default applied
/// to the whole table; per-index overrides go through the setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    pub header: HeaderPolicy,
    pub column_policy: ColumnPolicy,
    pub column_gap: f64,
    pub row_policy: RowPolicy,
    pub row_gap: f64,
    pub cell_type: CellType,
    pub align: Align,
    pub padding: Edges,
    /// Multiplier on the font height. Defaults to 1.2.
    pub line_height_factor: f64,
    /// Defaults to `true`.
    pub border: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            header: HeaderPolicy::None,
            column_policy: ColumnPolicy::Dynamic,
            column_gap: 0.0,
            row_policy: RowPolicy::Calculated,
            row_gap: 0.0,
            cell_type: CellType::SingleLine,
            align: Align::Left,
            padding: Edges::default(),
            line_height_factor: 1.2,
            border: true,
        }
    }
}

fn matrix<T: Clone>(rows: usize, cols: usize, val: T) -> Vec<Vec<T>> {
    vec![vec![val; cols]; rows]
}

/// A table of text cells.
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) cells: Vec<Vec<String>>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,

    pub(crate) header: HeaderPolicy,

    pub(crate) column_policies: Vec<ColumnPolicy>,
    /// Length `cols - 1`.
    pub(crate) column_gaps: Vec<f64>,

    pub(crate) row_policies: Vec<RowPolicy>,
    /// Length `rows - 1`.
    pub(crate) row_gaps: Vec<f64>,

    pub(crate) cell_types: Vec<Vec<CellType>>,
    pub(crate) cell_aligns: Vec<Vec<Align>>,
    pub(crate) cell_paddings: Vec<Vec<Edges>>,
    pub(crate) cell_line_height_factors: Vec<Vec<f64>>,
    pub(crate) cell_borders: Vec<Vec<bool>>,
    pub(crate) cell_styles: Vec<Vec<Option<CellStyle>>>,

    column_widths: Vec<f64>,
    row_heights: Vec<f64>,
    table_width: f64,
}

impl Table {
    /// Builds a table with default settings.
    pub fn new(cells: Vec<Vec<String>>) -> Result<Self, TableError> {
        Self::with_options(cells, TableOptions::default())
    }

    /// Builds a table, failing on the first row whose length differs from
    /// the first row's. Cell text is sanitised for the standard fonts.
    pub fn with_options(cells: Vec<Vec<String>>, options: TableOptions) -> Result<Self, TableError> {
        let cols = cells.first().map_or(0, Vec::len);
        if let Some((i, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(TableError::DimensionMismatch {
                row: i + 1,
                got: row.len(),
                expected: cols,
            });
        }
        let rows = cells.len();

        let cells = cells
            .into_iter()
            .map(|row| row.iter().map(|c| sanitize(c)).collect())
            .collect();

        Ok(Self {
            cells,
            rows,
            cols,
            header: options.header,
            column_policies: vec![options.column_policy; cols],
            column_gaps: vec![options.column_gap; cols.saturating_sub(1)],
            row_policies: vec![options.row_policy; rows],
            row_gaps: vec![options.row_gap; rows.saturating_sub(1)],
            cell_types: matrix(rows, cols, options.cell_type),
            cell_aligns: matrix(rows, cols, options.align),
            cell_paddings: matrix(rows, cols, options.padding),
            cell_line_height_factors: matrix(rows, cols, options.line_height_factor),
            cell_borders: matrix(rows, cols, options.border),
            cell_styles: matrix(rows, cols, None),
            column_widths: Vec::new(),
            row_heights: Vec::new(),
            table_width: 0.0,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&str> {
        self.cells.get(i).and_then(|r| r.get(j)).map(String::as_str)
    }

    /// Column widths resolved by the last `generate`.
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// Row heights resolved by the last `generate`.
    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// Sum of column widths and column gaps from the last `generate`.
    pub fn table_width(&self) -> f64 {
        self.table_width
    }

    /// Lays the table out and draws it at the canvas cursor.
    ///
    /// Fails before drawing anything when the definition is invalid. The
    /// cursor ends at the left edge of the table, below its last row.
    pub fn generate<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Result<(), TableError> {
        let base = canvas.graphics_state().weight;
        let print_width = canvas.print_width();

        columns::validate(self)?;
        let (widths, table_width) = columns::resolve(self, &*canvas, print_width, base);
        log::debug!(
            "table {}x{}: column widths {:?}, table width {:.3} of {:.3}",
            self.rows,
            self.cols,
            widths,
            table_width,
            print_width
        );
        if table_width > print_width + columns::WIDTH_TOLERANCE {
            return Err(TableError::TableTooWide {
                width: table_width,
                print_width,
            });
        }

        let required = rows::required_heights(self, &*canvas, &widths, base);
        rows::validate(self, &required)?;
        let heights = rows::resolve(self, &required);
        log::debug!("row heights {:?}", heights);

        self.column_widths = widths;
        self.row_heights = heights;
        self.table_width = table_width;

        pagination::paginate(self, canvas);
        Ok(())
    }

    /// Weight a cell is measured and drawn with.
    pub(crate) fn cell_weight(&self, i: usize, j: usize, base: FontWeight) -> FontWeight {
        self.cell_styles[i][j].map_or(base, |s| s.font_weight(base))
    }

    pub(crate) fn line_height(&self, font_height: f64, i: usize, j: usize) -> f64 {
        font_height * self.cell_line_height_factors[i][j]
    }

    // ── Validation helpers ────────────────────────────────────────

    fn check_len(axis: &'static str, got: usize, expected: usize) -> Result<(), TableError> {
        if got != expected {
            return Err(TableError::CountMismatch { axis, got, expected });
        }
        Ok(())
    }

    fn check_row(&self, i: usize) -> Result<(), TableError> {
        if i >= self.rows {
            return Err(TableError::IndexOutOfRange {
                axis: "row",
                index: i,
                len: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> Result<(), TableError> {
        if j >= self.cols {
            return Err(TableError::IndexOutOfRange {
                axis: "column",
                index: j,
                len: self.cols,
            });
        }
        Ok(())
    }

    fn check_indices(&self, i: usize, j: usize) -> Result<(), TableError> {
        self.check_row(i)?;
        self.check_col(j)
    }

    fn set_per_column<T: Copy>(
        target: &mut [Vec<T>],
        cols: usize,
        values: &[T],
    ) -> Result<(), TableError> {
        Self::check_len("column", values.len(), cols)?;
        for row in target.iter_mut() {
            row.copy_from_slice(values);
        }
        Ok(())
    }

    // ── Table and column setters ──────────────────────────────────

    pub fn set_header_policy(&mut self, header: HeaderPolicy) {
        self.header = header;
    }

    pub fn set_all_column_policies(&mut self, policy: ColumnPolicy) {
        self.column_policies = vec![policy; self.cols];
    }

    pub fn set_column_policies(&mut self, policies: Vec<ColumnPolicy>) -> Result<(), TableError> {
        Self::check_len("column", policies.len(), self.cols)?;
        self.column_policies = policies;
        Ok(())
    }

    pub fn set_all_column_gaps(&mut self, gap: f64) {
        self.column_gaps = vec![gap; self.cols.saturating_sub(1)];
    }

    /// Gaps between adjacent columns; `gaps[j]` sits between column `j` and
    /// `j + 1`.
    pub fn set_column_gaps(&mut self, gaps: Vec<f64>) -> Result<(), TableError> {
        Self::check_len("column gap", gaps.len(), self.cols.saturating_sub(1))?;
        self.column_gaps = gaps;
        Ok(())
    }

    // ── Row setters ───────────────────────────────────────────────

    pub fn set_all_row_policies(&mut self, policy: RowPolicy) {
        self.row_policies = vec![policy; self.rows];
    }

    pub fn set_row_policies(&mut self, policies: Vec<RowPolicy>) -> Result<(), TableError> {
        Self::check_len("row", policies.len(), self.rows)?;
        self.row_policies = policies;
        Ok(())
    }

    pub fn set_all_row_gaps(&mut self, gap: f64) {
        self.row_gaps = vec![gap; self.rows.saturating_sub(1)];
    }

    /// Gaps between adjacent rows; `gaps[i]` sits between row `i` and `i + 1`.
    pub fn set_row_gaps(&mut self, gaps: Vec<f64>) -> Result<(), TableError> {
        Self::check_len("row gap", gaps.len(), self.rows.saturating_sub(1))?;
        self.row_gaps = gaps;
        Ok(())
    }

    // ── Cell setters ──────────────────────────────────────────────

    /// Replaces the text of one cell.
    pub fn set_cell(&mut self, i: usize, j: usize, text: &str) -> Result<(), TableError> {
        self.check_indices(i, j)?;
        self.cells[i][j] = sanitize(text);
        Ok(())
    }

    pub fn set_cell_type(&mut self, i: usize, j: usize, cell_type: CellType) -> Result<(), TableError> {
        self.check_indices(i, j)?;
        self.cell_types[i][j] = cell_type;
        Ok(())
    }

    pub fn set_all_cell_types(&mut self, cell_type: CellType) {
        self.cell_types = matrix(self.rows, self.cols, cell_type);
    }

    pub fn set_cell_types_per_column(&mut self, types: &[CellType]) -> Result<(), TableError> {
        Self::set_per_column(&mut self.cell_types, self.cols, types)
    }

    pub fn set_cell_align(&mut self, i: usize, j: usize, align: Align) -> Result<(), TableError> {
        self.check_indices(i, j)?;
        self.cell_aligns[i][j] = align;
        Ok(())
    }

    pub fn set_all_cell_aligns(&mut self, align: Align) {
        self.cell_aligns = matrix(self.rows, self.cols, align);
    }

    pub fn set_cell_aligns_per_column(&mut self, aligns: &[Align]) -> Result<(), TableError> {
        Self::set_per_column(&mut self.cell_aligns, self.cols, aligns)
    }

    pub fn set_cell_padding(&mut self, i: usize, j: usize, padding: Edges) -> Result<(), TableError> {
        self.check_indices(i, j)?;
        self.cell_paddings[i][j] = padding;
        Ok(())
    }

    pub fn set_all_cell_paddings(&mut self, padding: Edges) {
        self.cell_paddings = matrix(self.rows, self.cols, padding);
    }

    /// Replaces the whole padding matrix.
    pub fn set_cell_paddings(&mut self, paddings: Vec<Vec<Edges>>) -> Result<(), TableError> {
        Self::check_len("row", paddings.len(), self.rows)?;
        for row in &paddings {
            Self::check_len("column", row.len(), self.cols)?;
        }
        self.cell_paddings = paddings;
        Ok(())
    }

    pub fn set_cell_paddings_per_column(&mut self, paddings: &[Edges]) -> Result<(), TableError> {
        Self::set_per_column(&mut self.cell_paddings, self.cols, paddings)
    }

    pub fn set_cell_line_height_factor(&mut self, i: usize, j: usize, factor: f64) -> Result<(), TableError> {
        self.check_indices(i, j)?;
        self.cell_line_height_factors[i][j] = factor;
        Ok(())
    }

    pub fn set_all_cell_line_height_factors(&mut self, factor: f64) {
        self.cell_line_height_factors = matrix(self.rows, self.cols, factor);
    }

    pub fn set_cell_border(&mut self, i: usize, j: usize, border: bool) -> Result<(), TableError> {
        self.check_indices(i, j)?;
        self.cell_borders[i][j] = border;
        Ok(())
    }

    pub fn set_all_cell_borders(&mut self, border: bool) {
        self.cell_borders = matrix(self.rows, self.cols, border);
    }

    pub fn set_cell_style(&mut self, i: usize, j: usize, style: Option<CellStyle>) -> Result<(), TableError> {
        self.check_indices(i, j)?;
        self.cell_styles[i][j] = style;
        Ok(())
    }

    pub fn set_all_cell_styles(&mut self, style: Option<CellStyle>) {
        self.cell_styles = matrix(self.rows, self.cols, style);
    }

    /// Applies `style` to every cell of row `i`.
    pub fn set_cell_styles_row(&mut self, i: usize, style: Option<CellStyle>) -> Result<(), TableError> {
        self.check_row(i)?;
        self.cell_styles[i] = vec![style; self.cols];
        Ok(())
    }

    pub fn set_cell_styles_per_row(&mut self, styles: &[Option<CellStyle>]) -> Result<(), TableError> {
        Self::check_len("row", styles.len(), self.rows)?;
        for (row, style) in self.cell_styles.iter_mut().zip(styles) {
            row.fill(*style);
        }
        Ok(())
    }

    pub fn set_cell_styles_per_column(&mut self, styles: &[Option<CellStyle>]) -> Result<(), TableError> {
        Self::set_per_column(&mut self.cell_styles, self.cols, styles)
    }

    /// `even` on rows 0, 2, 4, ..., `odd` on rows 1, 3, 5, ...
    pub fn set_cell_styles_alternate_rows(&mut self, even: Option<CellStyle>, odd: Option<CellStyle>) {
        for (i, row) in self.cell_styles.iter_mut().enumerate() {
            row.fill(if i % 2 == 0 { even } else { odd });
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Table;
    use crate::canvas::Measure;
    use crate::style::FontWeight;

    /// Every character is 1 wide, bold ones 2; the font is 5 high.
    pub(crate) struct FixedMeasure;

    impl Measure for FixedMeasure {
        fn char_width(&self, _ch: char, weight: FontWeight) -> f64 {
            match weight {
                FontWeight::Regular => 1.0,
                FontWeight::Bold => 2.0,
            }
        }

        fn font_height(&self) -> f64 {
            5.0
        }
    }

    pub(crate) fn table(cells: Vec<Vec<&str>>) -> Table {
        Table::new(
            cells
                .into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize) -> Vec<Vec<String>> {
        (0..rows)
            .map(|i| (0..cols).map(|j| format!("{}{}", i, j)).collect())
            .collect()
    }

    #[test]
    fn test_mismatched_rows_name_first_offender() {
        let cells = vec![
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec!["E".to_string(), "F".to_string(), "G".to_string(), "H".to_string()],
        ];
        let err = Table::new(cells).unwrap_err();
        assert_eq!(
            err,
            TableError::DimensionMismatch {
                row: 2,
                got: 4,
                expected: 3
            }
        );
    }

    #[test]
    fn test_defaults() {
        let t = Table::new(grid(3, 4)).unwrap();
        assert_eq!(t.column_policies, vec![ColumnPolicy::Dynamic; 4]);
        assert_eq!(t.column_gaps.len(), 3);
        assert_eq!(t.row_gaps.len(), 2);
        assert_eq!(t.cell_line_height_factors[2][3], 1.2);
        assert!(t.cell_borders[0][0]);
        assert_eq!(t.cell_aligns[1][1], Align::Left);
        assert_eq!(t.header, HeaderPolicy::None);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let t = Table::new(Vec::new()).unwrap();
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.column_count(), 0);
    }

    #[test]
    fn test_count_mismatch_leaves_state() {
        let mut t = Table::new(grid(2, 3)).unwrap();
        let err = t
            .set_column_policies(vec![ColumnPolicy::Calculated; 2])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "column count mismatch: got: 2 should: 3"
        );
        assert_eq!(t.column_policies, vec![ColumnPolicy::Dynamic; 3]);

        assert!(t.set_column_gaps(vec![1.0; 3]).is_err());
        assert!(t.set_column_gaps(vec![1.0; 2]).is_ok());
        assert!(t.set_row_gaps(vec![1.0; 2]).is_err());
        assert!(t.set_row_policies(vec![RowPolicy::Fixed(5.0); 2]).is_ok());
    }

    #[test]
    fn test_padding_matrix_checks_every_row() {
        let mut t = Table::new(grid(2, 2)).unwrap();
        let bad = vec![vec![Edges::uniform(1.0); 2], vec![Edges::uniform(1.0); 3]];
        assert!(t.set_cell_paddings(bad).is_err());
        assert_eq!(t.cell_paddings[0][0], Edges::default());
    }

    #[test]
    fn test_index_out_of_range() {
        let mut t = Table::new(grid(2, 3)).unwrap();
        assert_eq!(
            t.set_cell(2, 0, "x").unwrap_err(),
            TableError::IndexOutOfRange {
                axis: "row",
                index: 2,
                len: 2
            }
        );
        assert_eq!(
            t.set_cell_type(0, 3, CellType::MultiLine).unwrap_err().to_string(),
            "invalid column index: got: 3 should: 0-2"
        );

        let mut empty = Table::new(Vec::new()).unwrap();
        assert_eq!(
            empty.set_cell(0, 0, "x").unwrap_err().to_string(),
            "invalid row index: got: 0 should: none, the table is empty"
        );
        assert!(t.set_cell(1, 2, "ok").is_ok());
        assert_eq!(t.cell(1, 2), Some("ok"));
    }

    #[test]
    fn test_alternate_row_styles() {
        let mut t = Table::new(grid(4, 2)).unwrap();
        let even = Some(CellStyle::Strong);
        t.set_cell_styles_alternate_rows(even, None);
        assert_eq!(t.cell_styles[0][1], even);
        assert_eq!(t.cell_styles[1][0], None);
        assert_eq!(t.cell_styles[2][0], even);
    }

    #[test]
    fn test_cell_type_from_name() {
        assert_eq!("multi".parse::<CellType>(), Ok(CellType::MultiLine));
        assert_eq!(
            "double".parse::<CellType>(),
            Err(TableError::UnsupportedCellType("double".to_string()))
        );
    }

    #[test]
    fn test_options_from_json() {
        let options: TableOptions =
            serde_json::from_str(r#"{"header": "firstRowRepeats", "cellType": "multi", "border": false}"#)
                .unwrap();
        let t = Table::with_options(grid(2, 2), options).unwrap();
        assert_eq!(t.header, HeaderPolicy::FirstRowRepeats);
        assert_eq!(t.cell_types[1][1], CellType::MultiLine);
        assert!(!t.cell_borders[0][1]);
        assert_eq!(t.cell_line_height_factors[0][0], 1.2);
    }

    #[test]
    fn test_cells_are_sanitised() {
        let t = Table::new(vec![vec!["a\tb 漢".to_string()]]).unwrap();
        assert_eq!(t.cell(0, 0), Some("a b ?"));
    }
}
