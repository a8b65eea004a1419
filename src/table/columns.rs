//! Column sizing.
//!
//! Widths are resolved in tiers: `Fixed` columns take their configured
//! width, `Calculated` columns measure their widest single-line cell, and
//! `Dynamic` columns split whatever print width the first two tiers and the
//! column gaps leave over. When nothing is left, `Dynamic` columns get 0.

use super::{CellType, ColumnPolicy, Table};
use crate::canvas::Measure;
use crate::error::TableError;
use crate::style::FontWeight;

/// Slack allowed when comparing the table width against the print width.
/// Dynamic shares are computed by division and may sum to a hair above it.
pub const WIDTH_TOLERANCE: f64 = 1e-9;

/// Every `Calculated` column needs at least one single-line cell to measure.
pub fn validate(table: &Table) -> Result<(), TableError> {
    for (j, policy) in table.column_policies.iter().enumerate() {
        if *policy != ColumnPolicy::Calculated {
            continue;
        }
        let measurable = table
            .cell_types
            .iter()
            .any(|row| row[j] == CellType::SingleLine);
        if !measurable {
            return Err(TableError::UnmeasurableColumn { column: j + 1 });
        }
    }
    Ok(())
}

/// Widest single-line cell of column `j`, padding included. Multi-line
/// cells are ignored.
pub fn measure_column<M: Measure + ?Sized>(
    table: &Table,
    measure: &M,
    j: usize,
    base: FontWeight,
) -> f64 {
    (0..table.rows)
        .filter(|&i| table.cell_types[i][j] == CellType::SingleLine)
        .map(|i| {
            let weight = table.cell_weight(i, j, base);
            measure.string_width(&table.cells[i][j], weight) + table.cell_paddings[i][j].horizontal()
        })
        .fold(0.0, f64::max)
}

/// Resolves column widths against `print_width`. Returns the widths and the
/// total table width including gaps.
pub fn resolve<M: Measure + ?Sized>(
    table: &Table,
    measure: &M,
    print_width: f64,
    base: FontWeight,
) -> (Vec<f64>, f64) {
    let mut widths = vec![0.0; table.cols];
    let mut table_width = 0.0;
    let mut dynamic = 0usize;

    for (j, policy) in table.column_policies.iter().enumerate() {
        match policy {
            ColumnPolicy::Fixed(w) => {
                widths[j] = *w;
                table_width += w;
            }
            ColumnPolicy::Calculated => {
                widths[j] = measure_column(table, measure, j, base);
                table_width += widths[j];
            }
            ColumnPolicy::Dynamic => dynamic += 1,
        }
    }

    table_width += table.column_gaps.iter().sum::<f64>();

    let remaining = print_width - table_width;
    let share = if dynamic > 0 && remaining > 0.0 {
        remaining / dynamic as f64
    } else {
        0.0
    };
    for (j, policy) in table.column_policies.iter().enumerate() {
        if *policy == ColumnPolicy::Dynamic {
            widths[j] = share;
            table_width += share;
        }
    }

    (widths, table_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Edges;
    use crate::table::testing::{table, FixedMeasure};

    #[test]
    fn test_all_dynamic_share_equally() {
        let t = table(vec![vec!["a", "b", "c", "d"]]);
        let (widths, total) = resolve(&t, &FixedMeasure, 190.0, FontWeight::Regular);
        for w in &widths {
            assert!((w - 47.5).abs() < 1e-9);
        }
        assert!((total - 190.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_and_dynamic() {
        let mut t = table(vec![vec!["a", "b", "c", "d"]]);
        t.set_column_policies(vec![
            ColumnPolicy::Fixed(10.0),
            ColumnPolicy::Dynamic,
            ColumnPolicy::Dynamic,
            ColumnPolicy::Dynamic,
        ])
        .unwrap();
        let (widths, _) = resolve(&t, &FixedMeasure, 190.0, FontWeight::Regular);
        assert_eq!(widths[0], 10.0);
        for w in &widths[1..] {
            assert!((w - 60.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_calculated_ignores_multiline_cells() {
        let forty = "w".repeat(40);
        let hundred = "x".repeat(100);
        let mut t = table(vec![
            vec!["short", "a"],
            vec![forty.as_str(), "b"],
            vec![hundred.as_str(), "c"],
        ]);
        t.set_column_policies(vec![ColumnPolicy::Calculated, ColumnPolicy::Dynamic])
            .unwrap();
        t.set_cell_type(2, 0, CellType::MultiLine).unwrap();
        t.set_cell_padding(0, 0, Edges::new(0.0, 1.0, 0.0, 1.0)).unwrap();
        t.set_cell_padding(1, 0, Edges::new(0.0, 1.0, 0.0, 1.0)).unwrap();

        let (widths, _) = resolve(&t, &FixedMeasure, 190.0, FontWeight::Regular);
        assert_eq!(widths[0], 42.0);
        assert_eq!(widths[1], 148.0);

        // Measuring twice gives the same answer.
        let (again, _) = resolve(&t, &FixedMeasure, 190.0, FontWeight::Regular);
        assert_eq!(widths, again);
    }

    #[test]
    fn test_bold_style_is_measured_bold() {
        let mut t = table(vec![vec!["abc"]]);
        t.set_all_column_policies(ColumnPolicy::Calculated);
        t.set_cell_style(0, 0, Some(crate::style::CellStyle::Strong)).unwrap();
        let (widths, _) = resolve(&t, &FixedMeasure, 190.0, FontWeight::Regular);
        assert_eq!(widths[0], 6.0);
    }

    #[test]
    fn test_gaps_reduce_dynamic_share() {
        let mut t = table(vec![vec!["a", "b", "c"]]);
        t.set_column_gaps(vec![5.0, 5.0]).unwrap();
        let (widths, total) = resolve(&t, &FixedMeasure, 100.0, FontWeight::Regular);
        assert!((widths[0] - 30.0).abs() < 1e-9);
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_dynamic_gets_zero_when_no_space_left() {
        let mut t = table(vec![vec!["a", "b"]]);
        t.set_column_policies(vec![ColumnPolicy::Fixed(120.0), ColumnPolicy::Dynamic])
            .unwrap();
        let (widths, total) = resolve(&t, &FixedMeasure, 100.0, FontWeight::Regular);
        assert_eq!(widths[1], 0.0);
        assert_eq!(total, 120.0);
    }

    #[test]
    fn test_unmeasurable_column() {
        let mut t = table(vec![vec!["a", "b"], vec!["c", "d"]]);
        t.set_all_column_policies(ColumnPolicy::Calculated);
        t.set_cell_types_per_column(&[CellType::SingleLine, CellType::MultiLine])
            .unwrap();
        assert_eq!(
            validate(&t).unwrap_err(),
            TableError::UnmeasurableColumn { column: 2 }
        );
    }
}
