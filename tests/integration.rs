//! Integration tests for the table engine and the invoice pipeline.
//!
//! These tests drive a real `DocCanvas` end to end. They verify:
//! - Column sizing on the default A4 print area
//! - Row sizing and the cursor contract of `generate`
//! - Page breaks happen between rows, with the header repeated
//! - Invalid tables are rejected before anything is drawn
//! - JSON invoices render to structurally valid, multi-page PDFs

use pdf_invoice::canvas::{Canvas, DocCanvas, DrawOp};
use pdf_invoice::error::{InvoiceError, TableError};
use pdf_invoice::model::Edges;
use pdf_invoice::table::{CellType, ColumnPolicy, HeaderPolicy, RowPolicy, Table, TableOptions};
use pdf_invoice::text::{truncate_with_ellipsis, ELLIPSIS};

// ─── Helpers ────────────────────────────────────────────────────

fn cells(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn grid(rows: usize, cols: usize) -> Vec<Vec<String>> {
    (0..rows)
        .map(|i| (0..cols).map(|j| format!("r{}c{}", i, j)).collect())
        .collect()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "expected {} to be close to {}", b, a);
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// Vertical extent of every rectangle drawn on a page.
fn rect_extents(canvas: &DocCanvas, page: usize) -> Vec<(f64, f64)> {
    canvas.pages()[page]
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { y, h, .. } => Some((*y, *y + *h)),
            _ => None,
        })
        .collect()
}

// ─── Construction ───────────────────────────────────────────────

#[test]
fn test_unequal_rows_name_first_offender() {
    let err = Table::new(cells(&[&["A", "B", "C"], &["E", "F", "G", "H"]])).unwrap_err();
    assert_eq!(
        err,
        TableError::DimensionMismatch {
            row: 2,
            got: 4,
            expected: 3
        }
    );
    assert_eq!(err.to_string(), "row 2 has mismatching columns: got: 4 should: 3");
}

#[test]
fn test_empty_table_draws_nothing() {
    let mut canvas = DocCanvas::a4();
    let mut table = Table::new(Vec::new()).unwrap();
    table.generate(&mut canvas).unwrap();
    assert!(canvas.pages()[0].ops.is_empty());
    assert_eq!(canvas.cursor(), (10.0, 10.0));
}

// ─── Column sizing ──────────────────────────────────────────────

#[test]
fn test_dynamic_columns_share_print_width() {
    let mut canvas = DocCanvas::a4();
    let mut table = Table::new(grid(2, 4)).unwrap();
    table.generate(&mut canvas).unwrap();
    for &w in table.column_widths() {
        assert_close(w, 47.5);
    }
    assert_close(table.table_width(), 190.0);
}

#[test]
fn test_fixed_column_with_dynamic_rest() {
    let mut canvas = DocCanvas::a4();
    let mut table = Table::new(grid(2, 4)).unwrap();
    table
        .set_column_policies(vec![
            ColumnPolicy::Fixed(10.0),
            ColumnPolicy::Dynamic,
            ColumnPolicy::Dynamic,
            ColumnPolicy::Dynamic,
        ])
        .unwrap();
    table.generate(&mut canvas).unwrap();
    let widths = table.column_widths();
    assert_close(widths[0], 10.0);
    for &w in &widths[1..] {
        assert_close(w, 60.0);
    }
}

#[test]
fn test_calculated_width_is_stable_across_generates() {
    let mut table = Table::new(cells(&[&["Description", "x"], &["Longer description", "y"]])).unwrap();
    table.set_all_column_policies(ColumnPolicy::Calculated);

    let mut first = DocCanvas::a4();
    table.generate(&mut first).unwrap();
    let widths = table.column_widths().to_vec();

    let mut second = DocCanvas::a4();
    table.generate(&mut second).unwrap();
    assert_eq!(table.column_widths(), widths.as_slice());
}

#[test]
fn test_calculated_column_ignores_multi_line_cells() {
    let mut table = Table::new(cells(&[&["short"], &["a much much longer multi line cell"]])).unwrap();
    table.set_all_column_policies(ColumnPolicy::Calculated);
    table.set_cell_type(1, 0, CellType::MultiLine).unwrap();
    table.set_all_cell_paddings(Edges::symmetric(0.0, 2.0));

    let mut canvas = DocCanvas::a4();
    table.generate(&mut canvas).unwrap();
    let expected = pdf_invoice::canvas::Measure::string_width(
        &canvas,
        "short",
        pdf_invoice::style::FontWeight::Regular,
    ) + 4.0;
    assert_close(table.column_widths()[0], expected);
}

#[test]
fn test_table_too_wide_draws_nothing() {
    let mut canvas = DocCanvas::a4();
    let mut table = Table::new(grid(1, 2)).unwrap();
    table.set_all_column_policies(ColumnPolicy::Fixed(100.0));
    let err = table.generate(&mut canvas).unwrap_err();
    assert!(matches!(err, TableError::TableTooWide { .. }));
    assert!(canvas.pages()[0].ops.is_empty());
}

// ─── Ellipsis ───────────────────────────────────────────────────

#[test]
fn test_ellipsis_is_longest_fitting_prefix() {
    let width = |_: char| 1.0;
    let out = truncate_with_ellipsis("abcdefghij", 7.0, width);
    assert_eq!(out, "abcd...");
    assert!(out.ends_with(ELLIPSIS));
    assert!(out.chars().count() as f64 <= 7.0);
}

// ─── Rows ───────────────────────────────────────────────────────

#[test]
fn test_fixed_row_too_short() {
    let tall = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
    let mut table = Table::new(vec![
        vec!["a".to_string(), "b".to_string()],
        vec![tall, "c".to_string()],
    ])
    .unwrap();
    table.set_all_cell_types(CellType::MultiLine);
    table
        .set_row_policies(vec![RowPolicy::Calculated, RowPolicy::Fixed(15.0)])
        .unwrap();

    let mut canvas = DocCanvas::a4();
    let err = table.generate(&mut canvas).unwrap_err();
    match err {
        TableError::RowTooShort { row, height, .. } => {
            assert_eq!(row, 2);
            assert_close(height, 15.0);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_six_by_four_advances_cursor_by_rows_and_gaps() {
    let data: Vec<Vec<String>> = (0..6u8)
        .map(|i| (0..4u8).map(|j| char::from(b'a' + i * 4 + j).to_string()).collect())
        .collect();
    let mut table = Table::new(data).unwrap();
    table.set_all_row_gaps(1.5);

    let mut canvas = DocCanvas::a4();
    let (x0, y0) = canvas.cursor();
    table.generate(&mut canvas).unwrap();

    let rows: f64 = table.row_heights().iter().sum();
    let (x1, y1) = canvas.cursor();
    assert_close(x1, x0);
    assert_close(y1 - y0, rows + 5.0 * 1.5);
    assert_eq!(canvas.page_count(), 1);
}

// ─── Pagination ─────────────────────────────────────────────────

#[test]
fn test_header_repeats_and_rows_never_split() {
    let mut data = vec![vec!["Item".to_string(), "Price".to_string()]];
    data.extend((1..=120).map(|i| vec![format!("Item {}", i), format!("{}.00", i)]));
    let mut table = Table::with_options(
        data,
        TableOptions {
            header: HeaderPolicy::FirstRowRepeats,
            padding: Edges::uniform(1.0),
            ..TableOptions::default()
        },
    )
    .unwrap();

    let mut canvas = DocCanvas::a4();
    canvas.set_cursor(10.0, 200.0);
    table.generate(&mut canvas).unwrap();

    assert!(canvas.page_count() > 1);
    let bottom = canvas.print_bottom();
    for page in 0..canvas.page_count() {
        assert_eq!(
            canvas.pages()[page].find_text("Item").len(),
            1,
            "header on page {}",
            page + 1
        );
        for (top, end) in rect_extents(&canvas, page) {
            assert!(top >= 10.0 - 1e-9);
            assert!(end <= bottom + 1e-9, "row crosses the page bottom on page {}", page + 1);
        }
    }

    // Continuation pages start with the header at the top margin.
    let first = canvas.pages()[1].texts().next();
    assert_eq!(first, Some("Item"));
    for i in 1..=120 {
        let name = format!("Item {}", i);
        let pages = canvas.pages().iter().filter(|p| !p.find_text(&name).is_empty()).count();
        assert_eq!(pages, 1, "{} drawn on {} pages", name, pages);
    }
}

#[test]
fn test_tall_row_after_break_skips_header() {
    let mut table = Table::with_options(
        cells(&[&["Head"], &["tall 1"], &["tall 2"]]),
        TableOptions {
            header: HeaderPolicy::FirstRowRepeats,
            ..TableOptions::default()
        },
    )
    .unwrap();
    table
        .set_row_policies(vec![RowPolicy::Calculated, RowPolicy::Fixed(275.0), RowPolicy::Fixed(275.0)])
        .unwrap();

    let mut canvas = DocCanvas::a4();
    table.generate(&mut canvas).unwrap();

    // Header and a 275mm row never share a 277mm page.
    assert_eq!(canvas.page_count(), 3);
    assert_eq!(canvas.pages()[0].find_text("Head").len(), 1);
    assert!(canvas.pages()[0].find_text("tall 1").is_empty());
    for (page, name) in [(1, "tall 1"), (2, "tall 2")] {
        assert!(canvas.pages()[page].find_text("Head").is_empty());
        assert_eq!(canvas.pages()[page].find_text(name).len(), 1);
    }
    let bottom = canvas.print_bottom();
    for page in 0..canvas.page_count() {
        for (top, end) in rect_extents(&canvas, page) {
            assert!(top >= 10.0 - 1e-9);
            assert!(end <= bottom + 1e-9, "row crosses the page bottom on page {}", page + 1);
        }
    }
}

#[test]
fn test_without_header_policy_nothing_repeats() {
    let mut data = vec![vec!["Head".to_string()]];
    data.extend((1..=100).map(|i| vec![format!("row {}", i)]));
    let mut table = Table::new(data).unwrap();

    let mut canvas = DocCanvas::a4();
    table.generate(&mut canvas).unwrap();
    assert!(canvas.page_count() > 1);
    let heads: usize = canvas.pages().iter().map(|p| p.find_text("Head").len()).sum();
    assert_eq!(heads, 1);
}

// ─── Invoice ────────────────────────────────────────────────────

fn invoice_json(rows: usize) -> String {
    let items: Vec<String> = (1..=rows)
        .map(|i| {
            format!(
                r#"{{"name": "Position {}", "description": "Work package", "amount": 2, "amountUnit": "h", "net": 100.0, "tax": 20.0, "gross": 120.0}}"#,
                i
            )
        })
        .collect();
    format!(
        r#"{{
  "metadata": {{ "title": "Invoice 1" }},
  "style": {{ "language": "de", "showMarkerFolding": true }},
  "invoiceAddress": {{ "name": "Widget Industries", "city": "Wien", "vat": "ATU1" }},
  "invoiceInformation": {{ "invoiceNumber": "R-1", "invoiceDate": "2024-03-01" }},
  "invoiceData": {{
    "showAmountColumn": true,
    "showNetColumn": true,
    "showGrossColumn": true,
    "showNetSum": true,
    "showGrossSum": true,
    "rows": [{}]
  }},
  "invoiceDataSuffix": "Danke!",
  "bankPaymentData": {{ "accountHolder": "ACME", "bankName": "Bank", "iban": "AT00" }}
}}"#,
        items.join(",")
    )
}

#[test]
fn test_invoice_renders_to_pdf() {
    let bytes = pdf_invoice::render_json(&invoice_json(3)).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    assert_eq!(count(&bytes, b"/Type /Page "), 1);
    assert_eq!(count(&bytes, b"/Title (Invoice 1)"), 1);
}

#[test]
fn test_long_invoice_spans_pages_with_labels() {
    let doc = pdf_invoice::InvoiceDocument::from_json(&invoice_json(60)).unwrap();
    let locale = pdf_invoice::Locale::for_language(&doc.style.language);
    let canvas = pdf_invoice::render_invoice(&doc, &locale).unwrap();

    let total = canvas.page_count();
    assert!(total > 1);
    for (i, page) in canvas.pages().iter().enumerate() {
        let label = format!("Seite {} von {}", i + 1, total);
        assert_eq!(page.find_text(&label).len(), 1);
        if page.texts().any(|t| t.starts_with("Position ")) {
            assert_eq!(page.find_text("Bezeichnung").len(), 1, "header on page {}", i + 1);
        }
    }
    let gross_sums: usize = canvas.pages().iter().map(|p| p.find_text("7.200,00 EUR").len()).sum();
    assert_eq!(gross_sums, 1);

    let bytes = canvas.to_pdf(&doc.metadata);
    assert_eq!(count(&bytes, b"/Type /Page "), total);
}

#[test]
fn test_invoice_parse_error_has_hint() {
    let err = pdf_invoice::render_json("{\"invoiceAddress\": ").unwrap_err();
    match err {
        InvoiceError::Parse { hint, .. } => assert!(!hint.is_empty()),
        other => panic!("unexpected error: {}", other),
    }
}
