//! # Invoice Blocks
//!
//! Each block draws one part of the invoice at the canvas cursor and leaves
//! the cursor at the left margin below itself. Blocks that flow with the
//! content (items, sums, suffix, bank box) respect the print area; the
//! letter header and the footers are placed at fixed page positions.
//!
//! Positions are in millimetres on A4, following the DIN 5008 letter
//! layouts.

use super::address::Delimiter;
use super::format;
use super::i18n::Locale;
use super::{InvoiceData, InvoiceDocument, InvoiceInformation, InvoiceRow, LetterLayout};
use crate::canvas::{Canvas, DocCanvas, Measure};
use crate::error::{InvoiceError, TableError};
use crate::model::Edges;
use crate::style::{Align, CellStyle, Color, FontWeight, GraphicsState, HAlign};
use crate::table::{CellType, ColumnPolicy, HeaderPolicy, Table, TableOptions};
use crate::text::sanitize;

/// Line height as a multiple of the font height for running text.
const LINE_FACTOR: f64 = 1.2;
const FIT_TOLERANCE: f64 = 1e-9;

const ADDRESS_X: f64 = 25.0;
const ADDRESS_WIDTH: f64 = 80.0;
const INFO_X: f64 = 125.0;
const INFO_RIGHT_MARGIN: f64 = 10.0;
/// Where the body starts below the letter header.
const CONTENT_TOP: f64 = 98.5;

const ITEM_COLUMN_WIDTH: f64 = 25.0;
const HEADING_SIZE: f64 = 12.0;
const BANK_BOX_PADDING: f64 = 5.0;

const FOOTER_SIZE: f64 = 8.0;
/// Distance between the footer text and the bottom page edge.
const FOOTER_BOTTOM: f64 = 10.0;
const PAGE_LABEL_GAP: f64 = 4.23;

fn gray(v: u8) -> Color {
    Color::rgb8(v, v, v)
}

/// Draws `text` as left-aligned lines across the print width, starting a
/// new page whenever the next line does not fit.
fn paragraph(canvas: &mut DocCanvas, text: &str) {
    let lh = canvas.line_height(LINE_FACTOR);
    let width = canvas.print_width();
    let weight = canvas.graphics_state().weight;
    let lines = canvas.split_text(&sanitize(text), width, weight);

    for line in lines {
        if lh > canvas.remaining_print_height() + FIT_TOLERANCE {
            canvas.page_break();
        }
        let (_, y) = canvas.cursor();
        canvas.set_cursor(canvas.margins().left, y);
        canvas.draw_text_block(std::slice::from_ref(&line), width, lh, HAlign::Left);
    }
}

// ── Letter header ─────────────────────────────────────────────────

/// Label/value rows for the information block. Dates are reformatted for
/// the locale.
pub fn information_cells(
    info: &InvoiceInformation,
    locale: &Locale,
) -> Result<Vec<Vec<String>>, InvoiceError> {
    let labels = &locale.labels;
    let date = |value: &Option<String>| -> Result<Option<String>, InvoiceError> {
        value.as_deref().map(|v| format::date(v, locale)).transpose()
    };

    let entries = [
        (&labels.invoice_number, info.invoice_number.clone()),
        (&labels.invoice_date, date(&info.invoice_date)?),
        (&labels.offer_number, info.offer_number.clone()),
        (&labels.offer_date, date(&info.offer_date)?),
        (&labels.due_date, date(&info.due_date)?),
        (&labels.customer_identifier, info.customer_identifier.clone()),
    ];

    let mut cells: Vec<Vec<String>> = entries
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| vec![label.clone(), v]))
        .collect();
    cells.extend(
        info.additional_information
            .iter()
            .map(|extra| vec![extra.title.clone(), extra.value.clone()]),
    );
    Ok(cells)
}

/// Recipient address in the address window and the information table to
/// its right. Leaves the cursor where the body starts.
pub fn letter_header(
    doc: &InvoiceDocument,
    locale: &Locale,
    canvas: &mut DocCanvas,
) -> Result<(), InvoiceError> {
    let (address_y, info_y) = match doc.style.layout {
        LetterLayout::Din5008A => (27.0 + 17.57, 32.0),
        LetterLayout::Din5008B => (45.0 + 17.7, 50.0),
    };
    let lh = canvas.line_height(LINE_FACTOR);

    canvas.set_cursor(ADDRESS_X, address_y);
    let address = sanitize(&doc.invoice_address.format(Delimiter::NewLine));
    let lines = canvas.split_text(&address, ADDRESS_WIDTH, FontWeight::Regular);
    canvas.draw_text_block(&lines, ADDRESS_WIDTH, lh, HAlign::Left);

    let cells = information_cells(&doc.invoice_information, locale)?;
    let margins = canvas.margins();
    if !cells.is_empty() {
        canvas.set_margins(Edges {
            left: INFO_X,
            right: INFO_RIGHT_MARGIN,
            ..margins
        });
        canvas.set_cursor(INFO_X, info_y);
        let result = information_table(cells).and_then(|mut table| table.generate(&mut *canvas));
        canvas.set_margins(margins);
        result?;
    }

    canvas.set_cursor(margins.left, CONTENT_TOP);
    Ok(())
}

fn information_table(cells: Vec<Vec<String>>) -> Result<Table, TableError> {
    let mut table = Table::with_options(
        cells,
        TableOptions {
            padding: Edges::new(0.0, 0.0, 0.0, 1.0),
            border: false,
            ..TableOptions::default()
        },
    )?;
    if table.column_count() == 2 {
        table.set_column_policies(vec![ColumnPolicy::Calculated, ColumnPolicy::Dynamic])?;
    }
    Ok(table)
}

// ── Contracting party ─────────────────────────────────────────────

/// Bold heading and the customer's address, when one is given.
pub fn contracting_party(doc: &InvoiceDocument, locale: &Locale, canvas: &mut DocCanvas) {
    let Some(customer) = &doc.customer_address else {
        return;
    };
    let base_size = canvas.font_size();
    let state = canvas.graphics_state();

    canvas.set_graphics_state(GraphicsState {
        weight: FontWeight::Bold,
        ..state
    });
    canvas.set_font_size(HEADING_SIZE);
    paragraph(canvas, &locale.labels.contracting_party);
    canvas.set_graphics_state(state);
    canvas.set_font_size(base_size);

    paragraph(canvas, &customer.format(Delimiter::NewLine));
    canvas.ln(canvas.line_height(LINE_FACTOR));
}

// ── Item table ────────────────────────────────────────────────────

/// Header row plus one row per invoice line, with the columns the flags
/// ask for. The discount column appears when any row has a discount.
pub fn item_cells(data: &InvoiceData, locale: &Locale) -> Vec<Vec<String>> {
    let show_discount = data.rows.iter().any(InvoiceRow::has_discount);
    let labels = &locale.labels;

    let line = |title: String, amount: String, net: String, tax: String, discount: String, gross: String| {
        let mut row = vec![title];
        if data.show_amount_column {
            row.push(amount);
        }
        if data.show_net_column {
            row.push(net);
        }
        if data.show_tax_column {
            row.push(tax);
        }
        if show_discount {
            row.push(discount);
        }
        if data.show_gross_column {
            row.push(gross);
        }
        row
    };

    let mut cells = vec![line(
        labels.name.clone(),
        labels.amount.clone(),
        labels.net.clone(),
        labels.tax.clone(),
        labels.discount.clone(),
        labels.gross.clone(),
    )];

    for row in &data.rows {
        let title = match &row.description {
            Some(description) => format!("{}\n{}", row.name, description),
            None => row.name.clone(),
        };
        cells.push(line(
            title,
            format::amount(row.amount, row.amount_unit.as_deref(), locale),
            format::money(row.net, locale),
            format::tax(row.tax, row.tax_percentage, locale),
            format::discount(row.discount_percentage, row.discount_fixed, locale),
            format::money(row.gross, locale),
        ));
    }
    cells
}

/// The item table: a wide description column and fixed right-aligned
/// number columns. The header row repeats on every page.
pub fn items(data: &InvoiceData, locale: &Locale, canvas: &mut DocCanvas) -> Result<(), InvoiceError> {
    let cells = item_cells(data, locale);
    let cols = cells.first().map_or(0, Vec::len);

    let mut table = Table::with_options(
        cells,
        TableOptions {
            header: HeaderPolicy::FirstRowRepeats,
            cell_type: CellType::MultiLine,
            padding: Edges::uniform(1.0),
            border: false,
            ..TableOptions::default()
        },
    )?;

    let mut policies = vec![ColumnPolicy::Fixed(ITEM_COLUMN_WIDTH); cols];
    let mut aligns = vec![Align::Right; cols];
    if let (Some(policy), Some(align)) = (policies.first_mut(), aligns.first_mut()) {
        *policy = ColumnPolicy::Dynamic;
        *align = Align::Left;
    }
    table.set_column_policies(policies)?;
    table.set_cell_aligns_per_column(&aligns)?;
    table.set_cell_styles_alternate_rows(Some(CellStyle::fill(gray(220))), None);
    table.set_cell_styles_row(
        0,
        Some(CellStyle::Heading {
            fill: gray(200),
            text: Color::BLACK,
        }),
    )?;

    let (_, y) = canvas.cursor();
    canvas.set_cursor(canvas.margins().left, y);
    table.generate(canvas)?;
    canvas.ln(canvas.line_height(LINE_FACTOR));
    Ok(())
}

// ── Sums ──────────────────────────────────────────────────────────

/// Sum of one value over all rows. A row without the value is an error
/// naming the row (1-based).
pub fn column_sum(
    rows: &[InvoiceRow],
    field: &'static str,
    value: fn(&InvoiceRow) -> Option<f64>,
) -> Result<f64, InvoiceError> {
    rows.iter().enumerate().try_fold(0.0, |acc, (i, row)| {
        value(row)
            .map(|v| acc + v)
            .ok_or(InvoiceError::MissingValue { row: i + 1, field })
    })
}

pub fn sum_cells(data: &InvoiceData, locale: &Locale) -> Result<Vec<Vec<String>>, InvoiceError> {
    let labels = &locale.labels;
    let sums: [(bool, &String, &'static str, fn(&InvoiceRow) -> Option<f64>); 3] = [
        (data.show_net_sum, &labels.net, "net", |r: &InvoiceRow| r.net),
        (data.show_tax_sum, &labels.tax, "tax", |r: &InvoiceRow| r.tax),
        (data.show_gross_sum, &labels.gross, "gross", |r: &InvoiceRow| r.gross),
    ];

    let mut cells = Vec::new();
    for (shown, label, field, value) in sums {
        if shown {
            let total = column_sum(&data.rows, field, value)?;
            cells.push(vec![label.clone(), format::money(Some(total), locale)]);
        }
    }
    Ok(cells)
}

/// Bold sum table in the right half of the page.
pub fn sums(data: &InvoiceData, locale: &Locale, canvas: &mut DocCanvas) -> Result<(), InvoiceError> {
    let cells = sum_cells(data, locale)?;
    if cells.is_empty() {
        return Ok(());
    }

    let mut table = Table::with_options(
        cells,
        TableOptions {
            cell_type: CellType::MultiLine,
            padding: Edges::uniform(1.0),
            border: false,
            ..TableOptions::default()
        },
    )?;
    table.set_cell_aligns_per_column(&[Align::Left, Align::Right])?;

    let margins = canvas.margins();
    let (page_width, _) = canvas.page_size();
    let state = canvas.graphics_state();
    canvas.set_margins(Edges {
        left: page_width / 2.0,
        ..margins
    });
    canvas.set_graphics_state(GraphicsState {
        weight: FontWeight::Bold,
        ..state
    });
    let (_, y) = canvas.cursor();
    canvas.set_cursor(page_width / 2.0, y);

    let result = table.generate(canvas);

    canvas.set_graphics_state(state);
    canvas.set_margins(margins);
    let (_, y) = canvas.cursor();
    canvas.set_cursor(margins.left, y);
    result?;
    Ok(())
}

// ── Suffix and bank box ───────────────────────────────────────────

pub fn suffix(doc: &InvoiceDocument, canvas: &mut DocCanvas) {
    if let Some(text) = &doc.invoice_data_suffix {
        paragraph(canvas, text);
        canvas.ln(canvas.line_height(LINE_FACTOR));
    }
}

pub fn bank_text(doc: &InvoiceDocument, locale: &Locale) -> Option<String> {
    let bank = doc.bank_payment_data.as_ref()?;
    let labels = &locale.labels;
    let entries = [
        (&labels.account_holder, Some(&bank.account_holder)),
        (&labels.bank, Some(&bank.bank_name)),
        (&labels.iban, Some(&bank.iban)),
        (&labels.bic, bank.bic.as_ref()),
        (&labels.payment_reference, bank.payment_reference.as_ref()),
        (&labels.remittance_information, bank.remittance_information.as_ref()),
    ];
    let lines: Vec<String> = entries
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| format!("{}: {}", label, v)))
        .collect();
    Some(lines.join("\n"))
}

/// Framed payment details. The box is kept in one piece: if it does not
/// fit below the cursor it goes to a new page.
pub fn bank_payment(doc: &InvoiceDocument, locale: &Locale, canvas: &mut DocCanvas) {
    let Some(text) = bank_text(doc, locale) else {
        return;
    };
    let lh = canvas.line_height(LINE_FACTOR);
    let width = canvas.print_width();
    let inner = width - 2.0 * BANK_BOX_PADDING;
    let lines = canvas.split_text(&sanitize(&text), inner, FontWeight::Regular);
    let height = lines.len() as f64 * lh + 2.0 * BANK_BOX_PADDING;

    if height > canvas.remaining_print_height() + FIT_TOLERANCE {
        log::debug!("bank box ({:.3}) moved to a new page", height);
        canvas.page_break();
    }

    let left = canvas.margins().left;
    let (_, top) = canvas.cursor();
    canvas.draw_rect(left, top, width, height, true, false);
    canvas.set_cursor(left + BANK_BOX_PADDING, top + BANK_BOX_PADDING);
    canvas.draw_text_block(&lines, inner, lh, HAlign::Left);
    canvas.set_cursor(left, top + height);
}

// ── Footer ────────────────────────────────────────────────────────

/// Page footer: markers, page label and the issuer's details. Prepared
/// before layout so the print area can exclude it, drawn after layout when
/// the page count is known.
#[derive(Debug, Clone)]
pub struct Footer {
    lines: Vec<String>,
    line_height: f64,
}

impl Footer {
    /// Measures the footer text at the footer font size and reserves its
    /// space at the bottom of every page.
    pub fn prepare(doc: &InvoiceDocument, locale: &Locale, canvas: &mut DocCanvas) -> Self {
        let text = match &doc.seller {
            Some(seller) => seller.format(Delimiter::Tab, &locale.labels),
            None => doc.invoice_address.format(Delimiter::Tab),
        };

        let base_size = canvas.font_size();
        canvas.set_font_size(FOOTER_SIZE);
        let line_height = canvas.line_height(LINE_FACTOR);
        let lines = canvas.split_text(&sanitize(&text), canvas.print_width(), FontWeight::Regular);
        canvas.set_font_size(base_size);

        let footer = Self { lines, line_height };
        canvas.set_footer_reserve(footer.reserve());
        footer
    }

    fn text_height(&self) -> f64 {
        self.lines.len() as f64 * self.line_height
    }

    /// Space taken from the print area: page label, footer text and the
    /// gaps around the label.
    pub fn reserve(&self) -> f64 {
        self.text_height() + self.line_height + 2.0 * PAGE_LABEL_GAP
    }

    /// Draws the footer on every page.
    pub fn draw_all(&self, doc: &InvoiceDocument, locale: &Locale, canvas: &mut DocCanvas) {
        let total = canvas.page_count();
        let last = canvas.current_page();
        let (x, y) = canvas.cursor();
        let base_size = canvas.font_size();
        let state = canvas.graphics_state();
        canvas.set_graphics_state(GraphicsState::default());

        for page in 0..total {
            if !canvas.select_page(page) {
                continue;
            }
            self.draw_markers(doc, canvas);

            canvas.set_font_size(FOOTER_SIZE);
            let (_, page_height) = canvas.page_size();
            let left = canvas.margins().left;
            let width = canvas.print_width();
            let text_top = page_height - FOOTER_BOTTOM - self.text_height();
            let label_top = text_top - PAGE_LABEL_GAP - self.line_height;

            canvas.set_cursor(left, label_top);
            canvas.draw_text(
                &locale.labels.page_of(page + 1, total),
                width,
                self.line_height,
                Align::Right,
            );
            canvas.set_cursor(left, text_top);
            canvas.draw_text_block(&self.lines, width, self.line_height, HAlign::Left);
            canvas.set_font_size(base_size);
        }

        canvas.select_page(last);
        canvas.set_graphics_state(state);
        canvas.set_cursor(x, y);
    }

    fn draw_markers(&self, doc: &InvoiceDocument, canvas: &mut DocCanvas) {
        if doc.style.show_marker_folding {
            let marks = match doc.style.layout {
                LetterLayout::Din5008A => [87.0, 192.0],
                LetterLayout::Din5008B => [105.0, 210.0],
            };
            for y in marks {
                canvas.draw_line(0.0, y, 10.0, y);
            }
        }
        if doc.style.show_marker_puncher {
            let (_, h) = canvas.page_size();
            canvas.draw_line(0.0, h / 2.0, 14.0, h / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;
    use crate::invoice::{invoice_page_config, Address, AdditionalInformation, BankPaymentData};

    fn row(name: &str, net: f64) -> InvoiceRow {
        InvoiceRow {
            name: name.to_string(),
            net: Some(net),
            tax: Some(net * 0.2),
            gross: Some(net * 1.2),
            ..Default::default()
        }
    }

    fn data(rows: Vec<InvoiceRow>) -> InvoiceData {
        InvoiceData {
            show_amount_column: true,
            show_net_column: true,
            show_tax_column: false,
            show_gross_column: true,
            show_net_sum: true,
            show_tax_sum: true,
            show_gross_sum: true,
            rows,
        }
    }

    #[test]
    fn test_information_rows_skip_missing_fields() {
        let info = InvoiceInformation {
            invoice_number: Some("R-1".to_string()),
            invoice_date: Some("2024-03-01".to_string()),
            additional_information: vec![AdditionalInformation {
                title: "Project".to_string(),
                value: "Roof".to_string(),
            }],
            ..Default::default()
        };
        let cells = information_cells(&info, &Locale::german()).unwrap();
        assert_eq!(
            cells,
            vec![
                vec!["Rechnungsnummer".to_string(), "R-1".to_string()],
                vec!["Rechnungsdatum".to_string(), "01.03.2024".to_string()],
                vec!["Project".to_string(), "Roof".to_string()],
            ]
        );
    }

    #[test]
    fn test_information_rows_reject_bad_dates() {
        let info = InvoiceInformation {
            due_date: Some("tomorrow".to_string()),
            ..Default::default()
        };
        let err = information_cells(&info, &Locale::english()).unwrap_err();
        assert!(matches!(err, InvoiceError::InvalidDate { .. }));
    }

    #[test]
    fn test_item_columns_follow_flags() {
        let cells = item_cells(&data(vec![row("Work", 100.0)]), &Locale::english());
        assert_eq!(cells[0], vec!["Name", "Amount", "Net", "Gross"]);
        assert_eq!(cells[1], vec!["Work", "1", "100.00 EUR", "120.00 EUR"]);
    }

    #[test]
    fn test_tax_column_shows_rate() {
        let mut taxed = row("Work", 100.0);
        taxed.tax_percentage = Some(20.0);
        let mut invoice = data(vec![taxed, row("Parts", 50.0)]);
        invoice.show_tax_column = true;
        let cells = item_cells(&invoice, &Locale::english());
        assert_eq!(cells[0], vec!["Name", "Amount", "Net", "Tax", "Gross"]);
        assert_eq!(cells[1][3], "20.00 EUR\n20%");
        assert_eq!(cells[2][3], "10.00 EUR");
    }

    #[test]
    fn test_discount_column_uses_discount_values() {
        let mut discounted = row("Parts", 50.0);
        discounted.description = Some("Screws".to_string());
        discounted.discount_percentage = Some(10.0);
        let cells = item_cells(&data(vec![row("Work", 100.0), discounted]), &Locale::english());
        assert_eq!(cells[0], vec!["Name", "Amount", "Net", "Discount", "Gross"]);
        assert_eq!(cells[1][3], "-");
        assert_eq!(cells[2][0], "Parts\nScrews");
        assert_eq!(cells[2][3], "10%");
    }

    #[test]
    fn test_sums_cover_all_rows() {
        let cells = sum_cells(&data(vec![row("a", 100.0), row("b", 50.0)]), &Locale::english()).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], vec!["Net", "150.00 EUR"]);
        assert_eq!(cells[2], vec!["Gross", "180.00 EUR"]);
    }

    #[test]
    fn test_missing_value_names_the_row() {
        let mut incomplete = row("b", 50.0);
        incomplete.tax = None;
        let err = sum_cells(&data(vec![row("a", 1.0), incomplete]), &Locale::english()).unwrap_err();
        assert!(matches!(err, InvoiceError::MissingValue { row: 2, field: "tax" }));
    }

    #[test]
    fn test_header_leaves_cursor_at_content_top() {
        let doc = InvoiceDocument {
            invoice_information: InvoiceInformation {
                invoice_number: Some("R-7".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut canvas = DocCanvas::new(invoice_page_config());
        letter_header(&doc, &Locale::english(), &mut canvas).unwrap();
        assert_eq!(canvas.cursor(), (25.0, CONTENT_TOP));
        assert_eq!(canvas.margins(), invoice_page_config().margin);
        let found = canvas.pages()[0].find_text("R-7");
        assert_eq!(found.len(), 1);
        assert!(found[0].0 > INFO_X);
    }

    #[test]
    fn test_contracting_party_is_skipped_without_customer() {
        let mut canvas = DocCanvas::new(invoice_page_config());
        contracting_party(&InvoiceDocument::default(), &Locale::english(), &mut canvas);
        assert!(canvas.pages()[0].ops.is_empty());

        let doc = InvoiceDocument {
            customer_address: Some(Address {
                name: "Client".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        contracting_party(&doc, &Locale::english(), &mut canvas);
        let bold = canvas.pages()[0].ops.iter().any(|op| {
            matches!(op, DrawOp::Text { text, font, size, .. }
                if text == "Contracting party"
                    && *font == crate::font::StandardFont::HelveticaBold
                    && *size == HEADING_SIZE)
        });
        assert!(bold);
        assert_eq!(canvas.pages()[0].find_text("Client").len(), 1);
    }

    #[test]
    fn test_bank_box_moves_to_new_page_when_short_of_space() {
        let doc = InvoiceDocument {
            bank_payment_data: Some(BankPaymentData {
                account_holder: "ACME".to_string(),
                bank_name: "Bank".to_string(),
                iban: "AT00 0000".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut canvas = DocCanvas::new(invoice_page_config());
        let y = canvas.print_bottom() - 5.0;
        canvas.set_cursor(25.0, y);
        bank_payment(&doc, &Locale::english(), &mut canvas);

        assert_eq!(canvas.page_count(), 2);
        assert!(canvas.pages()[0].ops.is_empty());
        assert!(canvas.pages()[1]
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Rect { y, .. } if *y == 25.0)));
        assert_eq!(canvas.pages()[1].find_text("IBAN: AT00 0000").len(), 1);
    }

    #[test]
    fn test_footer_reserve_shrinks_print_area_and_labels_every_page() {
        let doc = InvoiceDocument::default();
        let locale = Locale::english();
        let mut canvas = DocCanvas::new(invoice_page_config());
        let full = canvas.print_height();
        let footer = Footer::prepare(&doc, &locale, &mut canvas);
        assert!((full - canvas.print_height() - footer.reserve()).abs() < 1e-9);

        canvas.page_break();
        footer.draw_all(&doc, &locale, &mut canvas);
        assert_eq!(canvas.pages()[0].find_text("Page 1 from 2").len(), 1);
        assert_eq!(canvas.pages()[1].find_text("Page 2 from 2").len(), 1);
        assert_eq!(canvas.current_page(), 1);
        assert_eq!(canvas.font_size(), 10.0);
    }

    #[test]
    fn test_folding_marks_follow_layout() {
        let mut doc = InvoiceDocument::default();
        doc.style.show_marker_folding = true;
        doc.style.layout = LetterLayout::Din5008B;
        let locale = Locale::english();
        let mut canvas = DocCanvas::new(invoice_page_config());
        let footer = Footer::prepare(&doc, &locale, &mut canvas);
        footer.draw_all(&doc, &locale, &mut canvas);
        let ys: Vec<f64> = canvas.pages()[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { y1, .. } => Some(*y1),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![105.0, 210.0]);
    }
}
