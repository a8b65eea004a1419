//! # PDF Invoice
//!
//! Multi-page invoice PDFs built on a cursor-based table engine.
//!
//! The core is [`table::Table`]: a matrix of text cells with per-column,
//! per-row and per-cell policies. Column widths are resolved in three tiers
//! (fixed, measured from content, sharing what is left), row heights from
//! the wrapped content, and rows are laid onto pages one at a time. A row is
//! never split; when it does not fit, a new page is started and the header
//! row is drawn again.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON)
//!       ↓
//!   [invoice]  : Document model, locale, blocks
//!       ↓
//!   [table]    : Column/row sizing, cell rendering, pagination
//!       ↓
//!   [canvas]   : Cursor, print area, recorded draw ops per page
//!       ↓
//!   [pdf]      : Serialize to PDF bytes
//! ```
//!
//! Text is measured with the metrics of the standard PDF fonts ([`font`]),
//! so no font files are embedded.

pub mod canvas;
pub mod error;
pub mod font;
pub mod invoice;
pub mod model;
pub mod pdf;
pub mod style;
pub mod table;
pub mod text;

pub use canvas::{Canvas, DocCanvas, Measure};
pub use error::{InvoiceError, TableError};
pub use invoice::{render_invoice, InvoiceDocument, Locale};
pub use table::{Table, TableOptions};

/// Render an invoice to PDF bytes.
///
/// This is the primary entry point. Lays the invoice out with `locale` and
/// returns the raw bytes of a PDF file.
pub fn render(document: &InvoiceDocument, locale: &Locale) -> Result<Vec<u8>, InvoiceError> {
    let canvas = render_invoice(document, locale)?;
    Ok(canvas.to_pdf(&document.metadata))
}

/// Render an invoice described as JSON to PDF bytes, using the built-in
/// locale for the document's language.
pub fn render_json(json: &str) -> Result<Vec<u8>, InvoiceError> {
    let document = InvoiceDocument::from_json(json)?;
    let locale = Locale::for_language(&document.style.language);
    render(&document, &locale)
}
