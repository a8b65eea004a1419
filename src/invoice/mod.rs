//! # Invoice Documents
//!
//! The business document built on top of the table engine. An
//! [`InvoiceDocument`] is plain data (usually parsed from JSON); rendering
//! lays it out on a [`DocCanvas`] block by block:
//!
//! ```text
//! letter header    address window + information table (DIN 5008 A/B)
//! contracting party
//! item table       header row repeats on every page
//! sum table        right half of the page
//! suffix text
//! bank payment box moved to a new page as a whole if it does not fit
//! footers          drawn last, once the page count is known
//! ```

pub mod address;
pub mod blocks;
pub mod format;
pub mod i18n;

pub use address::{Address, Delimiter, SellerInformation, VatAddress};
pub use i18n::{DateFormat, Labels, Locale};

use crate::canvas::DocCanvas;
use crate::error::InvoiceError;
use crate::model::{Edges, Metadata, PageConfig};
use serde::{Deserialize, Serialize};

/// Position of the address window and information block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterLayout {
    /// Short letterhead: address window starts 27mm from the top.
    #[default]
    #[serde(rename = "DIN_5008A")]
    Din5008A,
    /// Tall letterhead: address window starts 45mm from the top.
    #[serde(rename = "DIN_5008B")]
    Din5008B,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStyle {
    /// Language code used to pick the built-in locale.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub layout: LetterLayout,
    /// Hole puncher mark at half page height.
    #[serde(default)]
    pub show_marker_puncher: bool,
    /// Folding marks for the chosen layout.
    #[serde(default)]
    pub show_marker_folding: bool,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            language: default_language(),
            layout: LetterLayout::default(),
            show_marker_puncher: false,
            show_marker_folding: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInformation {
    pub title: String,
    pub value: String,
}

/// Numbers and dates of the invoice. Dates are ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInformation {
    #[serde(default)]
    pub offer_number: Option<String>,
    #[serde(default)]
    pub offer_date: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub customer_identifier: Option<String>,
    #[serde(default)]
    pub additional_information: Vec<AdditionalInformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub amount_unit: Option<String>,
    #[serde(default)]
    pub net: Option<f64>,
    #[serde(default)]
    pub tax_percentage: Option<f64>,
    #[serde(default)]
    pub tax: Option<f64>,
    #[serde(default)]
    pub gross: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub discount_fixed: Option<f64>,
}

impl InvoiceRow {
    pub fn has_discount(&self) -> bool {
        self.discount_fixed.is_some() || self.discount_percentage.is_some()
    }
}

/// The invoice lines and which columns and sums to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceData {
    pub show_amount_column: bool,
    pub show_net_column: bool,
    pub show_tax_column: bool,
    pub show_gross_column: bool,
    pub show_net_sum: bool,
    pub show_tax_sum: bool,
    pub show_gross_sum: bool,
    pub rows: Vec<InvoiceRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankPaymentData {
    pub account_holder: String,
    pub bank_name: String,
    pub iban: String,
    #[serde(default)]
    pub bic: Option<String>,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub remittance_information: Option<String>,
}

/// A complete invoice ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    #[serde(default)]
    pub style: DocumentStyle,
    pub invoice_address: VatAddress,
    /// The issuer; printed in the footer when present.
    #[serde(default)]
    pub seller: Option<SellerInformation>,
    #[serde(default)]
    pub invoice_information: InvoiceInformation,
    /// Contracting party, when it differs from the invoice recipient.
    #[serde(default)]
    pub customer_address: Option<Address>,
    pub invoice_data: InvoiceData,
    /// Free text after the sums, e.g. a thank-you note.
    #[serde(default)]
    pub invoice_data_suffix: Option<String>,
    #[serde(default)]
    pub bank_payment_data: Option<BankPaymentData>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl InvoiceDocument {
    pub fn from_json(json: &str) -> Result<Self, InvoiceError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Page setup for invoices: A4 in millimetres, 25mm left and top margin,
/// 20mm right, Helvetica 10pt.
pub fn invoice_page_config() -> PageConfig {
    PageConfig {
        margin: Edges::new(25.0, 20.0, 10.0, 25.0),
        font_size: 10.0,
        ..PageConfig::default()
    }
}

/// Lays out the whole invoice and returns the finished canvas.
pub fn render_invoice(doc: &InvoiceDocument, locale: &Locale) -> Result<DocCanvas, InvoiceError> {
    let mut canvas = DocCanvas::new(invoice_page_config());

    let footer = blocks::Footer::prepare(doc, locale, &mut canvas);
    blocks::letter_header(doc, locale, &mut canvas)?;
    blocks::contracting_party(doc, locale, &mut canvas);
    blocks::items(&doc.invoice_data, locale, &mut canvas)?;
    blocks::sums(&doc.invoice_data, locale, &mut canvas)?;
    blocks::suffix(doc, &mut canvas);
    blocks::bank_payment(doc, locale, &mut canvas);
    footer.draw_all(doc, locale, &mut canvas);

    log::debug!("invoice rendered on {} page(s)", canvas.page_count());
    Ok(canvas)
}
