//! # Localisation
//!
//! A [`Locale`] is an immutable value holding every label and number/date
//! convention an invoice needs. It is built once, either from one of the
//! built-in languages or from JSON, and passed by reference into rendering.

use crate::error::InvoiceError;
use serde::{Deserialize, Serialize};

/// How dates are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFormat {
    /// `2024-03-01`
    #[default]
    Iso,
    /// `01.03.2024`
    DayMonthYear,
}

/// Every piece of fixed text an invoice prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    pub invoice_number: String,
    pub invoice_date: String,
    pub offer_number: String,
    pub offer_date: String,
    pub due_date: String,
    pub customer_identifier: String,
    pub contracting_party: String,
    pub name: String,
    pub amount: String,
    pub net: String,
    pub tax: String,
    pub discount: String,
    pub gross: String,
    /// Template with `{page}` and `{total}` placeholders.
    pub page_of: String,
    pub account_holder: String,
    pub bank: String,
    pub iban: String,
    pub bic: String,
    pub payment_reference: String,
    pub remittance_information: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub vat_id: String,
    pub corporate_register: String,
}

impl Labels {
    pub fn page_of(&self, page: usize, total: usize) -> String {
        self.page_of
            .replace("{page}", &page.to_string())
            .replace("{total}", &total.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Language code, e.g. `de` or `en`.
    pub language: String,
    pub labels: Labels,
    pub decimal_separator: String,
    pub thousands_separator: String,
    #[serde(default)]
    pub date_format: DateFormat,
    pub currency: String,
}

impl Locale {
    pub fn english() -> Self {
        Self {
            language: "en".to_string(),
            labels: Labels {
                invoice_number: "Invoice number".to_string(),
                invoice_date: "Invoice date".to_string(),
                offer_number: "Offer number".to_string(),
                offer_date: "Offer date".to_string(),
                due_date: "Due date".to_string(),
                customer_identifier: "Customer number".to_string(),
                contracting_party: "Contracting party".to_string(),
                name: "Name".to_string(),
                amount: "Amount".to_string(),
                net: "Net".to_string(),
                tax: "Tax".to_string(),
                discount: "Discount".to_string(),
                gross: "Gross".to_string(),
                page_of: "Page {page} from {total}".to_string(),
                account_holder: "Account holder".to_string(),
                bank: "Bank".to_string(),
                iban: "IBAN".to_string(),
                bic: "BIC".to_string(),
                payment_reference: "Payment reference".to_string(),
                remittance_information: "Remittance information".to_string(),
                email: "E-Mail".to_string(),
                phone: "Phone".to_string(),
                website: "Website".to_string(),
                vat_id: "VAT ID".to_string(),
                corporate_register: "Company register".to_string(),
            },
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            date_format: DateFormat::Iso,
            currency: "EUR".to_string(),
        }
    }

    pub fn german() -> Self {
        Self {
            language: "de".to_string(),
            labels: Labels {
                invoice_number: "Rechnungsnummer".to_string(),
                invoice_date: "Rechnungsdatum".to_string(),
                offer_number: "Angebotsnummer".to_string(),
                offer_date: "Angebotsdatum".to_string(),
                due_date: "Fällig am".to_string(),
                customer_identifier: "Kundennummer".to_string(),
                contracting_party: "Vertragspartner".to_string(),
                name: "Bezeichnung".to_string(),
                amount: "Menge".to_string(),
                net: "Netto".to_string(),
                tax: "Steuer".to_string(),
                discount: "Rabatt".to_string(),
                gross: "Brutto".to_string(),
                page_of: "Seite {page} von {total}".to_string(),
                account_holder: "Kontoinhaber".to_string(),
                bank: "Bank".to_string(),
                iban: "IBAN".to_string(),
                bic: "BIC".to_string(),
                payment_reference: "Zahlungsreferenz".to_string(),
                remittance_information: "Verwendungszweck".to_string(),
                email: "E-Mail".to_string(),
                phone: "Telefon".to_string(),
                website: "Webseite".to_string(),
                vat_id: "UID".to_string(),
                corporate_register: "Firmenbuch".to_string(),
            },
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
            date_format: DateFormat::DayMonthYear,
            currency: "EUR".to_string(),
        }
    }

    /// Built-in locale for a language code such as `de`, `de-AT` or `en-US`.
    /// Unknown languages get English.
    pub fn for_language(language: &str) -> Self {
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" => Self::german(),
            "en" => Self::english(),
            other => {
                log::warn!("no built-in locale for {:?}, using English", other);
                Self::english()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, InvoiceError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_template() {
        assert_eq!(Locale::english().labels.page_of(2, 5), "Page 2 from 5");
        assert_eq!(Locale::german().labels.page_of(1, 1), "Seite 1 von 1");
    }

    #[test]
    fn test_language_lookup() {
        assert_eq!(Locale::for_language("de-AT").language, "de");
        assert_eq!(Locale::for_language("EN").language, "en");
        assert_eq!(Locale::for_language("fr").language, "en");
    }

    #[test]
    fn test_round_trips_through_json() {
        let json = serde_json::to_string(&Locale::german()).unwrap();
        let back = Locale::from_json(&json).unwrap();
        assert_eq!(back, Locale::german());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Locale::from_json("{\"language\": ").unwrap_err();
        assert!(matches!(err, InvoiceError::Parse { .. }));
    }
}
