//! Postal addresses and their one-string renderings.

use super::i18n::Labels;
use serde::{Deserialize, Serialize};

/// Separator placed between address parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    NewLine,
    /// Six spaces; a tab character has no glyph in the standard fonts.
    Tab,
    Space,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::NewLine => "\n",
            Delimiter::Tab => "      ",
            Delimiter::Space => " ",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// Name, streets, "zip city" and country, joined by `delimiter`. Missing
    /// parts are skipped.
    pub fn format(&self, delimiter: Delimiter) -> String {
        let locality = match (&self.zip, &self.city) {
            (Some(zip), Some(city)) => Some(format!("{} {}", zip, city)),
            (Some(part), None) | (None, Some(part)) => Some(part.clone()),
            (None, None) => None,
        };
        std::iter::once(Some(self.name.clone()))
            .chain([
                self.street1.clone(),
                self.street2.clone(),
                locality,
                self.country.clone(),
            ])
            .flatten()
            .collect::<Vec<_>>()
            .join(delimiter.as_str())
    }
}

/// An address with an optional VAT identification number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VatAddress {
    #[serde(flatten)]
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
}

impl VatAddress {
    pub fn format(&self, delimiter: Delimiter) -> String {
        let mut out = self.address.format(delimiter);
        if let Some(vat) = &self.vat {
            out.push_str(delimiter.as_str());
            out.push_str(vat);
        }
        out
    }
}

/// The issuing company: its address plus contact and registration data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInformation {
    pub address: Address,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub corporate_register_number: Option<String>,
}

impl SellerInformation {
    /// The address followed by every contact line that is set, each with
    /// its label.
    pub fn format(&self, delimiter: Delimiter, labels: &Labels) -> String {
        let mut out = self.address.format(delimiter);
        let lines = [
            (&labels.email, &self.email),
            (&labels.phone, &self.phone),
            (&labels.website, &self.website),
            (&labels.vat_id, &self.vat),
            (&labels.corporate_register, &self.corporate_register_number),
        ];
        for (label, value) in lines {
            if let Some(value) = value {
                out.push_str(delimiter.as_str());
                out.push_str(label);
                out.push_str(": ");
                out.push_str(value);
            }
        }
        out
    }
}
