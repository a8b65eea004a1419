//! # Font Management
//!
//! Only the standard PDF fonts are supported: they need no embedding and
//! their metrics are fixed, which keeps text measurement exact and
//! reproducible between the layout pass and the PDF writer.

pub mod metrics;

pub use metrics::StandardFontMetrics;

use crate::style::FontWeight;
use serde::{Deserialize, Serialize};

/// Font family selectable for a page canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

/// The standard PDF fonts this crate can draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

impl StandardFont {
    /// All fonts, in resource order (`/F1` .. `/F4`).
    pub const ALL: [StandardFont; 4] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::Courier,
        StandardFont::CourierBold,
    ];

    pub fn resolve(family: FontFamily, weight: FontWeight) -> Self {
        match (family, weight) {
            (FontFamily::Helvetica, FontWeight::Regular) => Self::Helvetica,
            (FontFamily::Helvetica, FontWeight::Bold) => Self::HelveticaBold,
            (FontFamily::Courier, FontWeight::Regular) => Self::Courier,
            (FontFamily::Courier, FontWeight::Bold) => Self::CourierBold,
        }
    }

    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
        }
    }

    /// Resource name used in content streams.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
            Self::Courier => "F3",
            Self::CourierBold => "F4",
        }
    }

    pub fn metrics(&self) -> StandardFontMetrics {
        match self {
            Self::Helvetica => StandardFontMetrics::Helvetica,
            Self::HelveticaBold => StandardFontMetrics::HelveticaBold,
            Self::Courier | Self::CourierBold => StandardFontMetrics::Monospace,
        }
    }
}

/// Font family plus size: everything needed to measure text.
#[derive(Debug, Clone, Copy)]
pub struct FontContext {
    pub family: FontFamily,
    /// Size in points.
    pub size: f64,
}

impl FontContext {
    pub fn new(family: FontFamily, size: f64) -> Self {
        Self { family, size }
    }

    /// Get the advance width of a single character in points.
    pub fn char_width(&self, ch: char, weight: FontWeight) -> f64 {
        StandardFont::resolve(self.family, weight)
            .metrics()
            .char_width(ch, self.size)
    }

    /// Measure the width of a string in points.
    pub fn measure_string(&self, text: &str, weight: FontWeight) -> f64 {
        StandardFont::resolve(self.family, weight)
            .metrics()
            .measure_string(text, self.size)
    }
}
