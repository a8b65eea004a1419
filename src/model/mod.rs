//! # Page Model
//!
//! Geometry and configuration shared by the canvas, the table engine and the
//! invoice layer. All lengths are expressed in the page's [`Unit`]; only the
//! font size is always given in points, as it is in every PDF tool.

use crate::font::FontFamily;
use serde::{Deserialize, Serialize};

/// Document metadata embedded in the PDF `/Info` dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

/// Measurement unit of a page and everything laid out on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// PDF points (1/72 inch).
    Pt,
    /// Millimetres.
    #[default]
    Mm,
}

impl Unit {
    /// Points per unit.
    pub fn scale(&self) -> f64 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => 72.0 / 25.4,
        }
    }

    pub fn from_pt(&self, pt: f64) -> f64 {
        pt / self.scale()
    }

    pub fn to_pt(&self, v: f64) -> f64 {
        v * self.scale()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Standard page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A3,
    A5,
    Letter,
    Legal,
    /// Custom size in points.
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns portrait (width, height) in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A3 => (841.89, 1190.55),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Returns portrait (width, height) in `unit`.
    ///
    /// ISO sizes are defined in whole millimetres; those are returned exactly
    /// so print widths like `210 - 2 * 10` come out without rounding noise.
    pub fn dimensions_in(&self, unit: Unit) -> (f64, f64) {
        let iso_mm = match self {
            PageSize::A4 => Some((210.0, 297.0)),
            PageSize::A3 => Some((297.0, 420.0)),
            PageSize::A5 => Some((148.0, 210.0)),
            _ => None,
        };
        match (unit, iso_mm) {
            (Unit::Mm, Some(dims)) => dims,
            _ => {
                let (w, h) = self.dimensions();
                (unit.from_pt(w), unit.from_pt(h))
            }
        }
    }
}

/// Edge values (top, right, bottom, left) used for margins and cell padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Configuration for a page canvas: size, margins, unit and base font.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Page size. Defaults to A4.
    #[serde(default)]
    pub size: PageSize,

    #[serde(default)]
    pub orientation: Orientation,

    /// Unit for margins, positions and every table dimension.
    #[serde(default)]
    pub unit: Unit,

    /// Page margins in `unit`.
    #[serde(default = "default_margin")]
    pub margin: Edges,

    #[serde(default)]
    pub font_family: FontFamily,

    /// Font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Stroke width for borders and lines, in `unit`.
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            orientation: Orientation::Portrait,
            unit: Unit::Mm,
            margin: default_margin(),
            font_family: FontFamily::Helvetica,
            font_size: default_font_size(),
            line_width: default_line_width(),
        }
    }
}

impl PageConfig {
    /// Page (width, height) in the configured unit, orientation applied.
    pub fn page_dimensions(&self) -> (f64, f64) {
        let (w, h) = self.size.dimensions_in(self.unit);
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

fn default_margin() -> Edges {
    Edges::uniform(10.0)
}

fn default_font_size() -> f64 {
    8.0
}

fn default_line_width() -> f64 {
    0.2
}
