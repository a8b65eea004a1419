//! # Style System
//!
//! The small amount of styling a table cell can carry: colors, the nine
//! alignment positions, font weight, and the closed set of [`CellStyle`]
//! variants that modify the canvas graphics state before a cell is drawn.

use crate::canvas::Canvas;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64, // 0.0 - 1.0
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds a color from 8-bit channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        match hex.len() {
            3 => Self::rgb8(
                channel(&hex[0..1].repeat(2)),
                channel(&hex[1..2].repeat(2)),
                channel(&hex[2..3].repeat(2)),
            ),
            6 => Self::rgb8(channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6])),
            _ => Color::BLACK,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// One of the nine alignment positions of text inside a cell.
///
/// The default is left-middle, which is what `Align::Left` means; the
/// unqualified horizontal names are the vertically centered positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    Left,
    Center,
    Right,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Align {
    pub fn horizontal(&self) -> HAlign {
        match self {
            Align::TopLeft | Align::Left | Align::BottomLeft => HAlign::Left,
            Align::TopCenter | Align::Center | Align::BottomCenter => HAlign::Center,
            Align::TopRight | Align::Right | Align::BottomRight => HAlign::Right,
        }
    }

    pub fn vertical(&self) -> VAlign {
        match self {
            Align::TopLeft | Align::TopCenter | Align::TopRight => VAlign::Top,
            Align::Left | Align::Center | Align::Right => VAlign::Middle,
            Align::BottomLeft | Align::BottomCenter | Align::BottomRight => VAlign::Bottom,
        }
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let align = match s.to_ascii_lowercase().as_str() {
            "top-left" => Align::TopLeft,
            "top-center" | "top" => Align::TopCenter,
            "top-right" => Align::TopRight,
            "left" | "middle-left" => Align::Left,
            "center" | "middle-center" | "middle" => Align::Center,
            "right" | "middle-right" => Align::Right,
            "bottom-left" => Align::BottomLeft,
            "bottom-center" | "bottom" => Align::BottomCenter,
            "bottom-right" => Align::BottomRight,
            other => return Err(format!("unknown alignment: {}", other)),
        };
        Ok(align)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// The part of the canvas state a cell style can change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicsState {
    pub fill: Color,
    pub stroke: Color,
    pub text: Color,
    pub weight: FontWeight,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            stroke: Color::BLACK,
            text: Color::BLACK,
            weight: FontWeight::Regular,
        }
    }
}

/// Closed set of per-cell styles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CellStyle {
    /// Background fill behind the cell.
    Fill { color: Color },
    /// Filled, bold cell with its own text color. Used for header rows.
    Heading { fill: Color, text: Color },
    /// Bold text, no fill.
    Strong,
}

impl CellStyle {
    pub fn fill(color: Color) -> Self {
        CellStyle::Fill { color }
    }

    pub fn apply_to(&self, state: &mut GraphicsState) {
        match *self {
            CellStyle::Fill { color } => state.fill = color,
            CellStyle::Heading { fill, text } => {
                state.fill = fill;
                state.text = text;
                state.weight = FontWeight::Bold;
            }
            CellStyle::Strong => state.weight = FontWeight::Bold,
        }
    }

    /// Applies the style to the canvas graphics state.
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let mut state = canvas.graphics_state();
        self.apply_to(&mut state);
        canvas.set_graphics_state(state);
    }

    /// Whether drawing the cell background should fill.
    pub fn fills(&self) -> bool {
        matches!(self, CellStyle::Fill { .. } | CellStyle::Heading { .. })
    }

    /// Font weight the style applies on top of `base`.
    pub fn font_weight(&self, base: FontWeight) -> FontWeight {
        match self {
            CellStyle::Heading { .. } | CellStyle::Strong => FontWeight::Bold,
            CellStyle::Fill { .. } => base,
        }
    }
}
