//! # Canvas
//!
//! The drawing surface the table engine renders onto. The engine only sees
//! the [`Measure`] and [`Canvas`] traits; [`DocCanvas`] is the concrete
//! implementation used for PDF output.
//!
//! ```text
//! Table::generate ──> Canvas (cursor, print area, draw ops, page breaks)
//!                        │
//!                     DocCanvas ── pages: Vec<CanvasPage> ──> PdfWriter
//! ```
//!
//! All coordinates are in the page unit with the origin at the top-left
//! corner of the page and y growing downwards. The cursor is the top-left
//! corner of the next thing to draw.

use crate::font::{FontContext, StandardFont};
use crate::model::{Edges, Metadata, PageConfig};
use crate::pdf::PdfWriter;
use crate::style::{Align, Color, FontWeight, GraphicsState, HAlign, VAlign};
use crate::text::wrap_lines;

/// Text metrics, the part of a canvas the sizers need.
pub trait Measure {
    /// Advance width of `ch` in the page unit.
    fn char_width(&self, ch: char, weight: FontWeight) -> f64;

    /// Height of the current font in the page unit.
    fn font_height(&self) -> f64;

    fn string_width(&self, text: &str, weight: FontWeight) -> f64 {
        text.chars().map(|c| self.char_width(c, weight)).sum()
    }

    /// Splits `text` into lines no wider than `width`.
    fn split_text(&self, text: &str, width: f64, weight: FontWeight) -> Vec<String> {
        wrap_lines(text, width, |c| self.char_width(c, weight))
    }
}

/// A paged drawing surface with a single shared cursor.
pub trait Canvas: Measure {
    fn cursor(&self) -> (f64, f64);
    fn set_cursor(&mut self, x: f64, y: f64);

    /// Width between the left and right margins.
    fn print_width(&self) -> f64;
    /// Usable height of a fresh page.
    fn print_height(&self) -> f64;
    /// Height left between the cursor and the bottom of the print area.
    fn remaining_print_height(&self) -> f64;

    fn graphics_state(&self) -> GraphicsState;
    fn set_graphics_state(&mut self, state: GraphicsState);

    /// Rectangle stroked with the stroke color and/or filled with the fill
    /// color. The cursor does not move.
    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, border: bool, fill: bool);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// One line of text aligned inside a `w × h` box at the cursor. The cursor
    /// moves right by `w`.
    fn draw_text(&mut self, text: &str, w: f64, h: f64, align: Align);

    /// Lines of text stacked at `line_height` inside width `w`. The cursor
    /// moves below the block.
    fn draw_text_block(&mut self, lines: &[String], w: f64, line_height: f64, align: HAlign);

    /// Starts a new page and moves the cursor to the top-left of its print
    /// area.
    fn page_break(&mut self);
}

/// A recorded drawing operation. Coordinates in the page unit, top-left
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
        line_width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        line_width: f64,
    },
    Text {
        x: f64,
        /// Baseline.
        y: f64,
        text: String,
        font: StandardFont,
        /// Size in points.
        size: f64,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CanvasPage {
    pub ops: Vec<DrawOp>,
}

impl CanvasPage {
    /// All text drawn on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Text ops whose content equals `text`, with their (x, baseline).
    pub fn find_text(&self, text: &str) -> Vec<(f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, text: t, .. } if t == text => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

/// In-memory page canvas recording draw operations per page.
#[derive(Debug, Clone)]
pub struct DocCanvas {
    config: PageConfig,
    font: FontContext,
    page_width: f64,
    page_height: f64,
    margin: Edges,
    footer_reserve: f64,
    pages: Vec<CanvasPage>,
    current: usize,
    x: f64,
    y: f64,
    state: GraphicsState,
}

impl DocCanvas {
    /// A canvas with one empty page and the cursor at the top-left of its
    /// print area.
    pub fn new(config: PageConfig) -> Self {
        let (page_width, page_height) = config.page_dimensions();
        let font = FontContext::new(config.font_family, config.font_size);
        let margin = config.margin;
        Self {
            config,
            font,
            page_width,
            page_height,
            margin,
            footer_reserve: 0.0,
            pages: vec![CanvasPage::default()],
            current: 0,
            x: margin.left,
            y: margin.top,
            state: GraphicsState::default(),
        }
    }

    /// A4 portrait in millimetres, margins 10, Helvetica 8pt, line width 0.2.
    pub fn a4() -> Self {
        Self::new(PageConfig::default())
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Page (width, height) in the page unit.
    pub fn page_size(&self) -> (f64, f64) {
        (self.page_width, self.page_height)
    }

    pub fn margins(&self) -> Edges {
        self.margin
    }

    /// Replaces the margins. Used for temporary indentation; the cursor is
    /// not moved.
    pub fn set_margins(&mut self, margin: Edges) {
        self.margin = margin;
    }

    /// Excludes `height` at the bottom of every page from the print area.
    pub fn set_footer_reserve(&mut self, height: f64) {
        self.footer_reserve = height.max(0.0);
    }

    pub fn footer_reserve(&self) -> f64 {
        self.footer_reserve
    }

    /// Font size in points.
    pub fn font_size(&self) -> f64 {
        self.font.size
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font.size = size;
    }

    /// `font_height() * factor`.
    pub fn line_height(&self, factor: f64) -> f64 {
        self.font_height() * factor
    }

    /// Moves the cursor to the left margin, `h` further down.
    pub fn ln(&mut self, h: f64) {
        self.x = self.margin.left;
        self.y += h;
    }

    /// Bottom edge of the print area.
    pub fn print_bottom(&self) -> f64 {
        self.page_height - self.margin.bottom - self.footer_reserve
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the page being drawn on.
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Makes an existing page the drawing target again. Returns `false`
    /// when there is no such page.
    pub fn select_page(&mut self, index: usize) -> bool {
        if index < self.pages.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn pages(&self) -> &[CanvasPage] {
        &self.pages
    }

    /// Serialises all pages into a PDF document.
    pub fn to_pdf(&self, metadata: &Metadata) -> Vec<u8> {
        PdfWriter::new().write(
            &self.pages,
            (self.page_width, self.page_height),
            self.config.unit,
            metadata,
        )
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.get_mut(self.current) {
            page.ops.push(op);
        }
    }

    fn current_font(&self) -> StandardFont {
        StandardFont::resolve(self.font.family, self.state.weight)
    }

    fn text_op(&self, x: f64, baseline: f64, text: &str) -> DrawOp {
        DrawOp::Text {
            x,
            y: baseline,
            text: text.to_string(),
            font: self.current_font(),
            size: self.font.size,
            color: self.state.text,
        }
    }

    fn horizontal_offset(&self, text: &str, w: f64, align: HAlign) -> f64 {
        let tw = self.string_width(text, self.state.weight);
        match align {
            HAlign::Left => 0.0,
            HAlign::Center => (w - tw) / 2.0,
            HAlign::Right => w - tw,
        }
    }
}

impl Measure for DocCanvas {
    fn char_width(&self, ch: char, weight: FontWeight) -> f64 {
        self.config.unit.from_pt(self.font.char_width(ch, weight))
    }

    fn font_height(&self) -> f64 {
        self.config.unit.from_pt(self.font.size)
    }
}

impl Canvas for DocCanvas {
    fn cursor(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn set_cursor(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn print_width(&self) -> f64 {
        self.page_width - self.margin.horizontal()
    }

    fn print_height(&self) -> f64 {
        self.print_bottom() - self.margin.top
    }

    fn remaining_print_height(&self) -> f64 {
        self.print_bottom() - self.y
    }

    fn graphics_state(&self) -> GraphicsState {
        self.state
    }

    fn set_graphics_state(&mut self, state: GraphicsState) {
        self.state = state;
    }

    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, border: bool, fill: bool) {
        if !border && !fill {
            return;
        }
        self.push(DrawOp::Rect {
            x,
            y,
            w,
            h,
            stroke: border.then_some(self.state.stroke),
            fill: fill.then_some(self.state.fill),
            line_width: self.config.line_width,
        });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: self.state.stroke,
            line_width: self.config.line_width,
        });
    }

    fn draw_text(&mut self, text: &str, w: f64, h: f64, align: Align) {
        if !text.is_empty() {
            let fh = self.font_height();
            // Baseline sits 0.3 font heights below the centre of the line box.
            let center = match align.vertical() {
                VAlign::Top => self.y + fh / 2.0,
                VAlign::Middle => self.y + h / 2.0,
                VAlign::Bottom => self.y + h - fh / 2.0,
            };
            let x = self.x + self.horizontal_offset(text, w, align.horizontal());
            let op = self.text_op(x, center + 0.3 * fh, text);
            self.push(op);
        }
        self.x += w;
    }

    fn draw_text_block(&mut self, lines: &[String], w: f64, line_height: f64, align: HAlign) {
        let x0 = self.x;
        let fh = self.font_height();
        for line in lines {
            if !line.is_empty() {
                let x = x0 + self.horizontal_offset(line, w, align);
                let op = self.text_op(x, self.y + line_height / 2.0 + 0.3 * fh, line);
                self.push(op);
            }
            self.y += line_height;
        }
        self.x = x0;
    }

    fn page_break(&mut self) {
        self.pages.push(CanvasPage::default());
        self.current = self.pages.len() - 1;
        self.x = self.margin.left;
        self.y = self.margin.top;
        log::debug!("page break: now on page {}", self.pages.len());
    }
}
