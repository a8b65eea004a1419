//! # PDF Serializer
//!
//! Takes the recorded pages of a [`DocCanvas`](crate::canvas::DocCanvas) and
//! writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. Only the standard fonts are used,
//! so there is nothing to embed: every page shares the same four Type1 font
//! resources with WinAnsiEncoding.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- catalog, page tree, fonts, pages, content streams
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```

use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use crate::canvas::{CanvasPage, DrawOp};
use crate::font::StandardFont;
use crate::model::{Metadata, Unit};
use crate::style::Color;
use miniz_oxide::deflate::compress_to_vec_zlib;

pub struct PdfWriter;

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
}

struct PdfObject {
    data: Vec<u8>,
}

impl PdfBuilder {
    fn add(&mut self, data: Vec<u8>) -> usize {
        self.objects.push(PdfObject { data });
        self.objects.len() - 1
    }
}

/// Converts canvas coordinates (page unit, top-left origin) to PDF user
/// space (points, bottom-left origin).
struct PageTransform {
    unit: Unit,
    height_pt: f64,
}

impl PageTransform {
    fn len(&self, v: f64) -> f64 {
        self.unit.to_pt(v)
    }

    fn y(&self, y: f64) -> f64 {
        self.height_pt - self.unit.to_pt(y)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write recorded pages to a PDF byte vector.
    ///
    /// `page_size` is (width, height) in `unit`.
    pub fn write(
        &self,
        pages: &[CanvasPage],
        page_size: (f64, f64),
        unit: Unit,
        metadata: &Metadata,
    ) -> Vec<u8> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
        };

        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        builder.add(Vec::new());
        builder.add(Vec::new());
        builder.add(Vec::new());

        let font_ids: Vec<(StandardFont, usize)> = StandardFont::ALL
            .iter()
            .map(|font| {
                let dict = format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.pdf_name()
                );
                (*font, builder.add(dict.into_bytes()))
            })
            .collect();
        let font_resources: String = font_ids
            .iter()
            .map(|(font, id)| format!("/{} {} 0 R", font.resource_name(), id))
            .collect::<Vec<_>>()
            .join(" ");

        let transform = PageTransform {
            unit,
            height_pt: unit.to_pt(page_size.1),
        };
        let width_pt = unit.to_pt(page_size.0);

        let mut page_obj_ids: Vec<usize> = Vec::new();
        for page in pages {
            let content = self.build_content_stream(page, &transform);
            let compressed = compress_to_vec_zlib(&content, 6);

            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            let content_obj_id = builder.add(content_data);

            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {} >> >> >>",
                width_pt, transform.height_pt, content_obj_id, font_resources
            );
            page_obj_ids.push(builder.add(page_dict.into_bytes()));
        }

        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        let mut info = String::from("<< ");
        if let Some(ref title) = metadata.title {
            let _ = write!(info, "/Title ({}) ", Self::escape_pdf_string(title));
        }
        if let Some(ref author) = metadata.author {
            let _ = write!(info, "/Author ({}) ", Self::escape_pdf_string(author));
        }
        if let Some(ref subject) = metadata.subject {
            let _ = write!(info, "/Subject ({}) ", Self::escape_pdf_string(subject));
        }
        let creator = metadata.creator.as_deref().unwrap_or("pdf-invoice");
        let _ = write!(
            info,
            "/Creator ({}) /Producer (pdf-invoice {}) >>",
            Self::escape_pdf_string(creator),
            env!("CARGO_PKG_VERSION")
        );
        let info_obj_id = builder.add(info.into_bytes());

        self.serialize(&builder, info_obj_id)
    }

    /// Build the content stream for a single page.
    fn build_content_stream(&self, page: &CanvasPage, t: &PageTransform) -> Vec<u8> {
        let mut stream = Vec::new();
        for op in &page.ops {
            self.write_op(&mut stream, op, t);
        }
        stream
    }

    fn write_op(&self, stream: &mut Vec<u8>, op: &DrawOp, t: &PageTransform) {
        match op {
            DrawOp::Rect {
                x,
                y,
                w,
                h,
                stroke,
                fill,
                line_width,
            } => {
                let _ = writeln!(stream, "q");
                if let Some(c) = fill {
                    let _ = writeln!(stream, "{} rg", Self::color(c));
                }
                if let Some(c) = stroke {
                    let _ = writeln!(stream, "{} RG\n{:.3} w", Self::color(c), t.len(*line_width));
                }
                let _ = writeln!(
                    stream,
                    "{:.2} {:.2} {:.2} {:.2} re",
                    t.len(*x),
                    t.y(y + h),
                    t.len(*w),
                    t.len(*h)
                );
                let paint = match (fill.is_some(), stroke.is_some()) {
                    (true, true) => "B",
                    (true, false) => "f",
                    _ => "S",
                };
                let _ = writeln!(stream, "{}\nQ", paint);
            }

            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                line_width,
            } => {
                let _ = writeln!(
                    stream,
                    "q\n{} RG\n{:.3} w\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\nQ",
                    Self::color(color),
                    t.len(*line_width),
                    t.len(*x1),
                    t.y(*y1),
                    t.len(*x2),
                    t.y(*y2)
                );
            }

            DrawOp::Text {
                x,
                y,
                text,
                font,
                size,
                color,
            } => {
                let _ = writeln!(
                    stream,
                    "BT\n{} rg\n/{} {:.1} Tf\n{:.2} {:.2} Td",
                    Self::color(color),
                    font.resource_name(),
                    size,
                    t.len(*x),
                    t.y(*y)
                );
                let _ = writeln!(stream, "({}) Tj\nET", Self::encode_text(text));
            }
        }
    }

    fn color(c: &Color) -> String {
        format!("{:.3} {:.3} {:.3}", c.r, c.g, c.b)
    }

    /// Encode text as a literal string of WinAnsi bytes.
    fn encode_text(text: &str) -> String {
        let mut out = String::new();
        for ch in text.chars() {
            let b = unicode_to_winansi(ch).unwrap_or(b'?');
            match b {
                b'\\' => out.push_str("\\\\"),
                b'(' => out.push_str("\\("),
                b')' => out.push_str("\\)"),
                0x20..=0x7E => out.push(b as char),
                // Octal escape for bytes outside ASCII printable range
                _ => {
                    let _ = write!(out, "\\{:03o}", b);
                }
            }
        }
        out
    }

    /// Escape special characters in a PDF string.
    fn escape_pdf_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)")
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let _ = write!(output, "{} 0 obj\n", i);
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}

/// Map a Unicode codepoint to a WinAnsiEncoding byte value.
///
/// WinAnsiEncoding is based on Windows-1252. Codepoints in 0x20..=0x7E and
/// 0xA0..=0xFF map directly. The 0x80..=0x9F range contains special
/// mappings for smart quotes, bullets, dashes, etc.
pub fn unicode_to_winansi(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
        return Some(cp as u8);
    }
    match cp {
        0x20AC => Some(0x80), // Euro sign
        0x201A => Some(0x82), // Single low-9 quotation mark
        0x0192 => Some(0x83), // Latin small letter f with hook
        0x201E => Some(0x84), // Double low-9 quotation mark
        0x2026 => Some(0x85), // Horizontal ellipsis
        0x2020 => Some(0x86), // Dagger
        0x2021 => Some(0x87), // Double dagger
        0x02C6 => Some(0x88), // Modifier letter circumflex accent
        0x2030 => Some(0x89), // Per mille sign
        0x0160 => Some(0x8A), // Latin capital letter S with caron
        0x2039 => Some(0x8B), // Single left-pointing angle quotation
        0x0152 => Some(0x8C), // Latin capital ligature OE
        0x017D => Some(0x8E), // Latin capital letter Z with caron
        0x2018 => Some(0x91), // Left single quotation mark
        0x2019 => Some(0x92), // Right single quotation mark
        0x201C => Some(0x93), // Left double quotation mark
        0x201D => Some(0x94), // Right double quotation mark
        0x2022 => Some(0x95), // Bullet
        0x2013 => Some(0x96), // En dash
        0x2014 => Some(0x97), // Em dash
        0x02DC => Some(0x98), // Small tilde
        0x2122 => Some(0x99), // Trade mark sign
        0x0161 => Some(0x9A), // Latin small letter s with caron
        0x203A => Some(0x9B), // Single right-pointing angle quotation
        0x0153 => Some(0x9C), // Latin small ligature oe
        0x017E => Some(0x9E), // Latin small letter z with caron
        0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
        _ => None,
    }
}
