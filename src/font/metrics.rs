//! Advance widths of the standard PDF fonts, from the Adobe Core14 AFM files.
//!
//! Widths are in 1/1000 em. The ASCII tables cover U+0020 to U+007E; the few
//! Latin-1 characters that show up in invoices (umlauts, sharp s, euro,
//! section, degree) get explicit values and everything else falls back to
//! the width of a digit.

/// Helvetica, U+0020..=U+007E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold, U+0020..=U+007E.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

const FALLBACK_WIDTH: u16 = 556;
const COURIER_WIDTH: u16 = 600;

/// Width table of one standard font.
#[derive(Debug, Clone, Copy)]
pub enum StandardFontMetrics {
    Helvetica,
    HelveticaBold,
    /// Courier and Courier-Bold are monospaced at 600.
    Monospace,
}

impl StandardFontMetrics {
    /// Advance width of `ch` in 1/1000 em.
    pub fn advance(&self, ch: char) -> u16 {
        let table = match self {
            Self::Monospace => return COURIER_WIDTH,
            Self::Helvetica => &HELVETICA,
            Self::HelveticaBold => &HELVETICA_BOLD,
        };
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            return table[(code - 0x20) as usize];
        }
        let bold = matches!(self, Self::HelveticaBold);
        match (ch, bold) {
            ('Ä', true) => 722,
            ('Ä', false) => 667,
            ('Ö', _) => 778,
            ('Ü', _) => 722,
            ('ö' | 'ü', true) => 611,
            ('ß', _) => 611,
            ('ä' | 'ö' | 'ü' | '€' | '§', _) => 556,
            ('°', _) => 400,
            ('\u{a0}', _) => 278,
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of a character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        self.advance(ch) as f64 / 1000.0 * font_size
    }

    /// Width of a string in points.
    pub fn measure_string(&self, text: &str, font_size: f64) -> f64 {
        let units: u32 = text.chars().map(|c| self.advance(c) as u32).sum();
        units as f64 / 1000.0 * font_size
    }
}
