//! # Text Layout
//!
//! Line breaking and truncation for table cells.
//!
//! Widths come in through a per-character closure. The standard fonts have
//! no kerning, so the width of a string is exactly the sum of its character
//! widths and lines can be measured incrementally.

use crate::pdf::unicode_to_winansi;
use unicode_linebreak::{linebreaks, BreakOpportunity};

pub const ELLIPSIS: &str = "...";

/// Makes text safe for the WinAnsi-encoded standard fonts.
///
/// Line breaks survive (multi-line cells use them), tabs become a space and
/// every other character without a WinAnsi code point becomes `?`.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\n' => '\n',
            '\r' => '\r',
            '\t' => ' ',
            ch if unicode_to_winansi(ch).is_some() => ch,
            _ => '?',
        })
        .collect()
}

fn is_newline(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Compute UAX#14 break opportunities indexed by char position.
///
/// Each entry is the break opportunity *before* that character. Index 0 is
/// always `None`.
fn compute_break_opportunities(text: &str) -> Vec<Option<BreakOpportunity>> {
    let char_count = text.chars().count();
    let mut result = vec![None; char_count];

    // linebreaks() yields byte offsets of the start of the next segment.
    let mut byte_to_char = vec![0usize; text.len() + 1];
    for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
        byte_to_char[byte_idx] = char_idx;
    }
    byte_to_char[text.len()] = char_count;

    for (byte_offset, opp) in linebreaks(text) {
        let char_idx = byte_to_char[byte_offset];
        if char_idx < char_count {
            result[char_idx] = Some(opp);
        }
    }

    result
}

fn make_line(chars: &[char]) -> String {
    let line: String = chars.iter().filter(|c| !is_newline(**c)).collect();
    line.trim_end().to_string()
}

/// Greedy line breaking at UAX#14 opportunities.
///
/// A word wider than `max_width` is broken between characters. Whitespace
/// never forces a break on its own and is trimmed from line ends. Empty text
/// yields a single empty line, so callers can always count at least one line.
pub fn wrap_lines<F>(text: &str, max_width: f64, char_width: F) -> Vec<String>
where
    F: Fn(char) -> f64,
{
    if text.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = text.chars().collect();
    let break_opps = compute_break_opportunities(text);

    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_width = 0.0;
    let mut last_break_point: Option<usize> = None;

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 {
            match break_opps[i] {
                Some(BreakOpportunity::Mandatory) => {
                    lines.push(make_line(&chars[line_start..i]));
                    line_start = i;
                    line_width = 0.0;
                    last_break_point = None;
                }
                Some(BreakOpportunity::Allowed) => last_break_point = Some(i - 1),
                None => {}
            }
        }

        if is_newline(ch) {
            continue;
        }

        let w = char_width(ch);
        if ch.is_whitespace() {
            line_width += w;
            continue;
        }

        if line_width + w > max_width && line_start < i {
            match last_break_point {
                Some(bp) if bp >= line_start => {
                    lines.push(make_line(&chars[line_start..=bp]));
                    line_start = bp + 1;
                    line_width = chars[line_start..=i]
                        .iter()
                        .filter(|c| !is_newline(**c))
                        .map(|c| char_width(*c))
                        .sum();
                }
                _ => {
                    lines.push(make_line(&chars[line_start..i]));
                    line_start = i;
                    line_width = w;
                }
            }
            last_break_point = None;
            continue;
        }

        line_width += w;
    }

    if line_start < chars.len() {
        lines.push(make_line(&chars[line_start..]));
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Shortens `text` to the longest prefix that still fits `max_width` with
/// `"..."` appended.
///
/// Text that already fits is returned unchanged. When not even the ellipsis
/// alone fits, the result is empty.
pub fn truncate_with_ellipsis<F>(text: &str, max_width: f64, char_width: F) -> String
where
    F: Fn(char) -> f64,
{
    let widths: Vec<f64> = text.chars().map(&char_width).collect();
    let full: f64 = widths.iter().sum();
    if full <= max_width {
        return text.to_string();
    }

    let ellipsis: f64 = ELLIPSIS.chars().map(&char_width).sum();
    let mut prefix = full;
    for (n, w) in widths.iter().enumerate().rev() {
        prefix -= w;
        if prefix + ellipsis <= max_width {
            let kept: String = text.chars().take(n).collect();
            return kept + ELLIPSIS;
        }
    }

    String::new()
}
