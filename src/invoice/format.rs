//! Number, money and date formatting under a [`Locale`].

use super::i18n::{DateFormat, Locale};
use crate::error::InvoiceError;

/// `value` with exactly `decimals` fraction digits and grouped thousands.
pub fn number(value: f64, decimals: usize, locale: &Locale) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (k, ch) in digits.iter().enumerate() {
        if k > 0 && (digits.len() - k) % 3 == 0 {
            grouped.push_str(&locale.thousands_separator);
        }
        grouped.push(*ch);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push_str(&locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

/// A quantity with up to two fraction digits, trailing zeros dropped.
pub fn quantity(value: f64, locale: &Locale) -> String {
    let full = number(value, 2, locale);
    match full.rsplit_once(locale.decimal_separator.as_str()) {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}{}{}", int_part, locale.decimal_separator, frac)
            }
        }
        None => full,
    }
}

/// `1.234,56 EUR`, or `-` when there is no value.
pub fn money(value: Option<f64>, locale: &Locale) -> String {
    match value {
        Some(v) => format!("{} {}", number(v, 2, locale), locale.currency),
        None => "-".to_string(),
    }
}

/// Tax as money with its rate on a second line. A rate without an amount
/// shows the rate alone.
pub fn tax(value: Option<f64>, percentage: Option<f64>, locale: &Locale) -> String {
    match (value, percentage) {
        (Some(_), Some(p)) => format!("{}\n{}%", money(value, locale), quantity(p, locale)),
        (None, Some(p)) => format!("{}%", quantity(p, locale)),
        _ => money(value, locale),
    }
}

/// Amount with its unit. Rows without both count as a single item.
pub fn amount(value: Option<f64>, unit: Option<&str>, locale: &Locale) -> String {
    match (value, unit) {
        (Some(v), Some(u)) => format!("{} {}", quantity(v, locale), u),
        _ => "1".to_string(),
    }
}

/// A fixed discount as money, else a percentage, else `-`.
pub fn discount(percentage: Option<f64>, fixed: Option<f64>, locale: &Locale) -> String {
    if fixed.is_some() {
        return money(fixed, locale);
    }
    match percentage {
        Some(p) => format!("{}%", quantity(p, locale)),
        None => "-".to_string(),
    }
}

/// Reformats an ISO date (`YYYY-MM-DD`, optionally followed by a time part).
pub fn date(iso: &str, locale: &Locale) -> Result<String, InvoiceError> {
    let invalid = || InvoiceError::InvalidDate {
        value: iso.to_string(),
    };
    let day_part = iso.get(..10).ok_or_else(invalid)?;
    let mut parts = day_part.split('-');
    let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(invalid()),
    };
    let numeric = |s: &str, len: usize| s.len() == len && s.chars().all(|c| c.is_ascii_digit());
    if !numeric(y, 4) || !numeric(m, 2) || !numeric(d, 2) {
        return Err(invalid());
    }
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }

    Ok(match locale.date_format {
        DateFormat::Iso => format!("{}-{}-{}", y, m, d),
        DateFormat::DayMonthYear => format!("{}.{}.{}", d, m, y),
    })
}
