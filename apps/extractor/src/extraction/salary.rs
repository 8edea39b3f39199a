//! Salary parsing from mixed notations: `$120k–150k`, `EUR 80 000 - 100 000`,
//! `5k-7k PLN`, `from 9000 zł`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::models::skill_matrix::{Currency, Salary};

/// An amount with optional thousands groups (`80 000`, `120,000`, `80.000`)
/// and an optional short decimal tail (`1.5`). Greedy, so a trailing bound is
/// never cut short (`9000` is not read as `900`).
const AMOUNT: &str = r"[0-9]+(?:[ ,.][0-9]{3})*(?:\.[0-9]{1,2})?";

lazy_static! {
    static ref CURRENCY_CODE: Regex = Regex::new(r"(?i)\b(?:usd|eur|pln|gbp)\b").unwrap();
    static ref CURRENCY_SYMBOL: Regex = Regex::new(r"(?i)\$|€|zł|£").unwrap();
    static ref RANGE: Regex = Regex::new(&format!(
        r"(?i)({AMOUNT})[ \t]*(?:(k)\b)?[ \t]*[-–—][ \t]*[$€£]?[ \t]*({AMOUNT})[ \t]*(?:(k)\b)?"
    ))
    .unwrap();
    static ref LOWER_BOUND: Regex = Regex::new(&format!(
        r"(?i)\b(?:from|min)\.?:?[ \t]*({AMOUNT})[ \t]*(?:(k)\b)?"
    ))
    .unwrap();
}

/// Extracts currency and bounds. Returns `None` when no currency can be
/// resolved, since a salary without a currency is not representable.
///
/// Bounds that are zero or overflow are dropped, and a reversed range is
/// swapped so `min <= max` always holds.
pub fn parse_salary(text: &str) -> Option<Salary> {
    let text = text.replace(['\u{a0}', '\u{202f}'], " ");

    let currency = detect_currency(&text);
    let (min, max) = parse_bounds(&text);
    tracing::debug!(?currency, ?min, ?max, "salary candidates");

    let currency = currency?;
    let (min, max) = match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        bounds => bounds,
    };

    Some(Salary { currency, min, max })
}

/// First currency code in the text, or the first symbol when no code is
/// present. Symbols match without word boundaries (`€80 000`).
pub fn detect_currency(text: &str) -> Option<Currency> {
    let token = CURRENCY_CODE
        .find(text)
        .or_else(|| CURRENCY_SYMBOL.find(text))?
        .as_str()
        .to_lowercase();
    match token.as_str() {
        "usd" | "$" => Some(Currency::Usd),
        "eur" | "€" => Some(Currency::Eur),
        "pln" | "zł" => Some(Currency::Pln),
        "gbp" | "£" => Some(Currency::Gbp),
        _ => None,
    }
}

/// Range first, then a single `from`/`min` lower bound.
fn parse_bounds(text: &str) -> (Option<u64>, Option<u64>) {
    if let Some(caps) = RANGE.captures(text) {
        return (amount_at(&caps, 1, 2), amount_at(&caps, 3, 4));
    }
    if let Some(caps) = LOWER_BOUND.captures(text) {
        return (amount_at(&caps, 1, 2), None);
    }
    (None, None)
}

fn amount_at(caps: &Captures<'_>, number: usize, suffix: usize) -> Option<u64> {
    let raw = caps.get(number)?.as_str();
    parse_amount(raw, caps.get(suffix).is_some())
}

/// Converts a matched amount to a positive integer. Grouping separators are
/// stripped; a 1–2 digit tail after the last separator is read as a decimal
/// fraction, which only matters with a `k` suffix (`1.5k` = 1500).
pub fn parse_amount(raw: &str, thousands: bool) -> Option<u64> {
    let multiplier: u64 = if thousands { 1000 } else { 1 };

    let (whole, fraction) = match raw.rfind([' ', ',', '.']) {
        Some(pos) if (1..=2).contains(&(raw.len() - pos - 1)) => (&raw[..pos], &raw[pos + 1..]),
        _ => (raw, ""),
    };

    let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
    let mut value = digits.parse::<u64>().ok()?.checked_mul(multiplier)?;

    if !fraction.is_empty() {
        let scale = 10_u64.pow(fraction.len() as u32);
        let fraction: u64 = fraction.parse().ok()?;
        value = value.checked_add(fraction * multiplier / scale)?;
    }

    (value > 0).then_some(value)
}
