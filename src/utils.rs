//! Parsing and display helpers shared by the engine and the UI.

use std::str::FromStr;

use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{AppError, Result};

// ── Money ──────────────────────────────────────────────────────────────────────

/// Round to whole cents, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a value as US currency, e.g. `$979,899.62` or `-$12.50`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_cents(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}

// ── Input parsing ──────────────────────────────────────────────────────────────

/// Parse a user-typed number. Surrounding whitespace, `$`, `%` and `,`
/// thousands separators are ignored.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | '%' | ','))
        .collect();
    if cleaned.is_empty() {
        return Err(AppError::invalid(field, "value is required"));
    }
    Decimal::from_str(cleaned.trim())
        .map_err(|_| AppError::invalid(field, format!("'{}' is not a number", raw.trim())))
}

// ── Dates ──────────────────────────────────────────────────────────────────────

/// `Apr, 2054` style month label.
pub fn format_month(date: Date) -> String {
    date.strftime("%b, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(979899.62)), "$979,899.62");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
        assert_eq!(format_currency(dec!(225)), "$225.00");
        assert_eq!(format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn currency_rounds_half_up_and_keeps_sign() {
        assert_eq!(format_currency(dec!(2.005)), "$2.01");
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn parse_tolerates_symbols() {
        assert_eq!(parse_decimal("x", " $86,740 ").unwrap(), dec!(86740));
        assert_eq!(parse_decimal("x", "7.77%").unwrap(), dec!(7.77));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_decimal("Loan Amount", "abc").unwrap_err();
        assert_eq!(err.to_string(), "Loan Amount: 'abc' is not a number");
        assert!(parse_decimal("Loan Amount", "  ").is_err());
    }

    #[test]
    fn month_label() {
        assert_eq!(format_month(date(2054, 4, 19)), "Apr, 2054");
    }
}
