//! Amount/unit micro-parser for raw amount tokens.
//!
//! A raw token is the trailing field of a transfer line, already trimmed
//! of surrounding whitespace. Two notations are accepted, tried in order:
//!
//! - cash: `$123.45`, `€-1,000.45` — a currency symbol immediately
//!   followed by a signed decimal; the sign is only valid after the
//!   symbol, never before it
//! - commodity: `2 FOO`, `-123.45 FOO` — a signed decimal, one space,
//!   and a unit label

use rust_decimal::Decimal;
use std::str::FromStr;
use tally_core::Amount;

use crate::error::TransferError;

/// Currency symbols accepted in cash notation.
pub const CASH_SYMBOLS: [char; 2] = ['$', '€'];

/// Parse a raw amount token into a decimal quantity and its unit.
///
/// Fails with [`TransferError::BadAmount`] naming the original token when
/// neither notation matches or the numeral cannot be converted.
pub fn parse_raw_amount(raw: &str) -> Result<Amount, TransferError> {
    let bad = || TransferError::BadAmount(raw.to_string());

    // cash notation: symbol first, numeral occupies the rest
    if let Some(symbol) = raw.chars().next().filter(|c| CASH_SYMBOLS.contains(c)) {
        let numeral = &raw[symbol.len_utf8()..];
        let number = parse_numeral(numeral).ok_or_else(bad)?;
        return Ok(Amount::new(number, symbol.to_string()));
    }

    // commodity notation: numeral, a single space, then the unit label
    if let Some((numeral, unit)) = raw.split_once(' ') {
        if is_unit_label(unit) {
            let number = parse_numeral(numeral).ok_or_else(bad)?;
            return Ok(Amount::new(number, unit));
        }
    }

    Err(bad())
}

/// Whether `unit` is a valid commodity label: non-empty, free of
/// whitespace, and not itself starting with a currency symbol (so
/// `5 $5.00` is rejected rather than read as unit `$5.00`).
#[must_use]
pub fn is_unit_label(unit: &str) -> bool {
    !unit.is_empty()
        && !unit.contains(char::is_whitespace)
        && !unit.starts_with(CASH_SYMBOLS)
}

/// Whether `numeral` has the shape of a signed decimal with optional
/// comma grouping. Conversion may still fail (e.g. `1.2.3`).
#[must_use]
pub fn is_numeral(numeral: &str) -> bool {
    let digits = numeral.strip_prefix('-').unwrap_or(numeral);
    !digits.is_empty()
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
        && digits.chars().any(|c| c.is_ascii_digit())
}

/// Convert a signed grouped numeral to a decimal.
///
/// Grouping commas are stripped before conversion. At least one digit is
/// required: a bare symbol such as `$` or `$-` is not an amount.
fn parse_numeral(numeral: &str) -> Option<Decimal> {
    if !is_numeral(numeral) {
        return None;
    }
    let mut cleaned: String = numeral.chars().filter(|c| *c != ',').collect();
    // Decimal rejects a dangling point; the grammar allows `5.` and `.45`
    if cleaned.ends_with('.') {
        cleaned.pop();
    }
    if let Some(frac) = cleaned.strip_prefix('.') {
        cleaned = format!("0.{frac}");
    } else if let Some(frac) = cleaned.strip_prefix("-.") {
        cleaned = format!("-0.{frac}");
    }
    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parsed(raw: &str) -> Amount {
        parse_raw_amount(raw).unwrap_or_else(|e| panic!("expected {raw} to parse: {e}"))
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        let cases = [
            "foo", "-$4", "5", "5.32", "2 dog dogs", "$ 5", "5 $5.00", "$5.00 5", "$3.00 dogs",
            "$$2.00", "$", "€", "$-", "$1.2.3",
        ];
        for case in cases {
            let err = parse_raw_amount(case).unwrap_err();
            assert_eq!(err, TransferError::BadAmount(case.to_string()));
        }
    }

    #[test]
    fn test_dollars() {
        assert_eq!(parsed("$123.45"), Amount::new(dec!(123.45), "$"));
        assert_eq!(parsed("$123"), Amount::new(dec!(123), "$"));
        assert_eq!(parsed("$-123.45"), Amount::new(dec!(-123.45), "$"));
        assert_eq!(parsed("$-123"), Amount::new(dec!(-123), "$"));
        assert_eq!(parsed("$.45"), Amount::new(dec!(0.45), "$"));
        assert_eq!(parsed("$0.45"), Amount::new(dec!(0.45), "$"));
        assert_eq!(parsed("$1,000.45"), Amount::new(dec!(1000.45), "$"));
        assert_eq!(parsed("$-1,000.45"), Amount::new(dec!(-1000.45), "$"));
        assert_eq!(parsed("$1,000,000.45"), Amount::new(dec!(1000000.45), "$"));
        assert_eq!(parsed("$1000.45"), Amount::new(dec!(1000.45), "$"));
    }

    #[test]
    fn test_euros() {
        assert_eq!(parsed("€123.45"), Amount::new(dec!(123.45), "€"));
        assert_eq!(parsed("€123"), Amount::new(dec!(123), "€"));
        assert_eq!(parsed("€-123.45"), Amount::new(dec!(-123.45), "€"));
        assert_eq!(parsed("€-123"), Amount::new(dec!(-123), "€"));
    }

    #[test]
    fn test_commodities() {
        assert_eq!(parsed("123.45 FOO"), Amount::new(dec!(123.45), "FOO"));
        assert_eq!(parsed("123 FOO"), Amount::new(dec!(123), "FOO"));
        assert_eq!(parsed("-123.45 FOO"), Amount::new(dec!(-123.45), "FOO"));
        assert_eq!(parsed("-123 FOO"), Amount::new(dec!(-123), "FOO"));
    }

    #[test]
    fn test_dangling_decimal_point() {
        assert_eq!(parsed("$5."), Amount::new(dec!(5), "$"));
        assert_eq!(parsed("-.5 FOO"), Amount::new(dec!(-0.5), "FOO"));
    }

    #[test]
    fn test_is_unit_label() {
        assert!(is_unit_label("FOO"));
        assert!(is_unit_label("widgets"));
        assert!(!is_unit_label(""));
        assert!(!is_unit_label("dog dogs"));
        assert!(!is_unit_label("$5.00"));
        assert!(!is_unit_label("€"));
    }

    #[test]
    fn test_is_numeral() {
        assert!(is_numeral("123"));
        assert!(is_numeral("-123.45"));
        assert!(is_numeral("1,000.45"));
        assert!(is_numeral(".45"));
        assert!(!is_numeral(""));
        assert!(!is_numeral("-"));
        assert!(!is_numeral("."));
        assert!(!is_numeral("12a"));
        assert!(!is_numeral("--1"));
    }
}
