//! Display formatting for calculation results.
//!
//! The engine returns raw `f64` values. These helpers turn them into the
//! strings a results table shows, with `"-"` standing in for anything that is
//! not a finite number.

use serde::Serialize;

use oligo_seq::Oligo;

/// Placeholder shown for NaN and infinite values.
pub const NOT_A_NUMBER: &str = "-";

/// Enough fractional digits to print any `f64` exactly (subnormals need 1074).
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with ties broken away from zero.
///
/// Non-ties are correctly rounded by `{:.N}` already; only a value whose exact
/// decimal expansion is `...5000...` past `decimals` needs the larger digit
/// instead of the even one.
fn to_fixed(value: f64, decimals: usize) -> String {
    // -0.0 prints without a sign
    let value = if value == 0.0 { 0.0 } else { value };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let tail = frac.get(decimals..).unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{value:.decimals$}");
    }

    let mut digits: Vec<u8> = int_part.bytes().chain(frac[..decimals].bytes()).collect();
    let mut i = digits.len();
    loop {
        if i == 0 {
            digits.insert(0, b'1');
            break;
        }
        i -= 1;
        if digits[i] == b'9' {
            digits[i] = b'0';
        } else {
            digits[i] += 1;
            break;
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&b| b as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&b| b as char));
    }
    out
}

/// Fixed-point formatting to `decimals` places, or `"-"` when not finite.
///
/// An exact halfway value rounds away from zero (`2.5` → `"3"`), matching
/// the results table of the original browser calculator.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_A_NUMBER.to_string();
    }
    to_fixed(value, decimals)
}

/// A fraction rendered as a percentage (`0.25` → `"25.00%"`), or `"-"`.
///
/// The fraction is scaled by 100 first and then rounded like [`format_number`].
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return NOT_A_NUMBER.to_string();
    }
    format!("{}%", to_fixed(scaled, decimals))
}

/// A parent sequence split around one position, for highlighting the base
/// a deletion variant removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkedSequence {
    pub before: String,
    pub deleted: String,
    pub after: String,
}

/// Split `parent` around the 1-based `position`.
///
/// Positions outside `1..=len` leave `deleted` empty and put the whole
/// sequence in `before`.
pub fn mark_deletion(parent: &Oligo, position: usize) -> MarkedSequence {
    let s = parent.as_str();
    match position.checked_sub(1).filter(|&i| i < s.len()) {
        Some(i) => MarkedSequence {
            before: s[..i].to_string(),
            deleted: s[i..i + 1].to_string(),
            after: s[i + 1..].to_string(),
        },
        None => MarkedSequence {
            before: s.to_string(),
            deleted: String::new(),
            after: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_rounding() {
        assert_eq!(format_number(1253.755_000_1, 2), "1253.76");
        assert_eq!(format_number(1.0, 0), "1");
        assert_eq!(format_number(-18.015, 3), "-18.015");
    }

    #[test]
    fn halfway_rounds_away_from_zero() {
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(0.5, 0), "1");
        assert_eq!(format_number(0.25, 1), "0.3");
        assert_eq!(format_number(9.5, 0), "10");
        assert_eq!(format_number(99.5, 0), "100");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(-0.125, 2), "-0.13");
    }

    #[test]
    fn near_halfway_follows_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_number(1.005, 2), "1.00");
        // 0.1 + 0.2 is 0.30000000000000004
        assert_eq!(format_number(0.1 + 0.2, 1), "0.3");
    }

    #[test]
    fn zero_and_negative_zero() {
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(-0.0, 2), "0.00");
        assert_eq!(format_number(-0.001, 2), "-0.00");
    }

    #[test]
    fn halfway_percentages() {
        assert_eq!(format_percentage(0.125, 0), "13%");
        assert_eq!(format_percentage(1.0 / 32.0, 2), "3.13%");
        assert_eq!(format_percentage(1.0 / 8.0, 1), "12.5%");
    }

    #[test]
    fn non_finite_numbers_show_dash() {
        assert_eq!(format_number(f64::NAN, 2), "-");
        assert_eq!(format_number(f64::INFINITY, 2), "-");
        assert_eq!(format_percentage(f64::NEG_INFINITY, 2), "-");
    }

    #[test]
    fn percentages() {
        assert_eq!(format_percentage(0.25, 2), "25.00%");
        assert_eq!(format_percentage(1.0 / 3.0, 1), "33.3%");
        assert_eq!(format_percentage(1.0, 0), "100%");
    }

    #[test]
    fn marks_each_position() {
        let parent = Oligo::parse("ACGT").unwrap();
        assert_eq!(
            mark_deletion(&parent, 1),
            MarkedSequence { before: "".into(), deleted: "A".into(), after: "CGT".into() }
        );
        assert_eq!(
            mark_deletion(&parent, 3),
            MarkedSequence { before: "AC".into(), deleted: "G".into(), after: "T".into() }
        );
        assert_eq!(mark_deletion(&parent, 4).after, "");
    }

    #[test]
    fn out_of_range_position_marks_nothing() {
        let parent = Oligo::parse("AC").unwrap();
        assert_eq!(mark_deletion(&parent, 0).deleted, "");
        assert_eq!(mark_deletion(&parent, 3).before, "AC");
    }
}
