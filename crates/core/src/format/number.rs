//! Digit rendering: rounding, fraction trimming and grouping.

use std::str::FromStr;

use moneyfmt_shared::{FormatError, FormatResult};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::locale_data::{Grouping, LocaleConventions};

/// Renders a non-negative amount with the locale's separators.
///
/// Rounds half away from zero to `max_fraction` digits, then drops trailing
/// zeros down to `min_fraction` digits.
#[must_use]
pub fn render_digits(
    value: Decimal,
    min_fraction: u32,
    max_fraction: u32,
    conventions: &LocaleConventions,
) -> String {
    let mut rounded =
        value
            .abs()
            .round_dp_with_strategy(max_fraction, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(max_fraction);
    let text = rounded.to_string();

    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    join_parts(integer, fraction, min_fraction, conventions)
}

/// Renders a run of ASCII digits counting minor units, placing the decimal
/// point two digits from the right.
///
/// Used for whole numbers too large for a `Decimal`. The text shift is exact,
/// so no rounding applies.
#[must_use]
pub fn render_minor_digits(
    digits: &str,
    min_fraction: u32,
    conventions: &LocaleConventions,
) -> String {
    let digits = digits.trim_start_matches('0');
    let padded = format!("{digits:0>3}");
    let (integer, fraction) = padded.split_at(padded.len() - 2);
    join_parts(integer, fraction, min_fraction, conventions)
}

fn join_parts(
    integer: &str,
    fraction: &str,
    min_fraction: u32,
    conventions: &LocaleConventions,
) -> String {
    let min_len = usize::try_from(min_fraction).unwrap_or(usize::MAX);
    let mut fraction = fraction;
    while fraction.len() > min_len && fraction.ends_with('0') {
        fraction = &fraction[..fraction.len() - 1];
    }

    let mut out = group_integer(integer, conventions);
    if !fraction.is_empty() {
        out.push(conventions.decimal);
        out.push_str(fraction);
    }
    out
}

/// Inserts grouping separators into a run of ASCII digits.
#[must_use]
pub fn group_integer(digits: &str, conventions: &LocaleConventions) -> String {
    if digits.len() < 3 + conventions.min_grouping_digits {
        return digits.to_string();
    }

    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut size = 3;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        if conventions.grouping == Grouping::Indian {
            size = 2;
        }
    }
    groups.push(&digits[..end]);
    groups.reverse();

    let separator = conventions.group.to_string();
    groups.join(separator.as_str())
}

/// Parses a decimal amount such as `-500` or `12345.5`.
pub fn parse_amount(text: &str) -> FormatResult<Decimal> {
    Decimal::from_str(text.trim()).map_err(|_| FormatError::InvalidAmount(text.to_string()))
}
