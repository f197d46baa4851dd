//! Property-based tests for money formatting.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::formatter::MoneyFormatter;
use super::locale_data::supported_locales;
use moneyfmt_shared::types::Locale;

fn en_us() -> MoneyFormatter {
    MoneyFormatter::new(&Locale::default())
}

/// Strategy to generate minor-unit amounts across the i64 range used in practice.
fn amount_minor() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to pick one of the built-in locale tags.
fn locale_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(supported_locales().iter().map(|c| c.tag).collect::<Vec<_>>())
}

/// Strategy to generate well-formed currency codes.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Za-z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Stripping separators from an en-US USD string leaves exactly the
    /// amount divided by 100 with two fraction digits.
    #[test]
    fn prop_en_us_digits_match_amount(amount in amount_minor()) {
        let formatted = en_us().format(amount, Some("USD")).unwrap();
        let expected = Decimal::new(amount.abs(), 2).to_string();
        let sign = if amount < 0 { "-" } else { "" };
        prop_assert_eq!(formatted.replace(',', ""), format!("{sign}${expected}"));
    }

    /// Formatting is a pure function of its inputs.
    #[test]
    fn prop_format_is_deterministic(
        amount in amount_minor(),
        tag in locale_tag(),
        currency in currency_code(),
    ) {
        let formatter = MoneyFormatter::new(&Locale::parse(tag).unwrap());
        let first = formatter.format(amount, Some(currency.as_str())).unwrap();
        let second = formatter.format(amount, Some(currency.as_str())).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Omitting the currency is the same as passing EUR.
    #[test]
    fn prop_missing_currency_is_eur(amount in amount_minor(), tag in locale_tag()) {
        let formatter = MoneyFormatter::new(&Locale::parse(tag).unwrap());
        prop_assert_eq!(
            formatter.format(amount, None).unwrap(),
            formatter.format(amount, Some("EUR")).unwrap()
        );
    }

    /// Negating a non-zero amount switches to the negative pattern, which
    /// differs from the positive rendering.
    #[test]
    fn prop_negative_differs_from_positive(amount in 1i64..1_000_000_000, tag in locale_tag()) {
        let formatter = MoneyFormatter::new(&Locale::parse(tag).unwrap());
        let positive = formatter.format(amount, Some("EUR")).unwrap();
        let negative = formatter.format(-amount, Some("EUR")).unwrap();
        prop_assert_ne!(positive, negative);
    }

    /// Anything that is not three ASCII letters is rejected.
    #[test]
    fn prop_malformed_currency_rejected(code in "[A-Za-z]{4,8}|[A-Za-z]{0,2}|[0-9]{3}") {
        prop_assert!(en_us().format(100, Some(code.as_str())).is_err());
    }
}
