//! Locale-aware currency formatting of minor-unit amounts.

use moneyfmt_shared::FormatResult;
use moneyfmt_shared::types::{CurrencyCode, Locale, Money};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::debug;

use super::environment;
use super::locale_data::{LocaleConventions, conventions_for};
use super::number::{render_digits, render_minor_digits};

/// Upper bound on fraction digits shown, whatever the currency.
pub const MAX_FRACTION_DIGITS: u32 = 2;

const NBSP: char = '\u{a0}';

/// Formats minor-unit amounts as currency strings for one locale.
///
/// Amounts are divided by 100 before formatting, for every currency. Holds no
/// mutable state, so a single instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct MoneyFormatter {
    locale: Locale,
    conventions: &'static LocaleConventions,
}

impl MoneyFormatter {
    /// Creates a formatter for `locale`, falling back to a related or default
    /// locale when it is not built in.
    #[must_use]
    pub fn new(locale: &Locale) -> Self {
        Self {
            locale: locale.clone(),
            conventions: conventions_for(locale),
        }
    }

    /// Creates a formatter for the environment's default locale.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&environment::default_locale())
    }

    /// The locale this formatter was created for.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The conventions actually in use, after fallback.
    #[must_use]
    pub fn conventions(&self) -> &'static LocaleConventions {
        self.conventions
    }

    /// Formats `amount_minor` (e.g. cents) in `currency`, defaulting to EUR.
    ///
    /// ```
    /// use moneyfmt_core::MoneyFormatter;
    /// use moneyfmt_shared::types::Locale;
    ///
    /// let formatter = MoneyFormatter::new(&Locale::parse("en-US").unwrap());
    /// assert_eq!(formatter.format(12345, Some("USD")).unwrap(), "$123.45");
    /// assert_eq!(formatter.format(-500, None).unwrap(), "-€5.00");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidCurrencyCode`] if `currency` is not
    /// three ASCII letters.
    ///
    /// [`FormatError::InvalidCurrencyCode`]: moneyfmt_shared::FormatError::InvalidCurrencyCode
    pub fn format(
        &self,
        amount_minor: impl Into<Decimal>,
        currency: Option<&str>,
    ) -> FormatResult<String> {
        let currency = CurrencyCode::parse_or_default(currency)?;
        Ok(self.format_money(&Money::new(amount_minor, currency)))
    }

    /// Formats an already validated amount.
    #[must_use]
    pub fn format_money(&self, money: &Money) -> String {
        if !money.currency.is_known() {
            debug!(currency = %money.currency, "Unknown currency, displaying by code");
        }
        let min_fraction = money.currency.minor_unit_digits().min(MAX_FRACTION_DIGITS);
        let digits = render_digits(
            money.to_major(),
            min_fraction,
            MAX_FRACTION_DIGITS,
            self.conventions,
        );
        self.apply_pattern(&money.currency, &digits, money.is_negative())
    }

    /// Formats a floating-point minor-unit amount.
    ///
    /// `NaN` renders as `NaN` and infinities as `∞` in place of the digits.
    /// Finite values beyond `Decimal` range are whole numbers, so their
    /// digits are shifted two places as text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidCurrencyCode`] for a malformed currency.
    ///
    /// [`FormatError::InvalidCurrencyCode`]: moneyfmt_shared::FormatError::InvalidCurrencyCode
    pub fn format_float(&self, amount_minor: f64, currency: Option<&str>) -> FormatResult<String> {
        let currency = CurrencyCode::parse_or_default(currency)?;

        if amount_minor.is_nan() {
            return Ok(self.apply_pattern(&currency, "NaN", false));
        }
        if amount_minor.is_infinite() {
            return Ok(self.apply_pattern(&currency, "∞", amount_minor.is_sign_negative()));
        }

        if let Some(amount) = Decimal::from_f64(amount_minor) {
            return Ok(self.format_money(&Money::new(amount, currency)));
        }

        // f64 Display never uses exponent notation.
        let text = amount_minor.abs().to_string();
        let integer = text.split('.').next().unwrap_or_default();
        let min_fraction = currency.minor_unit_digits().min(MAX_FRACTION_DIGITS);
        let digits = render_minor_digits(integer, min_fraction, self.conventions);
        Ok(self.apply_pattern(&currency, &digits, amount_minor.is_sign_negative()))
    }

    /// Substitutes symbol and digits into the locale's pattern.
    ///
    /// A no-break space separates the symbol from the digits when the
    /// symbol touches them directly and ends (or starts) with a letter.
    fn apply_pattern(&self, currency: &CurrencyCode, digits: &str, negative: bool) -> String {
        let pattern = if negative {
            self.conventions.negative
        } else {
            self.conventions.positive
        };
        let symbol = self.conventions.symbol(currency);

        let mut out = String::with_capacity(pattern.len() + symbol.len() + digits.len() + 2);
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '¤' => {
                    out.push_str(symbol);
                    let letter_end = symbol.chars().next_back().is_some_and(char::is_alphabetic);
                    if letter_end && chars.peek() == Some(&'#') {
                        out.push(NBSP);
                    }
                }
                '#' => {
                    out.push_str(digits);
                    let letter_start = symbol.chars().next().is_some_and(char::is_alphabetic);
                    if letter_start && chars.peek() == Some(&'¤') {
                        out.push(NBSP);
                    }
                }
                other => out.push(other),
            }
        }
        out
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new(&Locale::default())
    }
}

/// Formats `amount_minor` in `currency` (EUR when `None`) using the
/// environment's default locale.
///
/// # Errors
///
/// Returns [`FormatError::InvalidCurrencyCode`] if `currency` is not three
/// ASCII letters.
///
/// [`FormatError::InvalidCurrencyCode`]: moneyfmt_shared::FormatError::InvalidCurrencyCode
pub fn format(amount_minor: impl Into<Decimal>, currency: Option<&str>) -> FormatResult<String> {
    MoneyFormatter::from_env().format(amount_minor, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneyfmt_shared::FormatError;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn formatter(tag: &str) -> MoneyFormatter {
        MoneyFormatter::new(&Locale::parse(tag).unwrap())
    }

    #[rstest]
    #[case(0, "EUR", "€0.00")]
    #[case(12345, "USD", "$123.45")]
    #[case(-500, "EUR", "-€5.00")]
    #[case(123_456_789, "USD", "$1,234,567.89")]
    #[case(1, "GBP", "£0.01")]
    #[case(-1, "USD", "-$0.01")]
    #[case(12345, "CHF", "CHF\u{a0}123.45")]
    #[case(12345, "IDR", "IDR\u{a0}123.45")]
    #[case(12345, "QQQ", "QQQ\u{a0}123.45")]
    #[case(12345, "CAD", "CA$123.45")]
    fn test_format_en_us(#[case] amount: i64, #[case] currency: &str, #[case] expected: &str) {
        assert_eq!(formatter("en-US").format(amount, Some(currency)).unwrap(), expected);
    }

    #[rstest]
    #[case("en-GB", 12345, "USD", "US$123.45")]
    #[case("en-IN", 12_345_678, "INR", "₹1,23,456.78")]
    #[case("de-DE", 123_456, "EUR", "1.234,56\u{a0}€")]
    #[case("de-DE", -500, "EUR", "-5,00\u{a0}€")]
    #[case("de-AT", 123_456, "EUR", "€\u{a0}1\u{a0}234,56")]
    #[case("de-CH", 123_456, "CHF", "CHF\u{a0}1\u{2019}234.56")]
    #[case("de-CH", -500, "CHF", "CHF-5.00")]
    #[case("fr-FR", 123_456, "EUR", "1\u{202f}234,56\u{a0}€")]
    #[case("fr-FR", 12345, "USD", "123,45\u{a0}$US")]
    #[case("es-ES", 123_456, "EUR", "1234,56\u{a0}€")]
    #[case("es-ES", 1_234_567, "EUR", "12.345,67\u{a0}€")]
    #[case("nl-NL", -500, "EUR", "€\u{a0}-5,00")]
    #[case("pt-BR", 12345, "BRL", "R$\u{a0}123,45")]
    #[case("pl-PL", 123_456, "PLN", "1234,56\u{a0}zł")]
    #[case("sv-SE", -500, "SEK", "\u{2212}5,00\u{a0}kr")]
    #[case("ja-JP", 12345, "EUR", "€123.45")]
    #[case("zh-CN", 12345, "CNY", "¥123.45")]
    #[case("id-ID", 12345, "IDR", "Rp\u{a0}123,45")]
    fn test_format_locales(
        #[case] tag: &str,
        #[case] amount: i64,
        #[case] currency: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(formatter(tag).format(amount, Some(currency)).unwrap(), expected);
    }

    #[test]
    fn test_currency_defaults_to_eur() {
        let formatter = formatter("de-DE");
        assert_eq!(
            formatter.format(999, None).unwrap(),
            formatter.format(999, Some("EUR")).unwrap()
        );
    }

    #[test]
    fn test_currency_is_case_insensitive() {
        let formatter = formatter("en-US");
        assert_eq!(formatter.format(100, Some("usd")).unwrap(), "$1.00");
    }

    #[rstest]
    #[case("XXXYYY")]
    #[case("")]
    #[case("US")]
    #[case("12$")]
    fn test_invalid_currency_is_error(#[case] code: &str) {
        assert_eq!(
            formatter("en-US").format(100, Some(code)),
            Err(FormatError::InvalidCurrencyCode(code.to_string()))
        );
    }

    #[test]
    fn test_divisor_is_always_hundred() {
        let formatter = formatter("en-US");
        // Zero-decimal currency: 12345 minor units still mean 123.45.
        assert_eq!(formatter.format(12345, Some("JPY")).unwrap(), "¥123.45");
        assert_eq!(formatter.format(12300, Some("JPY")).unwrap(), "¥123");
        assert_eq!(formatter.format(12340, Some("JPY")).unwrap(), "¥123.4");
        // Three-decimal currency: capped at two fraction digits.
        assert_eq!(formatter.format(12345, Some("BHD")).unwrap(), "BHD\u{a0}123.45");
        assert_eq!(formatter.format(12300, Some("BHD")).unwrap(), "BHD\u{a0}123.00");
    }

    #[test]
    fn test_fractional_minor_units_round_half_away_from_zero() {
        let formatter = formatter("en-US");
        assert_eq!(formatter.format(dec!(12345.5), Some("USD")).unwrap(), "$123.46");
        assert_eq!(formatter.format(dec!(-12345.5), Some("USD")).unwrap(), "-$123.46");
        assert_eq!(formatter.format(dec!(12345.4), Some("USD")).unwrap(), "$123.45");
    }

    #[test]
    fn test_accepts_other_integer_types() {
        let formatter = formatter("en-US");
        assert_eq!(formatter.format(250i32, Some("USD")).unwrap(), "$2.50");
        assert_eq!(formatter.format(250u64, Some("USD")).unwrap(), "$2.50");
    }

    #[test]
    fn test_format_money() {
        let money = Money::new(-12345, CurrencyCode::USD);
        assert_eq!(formatter("en-US").format_money(&money), "-$123.45");
    }

    #[test]
    fn test_format_float() {
        let formatter = formatter("en-US");
        assert_eq!(formatter.format_float(12345.0, Some("USD")).unwrap(), "$123.45");
        assert_eq!(formatter.format_float(-500.0, None).unwrap(), "-€5.00");
        assert_eq!(formatter.format_float(f64::NAN, Some("USD")).unwrap(), "$NaN");
        assert_eq!(formatter.format_float(f64::INFINITY, Some("USD")).unwrap(), "$∞");
        assert_eq!(
            formatter.format_float(f64::NEG_INFINITY, Some("USD")).unwrap(),
            "-$∞"
        );
        assert_eq!(formatter.format_float(f64::NAN, Some("CHF")).unwrap(), "CHF\u{a0}NaN");
    }

    #[test]
    fn test_format_float_beyond_decimal_range() {
        let formatter = formatter("en-US");
        let thousands = ",000".repeat(9);
        assert_eq!(
            formatter.format_float(1e29, Some("USD")).unwrap(),
            format!("$1{thousands}.00")
        );
        assert_eq!(
            formatter.format_float(-1e29, Some("USD")).unwrap(),
            format!("-$1{thousands}.00")
        );

        let huge = formatter.format_float(1e300, Some("USD")).unwrap();
        assert!(huge.starts_with("$1,"));
        assert!(huge.ends_with(".00"));
        assert_eq!(huge.chars().filter(char::is_ascii_digit).count(), 301);

        assert_eq!(
            MoneyFormatter::new(&Locale::parse("de-DE").unwrap())
                .format_float(1e29, Some("JPY"))
                .unwrap(),
            format!("1{}\u{a0}¥", ".000".repeat(9))
        );
    }

    #[test]
    fn test_format_float_negative_zero_uses_positive_pattern() {
        let formatter = formatter("en-US");
        assert_eq!(formatter.format_float(-0.0, Some("USD")).unwrap(), "$0.00");
    }

    #[test]
    fn test_format_float_errors() {
        let formatter = formatter("en-US");
        assert!(matches!(
            formatter.format_float(f64::NAN, Some("XXXYYY")),
            Err(FormatError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_unsupported_locale_falls_back() {
        let formatter = formatter("ko-KR");
        assert_eq!(formatter.locale().to_string(), "ko-KR");
        assert_eq!(formatter.conventions().tag, "en-US");
        assert_eq!(formatter.format(100, Some("USD")).unwrap(), "$1.00");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let formatter = formatter("fr-FR");
        let first = formatter.format(987_654_321, Some("EUR")).unwrap();
        for _ in 0..10 {
            assert_eq!(formatter.format(987_654_321, Some("EUR")).unwrap(), first);
        }
    }

    #[test]
    fn test_format_uses_environment_locale() {
        temp_env::with_vars(
            [
                ("LC_ALL", Some("de_DE.UTF-8")),
                ("LC_MONETARY", None),
                ("LANG", None),
            ],
            || {
                assert_eq!(format(12345, Some("EUR")).unwrap(), "123,45\u{a0}€");
                assert_eq!(format(-500, None).unwrap(), "-5,00\u{a0}€");
            },
        );
        temp_env::with_vars(
            [("LC_ALL", Some("C")), ("LC_MONETARY", None), ("LANG", None)],
            || {
                assert_eq!(format(12345, Some("USD")).unwrap(), "$123.45");
                assert_eq!(format(0, None).unwrap(), "€0.00");
            },
        );
    }
}
