//! ISO 4217 currency codes.
//!
//! Any three ASCII letters form a valid code. Codes missing from the built-in
//! table still format, using the code itself as symbol and two minor digits.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Currency used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Minor-unit digits assumed for codes missing from the table.
const FALLBACK_MINOR_DIGITS: u32 = 2;

/// Per-currency data: code, ISO 4217 minor-unit digits, default symbol.
const CURRENCIES: &[(&str, u32, &str)] = &[
    ("AUD", 2, "A$"),
    ("BHD", 3, "BHD"),
    ("BRL", 2, "R$"),
    ("CAD", 2, "CA$"),
    ("CHF", 2, "CHF"),
    ("CLP", 0, "CLP"),
    ("CNY", 2, "CN¥"),
    ("CZK", 2, "CZK"),
    ("DKK", 2, "DKK"),
    ("EUR", 2, "€"),
    ("GBP", 2, "£"),
    ("HKD", 2, "HK$"),
    ("HUF", 2, "HUF"),
    ("IDR", 2, "IDR"),
    ("ILS", 2, "₪"),
    ("INR", 2, "₹"),
    ("ISK", 0, "ISK"),
    ("JOD", 3, "JOD"),
    ("JPY", 0, "¥"),
    ("KRW", 0, "₩"),
    ("KWD", 3, "KWD"),
    ("MXN", 2, "MX$"),
    ("NOK", 2, "NOK"),
    ("NZD", 2, "NZ$"),
    ("OMR", 3, "OMR"),
    ("PHP", 2, "₱"),
    ("PLN", 2, "PLN"),
    ("PYG", 0, "PYG"),
    ("RUB", 2, "RUB"),
    ("SEK", 2, "SEK"),
    ("SGD", 2, "SGD"),
    ("THB", 2, "THB"),
    ("TND", 3, "TND"),
    ("TRY", 2, "TRY"),
    ("TWD", 2, "NT$"),
    ("UGX", 0, "UGX"),
    ("USD", 2, "$"),
    ("VND", 0, "₫"),
    ("XAF", 0, "FCFA"),
    ("XOF", 0, "F\u{202f}CFA"),
    ("ZAR", 2, "ZAR"),
];

/// A well-formed ISO 4217 currency code, stored upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Euro
    pub const EUR: Self = Self(*b"EUR");
    /// US Dollar
    pub const USD: Self = Self(*b"USD");
    /// Japanese Yen
    pub const JPY: Self = Self(*b"JPY");

    /// Parses a code, accepting any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidCurrencyCode`] unless `code` is exactly
    /// three ASCII letters.
    pub fn parse(code: &str) -> Result<Self, FormatError> {
        match code.as_bytes() {
            [a, b, c] if code.bytes().all(|byte| byte.is_ascii_alphabetic()) => Ok(Self([
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
                c.to_ascii_uppercase(),
            ])),
            _ => Err(FormatError::InvalidCurrencyCode(code.to_string())),
        }
    }

    /// Parses `code`, falling back to [`DEFAULT_CURRENCY`] when absent.
    pub fn parse_or_default(code: Option<&str>) -> Result<Self, FormatError> {
        code.map_or(Ok(Self::default()), Self::parse)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }

    /// Returns true if the code is in the built-in currency table.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.entry().is_some()
    }

    /// Number of minor-unit digits defined by ISO 4217.
    #[must_use]
    pub fn minor_unit_digits(&self) -> u32 {
        self.entry().map_or(FALLBACK_MINOR_DIGITS, |(_, digits, _)| *digits)
    }

    /// Symbol used when the locale has no override. Unknown codes display as
    /// themselves.
    #[must_use]
    pub fn default_symbol(&self) -> &str {
        match self.entry() {
            Some((_, _, symbol)) => symbol,
            None => self.as_str(),
        }
    }

    fn entry(&self) -> Option<&'static (&'static str, u32, &'static str)> {
        let code = self.as_str();
        CURRENCIES.iter().find(|(c, _, _)| *c == code)
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::EUR
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.as_str().to_string()
    }
}
