//! Formatting error types.

use thiserror::Error;

/// Result type alias using `FormatError`.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors raised while parsing inputs or formatting an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Currency is not a well-formed ISO 4217 code.
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Locale tag could not be parsed.
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Amount text is not a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl FormatError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
            Self::InvalidLocale(_) => "INVALID_LOCALE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
        }
    }
}
