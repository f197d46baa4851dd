//! Locale-aware currency formatting.
//!
//! [`format`] turns an amount in minor units into a display string using the
//! environment's default locale. [`MoneyFormatter`] does the same for an
//! explicit locale.

pub mod environment;
pub mod formatter;
pub mod locale_data;
pub mod number;

#[cfg(test)]
mod props;

pub use environment::default_locale;
pub use formatter::{MAX_FRACTION_DIGITS, MoneyFormatter, format};
pub use locale_data::{Grouping, LocaleConventions, conventions_for, supported_locales};
pub use number::parse_amount;
