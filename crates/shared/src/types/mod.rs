//! Common types used across the workspace.

pub mod currency;
pub mod locale;
pub mod money;

pub use currency::CurrencyCode;
pub use locale::Locale;
pub use money::Money;
