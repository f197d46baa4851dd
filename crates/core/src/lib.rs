//! Core formatting logic for moneyfmt.
//!
//! Converts integer amounts in minor units (e.g. cents) into locale-aware
//! currency strings. Stateless: nothing is cached between calls.
//!
//! # Modules
//!
//! - `format` - Money formatter, locale conventions and locale detection

pub mod format;

pub use format::{MoneyFormatter, format};
