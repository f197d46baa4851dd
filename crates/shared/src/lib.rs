//! Shared types, errors, and configuration for moneyfmt.
//!
//! This crate provides common types used across all other crates:
//! - Money type holding an amount in minor units
//! - Validated ISO 4217 currency codes
//! - Locale tags (BCP-47 and POSIX forms)
//! - Formatting error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{FormatError, FormatResult};
