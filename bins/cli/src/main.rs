//! moneyfmt command-line tool
//!
//! Formats an amount given in minor units as a currency string.
//!
//! Usage:
//!   moneyfmt 12345 --currency USD
//!   moneyfmt -500 --locale de-DE

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneyfmt_core::MoneyFormatter;
use moneyfmt_core::format::{default_locale, parse_amount};
use moneyfmt_shared::AppConfig;
use moneyfmt_shared::types::Locale;

/// Format an amount in minor units (e.g. cents) as a currency string.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Amount in minor units, e.g. 12345 for 123.45
    #[arg(allow_negative_numbers = true)]
    amount_minor: String,

    /// ISO 4217 currency code [default: format.default_currency, then EUR]
    #[arg(short, long)]
    currency: Option<String>,

    /// Locale tag such as de-DE [default: format.locale, then LC_ALL/LC_MONETARY/LANG]
    #[arg(short, long)]
    locale: Option<String>,
}

/// Picks the locale and currency: command-line flags first, then
/// configuration, then the environment's default locale.
fn resolve(cli: &Cli, config: &AppConfig) -> Result<(Locale, String)> {
    let locale = match cli.locale.as_ref().or(config.format.locale.as_ref()) {
        Some(tag) => Locale::parse(tag)?,
        None => default_locale(),
    };
    let currency = cli
        .currency
        .clone()
        .unwrap_or_else(|| config.format.default_currency.clone());
    Ok((locale, currency))
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the formatted amount
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneyfmt=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    let (locale, currency) = resolve(&cli, &config)?;
    let amount = parse_amount(&cli.amount_minor)?;

    let formatter = MoneyFormatter::new(&locale);
    debug!(
        locale = %formatter.locale(),
        conventions = formatter.conventions().tag,
        %currency,
        %amount,
        "Formatting amount"
    );

    let formatted = formatter.format(amount, Some(currency.as_str()))?;
    println!("{formatted}");

    Ok(())
}
