//! Built-in locale conventions for currency formatting.
//!
//! Patterns use `¤` for the currency symbol and `#` for the formatted digits.
//! Everything else in a pattern (spaces, minus signs) is copied literally.

use moneyfmt_shared::types::{CurrencyCode, Locale};
use tracing::debug;

/// Where grouping separators go in the integer part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Every three digits: 1,234,567
    Standard,
    /// Three digits, then every two: 12,34,567
    Indian,
}

/// Number and currency conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConventions {
    /// Tag this entry answers to, e.g. `de-DE`.
    pub tag: &'static str,
    /// Decimal separator.
    pub decimal: char,
    /// Grouping separator.
    pub group: char,
    /// Grouping style.
    pub grouping: Grouping,
    /// Minimum digits in the leading group before separators are used.
    /// With 2, `1234` stays ungrouped but `12345` becomes `12.345`.
    pub min_grouping_digits: usize,
    /// Pattern for non-negative amounts.
    pub positive: &'static str,
    /// Pattern for negative amounts.
    pub negative: &'static str,
    /// Currency symbols that differ from the currency's default symbol.
    pub symbols: &'static [(&'static str, &'static str)],
}

impl LocaleConventions {
    /// Symbol this locale shows for `currency`.
    #[must_use]
    pub fn symbol<'a>(&self, currency: &'a CurrencyCode) -> &'a str {
        self.symbols
            .iter()
            .find(|(code, _)| *code == currency.as_str())
            .map_or_else(|| currency.default_symbol(), |(_, symbol)| *symbol)
    }
}

const NBSP: char = '\u{a0}';
const NNBSP: char = '\u{202f}';

/// Built-in locales. The first entry per language is that language's fallback.
static LOCALES: &[LocaleConventions] = &[
    LocaleConventions {
        tag: "en-US",
        decimal: '.',
        group: ',',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤#",
        negative: "-¤#",
        symbols: &[],
    },
    LocaleConventions {
        tag: "en-GB",
        decimal: '.',
        group: ',',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤#",
        negative: "-¤#",
        symbols: &[("USD", "US$")],
    },
    LocaleConventions {
        tag: "en-IN",
        decimal: '.',
        group: ',',
        grouping: Grouping::Indian,
        min_grouping_digits: 1,
        positive: "¤#",
        negative: "-¤#",
        symbols: &[],
    },
    LocaleConventions {
        tag: "de-DE",
        decimal: ',',
        group: '.',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "#\u{a0}¤",
        negative: "-#\u{a0}¤",
        symbols: &[],
    },
    LocaleConventions {
        tag: "de-AT",
        decimal: ',',
        group: NBSP,
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤\u{a0}#",
        negative: "-¤\u{a0}#",
        symbols: &[],
    },
    LocaleConventions {
        tag: "de-CH",
        decimal: '.',
        group: '\u{2019}',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤\u{a0}#",
        negative: "¤-#",
        symbols: &[],
    },
    LocaleConventions {
        tag: "fr-FR",
        decimal: ',',
        group: NNBSP,
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "#\u{a0}¤",
        negative: "-#\u{a0}¤",
        symbols: &[("USD", "$US"), ("GBP", "£GB"), ("CAD", "$CA"), ("JPY", "JPY")],
    },
    LocaleConventions {
        tag: "es-ES",
        decimal: ',',
        group: '.',
        grouping: Grouping::Standard,
        min_grouping_digits: 2,
        positive: "#\u{a0}¤",
        negative: "-#\u{a0}¤",
        symbols: &[("USD", "US$")],
    },
    LocaleConventions {
        tag: "it-IT",
        decimal: ',',
        group: '.',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "#\u{a0}¤",
        negative: "-#\u{a0}¤",
        symbols: &[("USD", "USD"), ("JPY", "JPY")],
    },
    LocaleConventions {
        tag: "nl-NL",
        decimal: ',',
        group: '.',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤\u{a0}#",
        negative: "¤\u{a0}-#",
        symbols: &[("USD", "US$")],
    },
    LocaleConventions {
        tag: "pt-BR",
        decimal: ',',
        group: '.',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤\u{a0}#",
        negative: "-¤\u{a0}#",
        symbols: &[("USD", "US$"), ("JPY", "JP¥")],
    },
    LocaleConventions {
        tag: "pl-PL",
        decimal: ',',
        group: NBSP,
        grouping: Grouping::Standard,
        min_grouping_digits: 2,
        positive: "#\u{a0}¤",
        negative: "-#\u{a0}¤",
        symbols: &[("PLN", "zł"), ("USD", "USD")],
    },
    LocaleConventions {
        tag: "sv-SE",
        decimal: ',',
        group: NBSP,
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "#\u{a0}¤",
        negative: "\u{2212}#\u{a0}¤",
        symbols: &[("SEK", "kr"), ("USD", "US$")],
    },
    LocaleConventions {
        tag: "ja-JP",
        decimal: '.',
        group: ',',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤#",
        negative: "-¤#",
        symbols: &[("JPY", "￥"), ("CNY", "元")],
    },
    LocaleConventions {
        tag: "zh-CN",
        decimal: '.',
        group: ',',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤#",
        negative: "-¤#",
        symbols: &[("CNY", "¥"), ("USD", "US$"), ("JPY", "JP¥")],
    },
    LocaleConventions {
        tag: "id-ID",
        decimal: ',',
        group: '.',
        grouping: Grouping::Standard,
        min_grouping_digits: 1,
        positive: "¤#",
        negative: "-¤#",
        symbols: &[("IDR", "Rp"), ("USD", "US$")],
    },
];

/// Returns every built-in locale.
#[must_use]
pub fn supported_locales() -> &'static [LocaleConventions] {
    LOCALES
}

/// Finds the conventions for `locale`.
///
/// Tries the exact language-region tag, then the first locale with the same
/// language, then `en-US`.
#[must_use]
pub fn conventions_for(locale: &Locale) -> &'static LocaleConventions {
    let tag = locale.language_region();
    if let Some(found) = LOCALES.iter().find(|c| c.tag.eq_ignore_ascii_case(&tag)) {
        return found;
    }

    let prefix = format!("{}-", locale.language());
    if let Some(found) = LOCALES.iter().find(|c| c.tag.starts_with(&prefix)) {
        debug!(requested = %locale, resolved = found.tag, "Locale fell back to language default");
        return found;
    }

    debug!(requested = %locale, "Locale not supported, using en-US");
    &LOCALES[0]
}
