//! Default locale detection from the process environment.

use moneyfmt_shared::types::Locale;
use tracing::debug;

/// Variables consulted for the monetary locale, highest priority first.
pub const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Returns the environment's default locale.
///
/// Read on every call; nothing is cached.
#[must_use]
pub fn default_locale() -> Locale {
    detect_locale(|name| std::env::var(name).ok())
}

/// Resolves the default locale from `lookup`, which maps a variable name to
/// its value.
///
/// The first non-empty variable in [`LOCALE_VARIABLES`] decides. `C`,
/// `POSIX` and unparsable values resolve to `en-US`, as does an empty
/// environment.
pub fn detect_locale<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    for variable in LOCALE_VARIABLES {
        let Some(value) = lookup(variable) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        if value == "C" || value == "POSIX" || value.starts_with("C.") {
            debug!(variable, value, "POSIX locale, using en-US");
            return Locale::default();
        }

        return match Locale::parse(value) {
            Ok(locale) => {
                debug!(variable, locale = %locale, "Detected default locale");
                locale
            }
            Err(err) => {
                debug!(variable, value, error = %err, "Unparsable locale, using en-US");
                Locale::default()
            }
        };
    }

    Locale::default()
}
