//! Locale identifiers.
//!
//! Accepts BCP-47 style tags (`de-DE`, `zh-Hans-CN`) and POSIX locale names
//! as found in `LANG` (`de_DE.UTF-8@euro`). Variants and extensions are
//! dropped; only language, script and region are kept.

use crate::error::FormatError;

/// A parsed locale: language plus optional script and region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// Parses a BCP-47 tag or POSIX locale name.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidLocale`] if the language subtag is not
    /// two or three ASCII letters, or a later subtag is malformed.
    pub fn parse(tag: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidLocale(tag.to_string());

        // POSIX: language_REGION.codeset@modifier
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let mut subtags = base.split(['-', '_']);

        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut locale = Self {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
        };

        for subtag in subtags {
            let alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let digits = subtag.chars().all(|c| c.is_ascii_digit());
            match subtag.len() {
                4 if alpha && locale.script.is_none() && locale.region.is_none() => {
                    let mut script = subtag.to_ascii_lowercase();
                    script[..1].make_ascii_uppercase();
                    locale.script = Some(script);
                }
                2 if alpha && locale.region.is_none() => {
                    locale.region = Some(subtag.to_ascii_uppercase());
                }
                3 if digits && locale.region.is_none() => {
                    locale.region = Some(subtag.to_string());
                }
                // Variants and extensions carry nothing the formatter uses.
                _ if locale.region.is_some() && !subtag.is_empty() => break,
                _ => return Err(invalid()),
            }
        }

        Ok(locale)
    }

    /// Lower-case language subtag, e.g. `de`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the locale with only language and region, e.g. `de-DE`.
    #[must_use]
    pub fn language_region(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{region}", self.language),
            None => self.language.clone(),
        }
    }
}

/// `en-US`, used when nothing better is known.
impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            script: None,
            region: Some("US".to_string()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
