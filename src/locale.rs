//! Supported locales of the site.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A locale tag from the closed set the site is published in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Nepali
    Ne,
}

/// Returned when a string is not one of the supported locale tags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported locale '{0}'")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 2] = [Self::En, Self::Ne];

    /// The locale served without a URL prefix.
    pub const DEFAULT: Self = Self::En;

    /// The tag used in URLs and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ne => "ne",
        }
    }

    /// Parses an exact locale tag. Case and region variants are not accepted.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == tag)
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }

    /// The other locale of the pair.
    ///
    /// This is a two-way swap. Adding a third locale makes the match below
    /// non-exhaustive, which is where a rotation policy has to be decided.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::En => Self::Ne,
            Self::Ne => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

/// True iff `locale` is exactly one of the supported tags.
#[must_use]
pub fn is_valid_locale(locale: &str) -> bool {
    Locale::parse(locale).is_some()
}

/// Returns the other member of the locale pair.
#[must_use]
pub const fn get_alternate_locale(locale: Locale) -> Locale {
    locale.alternate()
}
