use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;

/// Why a dotted key did not resolve to text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No entry under this segment
    #[error("No entry for segment '{segment}'")]
    MissingSegment { segment: String },
    /// The value before this segment is not a group of keys
    #[error("Cannot look up '{segment}': parent value is not a group of keys")]
    NotATree { segment: String },
    /// The full path exists but holds a group or a non-text value
    #[error("Key does not point at text")]
    NotText,
}

/// Errors raised while building a translation table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read translation file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation file {path:?} must hold a JSON object at its root")]
    NotAnObject { path: PathBuf },

    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("No translations for locale '{0}'")]
    MissingLocale(Locale),

    #[error("Locale '{locale}' has more than one translation file: {first:?} and {second:?}")]
    DuplicateLocale { locale: Locale, first: PathBuf, second: PathBuf },
}
