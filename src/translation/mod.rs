//! Translation lookup with default-locale fallback.
//!
//! The site's own strings are embedded at compile time and exposed through
//! the free functions [`get_translations`] and [`t`]. Callers that load
//! their own files build a [`TranslationTable`] and use its methods.

mod error;
mod loader;
mod table;
mod tree;

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

pub use error::{
    LoadError,
    ResolveError,
};
pub use loader::{
    discover_translation_files,
    load_from_dir,
    load_translation_file,
};
pub use table::TranslationTable;
pub use tree::{
    KEY_SEPARATOR,
    TranslationTree,
    TranslationValue,
};

use crate::locale::Locale;

/// Locale files shipped with the crate.
const BUNDLED_FILES: [(Locale, &str, &str); 2] = [
    (Locale::En, "locales/en.json", include_str!("../../locales/en.json")),
    (Locale::Ne, "locales/ne.json", include_str!("../../locales/ne.json")),
];

/// Table built from the bundled locale files on first use.
static BUNDLED: LazyLock<TranslationTable> = LazyLock::new(|| {
    bundled_table().unwrap_or_else(|error| {
        tracing::error!(%error, "Bundled translations are broken, every key will fall back");
        TranslationTable::empty()
    })
});

/// Parses the bundled locale files into a fresh table.
///
/// # Errors
/// Returns error if a bundled file is not a JSON object.
pub fn bundled_table() -> Result<TranslationTable, LoadError> {
    let trees = BUNDLED_FILES
        .iter()
        .map(|(locale, path, content)| {
            loader::parse_translations(content, Path::new(path)).map(|tree| (*locale, tree))
        })
        .collect::<Result<HashMap<_, _>, _>>()?;

    TranslationTable::new(trees)
}

/// The process-wide bundled table.
#[must_use]
pub fn bundled() -> &'static TranslationTable {
    &BUNDLED
}

/// Bundled translations for a locale tag, or the default locale's when the
/// tag is not supported.
#[must_use]
pub fn get_translations(locale: &str) -> &'static TranslationTree {
    BUNDLED.get_translations(locale)
}

/// Translates a dotted key from the bundled translations.
///
/// `None` means the default locale. A key that does not resolve to text is
/// returned unchanged so the gap stays visible on the page.
///
/// # Examples
/// ```
/// use scholar_site::locale::Locale;
/// use scholar_site::translation::t;
///
/// assert_eq!(t("header.nav.home", Some(Locale::Ne)), "गृहपृष्ठ");
/// assert_eq!(t("header.nav.home", None), "Home");
/// assert_eq!(t("header.nav.missing", None), "header.nav.missing");
/// ```
#[must_use]
pub fn t(key: &str, locale: Option<Locale>) -> &str {
    BUNDLED.t(key, locale)
}
