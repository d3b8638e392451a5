//! Per-locale translation trees with default-locale fallback.

use std::collections::HashMap;

use super::{
    LoadError,
    TranslationTree,
};
use crate::locale::Locale;

/// One translation tree per supported locale.
///
/// Construction checks that every locale has a tree, so lookups never have
/// to handle a missing default.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    /// Tree of [`Locale::DEFAULT`]
    default_tree: TranslationTree,
    /// Trees of every other locale
    localized: HashMap<Locale, TranslationTree>,
}

impl TranslationTable {
    /// Builds a table from one tree per locale.
    ///
    /// # Errors
    /// - [`LoadError::MissingLocale`] if any supported locale has no tree
    pub fn new(mut trees: HashMap<Locale, TranslationTree>) -> Result<Self, LoadError> {
        let default_tree =
            trees.remove(&Locale::DEFAULT).ok_or(LoadError::MissingLocale(Locale::DEFAULT))?;

        if let Some(missing) = Locale::ALL.into_iter().find(|locale| {
            !locale.is_default() && !trees.contains_key(locale)
        }) {
            return Err(LoadError::MissingLocale(missing));
        }

        Ok(Self { default_tree, localized: trees })
    }

    /// Table where every locale has an empty tree.
    pub(crate) fn empty() -> Self {
        Self {
            default_tree: TranslationTree::default(),
            localized: Locale::ALL
                .into_iter()
                .filter(|locale| !locale.is_default())
                .map(|locale| (locale, TranslationTree::default()))
                .collect(),
        }
    }

    /// Tree of a supported locale.
    #[must_use]
    pub fn tree(&self, locale: Locale) -> &TranslationTree {
        self.localized.get(&locale).unwrap_or(&self.default_tree)
    }

    /// Tree for an arbitrary locale tag. Unknown tags get the default tree.
    #[must_use]
    pub fn get_translations(&self, locale: &str) -> &TranslationTree {
        Locale::parse(locale).map_or(&self.default_tree, |locale| self.tree(locale))
    }

    /// Translates a dotted key, returning the key itself when it does not
    /// resolve to text.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str, locale: Option<Locale>) -> &'a str {
        let locale = locale.unwrap_or_default();
        match self.tree(locale).lookup(key) {
            Ok(text) => text,
            Err(error) => {
                tracing::debug!(key, %locale, %error, "Translation not found");
                key
            }
        }
    }

    /// Keys with text in the default locale that do not resolve in `locale`.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        if locale.is_default() {
            return Vec::new();
        }

        let tree = self.tree(locale);
        self.default_tree.text_keys().into_iter().filter(|key| tree.lookup(key).is_err()).collect()
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::{
        table,
        tree,
    };

    #[fixture]
    fn site_table() -> TranslationTable {
        table(
            json!({
                "header": {
                    "nav": { "home": "Home", "about": "About", "contact": "Contact" }
                },
                "footer": { "rights": "All rights reserved" },
                "onlyEnglish": "English only"
            }),
            json!({
                "header": {
                    "nav": { "home": "गृहपृष्ठ", "about": "हाम्रो बारेमा", "contact": 5 }
                },
                "footer": { "rights": "सर्वाधिकार सुरक्षित" }
            }),
        )
    }

    #[rstest]
    fn new_requires_every_locale() {
        let trees = HashMap::from([(Locale::En, tree(json!({})))]);

        let result = TranslationTable::new(trees);

        assert!(matches!(result, Err(LoadError::MissingLocale(Locale::Ne))));
    }

    #[rstest]
    fn new_requires_default_locale() {
        let trees = HashMap::from([(Locale::Ne, tree(json!({})))]);

        let result = TranslationTable::new(trees);

        assert!(matches!(result, Err(LoadError::MissingLocale(Locale::En))));
    }

    #[rstest]
    #[case("en", "Home")]
    #[case("ne", "गृहपृष्ठ")]
    #[case("fr", "Home")]
    #[case("", "Home")]
    #[case("NE", "Home")]
    fn get_translations_falls_back_to_default(
        site_table: TranslationTable,
        #[case] locale: &str,
        #[case] expected: &str,
    ) {
        let tree = site_table.get_translations(locale);

        assert_eq!(tree.lookup("header.nav.home"), Ok(expected));
    }

    #[rstest]
    fn get_translations_unknown_locale_is_default_tree(site_table: TranslationTable) {
        let fallback = site_table.get_translations("fr");

        assert!(std::ptr::eq(fallback, site_table.tree(Locale::En)));
    }

    #[rstest]
    #[case("header.nav.home", Some(Locale::Ne), "गृहपृष्ठ")]
    #[case("header.nav.home", Some(Locale::En), "Home")]
    #[case("header.nav.home", None, "Home")]
    #[case("footer.rights", Some(Locale::Ne), "सर्वाधिकार सुरक्षित")]
    fn t_resolves_text(
        site_table: TranslationTable,
        #[case] key: &str,
        #[case] locale: Option<Locale>,
        #[case] expected: &str,
    ) {
        assert_eq!(site_table.t(key, locale), expected);
    }

    #[rstest]
    #[case::missing_path("header.nav.blog", Some(Locale::En))]
    #[case::internal_node("header.nav", Some(Locale::Ne))]
    #[case::non_text_leaf("header.nav.contact", Some(Locale::Ne))]
    #[case::missing_in_locale("onlyEnglish", Some(Locale::Ne))]
    #[case::empty_key("", None)]
    #[case::too_deep("footer.rights.extra", None)]
    fn t_returns_key_on_failure(
        site_table: TranslationTable,
        #[case] key: &str,
        #[case] locale: Option<Locale>,
    ) {
        assert_eq!(site_table.t(key, locale), key);
    }

    #[rstest]
    fn missing_keys_lists_unresolved_default_keys(site_table: TranslationTable) {
        assert_that!(
            site_table.missing_keys(Locale::Ne),
            elements_are![eq("header.nav.contact"), eq("onlyEnglish")]
        );
    }

    #[rstest]
    fn missing_keys_empty_for_default_locale(site_table: TranslationTable) {
        assert_that!(site_table.missing_keys(Locale::En), is_empty());
    }

    #[rstest]
    fn missing_keys_empty_for_identical_shape() {
        let shape = json!({ "a": { "b": "B" }, "c": "C" });
        let table = table(shape.clone(), shape);

        assert_that!(table.missing_keys(Locale::Ne), is_empty());
    }
}
