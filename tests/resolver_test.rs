//! Public translation and routing behavior of the site library.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use googletest::prelude::*;
use rstest::rstest;
use scholar_site::translation::{
    self,
    TranslationValue,
};
use scholar_site::{
    Locale,
    get_alternate_locale,
    get_locale_from_path,
    get_locale_path,
    get_translations,
    is_valid_locale,
    t,
};

#[rstest]
#[case("fr")]
#[case("de")]
#[case("")]
#[case("en-US")]
fn unsupported_locale_gets_default_tree(#[case] locale: &str) {
    assert_eq!(get_translations(locale), get_translations("en"));
}

#[rstest]
fn every_default_text_key_resolves_to_its_leaf() {
    let table = translation::bundled();
    for locale in Locale::ALL {
        for key in table.tree(locale).text_keys() {
            let translated = t(&key, Some(locale));
            assert_ne!(translated, key);
        }
    }
}

#[rstest]
fn lookup_matches_tree_walk() {
    let tree = get_translations("ne");
    let Some(TranslationValue::Tree(header)) = tree.get("header") else {
        panic!("bundled translations have a header group");
    };
    let Some(TranslationValue::Tree(nav)) = header.get("nav") else {
        panic!("bundled translations have header.nav");
    };
    let Some(TranslationValue::Text(about)) = nav.get("about") else {
        panic!("bundled translations have header.nav.about");
    };

    assert_eq!(t("header.nav.about", Some(Locale::Ne)), about.as_str());
}

#[rstest]
#[case("missing")]
#[case("header.missing")]
#[case("header")]
#[case("header.nav")]
#[case("header.nav.home.deeper")]
#[case("")]
#[case(".")]
fn unresolved_key_is_returned_verbatim(#[case] key: &str) {
    for locale in [None, Some(Locale::En), Some(Locale::Ne)] {
        assert_eq!(t(key, locale), key);
    }
}

#[rstest]
fn locale_validation() {
    assert!(is_valid_locale("en"));
    assert!(is_valid_locale("ne"));
    assert!(!is_valid_locale("fr"));
    assert!(!is_valid_locale(""));
}

#[rstest]
fn alternate_locale_toggles() {
    assert_that!(get_alternate_locale(Locale::En), eq(Locale::Ne));
    assert_that!(get_alternate_locale(Locale::Ne), eq(Locale::En));
}

#[rstest]
#[case("/ne/about", Locale::Ne)]
#[case("/about", Locale::En)]
#[case("/", Locale::En)]
#[case("", Locale::En)]
fn locale_detection_from_path(#[case] pathname: &str, #[case] expected: Locale) {
    assert_that!(get_locale_from_path(pathname), eq(expected));
}

#[rstest]
#[case(Locale::En, "/about", "/about")]
#[case(Locale::Ne, "/about", "/ne/about")]
#[case(Locale::Ne, "about", "/ne/about")]
fn locale_path_building(#[case] locale: Locale, #[case] path: &str, #[case] expected: &str) {
    assert_eq!(get_locale_path(locale, path), expected);
}

#[rstest]
fn language_switch_links_round_trip() {
    for path in ["/", "/about", "/services/research", "/contact/"] {
        let nepali = get_locale_path(get_alternate_locale(Locale::DEFAULT), path);
        assert_that!(get_locale_from_path(&nepali), eq(Locale::Ne));
        assert_eq!(scholar_site::routing::strip_locale_prefix(&nepali), path);
        assert_eq!(scholar_site::routing::get_alternate_path(&nepali), path);
    }
}
