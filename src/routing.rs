//! Locale-aware URL paths.
//!
//! Non-default locales live under a `/{locale}` prefix, the default locale is
//! served from the root (`/about`, never `/en/about`).

use crate::locale::Locale;

/// Detects the locale from the first non-empty segment of `pathname`.
///
/// # Examples
/// ```
/// use scholar_site::locale::Locale;
/// use scholar_site::routing::get_locale_from_path;
///
/// assert_eq!(get_locale_from_path("/ne/about"), Locale::Ne);
/// assert_eq!(get_locale_from_path("/about"), Locale::En);
/// ```
#[must_use]
pub fn get_locale_from_path(pathname: &str) -> Locale {
    first_segment(pathname).and_then(Locale::parse).unwrap_or(Locale::DEFAULT)
}

/// Builds the URL path of `path` for `locale`.
///
/// The default locale gets `path` back untouched. Other locales get a
/// `/{locale}` prefix, with a leading `/` added to `path` when missing.
#[must_use]
pub fn get_locale_path(locale: Locale, path: &str) -> String {
    if locale.is_default() {
        return path.to_string();
    }

    if path.starts_with('/') {
        format!("/{locale}{path}")
    } else {
        format!("/{locale}/{path}")
    }
}

/// Removes a leading locale segment from `pathname`.
///
/// Returns `"/"` when nothing is left after the prefix.
#[must_use]
pub fn strip_locale_prefix(pathname: &str) -> &str {
    let trimmed = pathname.trim_start_matches('/');
    let Some(segment) = first_segment(pathname) else {
        return pathname;
    };
    if Locale::parse(segment).is_none() {
        return pathname;
    }

    let rest = trimmed.get(segment.len()..).unwrap_or_default();
    if rest.is_empty() || rest == "/" { "/" } else { rest }
}

/// The same page in the other locale, for the language switcher.
#[must_use]
pub fn get_alternate_path(pathname: &str) -> String {
    let target = get_locale_from_path(pathname).alternate();
    get_locale_path(target, strip_locale_prefix(pathname))
}

/// First non-empty `/`-separated segment.
fn first_segment(pathname: &str) -> Option<&str> {
    pathname.split('/').find(|segment| !segment.is_empty())
}
