//! Translation file discovery and loading.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobMatcher,
};
use ignore::WalkBuilder;
use serde_json::Value;

use super::{
    LoadError,
    TranslationTable,
    TranslationTree,
};
use crate::locale::Locale;

/// Finds one translation file per locale under `root`.
///
/// Files are matched against `file_pattern` relative to `root`, and the
/// locale is taken from the file stem (`locales/ne.json` → `ne`). Files
/// whose stem is not a supported locale are skipped.
///
/// # Errors
/// - Invalid glob pattern
/// - Two files for the same locale
pub fn discover_translation_files(
    root: &Path,
    file_pattern: &str,
) -> Result<HashMap<Locale, PathBuf>, LoadError> {
    tracing::debug!(root = %root.display(), file_pattern, "Discovering translation files");
    let matcher = compile_pattern(file_pattern)?;
    let mut found: HashMap<Locale, PathBuf> = HashMap::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if !matcher.is_match(relative_path) {
            continue;
        }

        let Some(locale) = detect_locale_from_path(path) else {
            tracing::debug!(path = %path.display(), "Skipping file of unsupported locale");
            continue;
        };

        if let Some(first) = found.get(&locale) {
            return Err(LoadError::DuplicateLocale {
                locale,
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }
        found.insert(locale, path.to_path_buf());
    }

    Ok(found)
}

/// Loads the translation table from files under `root`.
///
/// # Returns
/// - `Ok(Some(table))`: every locale has a file and all of them parsed
/// - `Ok(None)`: no translation file matched at all
///
/// # Errors
/// - Invalid glob pattern, duplicate or missing locale files
/// - File read or JSON parse failure
pub fn load_from_dir(
    root: &Path,
    file_pattern: &str,
) -> Result<Option<TranslationTable>, LoadError> {
    let files = discover_translation_files(root, file_pattern)?;
    if files.is_empty() {
        tracing::debug!(root = %root.display(), "No translation files found");
        return Ok(None);
    }

    let mut trees = HashMap::new();
    for (locale, path) in files {
        let tree = load_translation_file(&path)?;
        tracing::debug!(%locale, path = %path.display(), entries = tree.len(), "Loaded translations");
        trees.insert(locale, tree);
    }

    TranslationTable::new(trees).map(Some)
}

/// Reads and parses a single translation file.
///
/// # Errors
/// Returns error if the file cannot be read, is not JSON, or its root is not
/// an object.
pub fn load_translation_file(path: &Path) -> Result<TranslationTree, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    parse_translations(&content, path)
}

/// Parses translation JSON. `path` is only used for error reporting.
pub(crate) fn parse_translations(content: &str, path: &Path) -> Result<TranslationTree, LoadError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;

    TranslationTree::from_json(json).ok_or_else(|| LoadError::NotAnObject { path: path.to_path_buf() })
}

fn compile_pattern(file_pattern: &str) -> Result<GlobMatcher, LoadError> {
    Glob::new(file_pattern).map(|glob| glob.compile_matcher()).map_err(|source| {
        LoadError::InvalidPattern { pattern: file_pattern.to_string(), source }
    })
}

/// Locale named by the file stem, e.g. `locales/ne.json` → `ne`.
fn detect_locale_from_path(path: &Path) -> Option<Locale> {
    path.file_stem().and_then(|stem| stem.to_str()).and_then(Locale::parse)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    const PATTERN: &str = "**/locales/*.json";

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[rstest]
    #[case("/site/locales/en.json", Some(Locale::En))]
    #[case("/site/locales/ne.json", Some(Locale::Ne))]
    #[case("/site/locales/fr.json", None)]
    #[case("/site/locales/en-US.json", None)]
    #[case("/site/en/common.json", None)]
    fn detect_locale(#[case] path: &str, #[case] expected: Option<Locale>) {
        assert_that!(detect_locale_from_path(Path::new(path)), eq(expected));
    }

    #[rstest]
    fn discover_finds_each_locale() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/i18n/locales/en.json", "{}");
        write(temp_dir.path(), "src/i18n/locales/ne.json", "{}");
        write(temp_dir.path(), "src/i18n/locales/fr.json", "{}");
        write(temp_dir.path(), "src/i18n/en.json", "{}");

        let files = discover_translation_files(temp_dir.path(), PATTERN).unwrap();

        assert_that!(files.len(), eq(2));
        assert!(files.get(&Locale::En).is_some_and(|p| p.ends_with("locales/en.json")));
        assert!(files.get(&Locale::Ne).is_some_and(|p| p.ends_with("locales/ne.json")));
    }

    #[rstest]
    fn discover_rejects_duplicate_locale() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a/locales/en.json", "{}");
        write(temp_dir.path(), "b/locales/en.json", "{}");

        let result = discover_translation_files(temp_dir.path(), PATTERN);

        assert!(matches!(result, Err(LoadError::DuplicateLocale { locale: Locale::En, .. })));
    }

    #[rstest]
    fn discover_rejects_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();

        let result = discover_translation_files(temp_dir.path(), "**/{locales/*.json");

        assert!(matches!(result, Err(LoadError::InvalidPattern { .. })));
    }

    #[rstest]
    fn load_from_dir_builds_table() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "locales/en.json", r#"{"nav": {"home": "Home"}}"#);
        write(temp_dir.path(), "locales/ne.json", r#"{"nav": {"home": "गृहपृष्ठ"}}"#);

        let table = load_from_dir(temp_dir.path(), PATTERN).unwrap().unwrap();

        assert_eq!(table.t("nav.home", Some(Locale::Ne)), "गृहपृष्ठ");
        assert_eq!(table.t("nav.home", None), "Home");
    }

    #[rstest]
    fn load_from_dir_without_files_is_none() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_dir(temp_dir.path(), PATTERN).unwrap();

        assert!(result.is_none());
    }

    #[rstest]
    fn load_from_dir_requires_every_locale() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "locales/en.json", "{}");

        let result = load_from_dir(temp_dir.path(), PATTERN);

        assert!(matches!(result, Err(LoadError::MissingLocale(Locale::Ne))));
    }

    #[rstest]
    fn load_translation_file_reports_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "locales/en.json", "invalid json");

        let result = load_translation_file(&temp_dir.path().join("locales/en.json"));

        assert!(matches!(result, Err(LoadError::Json { .. })));
    }

    #[rstest]
    fn load_translation_file_reports_non_object_root() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "locales/en.json", r#"["Home"]"#);

        let result = load_translation_file(&temp_dir.path().join("locales/en.json"));

        assert!(matches!(result, Err(LoadError::NotAnObject { .. })));
    }

    #[rstest]
    fn load_translation_file_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_translation_file(&temp_dir.path().join("locales/en.json"));

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
