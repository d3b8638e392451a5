//! Nested translation data for a single locale.

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use super::ResolveError;

/// Separator between segments of a dotted key path.
pub const KEY_SEPARATOR: char = '.';

/// A value stored under a translation key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// Displayable text.
    Text(String),
    /// A nested group of keys.
    Tree(TranslationTree),
    /// Anything else the source file held (numbers, arrays, null).
    /// Never resolves as text and is never walked into, so array
    /// elements are not addressable by index (`list.0` does not resolve).
    Opaque(Value),
}

/// Immutable key to value mapping for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree(BTreeMap<String, TranslationValue>);

impl TranslationTree {
    /// Builds a tree from a parsed JSON document.
    ///
    /// Returns `None` if the root is not an object.
    #[must_use]
    pub fn from_json(json: Value) -> Option<Self> {
        match json {
            Value::Object(_) => serde_json::from_value(json).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, segment: &str) -> Option<&TranslationValue> {
        self.0.get(segment)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves a dotted key path to its text.
    ///
    /// Walks one segment at a time. Fails when a segment is missing, when an
    /// intermediate value is not a tree, or when the final value is not text.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use scholar_site::translation::TranslationTree;
    ///
    /// let tree = TranslationTree::from_json(json!({
    ///     "header": { "nav": { "home": "Home" } }
    /// }))
    /// .unwrap_or_default();
    ///
    /// assert_eq!(tree.lookup("header.nav.home").ok(), Some("Home"));
    /// assert!(tree.lookup("header.nav").is_err());
    /// ```
    pub fn lookup(&self, key: &str) -> Result<&str, ResolveError> {
        let mut segments = key.split(KEY_SEPARATOR);
        // split always yields at least one segment, even for ""
        let first = segments.next().unwrap_or_default();
        let mut current = self
            .get(first)
            .ok_or_else(|| ResolveError::MissingSegment { segment: first.to_string() })?;

        for segment in segments {
            let TranslationValue::Tree(tree) = current else {
                return Err(ResolveError::NotATree { segment: segment.to_string() });
            };
            current = tree
                .get(segment)
                .ok_or_else(|| ResolveError::MissingSegment { segment: segment.to_string() })?;
        }

        match current {
            TranslationValue::Text(text) => Ok(text),
            TranslationValue::Tree(_) | TranslationValue::Opaque(_) => Err(ResolveError::NotText),
        }
    }

    /// Dotted keys of every text leaf, in key order.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use scholar_site::translation::TranslationTree;
    ///
    /// let tree = TranslationTree::from_json(json!({
    ///     "common": { "hello": "Hello", "count": 3 },
    ///     "title": "Title"
    /// }))
    /// .unwrap_or_default();
    ///
    /// assert_eq!(tree.text_keys(), vec!["common.hello", "title"]);
    /// ```
    #[must_use]
    pub fn text_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_text_keys(self, None, &mut keys);
        keys
    }
}

fn collect_text_keys(tree: &TranslationTree, prefix: Option<&str>, keys: &mut Vec<String>) {
    for (key, value) in &tree.0 {
        let full_key =
            prefix.map_or_else(|| key.clone(), |p| format!("{p}{KEY_SEPARATOR}{key}"));
        match value {
            TranslationValue::Text(_) => keys.push(full_key),
            TranslationValue::Tree(subtree) => collect_text_keys(subtree, Some(&full_key), keys),
            TranslationValue::Opaque(_) => {}
        }
    }
}
