//! Helpers shared by the unit test modules.
#![cfg(test)]

use std::collections::HashMap;

use serde_json::Value;

use crate::locale::Locale;
use crate::translation::{
    TranslationTable,
    TranslationTree,
};

/// Builds a tree from a `json!` literal. Non-object roots give an empty tree.
pub(crate) fn tree(json: Value) -> TranslationTree {
    TranslationTree::from_json(json).unwrap_or_default()
}

/// Builds a two-locale table from `json!` literals.
///
/// # Arguments
/// * `en` - tree of the default locale
/// * `ne` - tree of the Nepali locale
pub(crate) fn table(en: Value, ne: Value) -> TranslationTable {
    let trees = HashMap::from([(Locale::En, tree(en)), (Locale::Ne, tree(ne))]);
    TranslationTable::new(trees).unwrap_or_else(|_| unreachable!("both locales are present"))
}
