//! Translation table: the nested per-language segment mapping.
//!
//! A table maps a language code to a tree of path segments. Each segment
//! resolves to either a replacement string or a subtree of child segments;
//! a subtree's own replacement, if any, lives under its `index` key.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// One language's nested segment mapping.
pub type Translations = BTreeMap<String, TranslationNode>;

/// Full translation table: language code -> nested segment mapping.
pub type TranslationTable = BTreeMap<String, Translations>;

/// Key under which a subtree stores its own replacement string.
pub const INDEX_KEY: &str = "index";

/// A single node in a translation table.
///
/// Deserializes from plain JSON: a string value becomes a `Leaf`, an object
/// becomes a `Branch`. Keys are single path segments and must not contain
/// slashes.
///
/// # Example
/// ```ignore
/// let table: Translations = serde_json::from_str(
///     r#"{ "about": "a-propos", "blog": { "index": "articles" } }"#,
/// )?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// Direct replacement for a segment.
    Leaf(String),
    /// Child segments of a directory-level segment.
    Branch(Translations),
}

/// Shared empty mapping, used when a segment has no configured subtree.
///
/// Initialized once on first access (same pattern as a lazily-built
/// registry) so recursive lookups can always borrow a branch.
pub fn empty_translations() -> &'static Translations {
    static EMPTY: OnceLock<Translations> = OnceLock::new();
    EMPTY.get_or_init(Translations::new)
}
