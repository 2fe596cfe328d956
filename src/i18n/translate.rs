//! Segment-by-segment path translation.

use crate::i18n::table::{empty_translations, TranslationNode, Translations, INDEX_KEY};

/// Translate a slash-separated logical path against one language's mapping.
///
/// Each segment resolves independently: the head segment is looked up in
/// `node`, the tail is resolved against the head's subtree. Lookups never
/// fail; a segment without a usable mapping is kept as-is.
///
/// # Arguments
/// * `path` - Slash-separated segments (may be empty)
/// * `node` - The language's segment mapping (may be empty)
///
/// # Returns
/// The translated path. Untranslated segments pass through unchanged.
pub fn translate(path: &str, node: &Translations) -> String {
    // Nested path: translate the head, then the tail against its subtree.
    if let Some((first, rest)) = path.split_once('/') {
        let first_translated = translate(first, node);
        let subtree = match node.get(first) {
            Some(TranslationNode::Branch(children)) => children,
            // Leaf or absent: the tail has no subtree to consult.
            _ => empty_translations(),
        };
        let rest_translated = translate(rest, subtree);
        return format!("{}/{}", first_translated, rest_translated);
    }

    // Leaf segment: a direct string wins, then the subtree's `index` entry.
    match node.get(path) {
        Some(TranslationNode::Leaf(replacement)) => replacement.clone(),
        Some(TranslationNode::Branch(children)) => match children.get(INDEX_KEY) {
            Some(TranslationNode::Leaf(replacement)) => replacement.clone(),
            _ => path.to_string(),
        },
        None => path.to_string(),
    }
}
