//! Internationalization (i18n) module for localized route paths.
//!
//! This module holds the translation table data model and the path
//! translation algorithm. Translation is purely structural: segments of a
//! logical route path are remapped per language, and anything without a
//! mapping passes through unchanged.
//!
//! # Architecture
//!
//! - `table`: nested per-language segment mapping (`TranslationNode`)
//! - `translate`: recursive segment-by-segment resolution with fail-open
//!   fallback to the original segment
//!
//! # Example
//!
//! ```rust,ignore
//! use pages_i18n::i18n::{translate, Translations};
//!
//! let table: Translations =
//!     serde_json::from_str(r#"{ "blog": { "index": "articles" } }"#)?;
//! assert_eq!(translate("blog/post", &table), "articles/post");
//! ```

mod table;
mod translate;

pub use table::{empty_translations, TranslationNode, TranslationTable, Translations, INDEX_KEY};
pub use translate::translate;
