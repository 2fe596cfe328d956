use crate::i18n::TranslationTable;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;

/// Default pages root, relative to the host project.
pub const DEFAULT_PAGES_DIR: &str = "./src/pages-i18n";

/// Integration configuration, supplied once by the embedding caller and
/// immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct I18nConfig {
    /// Root directory scanned for page files.
    pub pages_dir: String,

    /// Ordered language codes; one route set is generated per code.
    pub langs: Vec<String>,

    /// Per-language segment translations. A language without an entry keeps
    /// its paths untranslated.
    pub routes: TranslationTable,
}

impl I18nConfig {
    /// Build a configuration programmatically.
    ///
    /// Language codes are validated: they must be non-empty, unique, and
    /// free of `/` and `.` (both would corrupt the generated URL patterns).
    pub fn new(langs: Vec<String>, routes: TranslationTable) -> Result<Self> {
        if langs.is_empty() {
            bail!("At least one language code is required");
        }

        let mut seen = HashSet::new();
        for lang in &langs {
            if lang.is_empty() {
                bail!("Language codes must not be empty");
            }
            if lang.contains('/') || lang.contains('.') {
                bail!("Invalid language code '{}': '/' and '.' are not allowed", lang);
            }
            if !seen.insert(lang.as_str()) {
                bail!("Duplicate language code '{}'", lang);
            }
        }

        Ok(Self {
            pages_dir: DEFAULT_PAGES_DIR.to_string(),
            langs,
            routes,
        })
    }

    /// Override the pages root.
    pub fn with_pages_dir(mut self, pages_dir: impl Into<String>) -> Self {
        self.pages_dir = pages_dir.into();
        self
    }

    /// Build a configuration from environment variables.
    ///
    /// - `PAGES_I18N_LANGS` - comma-separated language codes (required)
    /// - `PAGES_I18N_DIR` - pages root (defaults to `./src/pages-i18n`)
    /// - `PAGES_I18N_ROUTES_FILE` - optional JSON translation table
    pub fn from_env() -> Result<Self> {
        let langs: Vec<String> = std::env::var("PAGES_I18N_LANGS")
            .context("PAGES_I18N_LANGS not set")?
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        let routes = match std::env::var("PAGES_I18N_ROUTES_FILE") {
            Ok(path) => load_routes_file(&path)?,
            Err(_) => TranslationTable::new(),
        };

        let pages_dir =
            std::env::var("PAGES_I18N_DIR").unwrap_or_else(|_| DEFAULT_PAGES_DIR.to_string());

        Ok(Self::new(langs, routes)?.with_pages_dir(pages_dir))
    }
}

/// Load a translation table from a JSON file.
///
/// Top-level keys are language codes; values are nested segment mappings.
pub fn load_routes_file(path: &str) -> Result<TranslationTable> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read routes file {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse routes file {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    // ==================== Constructor Tests ====================

    #[test]
    fn test_new_with_valid_langs() {
        let config =
            I18nConfig::new(langs(&["en", "fr"]), TranslationTable::new()).expect("valid config");

        assert_eq!(config.langs, langs(&["en", "fr"]));
        assert_eq!(config.pages_dir, DEFAULT_PAGES_DIR);
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_new_preserves_language_order() {
        let config =
            I18nConfig::new(langs(&["fr", "en", "es"]), TranslationTable::new()).expect("valid");

        assert_eq!(config.langs, langs(&["fr", "en", "es"]));
    }

    #[test]
    fn test_new_rejects_empty_language_list() {
        let result = I18nConfig::new(vec![], TranslationTable::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_empty_language_code() {
        let result = I18nConfig::new(langs(&["en", ""]), TranslationTable::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_slash_in_language_code() {
        let result = I18nConfig::new(langs(&["en/us"]), TranslationTable::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_dot_in_language_code() {
        // A dot in the prefix would suppress the trailing slash heuristic.
        let result = I18nConfig::new(langs(&["en.us"]), TranslationTable::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_language_codes() {
        let result = I18nConfig::new(langs(&["en", "fr", "en"]), TranslationTable::new());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Duplicate"));
    }

    #[test]
    fn test_with_pages_dir_overrides_default() {
        let config = I18nConfig::new(langs(&["en"]), TranslationTable::new())
            .expect("valid")
            .with_pages_dir("./content/pages");

        assert_eq!(config.pages_dir, "./content/pages");
    }

    // ==================== Routes File Tests ====================

    #[test]
    fn test_load_routes_file_parses_nested_table() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("routes.json");
        std::fs::write(
            &path,
            r#"{ "fr": { "about": "a-propos", "blog": { "index": "articles" } } }"#,
        )
        .expect("write routes file");

        let table = load_routes_file(path.to_str().unwrap()).expect("parse");

        assert!(table.contains_key("fr"));
        assert_eq!(table["fr"].len(), 2);
    }

    #[test]
    fn test_load_routes_file_missing_file_fails() {
        let result = load_routes_file("/nonexistent/routes.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn test_load_routes_file_invalid_json_fails() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("routes.json");
        std::fs::write(&path, "not json").expect("write routes file");

        let result = load_routes_file(path.to_str().unwrap());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    // ==================== Environment Tests ====================

    fn clear_env() {
        std::env::remove_var("PAGES_I18N_LANGS");
        std::env::remove_var("PAGES_I18N_DIR");
        std::env::remove_var("PAGES_I18N_ROUTES_FILE");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_langs() {
        clear_env();

        let result = I18nConfig::from_env();

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("PAGES_I18N_LANGS"));
    }

    #[test]
    #[serial]
    fn test_from_env_parses_comma_separated_langs() {
        clear_env();
        std::env::set_var("PAGES_I18N_LANGS", "en, fr ,es");

        let config = I18nConfig::from_env().expect("valid config");

        assert_eq!(config.langs, langs(&["en", "fr", "es"]));
        assert_eq!(config.pages_dir, DEFAULT_PAGES_DIR);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_reads_dir_and_routes_file() {
        clear_env();
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("routes.json");
        std::fs::write(&path, r#"{ "fr": { "about": "a-propos" } }"#).expect("write");

        std::env::set_var("PAGES_I18N_LANGS", "en,fr");
        std::env::set_var("PAGES_I18N_DIR", "./demo/pages");
        std::env::set_var("PAGES_I18N_ROUTES_FILE", path.to_str().unwrap());

        let config = I18nConfig::from_env().expect("valid config");

        assert_eq!(config.pages_dir, "./demo/pages");
        assert!(config.routes.contains_key("fr"));
        clear_env();
    }
}
