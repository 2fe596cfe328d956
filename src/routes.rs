//! Route derivation: logical paths, localized patterns, planned entries.

use crate::config::I18nConfig;
use crate::i18n::{empty_translations, translate};

/// One route to register with the host: the URL pattern and the page file
/// backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Language-prefixed URL pattern, e.g. `/fr/a-propos/`.
    pub pattern: String,
    /// Path of the source page file, rooted at the pages directory.
    pub entry_point: String,
}

/// Derive the logical route path for a page file.
///
/// Drops the file extension, then a trailing `/index` or a bare `index`:
/// an `index.<ext>` file maps to its directory's own path.
pub fn logical_path(file: &str) -> String {
    strip_index(strip_extension(file)).to_string()
}

/// Drop the final extension of the last path segment, if any.
fn strip_extension(file: &str) -> &str {
    let name_start = file.rfind('/').map_or(0, |slash| slash + 1);
    match file[name_start..].rfind('.') {
        Some(dot) => &file[..name_start + dot],
        None => file,
    }
}

/// Drop an index-file remainder. Only a trailing `index` counts; an `index`
/// segment in the middle of a path is an ordinary directory name.
fn strip_index(path: &str) -> &str {
    if path == "index" {
        ""
    } else {
        path.strip_suffix("/index").unwrap_or(path)
    }
}

/// Assemble the final URL pattern for a language and translated path.
///
/// The pattern always begins with `/<lang>/`. A trailing slash is appended
/// unless the translated path contains a literal `.`, which marks a
/// preserved filename rather than a directory-style route.
pub fn route_pattern(lang: &str, translated: &str) -> String {
    let mut pattern = format!("/{}/", lang);
    if !translated.is_empty() {
        pattern.push_str(translated);
        if !translated.contains('.') {
            pattern.push('/');
        }
    }
    pattern
}

/// Plan one route per (file, language) pair.
///
/// Iteration order is files outer, languages inner; within a file the
/// configured language order is preserved. Files are expected as
/// forward-slash paths relative to the pages directory, as produced by the
/// scanner.
pub fn plan_routes(config: &I18nConfig, files: &[String]) -> Vec<RouteEntry> {
    let mut planned = Vec::with_capacity(files.len() * config.langs.len());

    for file in files {
        let logical = logical_path(file);
        let entry_point = format!("{}/{}", config.pages_dir.trim_end_matches('/'), file);

        for lang in &config.langs {
            let table = config.routes.get(lang).unwrap_or(empty_translations());
            let translated = translate(&logical, table);

            planned.push(RouteEntry {
                pattern: route_pattern(lang, &translated),
                entry_point: entry_point.clone(),
            });
        }
    }

    planned
}
