//! pages-i18n: localized route generation for a pages directory.
//!
//! Scans a directory of page files once at configuration time, derives a
//! route path per file, remaps path segments per language through a
//! translation table, and registers one route per (file, language) pair
//! with the embedding host. A development watcher observes the same
//! directory and forces a restart when files are added or removed.
//!
//! # Example
//!
//! ```rust,ignore
//! use pages_i18n::{config::I18nConfig, integration};
//!
//! let config = I18nConfig::new(langs, routes)?.with_pages_dir("./src/pages-i18n");
//! let planned = integration::setup(&config, &mut host).await?;
//! let _watcher = pages_i18n::watcher::spawn_watcher(
//!     &config.pages_dir,
//!     pages_i18n::watcher::exit_on_structural_change,
//! )?;
//! ```

pub mod config;
pub mod i18n;
pub mod integration;
pub mod routes;
pub mod scan;
pub mod watcher;
