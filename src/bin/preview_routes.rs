//! Preview routes binary - derives and displays the localized route table
//! without registering anything with a host or starting the watcher.
//!
//! Usage:
//!   cargo run --bin preview
//!
//! Required environment variables:
//! - PAGES_I18N_LANGS (comma-separated language codes, e.g. "en,fr")
//!
//! Optional:
//! - PAGES_I18N_DIR (defaults to ./src/pages-i18n)
//! - PAGES_I18N_ROUTES_FILE (JSON translation table)

use anyhow::{Context, Result};
use pages_i18n::config::I18nConfig;
use pages_i18n::routes::plan_routes;
use pages_i18n::scan::scan;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pages_i18n=info".parse()?),
        )
        .init();

    let config = I18nConfig::from_env()?;

    let files = scan(&config.pages_dir)
        .await
        .with_context(|| format!("Failed to scan pages directory {}", config.pages_dir))?;
    let planned = plan_routes(&config, &files);

    println!(
        "{} files x {} languages -> {} routes\n",
        files.len(),
        config.langs.len(),
        planned.len()
    );
    for route in &planned {
        println!("{:<40} {}", route.pattern, route.entry_point);
    }

    Ok(())
}
