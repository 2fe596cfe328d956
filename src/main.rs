use anyhow::Result;
use pages_i18n::config::I18nConfig;
use pages_i18n::integration::{self, RouteHost};
use pages_i18n::routes::RouteEntry;
use pages_i18n::watcher;
use tracing::info;

/// Host stand-in for the dev runner: logs each registered route.
struct LoggingHost;

impl RouteHost for LoggingHost {
    fn inject_route(&mut self, route: RouteEntry) {
        info!("{} -> {}", route.pattern, route.entry_point);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pages_i18n=info".parse()?),
        )
        .init();

    info!("Starting pages-i18n dev runner");

    // Load configuration from environment
    let config = I18nConfig::from_env()?;

    let mut host = LoggingHost;
    let planned = integration::setup(&config, &mut host).await?;
    info!("Registered {} routes for {} languages", planned.len(), config.langs.len());

    // Watch for the rest of the process lifetime; adds and removes force a
    // restart, content edits only log.
    let _watcher = watcher::spawn_watcher(&config.pages_dir, watcher::exit_on_structural_change)?;

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    Ok(())
}
