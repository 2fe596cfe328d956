//! Configuration-setup hook: scan the pages directory and register routes.

use crate::config::I18nConfig;
use crate::routes::{plan_routes, RouteEntry};
use crate::scan::scan;
use anyhow::{Context, Result};
use tracing::info;

/// Seam to the host framework's router.
///
/// Each call registers one route with the host; the host owns whatever
/// routing state the call mutates.
pub trait RouteHost {
    fn inject_route(&mut self, route: RouteEntry);
}

/// Run the configuration-setup hook once.
///
/// Scans the pages directory, derives one route per (file, language) pair
/// and hands each to the host in order (files outer, languages inner). The
/// planned list is also returned for callers that want to inspect it.
///
/// A scan failure aborts the whole setup; routes are registered either in
/// full or not at all.
pub async fn setup(config: &I18nConfig, host: &mut dyn RouteHost) -> Result<Vec<RouteEntry>> {
    info!("Initializing");

    let files = scan(&config.pages_dir)
        .await
        .with_context(|| format!("Failed to scan pages directory {}", config.pages_dir))?;
    info!("Files detected: {:?}", files);

    let planned = plan_routes(config, &files);
    for route in &planned {
        info!("Route injected: {}", route.pattern);
        host.inject_route(route.clone());
    }

    Ok(planned)
}
