//! Static asset serving.
//!
//! Nests a `ServeDir` at the configured assets mount, rooted at
//! `<caller>/<asset_dir>`. A missing directory is not fatal; requests under
//! the mount simply 404.

use axum::Router;
use tower_http::services::ServeDir;

use crate::config::schema::BootstrapConfig;

pub fn install(app: Router, config: &BootstrapConfig) -> Router {
    let dir = config.caller.join(&config.asset_dir);
    let mount = normalize_mount(&config.assets);

    tracing::debug!(mount = %mount, dir = %dir.display(), "Serving static assets");

    app.nest_service(&mount, ServeDir::new(dir))
}

fn normalize_mount(assets: &str) -> String {
    if assets.starts_with('/') {
        assets.to_string()
    } else {
        format!("/{assets}")
    }
}
