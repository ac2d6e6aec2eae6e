//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use form_bootstrap::{ConfigOverlay, Environment, RouteConfig, StepConfig};

/// A temporary site directory (caller root) holding views, translations and
/// public assets for a test. Removed on drop.
pub struct TestSite {
    pub dir: PathBuf,
}

impl TestSite {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("form-bootstrap-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    /// Create `views/<name>.html` files containing `<h1>{name}</h1>`.
    pub fn with_views(self, templates: &[&str]) -> Self {
        let views = self.dir.join("views");
        fs::create_dir_all(&views).unwrap();
        for name in templates {
            fs::write(views.join(format!("{name}.html")), format!("<h1>{name}</h1>")).unwrap();
        }
        self
    }

    /// Create `translations/en/errors.json` with the given content.
    pub fn with_error_translations(self, json: &str) -> Self {
        let en = self.dir.join("translations").join("en");
        fs::create_dir_all(&en).unwrap();
        fs::write(en.join("errors.json"), json).unwrap();
        self
    }

    /// Create `public/<name>` asset files.
    pub fn with_asset(self, name: &str, content: &str) -> Self {
        let public = self.dir.join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join(name), content).unwrap();
        self
    }

    /// Base overlay pointing at this site: test env, loopback, ephemeral
    /// port, views configured.
    pub fn overlay(&self, routes: Vec<RouteConfig>) -> ConfigOverlay {
        ConfigOverlay {
            env: Some(Environment::Test),
            host: Some("127.0.0.1".into()),
            port: Some(0),
            caller: Some(self.dir.clone()),
            views: Some(PathBuf::from("views")),
            routes: Some(routes),
            ..Default::default()
        }
    }
}

impl Drop for TestSite {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.dir).ok();
    }
}

/// A route at `base` with the given step names.
pub fn route(base: &str, steps: &[&str]) -> RouteConfig {
    RouteConfig {
        base_url: base.to_string(),
        steps: steps.iter().map(|s| StepConfig::new(*s)).collect(),
        ..Default::default()
    }
}

/// An overlay with routes but no site directory behind it.
pub fn bare_overlay(routes: Option<Vec<RouteConfig>>) -> ConfigOverlay {
    ConfigOverlay {
        env: Some(Environment::Test),
        host: Some("127.0.0.1".into()),
        port: Some(0),
        routes,
        ..Default::default()
    }
}

/// Test client that never follows redirects and never keeps connections
/// alive between assertions.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
