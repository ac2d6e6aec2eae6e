//! Configuration schema definitions.
//!
//! This module defines the complete configuration surface consumed by the
//! bootstrap orchestrator. All types derive Serde traits so overlays can be
//! deserialized from config files as well as built programmatically.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::overlay::ConfigOverlay;

/// Root configuration for a bootstrapped form service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Host to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// Transport to bind at start time. `None` allows per-start overrides
    /// to choose one; plain HTTP is used if nothing ever chooses.
    pub protocol: Option<Protocol>,

    /// Whether `start` should bind a transport at all. `false` is used for
    /// embedding/testing without a live socket.
    pub start: bool,

    /// Runtime environment. Controls request tracing and error detail.
    pub env: Environment,

    /// Base directory used to resolve relative asset/view/translation paths.
    pub caller: PathBuf,

    /// Translations directory, relative to `caller`.
    pub translations: PathBuf,

    /// Views (template) directory, relative to `caller`.
    pub views: Option<PathBuf>,

    /// URL mount for static assets (e.g., "/public").
    pub assets: String,

    /// Filesystem directory served at the assets mount, relative to `caller`.
    pub asset_dir: PathBuf,

    /// Template file extension (e.g., "html").
    pub view_engine: String,

    /// Site root prefix exposed to templates.
    pub siteroot: String,

    /// Register a `GET /cookies` page rendering the `cookies` template.
    pub get_cookies: bool,

    /// Register a `GET /terms-and-conditions` page rendering the `terms`
    /// template.
    pub get_terms: bool,

    /// Google Analytics settings exposed to templates.
    pub ga: GaConfig,

    /// Session cookie settings.
    pub session: SessionConfig,

    /// TLS material, required when the `https` transport is selected.
    pub tls: Option<TlsFiles>,

    /// Route definitions, installed in declaration order.
    pub routes: Vec<RouteConfig>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            protocol: None,
            start: true,
            env: Environment::default(),
            caller: PathBuf::from("."),
            translations: PathBuf::from("translations"),
            views: None,
            assets: "/public".to_string(),
            asset_dir: PathBuf::from("public"),
            view_engine: "html".to_string(),
            siteroot: String::new(),
            get_cookies: false,
            get_terms: false,
            ga: GaConfig::default(),
            session: SessionConfig::default(),
            tls: None,
            routes: Vec::new(),
        }
    }
}

/// Transport protocol for the listener.
///
/// An enumerated variant resolved through a factory, rather than a module
/// name loaded dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
    Test,
    Ci,
}

impl Environment {
    /// Request tracing is suppressed in these environments to keep test
    /// output deterministic.
    pub fn is_quiet(self) -> bool {
        matches!(self, Environment::Test | Environment::Ci)
    }

    /// Raw error details are only ever exposed in development.
    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Google Analytics settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GaConfig {
    /// Tag ID exposed to templates, if analytics is enabled.
    pub tag_id: Option<String>,
}

/// Session cookie settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the session cookie.
    pub cookie_name: String,

    /// Session time-to-live in seconds.
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "form.sid".to_string(),
            ttl_secs: 3600,
        }
    }
}

/// TLS material for the `https` transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsFiles {
    /// Path to certificate file (PEM), relative to `caller`.
    pub cert_path: PathBuf,

    /// Path to private key file (PEM), relative to `caller`.
    pub key_path: PathBuf,
}

/// A route: a URL-pattern grouping composed of an ordered sequence of steps.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Route identifier for logging and error messages.
    pub name: Option<String>,

    /// Base URL the route mounts under.
    pub base_url: String,

    /// Ordered steps. A route with zero steps is rejected at load time.
    pub steps: Vec<StepConfig>,

    /// Route-specific configuration overrides, shallow-merged over the
    /// global configuration when the route's pipeline is composed.
    pub overrides: ConfigOverlay,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            name: None,
            base_url: "/".to_string(),
            steps: Vec::new(),
            overrides: ConfigOverlay::default(),
        }
    }
}

impl RouteConfig {
    /// Human-readable label for error messages, preferring the explicit
    /// name, then the base URL, then the declaration index.
    pub fn label(&self, index: usize) -> String {
        if let Some(name) = &self.name {
            name.clone()
        } else if self.base_url != "/" {
            self.base_url.clone()
        } else {
            format!("at index {index}")
        }
    }
}

/// An individual page within a multi-step form workflow. Opaque to the
/// orchestrator; the route composer decides what a step means.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StepConfig {
    /// URL segment for the step.
    pub name: String,

    /// Template rendered for the step. Defaults to the step name.
    #[serde(default)]
    pub template: Option<String>,
}

impl StepConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: None,
        }
    }

    /// The template name this step renders.
    pub fn template_name(&self) -> &str {
        self.template.as_deref().unwrap_or(&self.name)
    }
}
