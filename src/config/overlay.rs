//! Layered configuration resolution.
//!
//! Resolution starts from [`BootstrapConfig::default`] and applies overlays
//! left to right; each later layer's set fields replace the earlier value.
//!
//! The merge is deliberately shallow: a later layer supplying `ga` or
//! `session` replaces the whole nested structure, it is not merged into the
//! earlier one. Per-route overrides rely on this replacement semantic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::schema::{
    BootstrapConfig, Environment, GaConfig, Protocol, RouteConfig, SessionConfig, TlsFiles,
};

/// A partial configuration layer. Every field is optional; `None` means
/// "keep the value from the earlier layers".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<Protocol>,
    pub start: Option<bool>,
    pub env: Option<Environment>,
    pub caller: Option<PathBuf>,
    pub translations: Option<PathBuf>,
    pub views: Option<PathBuf>,
    pub assets: Option<String>,
    pub asset_dir: Option<PathBuf>,
    pub view_engine: Option<String>,
    pub siteroot: Option<String>,
    pub get_cookies: Option<bool>,
    pub get_terms: Option<bool>,
    pub ga: Option<GaConfig>,
    pub session: Option<SessionConfig>,
    pub tls: Option<TlsFiles>,
    pub routes: Option<Vec<RouteConfig>>,
}

impl ConfigOverlay {
    /// Apply this layer's set fields onto `config`, replacing earlier values.
    pub fn apply(&self, config: &mut BootstrapConfig) {
        if let Some(v) = &self.host {
            config.host = v.clone();
        }
        if let Some(v) = self.port {
            config.port = v;
        }
        if let Some(v) = self.protocol {
            config.protocol = Some(v);
        }
        if let Some(v) = self.start {
            config.start = v;
        }
        if let Some(v) = self.env {
            config.env = v;
        }
        if let Some(v) = &self.caller {
            config.caller = v.clone();
        }
        if let Some(v) = &self.translations {
            config.translations = v.clone();
        }
        if let Some(v) = &self.views {
            config.views = Some(v.clone());
        }
        if let Some(v) = &self.assets {
            config.assets = v.clone();
        }
        if let Some(v) = &self.asset_dir {
            config.asset_dir = v.clone();
        }
        if let Some(v) = &self.view_engine {
            config.view_engine = v.clone();
        }
        if let Some(v) = &self.siteroot {
            config.siteroot = v.clone();
        }
        if let Some(v) = self.get_cookies {
            config.get_cookies = v;
        }
        if let Some(v) = self.get_terms {
            config.get_terms = v;
        }
        if let Some(v) = &self.ga {
            config.ga = v.clone();
        }
        if let Some(v) = &self.session {
            config.session = v.clone();
        }
        if let Some(v) = &self.tls {
            config.tls = Some(v.clone());
        }
        if let Some(v) = &self.routes {
            config.routes = v.clone();
        }
    }
}

/// Resolve a configuration from defaults plus the given overlay layers,
/// applied left to right.
pub fn resolve<'a>(layers: impl IntoIterator<Item = &'a ConfigOverlay>) -> BootstrapConfig {
    let mut config = BootstrapConfig::default();
    for layer in layers {
        layer.apply(&mut config);
    }
    config
}
