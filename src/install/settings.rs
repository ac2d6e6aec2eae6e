//! View/template settings and body handling.
//!
//! # Responsibilities
//! - Expose template locals (asset mount, GA tag, siteroot) to downstream
//!   consumers via a request extension
//! - Make the template registry available as an extension
//! - Enforce a request body size limit
//!
//! The views directory itself is verified when the registry is built (see
//! [`crate::templates::Templates::from_config`]); by the time this installer
//! runs, an unreadable views directory has already aborted the bootstrap.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{Extension, Router};

use crate::config::schema::BootstrapConfig;
use crate::templates::Templates;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Values exposed to every rendered template.
#[derive(Debug, Clone)]
pub struct TemplateLocals {
    pub asset_path: String,
    pub ga_tag_id: Option<String>,
    pub base_url: String,
}

impl TemplateLocals {
    fn from_config(config: &BootstrapConfig) -> Self {
        Self {
            asset_path: config.assets.clone(),
            ga_tag_id: config.ga.tag_id.clone(),
            base_url: config.siteroot.clone(),
        }
    }
}

pub fn install(
    app: Router,
    config: &BootstrapConfig,
    templates: Option<Arc<Templates>>,
) -> Router {
    let mut app = app
        .layer(Extension(TemplateLocals::from_config(config)))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    if let Some(templates) = templates {
        app = app.layer(Extension(templates));
    }

    app
}
