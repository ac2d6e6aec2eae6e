//! File-backed template registry.
//!
//! Rendering engine internals are out of scope for the orchestrator; a
//! template here is a file named `<name>.<view_engine>` under the views
//! directory, served as HTML. Render failures flow into the error boundary.

use std::path::PathBuf;
use std::sync::Arc;

use axum::response::Html;
use thiserror::Error;

use crate::config::schema::BootstrapConfig;
use crate::error::ConfigError;

/// Errors raised while rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template {name} not found")]
    NotFound { name: String },

    #[error("Failed to read template {name}: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },
}

/// Resolves template names to files under the views directory.
#[derive(Debug)]
pub struct Templates {
    dir: PathBuf,
    extension: String,
}

impl Templates {
    pub fn new(dir: PathBuf, extension: String) -> Self {
        Self { dir, extension }
    }

    /// Build the registry for a resolved configuration.
    ///
    /// Returns `None` when no views directory is configured. A configured
    /// but unreadable views directory is a fatal construction error.
    pub fn from_config(config: &BootstrapConfig) -> Result<Option<Arc<Self>>, ConfigError> {
        let Some(views) = &config.views else {
            return Ok(None);
        };

        let dir = config.caller.join(views);
        if !dir.is_dir() {
            return Err(ConfigError::ViewsNotFound { path: dir });
        }

        Ok(Some(Arc::new(Self::new(dir, config.view_engine.clone()))))
    }

    /// Render a template by name.
    pub async fn render(&self, name: &str) -> Result<Html<String>, TemplateError> {
        let path = self.dir.join(format!("{name}.{}", self.extension));
        if !path.is_file() {
            return Err(TemplateError::NotFound {
                name: name.to_string(),
            });
        }

        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| TemplateError::Io {
                name: name.to_string(),
                source,
            })?;

        Ok(Html(body))
    }
}
