//! Bootstrap orchestrator for multi-step web form services.
//!
//! Given a declarative configuration (a list of routes, each an ordered
//! sequence of steps), this crate wires up an HTTP service and manages its
//! lifecycle:
//!
//! ```text
//! ConfigOverlay (defaults ← options ← per-start overrides)
//!     → config   (shallow-merge resolution + validation)
//!     → routes   (one composed middleware unit per route, in order)
//!     → install  (tracing, static assets, settings, sessions)
//!     → boundary (translating error handler, outermost)
//!     → lifecycle (Unbound → Listening → Closed)
//! ```
//!
//! Embedding is programmatic:
//!
//! ```no_run
//! use form_bootstrap::{bootstrap, ConfigOverlay, RouteConfig, StepConfig};
//!
//! # async fn run() -> Result<(), form_bootstrap::BootstrapError> {
//! let handle = bootstrap(ConfigOverlay {
//!     routes: Some(vec![RouteConfig {
//!         base_url: "/apply".into(),
//!         steps: vec![StepConfig::new("start"), StepConfig::new("details")],
//!         ..Default::default()
//!     }]),
//!     ..Default::default()
//! })
//! .await?;
//! # let _ = handle;
//! # Ok(())
//! # }
//! ```

pub mod boundary;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod i18n;
pub mod install;
pub mod lifecycle;
pub mod observability;
pub mod routes;
pub mod templates;

pub use bootstrap::{bootstrap, Bootstrap, BootstrapBuilder};
pub use config::{BootstrapConfig, ConfigOverlay, Environment, Protocol, RouteConfig, StepConfig};
pub use error::{BootstrapError, ConfigError, LifecycleError};
pub use routes::{RouteComposer, RouteContext};
