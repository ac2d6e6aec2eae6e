//! Route pipeline composition.
//!
//! # Data Flow
//! ```text
//! BootstrapConfig.routes (declaration order)
//!     → RouteContext (global config + route overrides, shallow merge)
//!     → RouteComposer::compose (one middleware unit per route)
//!     → merged into the application router, in order
//! ```
//!
//! # Design Decisions
//! - The composer is the router collaborator seam: the orchestrator never
//!   inspects what a composed unit contains, only that composition succeeds
//! - Routes install in declaration order and the order is observable
//! - No deduplication or conflict detection between routes; overlapping
//!   definitions are a caller responsibility (axum rejects duplicate
//!   literal paths when the units are merged)

pub mod composer;
pub mod pages;

use axum::Router;

use crate::config::schema::{BootstrapConfig, RouteConfig};
use crate::error::ConfigError;

pub use composer::StepRouter;

/// Per-route configuration: the global configuration with the route's
/// overrides shallow-merged over it, plus the route itself.
#[derive(Debug, Clone)]
pub struct RouteContext {
    pub route: RouteConfig,
    pub config: BootstrapConfig,
}

impl RouteContext {
    pub fn new(route: RouteConfig, global: &BootstrapConfig) -> Self {
        let mut config = global.clone();
        route.overrides.apply(&mut config);
        Self { route, config }
    }
}

/// Router collaborator: turns one route's context into an installable
/// middleware unit.
pub trait RouteComposer: Send + Sync {
    fn compose(&self, ctx: &RouteContext) -> Result<Router, ConfigError>;
}
