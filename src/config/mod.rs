//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (BootstrapConfig::default)
//!     → overlay.rs (caller options, per-start overrides; shallow merge)
//!     → validation.rs (semantic checks: routes, steps)
//!     → BootstrapConfig (resolved, immutable)
//!     → handed to installers and the route composer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; per-start overrides produce a fresh
//!   resolution, they never mutate the base configuration
//! - All fields have defaults to allow minimal configs
//! - Merge is shallow: a later layer's value for a key fully replaces the
//!   earlier one, nested structures included. Per-route override behavior
//!   depends on this, so it is deliberate and load-bearing
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod overlay;
pub mod schema;
pub mod validation;

pub use overlay::{resolve, ConfigOverlay};
pub use schema::{
    BootstrapConfig, Environment, GaConfig, Protocol, RouteConfig, SessionConfig, StepConfig,
    TlsFiles,
};
