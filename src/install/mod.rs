//! Capability installers.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → logging.rs (trace + request ID; absent in test/ci)
//!     → static_assets.rs (ServeDir at the assets mount)
//!     → settings.rs (template locals, body limit)
//!     → sessions.rs (cookie session attach)
//!     → composed route pipelines
//! ```
//!
//! # Design Decisions
//! - Each installer receives the application router and the resolved
//!   configuration, attaches its middleware, and returns the new router;
//!   the orchestrator never inspects what was attached
//! - Tower applies the last-added layer outermost, so the orchestrator
//!   attaches these in reverse of the request-flow order above
//! - Request tracing is skipped entirely in test/ci environments to keep
//!   test output deterministic

pub mod logging;
pub mod sessions;
pub mod settings;
pub mod static_assets;
