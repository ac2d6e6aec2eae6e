//! Error types for the bootstrap orchestrator.
//!
//! # Taxonomy
//! - `ConfigError`: caller-authoring mistakes caught during construction,
//!   before any listener binds. Never recovered.
//! - `LifecycleError`: transport bind failures and invalid start/stop
//!   transitions.
//! - `BootstrapError`: umbrella returned by the top-level entry points.
//!
//! Request-time errors are not represented here; they are contained per
//! request by the error boundary (see `boundary`).

use std::path::PathBuf;

use thiserror::Error;

/// Errors in the resolved configuration, raised before any middleware is
/// installed or any transport binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No route sequence present, or it is empty.
    #[error("Must be called with a list of routes")]
    RoutesRequired,

    /// A route declared no steps.
    #[error("Route {route} must define a set of one or more steps")]
    StepsRequired { route: String },

    /// The configured views directory does not exist or is unreadable.
    #[error("Cannot find views at {path}")]
    ViewsNotFound { path: PathBuf },

    /// A translation file failed to parse.
    #[error("Invalid translation file {path}: {source}")]
    Translation {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Filesystem error while loading configuration or translations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file failed to parse.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors from the server lifecycle state machine.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The listen address could not be parsed.
    #[error("Invalid listen address {addr}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    /// The transport failed to bind or listen.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The https transport was selected without TLS material configured.
    #[error("https transport selected but no TLS certificate configured")]
    TlsRequired,

    /// TLS certificate or key could not be loaded.
    #[error("Failed to load TLS material: {0}")]
    Tls(std::io::Error),

    /// `start` called while already listening.
    #[error("Server is already listening")]
    AlreadyListening,

    /// `start` called after the server was stopped.
    #[error("Server has already been stopped")]
    Closed,

    /// `stop` called before a successful `start`.
    #[error("Server was never started")]
    NotStarted,
}

/// Top-level error type returned by [`crate::bootstrap`] and
/// [`crate::Bootstrap`] entry points.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_construction_contract() {
        assert_eq!(
            ConfigError::RoutesRequired.to_string(),
            "Must be called with a list of routes"
        );
        assert_eq!(
            ConfigError::StepsRequired {
                route: "apply".into()
            }
            .to_string(),
            "Route apply must define a set of one or more steps"
        );
    }

    #[test]
    fn umbrella_wraps_both_taxonomies() {
        let config: BootstrapError = ConfigError::RoutesRequired.into();
        assert!(matches!(config, BootstrapError::Config(_)));

        let lifecycle: BootstrapError = LifecycleError::NotStarted.into();
        assert!(matches!(lifecycle, BootstrapError::Lifecycle(_)));
    }
}
