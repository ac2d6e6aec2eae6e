//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject configurations without routes
//! - Reject routes without steps, identifying the offending route
//!
//! # Design Decisions
//! - Validation is a pure function over the resolved configuration
//! - Runs at construction time, before any installer: a failed validation
//!   means no middleware is attached and no transport ever binds

use crate::config::schema::BootstrapConfig;
use crate::error::ConfigError;

/// Validate a resolved configuration.
pub fn validate(config: &BootstrapConfig) -> Result<(), ConfigError> {
    if config.routes.is_empty() {
        return Err(ConfigError::RoutesRequired);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.steps.is_empty() {
            return Err(ConfigError::StepsRequired {
                route: route.label(index),
            });
        }
    }

    Ok(())
}
