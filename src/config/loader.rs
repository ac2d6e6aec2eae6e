//! Configuration loading from disk.
//!
//! Embedders supply options programmatically, but may keep them in a TOML
//! file; this loader parses such a file into a [`ConfigOverlay`] layer.

use std::fs;
use std::path::Path;

use crate::config::overlay::ConfigOverlay;
use crate::error::ConfigError;

/// Load a configuration overlay from a TOML file.
///
/// The result is one layer; semantic validation happens after resolution,
/// not here.
pub fn load_overlay(path: &Path) -> Result<ConfigOverlay, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: ConfigOverlay = toml::from_str(&content)?;
    Ok(overlay)
}
