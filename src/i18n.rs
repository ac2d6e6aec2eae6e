//! Internationalization collaborator.
//!
//! Translations live at `<caller>/<translations>/<lng>/<ns>.json`; each file
//! is flattened into `ns.path.to.key` entries per language. A missing
//! translations directory degrades to echoing the key back, with a warning,
//! so a service without translations still gets readable error pages.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::config::schema::BootstrapConfig;
use crate::error::ConfigError;

const DEFAULT_LANGUAGE: &str = "en";

/// Message translation seam used by the error boundary.
pub trait Translate: Send + Sync {
    /// Translate a dotted key (e.g. `errors.default`). Implementations fall
    /// back to the key itself when no translation exists.
    fn translate(&self, key: &str) -> String;
}

/// Default translator backed by flattened JSON files on disk.
#[derive(Debug, Default)]
pub struct Translations {
    // language → flattened "ns.path.to.key" → message
    languages: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    /// Load translations for a resolved configuration.
    ///
    /// Parse failures in present files are fatal; an absent directory is not.
    pub fn load(config: &BootstrapConfig) -> Result<Arc<Self>, ConfigError> {
        let root = config.caller.join(&config.translations);
        if !root.is_dir() {
            tracing::warn!(
                path = %root.display(),
                "No translations directory; messages fall back to keys"
            );
            return Ok(Arc::new(Self::default()));
        }

        let mut languages = HashMap::new();
        for lang_entry in fs::read_dir(&root)? {
            let lang_entry = lang_entry?;
            if !lang_entry.file_type()?.is_dir() {
                continue;
            }
            let lang = lang_entry.file_name().to_string_lossy().into_owned();
            let messages = Self::load_language(&lang_entry.path())?;
            languages.insert(lang, messages);
        }

        Ok(Arc::new(Self { languages }))
    }

    fn load_language(dir: &Path) -> Result<HashMap<String, String>, ConfigError> {
        let mut messages = HashMap::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let namespace = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let content = fs::read_to_string(&path)?;
            let value: Value = serde_json::from_str(&content).map_err(|source| {
                ConfigError::Translation {
                    path: path.clone(),
                    source,
                }
            })?;
            flatten(&namespace, &value, &mut messages);
        }
        Ok(messages)
    }
}

impl Translate for Translations {
    fn translate(&self, key: &str) -> String {
        self.languages
            .get(DEFAULT_LANGUAGE)
            .and_then(|messages| messages.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let child = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&child, nested, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
