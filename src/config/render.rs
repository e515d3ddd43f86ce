//! Rendering and serialization configuration.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{CollectionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of elements shown by the default debug rendering
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Controls the debug rendering and JSON output of containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Maximum number of elements written by the debug rendering before the
    /// ellipsis line
    pub preview_limit: usize,
    /// Pretty-print JSON output
    pub pretty_json: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            pretty_json: false,
        }
    }
}

impl RenderConfig {
    /// Set the preview limit
    pub fn with_preview_limit(mut self, preview_limit: usize) -> Self {
        self.preview_limit = preview_limit;
        self
    }

    /// Enable or disable pretty-printed JSON
    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }
}

impl Config for RenderConfig {
    fn validate(&self) -> Result<()> {
        if self.preview_limit == 0 {
            return Err(CollectionError::configuration("preview_limit must be > 0"));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.preview_limit = parse_env_var(
            &format!("{}RENDER_PREVIEW_LIMIT", prefix),
            config.preview_limit,
        );
        config.pretty_json =
            parse_env_bool(&format!("{}RENDER_PRETTY_JSON", prefix), config.pretty_json);
        config.validate()?;
        log::debug!("Render configuration from environment ({}): {:?}", prefix, config);
        Ok(config)
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            CollectionError::configuration(format!("Failed to serialize render config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            CollectionError::configuration(format!("Failed to write render config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CollectionError::configuration(format!("Failed to read render config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            CollectionError::configuration(format!("Failed to parse render config file: {}", e))
        })?;
        config.validate()?;
        log::debug!("Loaded render configuration from {}", path.as_ref().display());
        Ok(config)
    }
}
