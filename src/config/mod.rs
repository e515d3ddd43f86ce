//! Configuration APIs for collectkit
//!
//! Containers work without any configuration; the types here only tune the
//! diagnostic and serialized output produced by the rendering adapter.
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization and
//! file persistence for every configuration type.
//!
//! # Environment Initialization
//!
//! ```rust
//! use collectkit::config::{Config, RenderConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads COLLECTKIT_RENDER_PREVIEW_LIMIT and COLLECTKIT_RENDER_PRETTY_JSON
//! let config = RenderConfig::from_env()?;
//!
//! // Or with a custom prefix
//! let config = RenderConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod render;

pub use render::RenderConfig;

/// Common configuration trait providing validation, environment initialization
/// and file persistence.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `COLLECTKIT_{COMPONENT}_{FIELD}`,
    /// e.g. `COLLECTKIT_RENDER_PREVIEW_LIMIT=10`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("COLLECTKIT_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default values.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.trim().to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_var() {
        env::set_var("COLLECTKIT_TEST_PARSE_NUM", " 42 ");
        assert_eq!(parse_env_var("COLLECTKIT_TEST_PARSE_NUM", 0usize), 42);

        env::set_var("COLLECTKIT_TEST_PARSE_BAD", "forty-two");
        assert_eq!(parse_env_var("COLLECTKIT_TEST_PARSE_BAD", 7usize), 7);

        assert_eq!(parse_env_var("COLLECTKIT_TEST_PARSE_UNSET", 3u32), 3);
    }

    #[test]
    fn test_parse_env_bool() {
        for value in ["true", "1", "YES", "On"] {
            env::set_var("COLLECTKIT_TEST_BOOL_TRUE", value);
            assert!(parse_env_bool("COLLECTKIT_TEST_BOOL_TRUE", false));
        }

        env::set_var("COLLECTKIT_TEST_BOOL_FALSE", "nope");
        assert!(!parse_env_bool("COLLECTKIT_TEST_BOOL_FALSE", true));

        assert!(parse_env_bool("COLLECTKIT_TEST_BOOL_UNSET", true));
    }
}
