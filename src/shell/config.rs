//! Shell Configuration
//!
//! Loads the cache configuration for the shell binary from environment
//! variables.

use std::env;

use crate::config::{CacheConfig, DEFAULT_SIZE, DEFAULT_TTL};

/// Shell configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Maximum number of entries, negative for unlimited
    pub size: i64,
    /// Time-to-live in seconds handed to the cache configuration
    pub ttl: i64,
}

impl ShellConfig {
    /// Creates a new ShellConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SIZE` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL` - TTL in seconds (default: 3600)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or
    /// unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            size: lookup("CACHE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_SIZE),
            ttl: lookup("CACHE_TTL")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TTL),
        }
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new(self.size, self.ttl)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            ttl: DEFAULT_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_shell_config_defaults() {
        let config = ShellConfig::from_lookup(|_| None);
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.cache_config(), CacheConfig::default());
    }

    #[test]
    fn test_shell_config_from_vars() {
        let vars: HashMap<&str, &str> = [("CACHE_SIZE", "2"), ("CACHE_TTL", " 60 ")].into();
        let config = ShellConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.size, 2);
        assert_eq!(config.ttl, 60);
        assert_eq!(config.cache_config().limit(), Some(2));
    }

    #[test]
    fn test_shell_config_bad_values_fall_back() {
        let config = ShellConfig::from_lookup(|_| Some("lots".to_string()));
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_shell_config_unlimited() {
        let config = ShellConfig::from_lookup(|name| (name == "CACHE_SIZE").then(|| "-1".into()));
        assert_eq!(config.cache_config().limit(), None);
    }
}
