//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration for scope check dispatch
///
/// The single recognized option is `cache`: when true, materialized check
/// results are memoized until invalidated by a mutation; when false, every
/// dispatch recomputes. The flag is handed to the dispatcher at
/// construction, never read from ambient state at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeChecksConfig {
    /// Memoize materialized check results
    pub cache: bool,
}

impl Default for ScopeChecksConfig {
    fn default() -> Self {
        Self { cache: false }
    }
}

impl ScopeChecksConfig {
    /// A configuration with caching enabled
    pub fn cached() -> Self {
        Self { cache: true }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
