//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailConfig {
    /// Edge-list loader behavior
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Logging defaults
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the edge-list loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Allow one weight token to create edges from the first buffered
    /// endpoint to every following one (default true). When false, an edge
    /// group may hold at most two endpoints.
    #[serde(default = "default_fan_out")]
    pub fan_out: bool,
}

/// Logging defaults used when no environment filter is set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or filter directive, e.g. "debug" or "multitrail_core=trace"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            fan_out: default_fan_out(),
        }
    }
}

fn default_fan_out() -> bool {
    true
}
