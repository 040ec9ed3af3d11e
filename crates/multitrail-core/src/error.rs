//! Error types for multitrail
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the single [`TrailError`] enum. Errors are reported to the caller of the
//! failing operation and never retried or recovered internally.

mod macros;

use crate::graph::types::VertexId;
use thiserror::Error;

/// Errors that can occur while loading or querying a graph
#[derive(Error, Debug)]
pub enum TrailError {
    /// Malformed edge-list text
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Edge or query naming a vertex that is not in the graph
    #[error("vertex not found: {vertex}")]
    InvalidReference { vertex: VertexId },

    #[error("invalid edge weight: {weight} (expected a finite, non-negative number)")]
    InvalidWeight { weight: f64 },

    /// Destination unreachable from the source
    #[error("no path from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TrailError {
    /// Create a parse error for the given 1-based line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        TrailError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a vertex that is not part of the graph
    pub fn invalid_reference(vertex: VertexId) -> Self {
        TrailError::InvalidReference { vertex }
    }

    pub fn no_path(from: VertexId, to: VertexId) -> Self {
        TrailError::NoPath { from, to }
    }

    /// Get the stable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TrailError::Parse { .. } => "parse_error",
            TrailError::InvalidReference { .. } => "invalid_reference",
            TrailError::InvalidWeight { .. } => "invalid_weight",
            TrailError::NoPath { .. } => "no_path",
            TrailError::Io(_) => "io_error",
            TrailError::Toml(_) => "toml_error",
            TrailError::Json(_) => "json_error",
            TrailError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            TrailError::Parse { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            TrailError::InvalidReference { vertex } => {
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            TrailError::NoPath { from, to } => {
                error_obj["from"] = serde_json::json!(from);
                error_obj["to"] = serde_json::json!(to);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for multitrail operations
pub type Result<T> = std::result::Result<T, TrailError>;
