//! Error types and exit codes for shortcut
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, precondition violations)
//! - 3: Data error (unknown vertex, malformed graph document, void result read)

use crate::graph::VertexId;
use thiserror::Error;

/// Exit codes per shortcut CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, malformed graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during shortcut operations
#[derive(Error, Debug)]
pub enum ShortcutError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("negative edge weight {weight} on {from} -> {to} (dijkstra requires non-negative weights; use bellman-ford or johnson)")]
    NegativeWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    #[error("cycle detection requires an undirected graph")]
    NotUndirected,

    // Data errors (exit code 3)
    #[error("unknown vertex: {vertex}")]
    InvalidVertex { vertex: VertexId },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("no path exists from {from} to {to}")]
    NoPath { from: VertexId, to: VertexId },

    #[error("negative cycle detected; distances and paths are undefined")]
    NegativeCycle,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ShortcutError {
    /// Create an error for an edge or query referencing an undeclared vertex
    pub fn invalid_vertex(vertex: VertexId) -> Self {
        ShortcutError::InvalidVertex { vertex }
    }

    /// Create an error for a structurally invalid graph document
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        ShortcutError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShortcutError::UnknownFormat(_)
            | ShortcutError::UsageError(_)
            | ShortcutError::NegativeWeight { .. }
            | ShortcutError::NotUndirected => ExitCode::Usage,

            ShortcutError::InvalidVertex { .. }
            | ShortcutError::InvalidGraph { .. }
            | ShortcutError::NoPath { .. }
            | ShortcutError::NegativeCycle => ExitCode::Data,

            ShortcutError::Io(_) | ShortcutError::Json(_) | ShortcutError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ShortcutError::UnknownFormat(_) => "unknown_format",
            ShortcutError::UsageError(_) => "usage_error",
            ShortcutError::NegativeWeight { .. } => "negative_weight",
            ShortcutError::NotUndirected => "not_undirected",
            ShortcutError::InvalidVertex { .. } => "invalid_vertex",
            ShortcutError::InvalidGraph { .. } => "invalid_graph",
            ShortcutError::NoPath { .. } => "no_path",
            ShortcutError::NegativeCycle => "negative_cycle",
            ShortcutError::Io(_) => "io_error",
            ShortcutError::Json(_) => "json_error",
            ShortcutError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for shortcut operations
pub type Result<T> = std::result::Result<T, ShortcutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            ShortcutError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ShortcutError::invalid_vertex(VertexId::new(9)).exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            ShortcutError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(ShortcutError::NotUndirected.exit_code(), ExitCode::Usage);
        assert_eq!(ShortcutError::NegativeCycle.exit_code(), ExitCode::Data);
    }

    #[test]
    fn test_to_json_shape() {
        let err = ShortcutError::invalid_vertex(VertexId::new(42));
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_vertex");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("unknown vertex: 42"));
    }
}
