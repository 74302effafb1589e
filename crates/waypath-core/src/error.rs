//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including a cancelled search)
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (unknown start node, malformed network or map, missing street)
//!
//! An unreachable goal is not an error. It is reported through
//! [`crate::graph::SearchStatus`] on the search result.

mod macros;

use thiserror::Error;

/// Exit codes for the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad network, map or node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("start node {node} is not part of the graph")]
    InvalidStart { node: String },

    #[error("goal node {node} is not part of the graph")]
    InvalidGoal { node: String },

    #[error("malformed {context}: {reason}")]
    MalformedInput { context: String, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("search cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for a start node that the graph does not contain
    pub fn invalid_start(node: impl std::fmt::Debug) -> Self {
        WaypathError::InvalidStart {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a goal node outside a bounded graph
    pub fn invalid_goal(node: impl std::fmt::Debug) -> Self {
        WaypathError::InvalidGoal {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for unparsable collaborator input (files, arguments)
    pub fn malformed(context: &str, reason: impl std::fmt::Display) -> Self {
        WaypathError::MalformedInput {
            context: context.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_)
            | WaypathError::UsageError(_)
            | WaypathError::InvalidValue { .. } => ExitCode::Usage,

            WaypathError::InvalidStart { .. }
            | WaypathError::InvalidGoal { .. }
            | WaypathError::MalformedInput { .. }
            | WaypathError::NotFound { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::Cancelled
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::InvalidStart { .. } => "invalid_start",
            WaypathError::InvalidGoal { .. } => "invalid_goal",
            WaypathError::MalformedInput { .. } => "malformed_input",
            WaypathError::NotFound { .. } => "not_found",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Cancelled => "cancelled",
            WaypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
