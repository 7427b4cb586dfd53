//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, missing input lines)
//! - 3: Data error (unknown location, malformed record, self-loop edge)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad dataset or unknown location (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a graph or running searches
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs or astar)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no such location: {name}")]
    UnknownLocation { name: String },

    #[error("cannot connect {name} to itself")]
    SelfLoop { name: String },

    #[error("invalid record in {dataset} at line {line}: {reason}")]
    InvalidRecord {
        dataset: String,
        line: usize,
        reason: String,
    },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WaypathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a malformed dataset record
    pub fn invalid_record(dataset: &str, line: usize, reason: impl std::fmt::Display) -> Self {
        WaypathError::InvalidRecord {
            dataset: dataset.to_string(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a location name with no matching vertex
    pub fn unknown_location(name: impl Into<String>) -> Self {
        WaypathError::UnknownLocation { name: name.into() }
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
            | WaypathError::UnknownAlgorithm(_)
            | WaypathError::UsageError(_) => ExitCode::Usage,

            WaypathError::UnknownLocation { .. }
            | WaypathError::SelfLoop { .. }
            | WaypathError::InvalidRecord { .. }
            | WaypathError::NotFound { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::FailedOperationWithTarget { .. }
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UnknownAlgorithm(_) => "unknown_algorithm",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::UnknownLocation { .. } => "unknown_location",
            WaypathError::SelfLoop { .. } => "self_loop",
            WaypathError::InvalidRecord { .. } => "invalid_record",
            WaypathError::NotFound { .. } => "not_found",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
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
