//! Error types and exit codes for maze
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid room ids)
//! - 3: Data error (missing graph file, inconsistent search state)
//!
//! An unreachable goal is not an error. Searches report it as a missing path.

mod macros;

use thiserror::Error;

/// Exit codes for the maze binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph, broken search state (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during maze operations
#[derive(Error, Debug)]
pub enum MazeError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    /// The goal was finalized but its back-pointer chain does not lead to the
    /// start. Only a broken search can produce this.
    #[error("no path found from {end} pointing back to {start}")]
    InconsistentBackpointers { start: String, end: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MazeError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MazeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        MazeError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        MazeError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create the fatal error raised when back-pointers cannot be walked from
    /// a finalized goal to the start
    pub fn inconsistent_backpointers(
        start: impl std::fmt::Display,
        end: impl std::fmt::Display,
    ) -> Self {
        MazeError::InconsistentBackpointers {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MazeError::UsageError(_)
            | MazeError::InvalidValue { .. }
            | MazeError::Unsupported { .. } => ExitCode::Usage,

            MazeError::NotFound { .. } | MazeError::InconsistentBackpointers { .. } => {
                ExitCode::Data
            }

            MazeError::Io(_)
            | MazeError::Json(_)
            | MazeError::Yaml(_)
            | MazeError::Toml(_)
            | MazeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MazeError::UsageError(_) => "usage_error",
            MazeError::InvalidValue { .. } => "invalid_value",
            MazeError::Unsupported { .. } => "unsupported",
            MazeError::NotFound { .. } => "not_found",
            MazeError::InconsistentBackpointers { .. } => "inconsistent_backpointers",
            MazeError::Io(_) => "io_error",
            MazeError::Json(_) => "json_error",
            MazeError::Yaml(_) => "yaml_error",
            MazeError::Toml(_) => "toml_error",
            MazeError::Other(_) => "other",
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

/// Result type alias for maze operations
pub type Result<T> = std::result::Result<T, MazeError>;
