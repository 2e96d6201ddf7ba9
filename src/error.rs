//! Error types for membench-matrix
//!
//! Every failure that can stop generation or a build drive is represented
//! here. Declining a topology at the prompt is not an error and never
//! reaches this module.

use crate::config::Target;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for matrix generation and build driving
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Malformed or out-of-domain selection, rejected before any work starts
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// External build tool exited unsuccessfully
    #[error("`{target}` failed in '{dir}' ({status})\n{output}")]
    ExternalToolFailure {
        dir: PathBuf,
        target: Target,
        status: String,
        output: String,
    },

    /// I/O error during file operations
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Matrix file could not be parsed
    #[error("Invalid matrix file '{path}': {source}")]
    MatrixFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Directory traversal failed while looking for configurations
    #[error("Discovery under '{root}' failed: {message}")]
    Discovery { root: PathBuf, message: String },
}

impl MatrixError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid selection error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidSelection(message.into())
    }

    /// Check if this error was raised before any generation or build work
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::InvalidSelection(_) | Self::MatrixFile { .. })
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidSelection(_) | Self::MatrixFile { .. } => 2,
            _ => 1,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::MatrixFile { path, .. } => Some(path),
            Self::ExternalToolFailure { dir, .. } => Some(dir),
            Self::Discovery { root, .. } => Some(root),
            Self::InvalidSelection(_) => None,
        }
    }
}

/// Result type alias for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

impl From<std::io::Error> for MatrixError {
    fn from(err: std::io::Error) -> Self {
        MatrixError::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| MatrixError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MatrixError::io("/test/path", io_err);
        assert_eq!(err.path(), Some(&PathBuf::from("/test/path")));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_with_path_extension() {
        let res: std::io::Result<()> = Err(std::io::Error::other("boom"));
        let err = res.with_path("/out/parameters.h").unwrap_err();
        assert!(err.to_string().contains("/out/parameters.h"));
    }

    #[test]
    fn test_selection_errors() {
        let err = MatrixError::invalid("ratio (0, 0)");
        assert!(err.is_selection_error());
        assert_eq!(err.exit_code(), 2);
        assert!(err.path().is_none());
    }

    #[test]
    fn test_tool_failure_message() {
        let err = MatrixError::ExternalToolFailure {
            dir: PathBuf::from("build/cfg3"),
            target: Target::Build,
            status: "exit status: 2".to_string(),
            output: "cc: error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("build/cfg3"));
        assert!(msg.contains("`build`"));
        assert!(msg.contains("cc: error"));
        assert!(!err.is_selection_error());
    }
}
