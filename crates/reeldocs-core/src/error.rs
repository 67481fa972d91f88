//! Unified error handling for reeldocs Core.
//!
//! Every failure mode of the toolkit maps onto one [`DocsError`] variant.
//! None of them are retried; the CLI turns them into a message and an exit
//! code.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for reeldocs Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocsError {
    /// An expected file or directory is absent and absence is not tolerated.
    #[error("Not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// `versions.json` exists but is not valid JSON or not a list.
    #[error("Malformed data in {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// A path expected to be a directory is something else.
    #[error("Invalid path {}: {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// The shared script asset lacks one or more required hooks.
    #[error("{} missing required functions: {}", .path.display(), .missing.join(", "))]
    MissingDependency {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    /// The underlying filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// Pure domain validation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl DocsError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingFile { path } => vec![
                format!("Expected to find: {}", path.display()),
                "Check --docs-dir points at the published docs directory".into(),
            ],
            Self::MalformedData { path, .. } => vec![
                format!("Inspect {} and make sure it is a JSON array", path.display()),
                "Example: [\"2.0.0\", \"1.0.0\"]".into(),
            ],
            Self::InvalidPath { path, .. } => vec![
                format!("Refusing to touch {}", path.display()),
                "Only version directories under the docs directory are managed".into(),
            ],
            Self::MissingDependency { path, missing } => {
                let mut out = vec![format!("Update {} so it defines:", path.display())];
                out.extend(missing.iter().map(|m| format!("  • {m}")));
                out
            }
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Domain(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingFile { .. } => ErrorCategory::NotFound,
            Self::MalformedData { .. }
            | Self::InvalidPath { .. }
            | Self::MissingDependency { .. }
            | Self::Domain(_) => ErrorCategory::Validation,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type DocsResult<T> = Result<T, DocsError>;
