// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Errors raised by pure domain logic.
///
/// Domain code never performs I/O, so these only describe values that are
/// unusable on their own terms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid version identifier '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("registry entry #{index} is not a scalar: {found}")]
    NonScalarEntry { index: usize, found: String },

    #[error("registry is not a JSON array (found {found})")]
    NotAList { found: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidVersion { version, .. } => vec![
                format!("'{}' cannot be used as a version directory name", version),
                "Use a plain identifier such as 1.2.0 or v2-beta".into(),
            ],
            Self::NonScalarEntry { index, .. } => vec![
                format!("Entry #{} in versions.json must be a string", index),
                "Fix versions.json by hand so it is a flat list of strings".into(),
            ],
            Self::NotAList { .. } => vec![
                "versions.json must contain a JSON array, e.g. [\"1.0.0\"]".into(),
            ],
        }
    }
}
