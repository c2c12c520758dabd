//! Error types for canonicalization and hashing

use jcs_value::ValueError;
use thiserror::Error;

/// Errors that can occur during canonicalization or hashing.
///
/// Every error detected inside the recursive walk unwinds immediately to
/// the top-level call; the engine never produces partially-canonicalized
/// output and never substitutes a silent default for an invalid value.
///
/// `path` fields hold the RFC 6901 JSON Pointer of the offending node,
/// with `""` denoting the document root.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("Non-finite number (NaN or Infinity) at {path:?}")]
    InvalidNumber { path: String },

    #[error("Duplicate object key {key:?} at {path:?}")]
    DuplicateKey { key: String, path: String },

    #[error("Unsupported value: {reason}")]
    UnsupportedType { reason: String },

    #[error("Nesting depth exceeds the configured limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("Unsupported hash algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialization(err.to_string())
    }
}

impl From<ValueError> for CanonicalError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::DuplicateKey(key) => CanonicalError::DuplicateKey {
                key,
                path: String::new(),
            },
            other => CanonicalError::UnsupportedType {
                reason: other.to_string(),
            },
        }
    }
}
