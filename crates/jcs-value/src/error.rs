//! Error types for the value model

use thiserror::Error;

/// Errors that can occur while building or converting a value tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Duplicate object key: {0:?}")]
    DuplicateKey(String),

    #[error("Number {0} cannot be represented exactly as an IEEE-754 double")]
    UnrepresentableNumber(String),
}
