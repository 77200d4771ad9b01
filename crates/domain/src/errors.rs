//! Error types used throughout the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Visadesk
///
/// `InvalidTransition` and `Validation` are rejected synchronously and never
/// partially applied; callers surface them to the user and retry with a
/// corrected request if appropriate. Nothing in this taxonomy is fatal to the
/// process.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum VisadeskError {
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Visadesk operations
pub type Result<T> = std::result::Result<T, VisadeskError>;
