//! Core Errors
//!
//! Pagination never fails; these cover the stats file model.

use serde::{Deserialize, Serialize};

/// Common result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Core-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CoreError {
    /// Stats payload could not be decoded
    InvalidStats(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidStats(msg) => write!(f, "Invalid stats: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}
