//! Outcome kinds reported to the command front-end.
//!
//! Every mutating settings or event operation returns an [`OperationResult`]. The
//! front-end only branches on success or failure and shows the failure message; the
//! [`OperationStatus`] exists so the failure kind stays inspectable without parsing
//! text.

use std::fmt;

use super::AppError;

/// Result of a settings or event operation.
pub type OperationResult<T> = Result<T, AppError>;

/// Kind of outcome produced by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Success,
    /// The lifecycle state does not allow the requested change.
    InvalidState,
    /// The acting user failed the guild's role requirement.
    Unauthorized,
    /// The referenced event or guild does not exist.
    NotFound,
    /// Input was rejected before anything was persisted.
    ValidationError,
    /// Storage, Discord or configuration failure.
    Failed,
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "Success",
            Self::InvalidState => "InvalidState",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "NotFound",
            Self::ValidationError => "ValidationError",
            Self::Failed => "Failed",
        };
        f.write_str(name)
    }
}

/// Collapses an operation result into its status.
pub fn status_of<T>(result: &OperationResult<T>) -> OperationStatus {
    match result {
        Ok(_) => OperationStatus::Success,
        Err(err) => err.status(),
    }
}
