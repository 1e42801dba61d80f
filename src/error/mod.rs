//! Error types and user-facing failure mapping.
//!
//! `AppError` is the single error type returned by repositories, services and the
//! bot layer. Business-rule failures carry the message shown to the user; storage,
//! Discord and configuration failures are logged in full and reported generically.

pub mod config;
pub mod operation;

use thiserror::Error;

use crate::error::{config::ConfigError, operation::OperationStatus};

/// Message shown to users when an operation fails for an environmental reason.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while processing your request. Please try again.";

/// Top-level application error type.
///
/// Most infrastructure variants use `#[from]` for automatic conversion. The business
/// variants (`NotFound`, `Validation`, `InvalidState`, `Unauthorized`) are constructed
/// by the service and middleware layers with the exact text to display.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Callers must not assume the write succeeded when this is returned.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Referenced event or guild entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Input rejected before persistence.
    #[error("{0}")]
    Validation(String),

    /// Lifecycle transition not permitted from the current state.
    #[error("{0}")]
    InvalidState(String),

    /// Role requirement not met, raised by the role guard.
    #[error("{0}")]
    Unauthorized(String),

    /// Internal failure with a message meant for logs only.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep the size of every `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Maps the error onto the operation outcome kind.
    pub fn status(&self) -> OperationStatus {
        match self {
            Self::NotFound(_) => OperationStatus::NotFound,
            Self::Validation(_) => OperationStatus::ValidationError,
            Self::InvalidState(_) => OperationStatus::InvalidState,
            Self::Unauthorized(_) => OperationStatus::Unauthorized,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::DiscordErr(_) | Self::InternalError(_) => {
                OperationStatus::Failed
            }
        }
    }

    /// Text to show the user for this failure.
    ///
    /// Business failures return their own message. Everything else is logged at error
    /// level and replaced with [`GENERIC_FAILURE_MESSAGE`] so storage details never
    /// reach Discord.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::InvalidState(msg)
            | Self::Unauthorized(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
