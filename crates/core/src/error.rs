// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Worker error: {0}")]
    Worker(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            AppError::Worker(format!("task panicked: {}", err))
        } else {
            AppError::Worker(format!("task cancelled: {}", err))
        }
    }
}
