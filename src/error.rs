use thiserror::Error;

use crate::services::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Import error (row {row}: {reason})")]
    Import { row: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn import(row: usize, reason: impl Into<String>) -> Self {
        AppError::Import {
            row,
            reason: reason.into(),
        }
    }

    /// Failures caused by the caller's input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Import { .. } | AppError::Config(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
