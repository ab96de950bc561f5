//! Domain error types for the application portal.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use utoipa::ToSchema;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submission rejected before any persistence attempt
    #[error("{0}")]
    InvalidInput(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Writing an uploaded file failed
    #[error("File storage error: {0}")]
    FileSystem(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidInput(_) => HttpResponse::BadRequest().json(ErrorResponse {
                message: self.to_string(),
            }),
            AppError::Database(detail) => {
                tracing::error!("Database error: {}", detail);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    message: "Failed to save application".to_string(),
                })
            }
            AppError::FileSystem(detail) => {
                tracing::error!("File storage error: {}", detail);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    message: "Failed to store uploaded file".to_string(),
                })
            }
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileSystem(err.to_string())
    }
}
