use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::*;

/// Application error type
///
/// Client-facing variants map onto the status codes the deployed client
/// already expects: 404 for bad credentials and unknown routes, 405 for
/// everything from method mismatch to auth failure to signup conflict.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] redb::Error),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Missing user or password")]
    MissingCredentials,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Invalid user or password")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Already logged out")]
    AlreadyLoggedOut,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Route not found")]
    RouteNotFound,
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
            AppError::Transaction(ref e) => {
                tracing::error!("Transaction error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
            AppError::Table(ref e) => {
                tracing::error!("Table error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
            AppError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
            AppError::Commit(ref e) => {
                tracing::error!("Commit error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Record serialization error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
            AppError::TaskJoin(ref e) => {
                tracing::error!("Task join error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
            }
            AppError::MissingCredentials => {
                (StatusCode::METHOD_NOT_ALLOWED, MSG_MISSING_CREDENTIALS)
            }
            AppError::UserAlreadyExists => (StatusCode::METHOD_NOT_ALLOWED, MSG_USER_EXISTS),
            AppError::AccountNotFound => (StatusCode::NOT_FOUND, MSG_ACCOUNT_NOT_FOUND),
            AppError::InvalidCredentials => (StatusCode::NOT_FOUND, MSG_INVALID_CREDENTIALS),
            AppError::NotAuthenticated => (StatusCode::METHOD_NOT_ALLOWED, MSG_NOT_AUTHENTICATED),
            AppError::AlreadyLoggedOut => (StatusCode::METHOD_NOT_ALLOWED, MSG_ALREADY_LOGGED_OUT),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND),
        };

        let body = Json(json!({
            "response": message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
