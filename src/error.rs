//! Request error types.
//!
//! Handlers return `Result<T, AppError>`; the [`IntoResponse`] impl turns an
//! error into an `{"error": "..."}` JSON body. Storage details are logged and
//! never sent to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;
use thiserror::Error;

/// Failures raised by the SQLite layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or blank, or the payload has the wrong shape.
    #[error("validation failed: {0}")]
    Validation(&'static str),

    /// The body exceeded the configured size limit.
    #[error("payload too large")]
    PayloadTooLarge,

    /// The insert or select could not be completed.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        AppError::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(message) => *message,
            AppError::PayloadTooLarge => "Requisição muito grande.",
            AppError::Storage { message, source } => {
                error!("{message}: {source}");
                *message
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
