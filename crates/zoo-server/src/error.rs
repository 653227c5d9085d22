use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use zoo_store::StoreError;

/// Errors raised while configuring or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Request-level failure, converted to a status and JSON body at the handler
/// boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Undecodable request body.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Uniqueness violation.
    #[error("{0}")]
    Conflict(String),

    /// No matching row, an empty listing, or a path id that cannot name a row.
    #[error("{0}")]
    NotFound(String),

    /// Any other store failure. `context` is what the client sees; `detail`
    /// only reaches the log.
    #[error("{context}: {detail}")]
    Storage {
        context: &'static str,
        detail: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn animal_not_found() -> Self {
        Self::NotFound("animal not found".into())
    }

    /// Classify a store error, using `context` as the client-facing message
    /// for storage failures.
    pub fn from_store(err: StoreError, context: &'static str) -> Self {
        match err {
            StoreError::Conflict { .. } => {
                Self::Conflict("animal with this name already exists".into())
            }
            StoreError::NotFound(_) => Self::animal_not_found(),
            StoreError::Storage(detail) => Self::Storage { context, detail },
        }
    }

    /// Adapter for `map_err`.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |err| Self::from_store(err, context)
    }

    fn client_message(&self) -> String {
        match self {
            Self::Storage { context, .. } => (*context).to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Storage { context, detail } = &self {
            tracing::error!(%context, %detail, "storage failure");
        }
        let body = ErrorResponse {
            error: self.client_message(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
