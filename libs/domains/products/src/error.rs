use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use serde_json::{Value, json};
use thiserror::Error;

use crate::response::ApiResponse;

/// Failure carrying an explicit HTTP status and a JSON body
#[derive(Debug, Clone, PartialEq, Error)]
#[error("HTTP {status}: {body}")]
pub struct HttpError {
    pub status: StatusCode,
    pub body: Value,
}

impl HttpError {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// 404 with `{"error":"not found"}`
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, json!({ "error": "not found" }))
    }
}

#[derive(Debug, Error)]
pub enum ProductError {
    /// One message per offending field, in schema order
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Translate a failure into a response.
///
/// Validation, malformed-body and [`HttpError`] failures are mapped; any
/// other kind is handed back unchanged for the host's generic fault path.
pub fn map_error(err: ProductError) -> Result<ApiResponse, ProductError> {
    match err {
        ProductError::Validation(errors) => {
            Ok(ApiResponse::from_value(StatusCode::BAD_REQUEST, json!({ "errors": errors })))
        }
        ProductError::MalformedBody(message) => Ok(ApiResponse::from_value(
            StatusCode::BAD_REQUEST,
            json!({ "error": format!("invalid request body: {}", message) }),
        )),
        ProductError::Http(HttpError { status, body }) => Ok(ApiResponse::from_value(status, body)),
        other => Err(other),
    }
}

/// Convert unmapped failures to AppError for the generic 500 envelope
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Database(msg) => AppError::Store(msg),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match map_error(self) {
            Ok(response) => response.into_response(),
            Err(unmapped) => {
                tracing::error!(error = %unmapped, "Unmapped product error");
                AppError::from(unmapped).into_response()
            }
        }
    }
}

impl From<aws_sdk_dynamodb::Error> for ProductError {
    fn from(err: aws_sdk_dynamodb::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<serde_dynamo::Error> for ProductError {
    fn from(err: serde_dynamo::Error) -> Self {
        ProductError::Database(format!("item conversion failed: {}", err))
    }
}
