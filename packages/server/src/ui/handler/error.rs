//! Mapping from use case outcomes to HTTP error responses.

use std::any::Any;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::{ErrorDetails, ValidationErrorDetails},
    usecase::CustomerError,
};

/// Body returned for every unhandled failure. The cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Sorry, an error occurred while processing your request";

/// Detail of an internal failure, attached to the response extensions so the
/// logging middleware can report it together with the request line.
#[derive(Debug, Clone)]
pub struct InternalErrorDetail(pub String);

/// Error type returned by the HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// Outcome of a use case
    UseCase(CustomerError),
    /// Request could not be extracted (malformed JSON, non-numeric id, ...)
    BadRequest(String),
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        Self::UseCase(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDetails::new(message))).into_response()
            }
            ApiError::UseCase(CustomerError::Validation(violations)) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDetails::from(violations.as_slice())),
            )
                .into_response(),
            ApiError::UseCase(
                err @ (CustomerError::IdMismatch | CustomerError::EmptySearchCriteria),
            ) => (StatusCode::BAD_REQUEST, Json(ErrorDetails::new(err.to_string()))).into_response(),
            ApiError::UseCase(err @ CustomerError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Json(ErrorDetails::new(err.to_string()))).into_response()
            }
            ApiError::UseCase(CustomerError::Repository(err)) => {
                internal_error_response(err.to_string())
            }
        }
    }
}

/// Build the generic 500 response, keeping `detail` for server-side logging.
pub fn internal_error_response(detail: String) -> Response {
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDetails::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response();
    response.extensions_mut().insert(InternalErrorDetail(detail));
    response
}

/// Response used by the panic-catching layer
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    internal_error_response(format!("handler panicked: {detail}"))
}
