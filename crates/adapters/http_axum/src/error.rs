//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homestead_domain::error::HomesteadError;

/// Reported when creating a listing fails in storage.
pub const CREATE_FAILED: &str = "Failed to create property";
/// Reported when listing or browsing fails in storage.
pub const LIST_FAILED: &str = "Failed to fetch properties";
/// Reported when a single-listing lookup fails in storage.
pub const GET_FAILED: &str = "Failed to fetch property";
/// Reported when a single-listing lookup matches nothing.
pub const NOT_FOUND: &str = "Property not found";
/// Reported when the request body cannot be read as a listing submission.
pub const INVALID_PAYLOAD: &str = "Invalid property payload";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps failures to an HTTP response with a fixed, caller-safe message.
pub enum ApiError {
    /// A service call failed; `failure` is what the caller sees on storage errors.
    Service {
        failure: &'static str,
        source: HomesteadError,
    },
    /// The request body was not a well-formed submission.
    InvalidPayload(JsonRejection),
    /// The path did not name an existing listing.
    NotFound,
}

impl ApiError {
    /// Attach the failure message of the operation that produced `source`.
    pub fn service(failure: &'static str) -> impl FnOnce(HomesteadError) -> Self {
        move |source| Self::Service { failure, source }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Service { source, failure } => match source {
                HomesteadError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
                HomesteadError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND.to_string()),
                HomesteadError::Storage(err) => {
                    tracing::error!(error = %err, source = ?err.source(), "{failure}");
                    (StatusCode::INTERNAL_SERVER_ERROR, failure.to_string())
                }
            },
            Self::InvalidPayload(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected payload");
                (StatusCode::BAD_REQUEST, INVALID_PAYLOAD.to_string())
            }
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
