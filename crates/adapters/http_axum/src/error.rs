//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use clockhub_domain::error::ClockHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ClockHubError`] to an HTTP response with an appropriate status.
pub struct ApiError(ClockHubError);

impl From<ClockHubError> for ApiError {
    fn from(err: ClockHubError) -> Self {
        Self(err)
    }
}

impl From<clockhub_domain::error::ValidationError> for ApiError {
    fn from(err: clockhub_domain::error::ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ClockHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ClockHubError::Device(err) => {
                tracing::error!(error = %err, "device link error");
                (StatusCode::BAD_GATEWAY, "device unreachable".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
