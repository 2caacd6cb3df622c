//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use geopoints_domain::error::{GeoPointsError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    error: String,
}

/// Maps request decoding failures and [`GeoPointsError`] to an HTTP
/// response with the appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// The body is missing, not declared as JSON, unparseable, or not an object.
    MalformedBody,
    /// An error raised by the domain or application layer.
    Domain(GeoPointsError),
}

impl From<GeoPointsError> for ApiError {
    fn from(err: GeoPointsError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "rejected request body");
        Self::MalformedBody
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MalformedBody => (
                StatusCode::BAD_REQUEST,
                "Request body must be JSON".to_string(),
            ),
            Self::Domain(GeoPointsError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(GeoPointsError::Source(err)) => {
                tracing::error!(error = %err, "point source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
